/*!
 * End-to-end viewing session tests: open a movie, read subtitles, save
 * words, resolve media, and pass the plot quiz.
 */

use movielingo::media::mock::MockMediaLookup;
use movielingo::{AppState, MediaState};
use movielingo::subtitle::AnnotatedWord;

/// A settled lookup that returned nulls reports Unavailable, never Loading
#[tokio::test]
async fn test_mediaLookup_withNullUrls_shouldReportUnavailableAfterSettling() {
    let app = AppState::sample().expect("sample app");
    let mut player = app.open_player(1).expect("player");

    assert!(player.media_state().is_loading());

    let lookup = MockMediaLookup::missing();
    player.load_media(&lookup).await;

    assert_eq!(*player.media_state(), MediaState::Unavailable);
    assert!(!player.media_state().is_loading());
}

/// A transport failure degrades to the same fallback as missing media
#[tokio::test]
async fn test_mediaLookup_withTransportFailure_shouldReportUnavailable() {
    let app = AppState::sample().expect("sample app");
    let mut player = app.open_player(1).expect("player");

    let lookup = MockMediaLookup::failing();
    player.load_media(&lookup).await;

    assert_eq!(*player.media_state(), MediaState::Unavailable);
}

/// Media failure never blocks the rest of the session
#[tokio::test]
async fn test_unavailableMedia_shouldNotBlockSubtitlesOrQuiz() {
    let mut app = AppState::sample().expect("sample app");
    let mut player = app.open_player(1).expect("player");

    player.load_media(&MockMediaLookup::failing()).await;
    assert_eq!(*player.media_state(), MediaState::Unavailable);

    // subtitles still render
    let tokens: Vec<_> = player.current_tokens().expect("tokens").collect();
    assert!(!tokens.is_empty());

    // words can still be saved
    player.inspect_word(&AnnotatedWord::new("bright", "яркий", "adj"));
    app.confirm_word(&mut player).expect("confirm word");
    assert!(app.dictionary().contains_word("bright"));

    // the plot quiz still runs
    assert!(player.start_plot_quiz().is_some());
}

#[tokio::test]
async fn test_mediaLookup_withAttachedUrls_shouldExposeBothUrls() {
    let app = AppState::sample().expect("sample app");
    let mut player = app.open_player(1).expect("player");

    let lookup = MockMediaLookup::attached(
        "https://cdn.example.com/shawshank.mp4",
        Some("https://cdn.example.com/shawshank.vtt"),
    );
    player.load_media(&lookup).await;

    match player.media_state() {
        MediaState::Available {
            video_url,
            subtitle_url,
        } => {
            assert_eq!(video_url, "https://cdn.example.com/shawshank.mp4");
            assert_eq!(subtitle_url.as_deref(), Some("https://cdn.example.com/shawshank.vtt"));
        }
        other => panic!("expected Available, got {:?}", other),
    }

    assert_eq!(lookup.request_count(), 1);
}

/// Tapping a word in a rendered line and confirming it lands in the
/// dictionary exactly once
#[test]
fn test_wordTapFlow_fromTokenToDictionary() {
    let mut app = AppState::sample().expect("sample app");
    let mut player = app.open_player(1).expect("player");

    // find the annotated "remind" token in the current line
    let tapped = player
        .current_tokens()
        .expect("tokens")
        .find_map(|t| t.annotation().cloned())
        .expect("annotated word in first line");
    assert_eq!(tapped.surface, "remind");

    player.inspect_word(&tapped);
    assert_eq!(player.inspected_word().unwrap().surface, "remind");

    // "remind" is already in the starter dictionary, so nothing changes
    let before = app.dictionary().total();
    app.confirm_word(&mut player).expect("confirm absorbs duplicates");
    assert_eq!(app.dictionary().total(), before);
}

/// Passing the plot quiz inside the player updates the whole session
#[test]
fn test_plotQuizPass_shouldSyncCatalogAndProfile() {
    let mut app = AppState::sample().expect("sample app");
    let mut player = app.open_player(1).expect("player");
    let mut session = player.start_plot_quiz().expect("plot quiz");

    session.select_option(1).unwrap();
    session.advance().unwrap();
    session.select_option(2).unwrap();
    session.advance().unwrap();
    assert!(session.is_finished());

    let watched_before = app.user().movies_watched;
    let passed = app.finish_player_quiz(&mut player, &session);

    assert!(passed);
    assert!(app.catalog().get(1).unwrap().quiz_passed);
    assert_eq!(app.user().movies_watched, watched_before + 1);
}

/// A session abandoned mid-quiz never counts as a pass
#[test]
fn test_abandonedQuizRun_shouldNotSyncAnything() {
    let mut app = AppState::sample().expect("sample app");
    let mut player = app.open_player(1).expect("player");
    let mut session = player.start_plot_quiz().expect("plot quiz");

    session.select_option(1).unwrap();
    session.advance().unwrap();

    let watched_before = app.user().movies_watched;
    let passed = app.finish_player_quiz(&mut player, &session);

    assert!(!passed);
    assert_eq!(app.user().movies_watched, watched_before);
}

/// Subtitle navigation is user-driven and clamped to the track
#[test]
fn test_subtitleNavigation_acrossTheWholeTrack() {
    let app = AppState::sample().expect("sample app");
    let mut player = app.open_player(1).expect("player");

    let mut seen = Vec::new();
    for i in 0..player.line_count() {
        player.select_line(i);
        seen.push(player.current_line().unwrap().seq_num);
    }

    assert_eq!(seen, vec![1, 2, 3]);

    player.next_line();
    assert_eq!(player.current_index(), 2, "stays clamped at the last line");
}

/// A movie with an empty subtitle track still opens
#[test]
fn test_openPlayer_forMovieWithoutSubtitles_shouldStillWork() {
    let app = AppState::sample().expect("sample app");
    let player = app.open_player(4).expect("player");

    assert_eq!(player.line_count(), 0);
    assert!(player.current_line().is_none());
    assert!(player.current_tokens().is_none());
}
