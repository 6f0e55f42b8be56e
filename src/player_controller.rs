/*!
 * Viewing-session controller for a single movie.
 *
 * This module handles:
 * - Subtitle-line navigation (user-driven, not tied to playback time)
 * - Token rendering against the current line's annotations
 * - Word inspection and dictionary confirmation
 * - The one-shot media lookup and its tri-state availability
 * - Launching and finishing the movie's plot quiz
 */

use chrono::Local;
use log::{debug, info, warn};

use crate::catalog::Movie;
use crate::dictionary::DictionaryEntry;
use crate::errors::DictionaryError;
use crate::media::{MediaLookup, MediaState};
use crate::progress::ProgressTracker;
use crate::quiz::{Quiz, QuizCategory, QuizSession};
use crate::subtitle::{AnnotatedWord, SubtitleLine, SubtitleToken};
use crate::word_selection::WordSelectionState;

/// Controller for one viewing session of one movie
#[derive(Debug)]
pub struct PlayerController {
    movie: Movie,
    plot_quiz: Option<Quiz>,
    current_line: usize,
    selection: WordSelectionState,
    media: MediaState,
}

impl PlayerController {
    /// Open a viewing session for a movie, with its plot quiz if one exists.
    ///
    /// A quiz of another category is ignored; only plot quizzes run inside
    /// the player.
    pub fn new(movie: Movie, plot_quiz: Option<Quiz>) -> Self {
        let plot_quiz = plot_quiz.filter(|q| q.category == QuizCategory::Plot);

        info!("Opening player for '{}'", movie.title);
        PlayerController {
            movie,
            plot_quiz,
            current_line: 0,
            selection: WordSelectionState::new(),
            media: MediaState::Loading,
        }
    }

    /// The movie this session plays
    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    /// The plot quiz attached to this session, if any
    pub fn plot_quiz(&self) -> Option<&Quiz> {
        self.plot_quiz.as_ref()
    }

    // =========================================================================
    // Subtitle navigation and rendering
    // =========================================================================

    /// Number of subtitle lines in the track
    pub fn line_count(&self) -> usize {
        self.movie.subtitles.len()
    }

    /// Zero-based index of the current subtitle line
    pub fn current_index(&self) -> usize {
        self.current_line
    }

    /// The current subtitle line, None for an empty track
    pub fn current_line(&self) -> Option<&SubtitleLine> {
        self.movie.subtitles.get(self.current_line)
    }

    /// Move to the next subtitle line, stopping at the last one
    pub fn next_line(&mut self) {
        if self.current_line + 1 < self.line_count() {
            self.current_line += 1;
        }
    }

    /// Move to the previous subtitle line, stopping at the first one
    pub fn prev_line(&mut self) {
        self.current_line = self.current_line.saturating_sub(1);
    }

    /// Jump to a subtitle line. Out-of-range indices are ignored.
    pub fn select_line(&mut self, index: usize) {
        if index < self.line_count() {
            self.current_line = index;
        } else {
            debug!("Ignoring out-of-range subtitle index {}", index);
        }
    }

    /// Display tokens for the current line, None for an empty track
    pub fn current_tokens(&self) -> Option<impl Iterator<Item = SubtitleToken<'_>> + '_> {
        self.current_line().map(|line| line.tokens())
    }

    // =========================================================================
    // Word inspection
    // =========================================================================

    /// Inspect a tapped word, replacing any prior selection
    pub fn inspect_word(&mut self, word: &AnnotatedWord) {
        self.selection.inspect(word);
    }

    /// Dismiss the current inspection
    pub fn dismiss_word(&mut self) {
        self.selection.dismiss();
    }

    /// The currently inspected word, if any
    pub fn inspected_word(&self) -> Option<&AnnotatedWord> {
        self.selection.inspected()
    }

    /// Whether this surface word was already added this session
    pub fn word_already_added(&self, surface: &str) -> bool {
        self.selection.is_added(surface)
    }

    /// Confirm the inspected word, producing a dictionary entry stamped
    /// with this movie's title and today's date.
    ///
    /// The caller appends the entry to the dictionary session and notifies
    /// the progress tracker; `AlreadyAdded` is a no-op from its perspective.
    pub fn confirm_add(&mut self) -> Result<DictionaryEntry, DictionaryError> {
        let word = self.selection.confirm_add()?;

        Ok(DictionaryEntry::new(
            &word.surface,
            &word.translation,
            &word.part_of_speech,
            &self.movie.title,
            Local::now().date_naive(),
        ))
    }

    // =========================================================================
    // Media availability
    // =========================================================================

    /// Current media availability
    pub fn media_state(&self) -> &MediaState {
        &self.media
    }

    /// Run the one-shot media lookup and settle the availability state.
    ///
    /// All failures collapse to `Unavailable`; there is no retry within
    /// this session.
    pub async fn load_media(&mut self, lookup: &dyn MediaLookup) {
        self.media = MediaState::Loading;

        let result = lookup.lookup(self.movie.id).await;
        if let Err(e) = &result {
            warn!("Media lookup for '{}' failed: {}", self.movie.title, e);
        }

        self.media = MediaState::settle(result);
        if self.media == MediaState::Unavailable {
            info!("No media attached for '{}', rendering fallback", self.movie.title);
        }
    }

    // =========================================================================
    // Plot quiz milestone
    // =========================================================================

    /// Start a run of this movie's plot quiz, None when no quiz is attached
    pub fn start_plot_quiz(&self) -> Option<QuizSession> {
        self.plot_quiz.as_ref().map(QuizSession::start)
    }

    /// Close a plot-quiz run.
    ///
    /// A finished, passing run marks the movie watched with its quiz
    /// passed and emits `movie_passed` to the tracker; anything else
    /// (including a session closed early) is a non-pass and changes
    /// nothing. Returns whether the run passed.
    pub fn finish_plot_quiz(
        &mut self,
        session: &QuizSession,
        tracker: &mut dyn ProgressTracker,
    ) -> bool {
        let passed = session.passed();
        if !passed {
            debug!(
                "Plot quiz for '{}' closed without a pass ({}/{})",
                self.movie.title,
                session.score(),
                session.total()
            );
            return false;
        }

        info!(
            "Plot quiz for '{}' passed ({}/{})",
            self.movie.title,
            session.score(),
            session.total()
        );

        self.movie.watched = true;
        self.movie.quiz_passed = true;
        if let Some(quiz) = &mut self.plot_quiz {
            quiz.completed = true;
        }

        tracker.movie_passed(self.movie.id);
        true
    }
}
