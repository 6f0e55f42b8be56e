/*!
 * Vocabulary check tests: synthesized questions from the dictionary,
 * seeded randomness, and the minimum-words gate.
 */

use rand::SeedableRng;
use rand::rngs::StdRng;

use movielingo::{AppState, DictionarySession, QuizError, vocabulary_check};
use crate::common;

/// One unlearned word is not enough to start a check
#[test]
fn test_check_withSingleUnlearnedWord_shouldSignalInsufficientData() {
    let mut session = DictionarySession::new();
    session.add(common::dictionary_entry("remind", "напоминать"));

    let unlearned = session.unlearned();
    let mut rng = StdRng::seed_from_u64(1);
    let result = vocabulary_check(&unlearned, &mut rng);

    assert!(matches!(result, Err(QuizError::InsufficientData { available: 1 })));
}

#[test]
fn test_check_withNoWords_shouldSignalInsufficientData() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = vocabulary_check(&[], &mut rng);

    assert!(matches!(result, Err(QuizError::InsufficientData { available: 0 })));
}

/// Each unlearned word becomes one question whose options include its own
/// translation and one other entry's translation
#[test]
fn test_check_questions_shouldPairCorrectWithForeignTranslation() {
    let mut session = DictionarySession::new();
    session.add(common::dictionary_entry("redemption", "искупление"));
    session.add(common::dictionary_entry("pursuit", "погоня, стремление"));
    session.add(common::dictionary_entry("feathers", "перья"));

    let unlearned = session.unlearned();
    let translations: Vec<&str> = unlearned.iter().map(|e| e.translation.as_str()).collect();
    let mut rng = StdRng::seed_from_u64(99);
    let mut check = vocabulary_check(&unlearned, &mut rng).expect("check session");

    assert_eq!(check.total(), 3);

    for expected in &unlearned {
        let question = check.current_question().expect("question").clone();
        assert_eq!(question.prompt, expected.word);
        assert_eq!(question.options.len(), 2);
        assert_eq!(question.options[question.correct], expected.translation);

        let other = &question.options[1 - question.correct];
        assert_ne!(*other, expected.translation);
        assert!(translations.contains(&other.as_str()));

        check.select_option(question.correct).unwrap();
        check.advance().unwrap();
    }

    assert!(check.is_finished());
    assert_eq!(check.score(), 3);
    assert!(check.passed());
}

/// The check runs through the same session machinery as authored quizzes
#[test]
fn test_check_answeringWrongOptions_shouldFail() {
    let mut session = DictionarySession::new();
    session.add(common::dictionary_entry("hope", "надежда"));
    session.add(common::dictionary_entry("bright", "яркий"));

    let unlearned = session.unlearned();
    let mut rng = StdRng::seed_from_u64(5);
    let mut check = vocabulary_check(&unlearned, &mut rng).expect("check session");

    while !check.is_finished() {
        let question = check.current_question().expect("question");
        let wrong = 1 - question.correct;
        check.select_option(wrong).unwrap();
        check.advance().unwrap();
    }

    assert_eq!(check.score(), 0);
    assert!(!check.passed());
}

/// Identical seeds produce identical checks, so tests can be deterministic
#[test]
fn test_check_withSameSeed_shouldBuildIdenticalSessions() {
    let mut session = DictionarySession::new();
    for (word, translation) in [
        ("remind", "напоминать"),
        ("feathers", "перья"),
        ("bright", "яркий"),
        ("redemption", "искупление"),
    ] {
        session.add(common::dictionary_entry(word, translation));
    }
    let unlearned = session.unlearned();

    let mut run_a = vocabulary_check(&unlearned, &mut StdRng::seed_from_u64(1234)).unwrap();
    let mut run_b = vocabulary_check(&unlearned, &mut StdRng::seed_from_u64(1234)).unwrap();

    while !run_a.is_finished() {
        let qa = run_a.current_question().unwrap().clone();
        let qb = run_b.current_question().unwrap().clone();
        assert_eq!(qa, qb);

        run_a.select_option(0).unwrap();
        run_a.advance().unwrap();
        run_b.select_option(0).unwrap();
        run_b.advance().unwrap();
    }

    assert_eq!(run_a.score(), run_b.score());
}

/// Learned words never appear in a check started from the app state
#[test]
fn test_appState_check_shouldUseOnlyUnlearnedWords() {
    let app = AppState::sample().expect("sample app");

    // the starter dictionary has 4 unlearned words
    let mut rng = StdRng::seed_from_u64(7);
    let check = app.start_vocabulary_check(&mut rng).expect("check session");

    assert_eq!(check.total(), app.dictionary().unlearned_count());
    assert_eq!(check.total(), 4);
}

/// The UI gate: fewer than two unlearned words means no check
#[test]
fn test_appState_check_withTooFewUnlearned_shouldSignalInsufficientData() {
    let mut app = AppState::sample().expect("sample app");

    // learn everything except one word
    let ids: Vec<_> = app
        .dictionary()
        .entries()
        .iter()
        .filter(|e| !e.learned)
        .skip(1)
        .map(|e| e.id)
        .collect();
    for id in ids {
        app.toggle_learned(id);
    }
    assert_eq!(app.dictionary().unlearned_count(), 1);

    let mut rng = StdRng::seed_from_u64(7);
    let result = app.start_vocabulary_check(&mut rng);

    assert!(matches!(result, Err(QuizError::InsufficientData { available: 1 })));
}
