/*!
 * Tests for the single-slot word selection state
 */

use movielingo::{DictionaryError, WordSelectionState};
use movielingo::subtitle::AnnotatedWord;

#[test]
fn test_inspect_newWord_shouldSilentlyReplaceOldSelection() {
    let mut state = WordSelectionState::new();
    state.inspect(&AnnotatedWord::new("remind", "напоминать", "v"));
    state.inspect(&AnnotatedWord::new("feathers", "перья", "n"));

    assert_eq!(state.inspected().unwrap().surface, "feathers");
}

#[test]
fn test_confirmAdd_shouldClearInspectionAfterSuccess() {
    let mut state = WordSelectionState::new();
    state.inspect(&AnnotatedWord::new("bright", "яркий", "adj"));

    let word = state.confirm_add().expect("first confirm succeeds");

    assert_eq!(word.surface, "bright");
    assert!(state.inspected().is_none());
}

#[test]
fn test_confirmAdd_secondTimeForSameWord_shouldSignalAlreadyAdded() {
    let mut state = WordSelectionState::new();
    let bright = AnnotatedWord::new("bright", "яркий", "adj");

    state.inspect(&bright);
    state.confirm_add().unwrap();
    state.inspect(&bright);

    let result = state.confirm_add();
    assert!(matches!(result, Err(DictionaryError::AlreadyAdded(_))));
}

#[test]
fn test_isAdded_shouldDriveUiDisablingBeforeConfirm() {
    let mut state = WordSelectionState::new();
    let hope = AnnotatedWord::new("hope", "надежда", "n");

    assert!(!state.is_added("hope"));
    state.inspect(&hope);
    state.confirm_add().unwrap();

    assert!(state.is_added("hope"));
    assert!(!state.is_added("Hope"));
}

#[test]
fn test_confirmAdd_withoutInspection_shouldError() {
    let mut state = WordSelectionState::new();
    assert!(matches!(
        state.confirm_add(),
        Err(DictionaryError::NothingInspected)
    ));
}
