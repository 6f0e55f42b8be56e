/*!
 * Tests for the learner dictionary
 */

use movielingo::DictionarySession;
use crate::common;

/// Adding the same surface word twice leaves the session size unchanged
#[test]
fn test_add_sameWordTwice_shouldLeaveSizeUnchanged() {
    let mut session = DictionarySession::new();
    session.add(common::dictionary_entry("remind", "напоминать"));
    let size_after_first = session.total();

    session.add(common::dictionary_entry("remind", "напоминать"));

    assert_eq!(session.total(), size_after_first);
}

/// Toggling one entry's learned flag leaves every other entry untouched
#[test]
fn test_toggleLearned_onRemind_shouldLeaveCagedUntouched() {
    let mut session = DictionarySession::new();
    session.add(common::dictionary_entry("remind", "напоминать"));
    session.add(common::dictionary_entry("caged", "в клетке"));

    let remind_id = session
        .entries()
        .iter()
        .find(|e| e.word == "remind")
        .expect("remind entry")
        .id;

    session.toggle_learned(remind_id);

    assert!(session.get(remind_id).unwrap().learned);
    let caged = session.entries().iter().find(|e| e.word == "caged").unwrap();
    assert!(!caged.learned);
}

#[test]
fn test_newestEntries_shouldComeFirst() {
    let mut session = DictionarySession::new();
    session.add(common::dictionary_entry("redemption", "искупление"));
    session.add(common::dictionary_entry("pursuit", "погоня, стремление"));

    assert_eq!(session.entries()[0].word, "pursuit");
    assert_eq!(session.entries()[1].word, "redemption");
}

#[test]
fn test_search_shouldPreserveCollectionOrder() {
    let mut session = DictionarySession::new();
    session.add(common::dictionary_entry("redemption", "искупление"));
    session.add(common::dictionary_entry("remind", "напоминать"));

    let hits = session.search("re");

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].word, "remind");
    assert_eq!(hits[1].word, "redemption");
}

#[test]
fn test_derivedCounts_shouldAlwaysSumToTotal() {
    let mut session = DictionarySession::new();
    for (word, translation) in [("remind", "напоминать"), ("caged", "в клетке"), ("hope", "надежда")] {
        session.add(common::dictionary_entry(word, translation));
    }

    let id = session.entries()[1].id;
    session.toggle_learned(id);

    assert_eq!(session.learned_count() + session.unlearned_count(), session.total());
}
