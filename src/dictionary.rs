/*!
 * Learner dictionary for words saved while watching.
 *
 * A `DictionarySession` is the accumulated, de-duplicated set of words a
 * learner has saved. Entries are keyed by their exact surface word; adding
 * a duplicate is a no-op and entries are never deleted, only their learned
 * flag is toggled.
 */

use chrono::NaiveDate;
use log::debug;
use uuid::Uuid;

/// A saved vocabulary record, independent of any specific subtitle line
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Surface word, case-sensitive
    pub word: String,
    /// Translation into the learner's language
    pub translation: String,
    /// Part-of-speech tag
    pub part_of_speech: String,
    /// Title of the movie the word was saved from
    pub movie_title: String,
    /// Date the entry was created
    pub added_at: NaiveDate,
    /// Whether the learner marked this word as learned
    pub learned: bool,
}

impl DictionaryEntry {
    /// Create a new, not-yet-learned entry with a fresh identifier
    pub fn new(
        word: &str,
        translation: &str,
        part_of_speech: &str,
        movie_title: &str,
        added_at: NaiveDate,
    ) -> Self {
        DictionaryEntry {
            id: Uuid::new_v4(),
            word: word.to_string(),
            translation: translation.to_string(),
            part_of_speech: part_of_speech.to_string(),
            movie_title: movie_title.to_string(),
            added_at,
            learned: false,
        }
    }
}

/// The learner's saved words for this session, newest first
#[derive(Debug, Default)]
pub struct DictionarySession {
    entries: Vec<DictionaryEntry>,
}

impl DictionarySession {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary pre-populated with existing entries.
    ///
    /// Entries are inserted in order through `add`, so duplicates by
    /// surface word are dropped.
    pub fn with_entries(entries: Vec<DictionaryEntry>) -> Self {
        let mut session = Self::new();
        for entry in entries {
            session.add(entry);
        }
        session
    }

    /// Insert an entry at the front of the collection.
    ///
    /// Returns false (and leaves the collection untouched) when an entry
    /// with the same surface word already exists.
    pub fn add(&mut self, entry: DictionaryEntry) -> bool {
        if self.entries.iter().any(|e| e.word == entry.word) {
            debug!("Duplicate dictionary entry for '{}' absorbed", entry.word);
            return false;
        }

        debug!("Adding '{}' to the dictionary", entry.word);
        self.entries.insert(0, entry);
        true
    }

    /// Flip the learned flag of the entry with the given identifier.
    ///
    /// Returns false (a silent no-op) when the identifier is absent.
    pub fn toggle_learned(&mut self, id: Uuid) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.learned = !entry.learned;
                debug!("Toggled learned flag for '{}' to {}", entry.word, entry.learned);
                true
            }
            None => false,
        }
    }

    /// Entries whose word or translation contains the query,
    /// case-insensitively, preserving collection order
    pub fn search(&self, query: &str) -> Vec<&DictionaryEntry> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.word.to_lowercase().contains(&query)
                    || e.translation.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Look up an entry by identifier
    pub fn get(&self, id: Uuid) -> Option<&DictionaryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Whether an entry with this exact surface word exists
    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.word == word)
    }

    /// Entries not yet marked as learned, preserving collection order
    pub fn unlearned(&self) -> Vec<&DictionaryEntry> {
        self.entries.iter().filter(|e| !e.learned).collect()
    }

    /// Total number of entries
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries marked as learned
    pub fn learned_count(&self) -> usize {
        self.entries.iter().filter(|e| e.learned).count()
    }

    /// Number of entries not yet learned
    pub fn unlearned_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.learned).count()
    }
}
