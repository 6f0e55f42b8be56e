/*!
 * Single-slot word selection for the subtitle player.
 *
 * At most one word is inspected at a time; inspecting another word
 * silently replaces the previous selection. Confirming an inspection
 * emits the word for the dictionary and remembers its surface form so a
 * re-confirm of the same word is rejected for the rest of the session.
 */

use std::collections::HashSet;
use log::debug;

use crate::errors::DictionaryError;
use crate::subtitle::AnnotatedWord;

/// Tracks which word is currently inspected and which surface words were
/// already added this session
#[derive(Debug, Default)]
pub struct WordSelectionState {
    inspected: Option<AnnotatedWord>,
    added: HashSet<String>,
}

impl WordSelectionState {
    /// Create an empty selection state
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect a word, replacing any prior selection
    pub fn inspect(&mut self, word: &AnnotatedWord) {
        debug!("Inspecting word '{}'", word.surface);
        self.inspected = Some(word.clone());
    }

    /// Clear the current inspection
    pub fn dismiss(&mut self) {
        self.inspected = None;
    }

    /// The currently inspected word, if any
    pub fn inspected(&self) -> Option<&AnnotatedWord> {
        self.inspected.as_ref()
    }

    /// Whether this surface word was already added this session.
    /// The UI uses this to disable the add action.
    pub fn is_added(&self, surface: &str) -> bool {
        self.added.contains(surface)
    }

    /// Confirm the current inspection.
    ///
    /// On success the word is returned for the dictionary, remembered as
    /// added, and the inspection is cleared. A confirm without an
    /// inspection or for an already-added word is rejected; a rejected
    /// confirm leaves the inspection in place.
    pub fn confirm_add(&mut self) -> Result<AnnotatedWord, DictionaryError> {
        let word = self
            .inspected
            .take()
            .ok_or(DictionaryError::NothingInspected)?;

        if self.added.contains(&word.surface) {
            let surface = word.surface.clone();
            self.inspected = Some(word);
            return Err(DictionaryError::AlreadyAdded(surface));
        }

        self.added.insert(word.surface.clone());
        debug!("Confirmed adding '{}'", word.surface);
        Ok(word)
    }
}
