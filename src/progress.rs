/*!
 * Progress tracking boundary.
 *
 * The player emits learning milestones to an external progress tracker:
 * a word saved to the dictionary, a movie's plot quiz passed, a
 * standalone quiz completed. The tracker acknowledges the call and
 * nothing flows back into the core.
 */

use crate::dictionary::DictionaryEntry;

/// Sink for learning-progress events
pub trait ProgressTracker {
    /// A word was saved to the dictionary
    fn word_added(&mut self, entry: &DictionaryEntry);

    /// A movie's plot quiz was passed
    fn movie_passed(&mut self, movie_id: u32);

    /// A standalone quiz was completed with a passing run
    fn quiz_completed(&mut self, quiz_id: u32);
}

/// Tracker that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTracker;

impl ProgressTracker for NullTracker {
    fn word_added(&mut self, _entry: &DictionaryEntry) {}
    fn movie_passed(&mut self, _movie_id: u32) {}
    fn quiz_completed(&mut self, _quiz_id: u32) {}
}

/// A progress event captured by `RecordingTracker`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A word was saved
    WordAdded {
        /// Surface word of the saved entry
        word: String,
    },
    /// A movie's plot quiz was passed
    MoviePassed {
        /// The movie identifier
        movie_id: u32,
    },
    /// A quiz was completed
    QuizCompleted {
        /// The quiz identifier
        quiz_id: u32,
    },
}

/// Tracker that records every event, for tests and diagnostics
#[derive(Debug, Default)]
pub struct RecordingTracker {
    /// Events in the order they were received
    pub events: Vec<ProgressEvent>,
}

impl RecordingTracker {
    /// Create an empty recording tracker
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressTracker for RecordingTracker {
    fn word_added(&mut self, entry: &DictionaryEntry) {
        self.events.push(ProgressEvent::WordAdded {
            word: entry.word.clone(),
        });
    }

    fn movie_passed(&mut self, movie_id: u32) {
        self.events.push(ProgressEvent::MoviePassed { movie_id });
    }

    fn quiz_completed(&mut self, quiz_id: u32) {
        self.events.push(ProgressEvent::QuizCompleted { quiz_id });
    }
}
