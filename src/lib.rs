/*!
 * # movielingo
 *
 * A Rust library implementing the core of a movie-based language-learning
 * application: learners watch movies with annotated subtitles, save words
 * into a personal dictionary, and confirm their understanding through
 * multiple-choice quizzes.
 *
 * ## Features
 *
 * - Movie catalog with CEFR levels, genres, topics, and annotated subtitle tracks
 * - Subtitle tokenization with case-insensitive, punctuation-tolerant word matching
 * - Single-slot word inspection feeding a de-duplicated learner dictionary
 * - A quiz state machine with a fixed 70% pass threshold
 * - Synthesized vocabulary checks with injectable randomness
 * - Tri-state media availability backed by an external lookup service
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle`: Subtitle line model and display tokenization
 * - `catalog`: Movie records and browsing filters
 * - `dictionary`: The learner's saved words
 * - `quiz`: Quiz definitions, session state machine, vocabulary checks
 * - `word_selection`: The single-slot word inspection state
 * - `media`: Media lookup boundary:
 *   - `media::http`: Client for the movie-media lookup service
 *   - `media::mock`: Scripted lookups for testing
 * - `progress`: Progress-event sink trait
 * - `player_controller`: Per-movie viewing session orchestration
 * - `app_state`: Session-wide context and named mutations
 * - `sample_data`: Built-in demo content
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_state;
pub mod catalog;
pub mod dictionary;
pub mod errors;
pub mod language_utils;
pub mod media;
pub mod player_controller;
pub mod progress;
pub mod quiz;
pub mod sample_data;
pub mod subtitle;
pub mod word_selection;

// Re-export main types for easier usage
pub use app_config::{Config, LogLevel, MediaConfig};
pub use app_state::{AppState, UserProfile};
pub use catalog::{Catalog, CefrLevel, Movie};
pub use dictionary::{DictionaryEntry, DictionarySession};
pub use errors::{AppError, DictionaryError, MediaError, QuizError};
pub use media::{MediaLookup, MediaState, MediaUrls};
pub use player_controller::PlayerController;
pub use progress::{NullTracker, ProgressEvent, ProgressTracker, RecordingTracker};
pub use quiz::{PASS_THRESHOLD, Question, Quiz, QuizCategory, QuizSession, vocabulary_check};
pub use subtitle::{AnnotatedWord, SubtitleLine, SubtitleToken, tokenize};
pub use word_selection::WordSelectionState;
