/*!
 * Error types for the movielingo application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with the learner dictionary
/// or the word-selection flow that feeds it
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word was already added during this session; callers absorb this
    /// silently and disable the action in the UI
    #[error("word '{0}' was already added to the dictionary")]
    AlreadyAdded(String),

    /// A confirm was issued while no word was inspected
    #[error("no word is currently inspected")]
    NothingInspected,
}

/// Errors that can occur when building or running quizzes
#[derive(Error, Debug)]
pub enum QuizError {
    /// A quiz definition is unusable; rejected at data-load time
    #[error("malformed quiz: {0}")]
    Malformed(String),

    /// A vocabulary check was requested with fewer than two distinct words
    #[error("not enough dictionary words for a vocabulary check (have {available}, need 2)")]
    InsufficientData {
        /// Number of distinct eligible words available
        available: usize,
    },

    /// An option index outside the current question's option list
    #[error("option {index} is out of range for a question with {option_count} options")]
    OptionOutOfRange {
        /// The rejected option index
        index: usize,
        /// Number of options the current question has
        option_count: usize,
    },

    /// Advance was requested before any option was selected
    #[error("no option is selected for the current question")]
    NoSelection,

    /// The session already reached its final question
    #[error("the quiz session is already finished")]
    SessionFinished,
}

/// Errors that can occur while looking up movie media URLs
#[derive(Error, Debug)]
pub enum MediaError {
    /// The configured endpoint is not a valid URL
    #[error("invalid media endpoint: {0}")]
    InvalidEndpoint(String),

    /// The HTTP request failed or returned a non-success status
    #[error("media lookup request failed: {0}")]
    RequestFailed(String),

    /// The response body could not be decoded
    #[error("failed to parse media lookup response: {0}")]
    InvalidResponse(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration loading or validation
    #[error("Config error: {0}")]
    Config(String),

    /// Error from the dictionary or word selection
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Error from quiz construction or a quiz session
    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    /// Error from the media lookup service
    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Config(error.to_string())
    }
}
