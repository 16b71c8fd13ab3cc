//! Error type for the scoring and solving core
//!
//! Every variant describes invalid input. The computation is deterministic, so a failed
//! call fails the same way every time it is retried with the same arguments.

use thiserror::Error;

/// Invalid input passed to the core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordleError {
    /// The word list (or candidate pool) contained no words
    #[error("word list must not be empty")]
    EmptyWordList,

    /// A word or guess was empty after trimming
    #[error("word must not be empty")]
    EmptyWord,

    /// A word contained something other than ASCII letters
    #[error("word '{0}' must contain only the letters A-Z")]
    InvalidCharacters(String),

    /// A word did not match the length of the rest of the pool
    #[error("word '{word}' has {found} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    /// A ranking was requested with a limit of zero
    #[error("ranking limit must be at least 1")]
    ZeroLimit,

    /// Feedback text could not be parsed
    #[error("invalid feedback '{0}': use 0/1/2, -/Y/G or ⬜/🟨/🟩 per letter")]
    InvalidFeedback(String),
}

/// Result alias used throughout the core
pub type Result<T> = std::result::Result<T, WordleError>;
