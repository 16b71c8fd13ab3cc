//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the error type. Everything here is pure and has no
//! I/O.

mod error;
mod feedback;
mod word;

pub use error::{Result, WordleError};
pub use feedback::{Feedback, LetterFeedback, evaluate};
pub use word::{Word, uniform_len};
