//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use colored::Colorize;

/// Render each letter of `guess` on the background colour of its feedback
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.letters())
        .map(|(letter, mark)| {
            let tile = format!(" {letter} ");
            match mark {
                LetterFeedback::Correct => tile.black().on_green().bold().to_string(),
                LetterFeedback::Present => tile.black().on_yellow().bold().to_string(),
                LetterFeedback::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "guess" or "guesses"
#[must_use]
pub const fn guesses_label(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
