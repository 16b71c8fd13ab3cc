//! Play and ranking commands
//!
//! `play` simulates a game against a given answer; `top` lists the best opening words.

use crate::core::Word;
use crate::solver::{GameTranscript, ScoredWord, Solver};
use anyhow::{Context, Result};

/// Configuration for playing one game
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub answer: String,
    /// Opening guess; the best unique-letter word when absent
    pub start: Option<String>,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(answer: String) -> Self {
        Self {
            answer,
            start: None,
        }
    }
}

/// Play a game against `config.answer`
///
/// # Errors
///
/// Returns an error if the answer or starting word is not a valid word, or if the words
/// do not all share the same length.
pub fn play_game(config: &PlayConfig, words: &[Word], solver: &Solver) -> Result<GameTranscript> {
    let answer = Word::new(&config.answer).context("invalid answer")?;
    let start = match &config.start {
        Some(text) => Word::new(text).context("invalid starting word")?,
        None => solver
            .best_starting_word(words)
            .context("choosing a starting word")?,
    };

    log::info!(
        "playing {answer} starting with {start}, unique letter bonus {}",
        solver.scorer().unique_letter_bonus()
    );
    Ok(solver.solve(words, &start, &answer)?)
}

/// The `count` best opening words, favouring words without repeated letters
///
/// # Errors
///
/// Returns an error if `count` is zero or the word list is unusable.
pub fn top_words(words: &[Word], count: usize, solver: &Solver) -> Result<Vec<ScoredWord>> {
    Ok(solver.scorer().rank_words(words, count, true)?)
}
