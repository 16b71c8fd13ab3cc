//! Guess suggestions for a game whose answer is unknown
//!
//! The player reports the feedback the real game showed; the assistant narrows its pool
//! with the same accumulated constraints the solver uses and suggests the next word.

use super::constraints::ConstraintState;
use super::scorer::{ScoredWord, Scorer};
use crate::core::{Feedback, Result, Word, WordleError, uniform_len};

/// Tracks one live game and suggests guesses for it
#[derive(Debug, Clone)]
pub struct Assistant {
    scorer: Scorer,
    pool: Vec<Word>,
    word_len: usize,
    constraints: ConstraintState,
}

impl Assistant {
    /// Start a game over `pool`
    ///
    /// # Errors
    /// Returns `EmptyWordList` or `LengthMismatch` for an unusable pool.
    pub fn new(pool: &[Word], scorer: Scorer) -> Result<Self> {
        let word_len = uniform_len(pool)?;
        Ok(Self {
            scorer,
            pool: pool.to_vec(),
            word_len,
            constraints: ConstraintState::new(),
        })
    }

    /// Words still consistent with the reported feedback
    #[must_use]
    pub fn remaining(&self) -> &[Word] {
        &self.pool
    }

    /// Length every guess must have
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Best remaining guess, or `None` once no word fits the feedback
    ///
    /// # Errors
    /// Propagates ranking errors; none occur for a pool accepted by [`Assistant::new`].
    pub fn suggest(&self) -> Result<Option<ScoredWord>> {
        if self.pool.is_empty() {
            return Ok(None);
        }
        Ok(self.scorer.rank_words(&self.pool, 1, false)?.into_iter().next())
    }

    /// Record the feedback the game gave for `guess` and narrow the pool
    ///
    /// Returns the number of words left.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if `guess` or `feedback` has the wrong length.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) -> Result<usize> {
        guess.ensure_len(self.word_len)?;
        if feedback.len() != self.word_len {
            return Err(WordleError::LengthMismatch {
                word: feedback.to_string(),
                expected: self.word_len,
                found: feedback.len(),
            });
        }

        self.constraints.record(guess, feedback);
        self.constraints.retain(&mut self.pool);
        Ok(self.pool.len())
    }
}
