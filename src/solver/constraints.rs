//! Accumulated letter constraints for one game
//!
//! Three maps from letter to the positions where it was seen:
//! - green: positions confirmed for the letter
//! - yellow: positions where the letter was seen but is wrong
//! - black: positions where the letter was reported absent
//!
//! The state only grows. A letter that has been reported absent and has never been green
//! or yellow is banned from every position; once a letter is known to be in the answer its
//! black entries only ban the positions they were recorded at.

use crate::core::{Feedback, LetterFeedback, Word};
use rustc_hash::{FxHashMap, FxHashSet};

type PositionMap = FxHashMap<u8, FxHashSet<usize>>;

/// Everything learned from the guesses of one game so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    green: PositionMap,
    yellow: PositionMap,
    black: PositionMap,
}

impl ConstraintState {
    /// Empty state: every word is admitted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess and its feedback into the state
    ///
    /// Positions beyond the shorter of `guess` and `feedback` are ignored.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (position, (&letter, &result)) in guess
            .letters()
            .iter()
            .zip(feedback.letters())
            .enumerate()
        {
            let map = match result {
                LetterFeedback::Correct => &mut self.green,
                LetterFeedback::Present => &mut self.yellow,
                LetterFeedback::Absent => &mut self.black,
            };
            map.entry(letter).or_default().insert(position);
        }
    }

    /// True if `word` is consistent with everything recorded so far
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Feedback, Word};
    /// use wordle_greedy::solver::ConstraintState;
    ///
    /// let guess = Word::new("soare").unwrap();
    /// let mut state = ConstraintState::new();
    /// state.record(&guess, &Feedback::parse("00212").unwrap());
    ///
    /// assert!(state.admits(&Word::new("trace").unwrap()));
    /// assert!(!state.admits(&Word::new("soare").unwrap()));
    /// ```
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.respects_black(word)
            && self.contains_every_yellow(word)
            && self.avoids_yellow_positions(word)
            && self.matches_every_green(word)
    }

    /// Keep only the admitted words, preserving order
    pub fn retain(&self, pool: &mut Vec<Word>) {
        pool.retain(|word| self.admits(word));
    }

    /// True if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.green.is_empty() && self.yellow.is_empty() && self.black.is_empty()
    }

    /// Confirmed positions for `letter`
    #[must_use]
    pub fn green_positions(&self, letter: u8) -> Option<&FxHashSet<usize>> {
        self.green.get(&letter)
    }

    /// Positions where `letter` was seen but is wrong
    #[must_use]
    pub fn yellow_positions(&self, letter: u8) -> Option<&FxHashSet<usize>> {
        self.yellow.get(&letter)
    }

    /// Positions where `letter` was reported absent
    #[must_use]
    pub fn black_positions(&self, letter: u8) -> Option<&FxHashSet<usize>> {
        self.black.get(&letter)
    }

    fn respects_black(&self, word: &Word) -> bool {
        word.letters().iter().enumerate().all(|(position, letter)| {
            let Some(banned) = self.black.get(letter) else {
                return true;
            };
            if self.green.contains_key(letter) || self.yellow.contains_key(letter) {
                !banned.contains(&position)
            } else {
                false
            }
        })
    }

    fn contains_every_yellow(&self, word: &Word) -> bool {
        self.yellow.keys().all(|&letter| word.contains(letter))
    }

    fn avoids_yellow_positions(&self, word: &Word) -> bool {
        self.yellow.iter().all(|(&letter, positions)| {
            positions
                .iter()
                .all(|&position| word.letters().get(position) != Some(&letter))
        })
    }

    fn matches_every_green(&self, word: &Word) -> bool {
        self.green.iter().all(|(&letter, positions)| {
            positions
                .iter()
                .all(|&position| word.letters().get(position) == Some(&letter))
        })
    }
}
