//! Wordle feedback calculation and representation
//!
//! Feedback is one of three states per guessed letter:
//! - Absent (black): the letter does not occur in the answer
//! - Present (yellow): the letter occurs in the answer, but not here
//! - Correct (green): the letter is in the right position
//!
//! Presence is plain containment and is not limited by how many times the letter occurs
//! in the answer. A guess with a repeated letter can show that letter as present at
//! several positions even when the answer holds it once.

use super::Word;
use super::error::{Result, WordleError};
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// Letter not in the answer
    Absent,
    /// Letter in the answer at some other position
    Present,
    /// Letter in the correct position
    Correct,
}

impl LetterFeedback {
    /// Square emoji for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Digit form used by interactive input: 0 absent, 1 present, 2 correct
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Present => '1',
            Self::Correct => '2',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' | '-' | '_' | '.' | 'B' | 'b' | '⬜' | '⬛' => Some(Self::Absent),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '2' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            _ => None,
        }
    }
}

/// Per-position feedback for one guess, the same length as the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Wrap per-letter feedback
    #[must_use]
    pub const fn new(letters: Vec<LetterFeedback>) -> Self {
        Self(letters)
    }

    /// Feedback when `guess` is played against `answer`
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if the guess and answer lengths differ.
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("abbey").unwrap();
    /// let answer = Word::new("abyss").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &answer).unwrap();
    ///
    /// assert_eq!(feedback.letters(), &[Correct, Correct, Present, Absent, Present]);
    /// ```
    pub fn evaluate(guess: &Word, answer: &Word) -> Result<Self> {
        guess.ensure_len(answer.len())?;

        Ok(Self(
            guess
                .letters()
                .iter()
                .zip(answer.letters())
                .map(|(&letter, &expected)| {
                    if letter == expected {
                        LetterFeedback::Correct
                    } else if answer.contains(letter) {
                        LetterFeedback::Present
                    } else {
                        LetterFeedback::Absent
                    }
                })
                .collect(),
        ))
    }

    /// Parse feedback typed by a player
    ///
    /// Accepts, per letter:
    /// - `0`, `-`, `_`, `.`, `B` or ⬜ for absent
    /// - `1`, `Y` or 🟨 for present
    /// - `2`, `G` or 🟩 for correct
    ///
    /// Whitespace is ignored. The caller checks the length against its guess.
    ///
    /// # Errors
    /// Returns `WordleError::InvalidFeedback` on an unknown symbol or empty input.
    pub fn parse(input: &str) -> Result<Self> {
        let letters = input
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(LetterFeedback::from_char)
            .collect::<Option<Vec<_>>>()
            .filter(|letters| !letters.is_empty())
            .ok_or_else(|| WordleError::InvalidFeedback(input.trim().to_string()))?;

        Ok(Self(letters))
    }

    /// Per-letter feedback in guess order
    #[must_use]
    pub fn letters(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// Number of letters covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if this covers no letters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&f| f == LetterFeedback::Correct)
    }

    /// Count of correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Correct)
            .count()
    }

    /// Count of present letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Present)
            .count()
    }

    /// Render as emoji squares, e.g. "⬜⬜🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter.digit())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Feedback when `guess` is played against `answer`
///
/// # Errors
/// Returns `WordleError::LengthMismatch` if the lengths differ.
pub fn evaluate(guess: &Word, answer: &Word) -> Result<Feedback> {
    Feedback::evaluate(guess, answer)
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent, Correct, Present};
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn evaluate_all_absent() {
        let feedback = evaluate(&word("abcde"), &word("fghij")).unwrap();

        assert_eq!(feedback.letters(), &[Absent; 5]);
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn evaluate_self_is_solved() {
        for text in ["crane", "slate", "zzzzz", "aaaaa", "cat", "elephant"] {
            let w = word(text);
            let feedback = evaluate(&w, &w).unwrap();
            assert!(feedback.is_solved());
            assert_eq!(feedback.len(), w.len());
        }
    }

    #[test]
    fn evaluate_is_not_symmetric() {
        let abbey = word("abbey");
        let abyss = word("abyss");

        let forward = evaluate(&abbey, &abyss).unwrap();
        let backward = evaluate(&abyss, &abbey).unwrap();

        assert_eq!(
            forward.letters(),
            &[Correct, Correct, Present, Absent, Present]
        );
        assert_eq!(
            backward.letters(),
            &[Correct, Correct, Present, Absent, Absent]
        );
        assert_ne!(forward, backward);
    }

    #[test]
    fn evaluate_presence_is_not_count_limited() {
        // SPEED vs CRANE: CRANE has one E, yet both guessed Es are present
        let feedback = evaluate(&word("speed"), &word("crane")).unwrap();

        assert_eq!(feedback.letters(), &[Absent, Absent, Present, Present, Absent]);
    }

    #[test]
    fn evaluate_soare_against_trace() {
        let feedback = evaluate(&word("soare"), &word("trace")).unwrap();

        assert_eq!(
            feedback.letters(),
            &[Absent, Absent, Correct, Present, Correct]
        );
    }

    #[test]
    fn evaluate_length_mismatch() {
        assert_eq!(
            evaluate(&word("cat"), &word("crane")),
            Err(WordleError::LengthMismatch {
                word: "CAT".to_string(),
                expected: 5,
                found: 3,
            })
        );
    }

    #[test]
    fn parse_digits_and_letters() {
        let digits = Feedback::parse("01202").unwrap();
        let letters = Feedback::parse("-YG-G").unwrap();
        let emoji = Feedback::parse("⬜🟨🟩⬜🟩").unwrap();

        assert_eq!(digits.letters(), &[Absent, Present, Correct, Absent, Correct]);
        assert_eq!(digits, letters);
        assert_eq!(digits, emoji);
    }

    #[test]
    fn parse_ignores_whitespace() {
        let feedback = Feedback::parse(" 0 1 2 ").unwrap();
        assert_eq!(feedback.letters(), &[Absent, Present, Correct]);
    }

    #[test]
    fn parse_invalid() {
        assert!(matches!(
            Feedback::parse("01x02"),
            Err(WordleError::InvalidFeedback(_))
        ));
        assert!(Feedback::parse("").is_err());
        assert!(Feedback::parse("   ").is_err());
    }

    #[test]
    fn display_and_emoji() {
        let feedback = Feedback::new(vec![Absent, Present, Correct]);

        assert_eq!(feedback.to_string(), "012");
        assert_eq!(feedback.to_emoji(), "⬜🟨🟩");
    }
}
