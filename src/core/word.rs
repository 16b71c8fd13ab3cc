//! Wordle word representation
//!
//! A Word stores an uppercase word of any length. The length of a game is taken from the
//! candidate pool, never assumed.

use super::error::{Result, WordleError};
use std::fmt;

/// An uppercase word made of the letters A-Z
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the letters are uppercased.
    ///
    /// # Errors
    /// Returns `WordleError` if:
    /// - The trimmed text is empty
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordleError::EmptyWord);
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordleError::InvalidCharacters(text.to_string()));
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// True if no letter occurs more than once
    #[must_use]
    pub fn has_unique_letters(&self) -> bool {
        let mut seen = 0u32;
        for &letter in self.letters() {
            let bit = 1 << (letter - b'A');
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        true
    }

    /// Error unless this word has exactly `expected` letters
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` when the lengths differ.
    pub fn ensure_len(&self, expected: usize) -> Result<()> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(WordleError::LengthMismatch {
                word: self.text.clone(),
                expected,
                found: self.len(),
            })
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Length shared by every word in `words`
///
/// # Errors
/// Returns `EmptyWordList` for an empty slice and `LengthMismatch` for the first word whose
/// length differs from the first word's.
pub fn uniform_len(words: &[Word]) -> Result<usize> {
    let first = words.first().ok_or(WordleError::EmptyWordList)?;
    let expected = first.len();
    for word in &words[1..] {
        word.ensure_len(expected)?;
    }
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("  CrAnE\n").unwrap();
        assert_eq!(word2.text(), "CRANE");
    }

    #[test]
    fn word_length_is_not_fixed() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("elephant").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordleError::EmptyWord));
        assert_eq!(Word::new("   "), Err(WordleError::EmptyWord));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordleError::InvalidCharacters(_))
        ));
        assert!(Word::new("cr ne").is_err());
        assert!(Word::new("cran!").is_err());
        assert!(Word::new("crané").is_err());
    }

    #[test]
    fn word_contains() {
        let word = Word::new("crane").unwrap();
        assert!(word.contains(b'C'));
        assert!(word.contains(b'E'));
        assert!(!word.contains(b'Z'));
    }

    #[test]
    fn word_unique_letters() {
        assert!(Word::new("ABCDE").unwrap().has_unique_letters());
        assert!(!Word::new("AABBB").unwrap().has_unique_letters());
        assert!(!Word::new("SPEED").unwrap().has_unique_letters());
    }

    #[test]
    fn uniform_len_checks_every_word() {
        let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
        assert_eq!(uniform_len(&words), Ok(5));

        let mixed = vec![Word::new("crane").unwrap(), Word::new("cat").unwrap()];
        assert_eq!(
            uniform_len(&mixed),
            Err(WordleError::LengthMismatch {
                word: "CAT".to_string(),
                expected: 5,
                found: 3,
            })
        );

        assert_eq!(uniform_len(&[]), Err(WordleError::EmptyWordList));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
