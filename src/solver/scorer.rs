//! Letter-frequency word ranking
//!
//! Words are scored by summing how often each of their letters occurs across the whole
//! candidate pool. When several words share the top score, they are reordered by how many
//! letters they would place correctly against every word in the pool.

use crate::core::{Result, Word, WordleError, uniform_len};
use rustc_hash::FxHashSet;
use std::cmp::Reverse;

/// Bonus the interactive assistant adds to words with no repeated letters
///
/// Only needs to dominate ordinary frequency sums; the exact value has no meaning.
pub const DEFAULT_UNIQUE_LETTER_BONUS: u64 = 1000;

const ALPHABET_LEN: usize = 26;

/// Occurrence count for every letter A-Z
///
/// Every letter starts at zero, so lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCount([u64; ALPHABET_LEN]);

impl LetterCount {
    /// All letters at zero
    #[must_use]
    pub const fn new() -> Self {
        Self([0; ALPHABET_LEN])
    }

    /// Count every letter occurrence in `words`, repeats included
    #[must_use]
    pub fn tally(words: &[Word]) -> Self {
        let mut counts = Self::new();
        for word in words {
            for &letter in word.letters() {
                counts.0[index(letter)] += 1;
            }
        }
        counts
    }

    /// Occurrences of an uppercase letter
    #[must_use]
    pub const fn get(&self, letter: u8) -> u64 {
        self.0[index(letter)]
    }

    /// Letters with their counts, most common first; equal counts in alphabetical order
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::Word;
    /// use wordle_greedy::solver::LetterCount;
    ///
    /// let counts = LetterCount::tally(&[Word::new("speed").unwrap()]);
    /// assert_eq!(counts.most_common()[0], ('E', 2));
    /// ```
    #[must_use]
    pub fn most_common(&self) -> Vec<(char, u64)> {
        let mut letters: Vec<(char, u64)> = (b'A'..=b'Z')
            .map(|letter| (char::from(letter), self.get(letter)))
            .collect();
        letters.sort_by_key(|&(_, count)| Reverse(count));
        letters
    }

    /// Sum of the counts of every letter in `word`
    #[must_use]
    pub fn sum(&self, word: &Word) -> u64 {
        word.letters().iter().map(|&letter| self.get(letter)).sum()
    }
}

impl Default for LetterCount {
    fn default() -> Self {
        Self::new()
    }
}

const fn index(letter: u8) -> usize {
    (letter - b'A') as usize
}

/// A word together with its ranking score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: u64,
}

/// Ranks candidate words by letter frequency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorer {
    unique_letter_bonus: u64,
}

impl Scorer {
    /// Scorer that adds `bonus` to every word with no repeated letters
    #[must_use]
    pub const fn with_unique_bonus(bonus: u64) -> Self {
        Self {
            unique_letter_bonus: bonus,
        }
    }

    /// Bonus given to words with no repeated letters
    #[must_use]
    pub const fn unique_letter_bonus(&self) -> u64 {
        self.unique_letter_bonus
    }

    /// Rank `candidates`, best first, returning at most `limit` words
    ///
    /// Letter counts always come from the full `candidates` list. With `unique_only`, only
    /// words without repeated letters are scored; if that leaves nothing, every word is
    /// scored instead. Ties keep pool order, except that the words sharing the top score
    /// are reordered by [`positional_matches`] against the full pool. Duplicate words are
    /// reported once, at their first position.
    ///
    /// A single-word pool returns that word with a score of 0.
    ///
    /// # Errors
    /// - `EmptyWordList` if `candidates` is empty
    /// - `LengthMismatch` if the words differ in length
    /// - `ZeroLimit` if `limit` is 0
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::Word;
    /// use wordle_greedy::solver::Scorer;
    ///
    /// let words: Vec<Word> = ["ABCDE", "AABBB"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let ranked = Scorer::default().rank_words(&words, 5, true).unwrap();
    /// assert_eq!(ranked.len(), 1);
    /// assert_eq!(ranked[0].word.text(), "ABCDE");
    /// ```
    pub fn rank_words(
        &self,
        candidates: &[Word],
        limit: usize,
        unique_only: bool,
    ) -> Result<Vec<ScoredWord>> {
        if limit == 0 {
            return Err(WordleError::ZeroLimit);
        }
        uniform_len(candidates)?;

        if let [only] = candidates {
            return Ok(vec![ScoredWord {
                word: only.clone(),
                score: 0,
            }]);
        }

        let counts = LetterCount::tally(candidates);

        let mut seen = FxHashSet::default();
        let distinct: Vec<&Word> = candidates
            .iter()
            .filter(|word| seen.insert(word.text()))
            .collect();

        let mut subset: Vec<&Word> = if unique_only {
            distinct
                .iter()
                .copied()
                .filter(|word| word.has_unique_letters())
                .collect()
        } else {
            Vec::new()
        };
        if subset.is_empty() {
            subset = distinct;
        }

        let mut ranked: Vec<ScoredWord> = subset
            .into_iter()
            .map(|word| ScoredWord {
                word: word.clone(),
                score: self.score(&counts, word),
            })
            .collect();

        // Stable: equal scores keep pool order
        ranked.sort_by_key(|scored| Reverse(scored.score));

        let top_score = ranked[0].score;
        let tied = ranked
            .iter()
            .take_while(|scored| scored.score == top_score)
            .count();
        if tied > 1 {
            ranked[..tied]
                .sort_by_cached_key(|scored| Reverse(positional_matches(&scored.word, candidates)));
        }

        ranked.truncate(limit);
        Ok(ranked)
    }

    /// Frequency score of `word` under `counts`, including any unique-letter bonus
    #[must_use]
    pub fn score(&self, counts: &LetterCount, word: &Word) -> u64 {
        let bonus = if self.unique_letter_bonus > 0 && word.has_unique_letters() {
            self.unique_letter_bonus
        } else {
            0
        };
        counts.sum(word) + bonus
    }
}

/// Number of positions where `word` matches each pool word, summed over the pool
///
/// Estimates how many correct-position hints `word` would earn across the remaining words.
#[must_use]
pub fn positional_matches(word: &Word, pool: &[Word]) -> u64 {
    pool.iter()
        .map(|other| {
            word.letters()
                .iter()
                .zip(other.letters())
                .filter(|(a, b)| a == b)
                .count() as u64
        })
        .sum()
}

/// Rank `candidates` with the default (bonus-free) scorer
///
/// # Errors
/// See [`Scorer::rank_words`].
pub fn rank_words(candidates: &[Word], limit: usize, unique_only: bool) -> Result<Vec<ScoredWord>> {
    Scorer::default().rank_words(candidates, limit, unique_only)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn texts(ranked: &[ScoredWord]) -> Vec<&str> {
        ranked.iter().map(|s| s.word.text()).collect()
    }

    #[test]
    fn letter_count_starts_at_zero() {
        let counts = LetterCount::new();
        for letter in b'A'..=b'Z' {
            assert_eq!(counts.get(letter), 0);
        }
    }

    #[test]
    fn letter_count_counts_repeats() {
        let counts = LetterCount::tally(&words(&["SPEED", "ERASE"]));

        assert_eq!(counts.get(b'E'), 4);
        assert_eq!(counts.get(b'S'), 2);
        assert_eq!(counts.get(b'D'), 1);
        assert_eq!(counts.get(b'Z'), 0);
    }

    #[test]
    fn most_common_orders_by_count() {
        let counts = LetterCount::tally(&words(&["SPEED", "ERASE"]));
        let ranked = counts.most_common();

        assert_eq!(ranked.len(), 26);
        assert_eq!(&ranked[..4], &[('E', 4), ('S', 2), ('A', 1), ('D', 1)]);
        assert_eq!(ranked[25], ('Z', 0));
    }

    #[test]
    fn singleton_scores_zero() {
        for unique_only in [true, false] {
            let ranked = rank_words(&words(&["AABBB"]), 5, unique_only).unwrap();
            assert_eq!(texts(&ranked), vec!["AABBB"]);
            assert_eq!(ranked[0].score, 0);
        }
    }

    #[test]
    fn unique_only_excludes_repeated_letters() {
        let ranked = rank_words(&words(&["ABCDE", "AABBB"]), 5, true).unwrap();

        assert_eq!(texts(&ranked), vec!["ABCDE"]);
        // Counts come from both words: A3 B4 C1 D1 E1
        assert_eq!(ranked[0].score, 10);
    }

    #[test]
    fn unique_only_falls_back_when_nothing_is_unique() {
        let ranked = rank_words(&words(&["AABBB", "CCDDD"]), 5, true).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn sorted_descending_and_limited() {
        let pool = words(&["ZZZZQ", "AEIRS", "AEIOU", "STARE", "SLATE"]);
        let ranked = rank_words(&pool, 3, false).unwrap();

        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn limit_larger_than_pool() {
        let ranked = rank_words(&words(&["CRANE", "SLATE"]), 10, false).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn tie_break_prefers_positional_matches() {
        let pool = words(&["AB", "BA", "BC"]);
        // Counts: A2 B3 C1. AB = 5, BA = 5, BC = 4.
        // Positional: AB matches AB(2) + BA(0) + BC(0) = 2
        //             BA matches AB(0) + BA(2) + BC(1) = 3
        let ranked = rank_words(&pool, 3, false).unwrap();

        assert_eq!(texts(&ranked), vec!["BA", "AB", "BC"]);
        assert_eq!(ranked[0].score, 5);
        assert_eq!(ranked[1].score, 5);
    }

    #[test]
    fn tie_break_keeps_pool_order_on_equal_matches() {
        let pool = words(&["CRANE", "TRACE"]);
        let ranked = rank_words(&pool, 2, false).unwrap();

        assert_eq!(texts(&ranked), vec!["CRANE", "TRACE"]);
        assert_eq!(ranked[0].score, ranked[1].score);
    }

    #[test]
    fn tie_break_only_touches_top_score() {
        // Counts: A2, every other letter 1. AB = AC = 3, DE = FG = 2
        let pool = words(&["AB", "AC", "DE", "FG"]);
        let ranked = rank_words(&pool, 4, false).unwrap();

        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(texts(&ranked[2..]), vec!["DE", "FG"]);
    }

    #[test]
    fn duplicates_weight_counts_but_appear_once() {
        let pool = words(&["ABC", "ABC", "XYZ"]);
        let ranked = rank_words(&pool, 5, false).unwrap();

        assert_eq!(texts(&ranked), vec!["ABC", "XYZ"]);
        assert_eq!(ranked[0].score, 6);
        assert_eq!(ranked[1].score, 3);
    }

    #[test]
    fn unique_bonus_dominates() {
        let pool = words(&["EEEEE", "EEEES", "ABCDE"]);
        let plain = rank_words(&pool, 1, false).unwrap();
        assert_eq!(plain[0].word.text(), "EEEEE");

        let ranked = Scorer::with_unique_bonus(DEFAULT_UNIQUE_LETTER_BONUS)
            .rank_words(&pool, 1, false)
            .unwrap();
        assert_eq!(ranked[0].word.text(), "ABCDE");
        assert!(ranked[0].score > DEFAULT_UNIQUE_LETTER_BONUS);
    }

    #[test]
    fn positional_matches_counts_same_index_letters() {
        let pool = words(&["CRANE", "TRACE", "SLATE"]);
        // TRACE: vs CRANE 3, vs TRACE 5, vs SLATE 2 (A, E)
        assert_eq!(positional_matches(&pool[1], &pool), 10);
    }

    #[test]
    fn errors() {
        assert_eq!(rank_words(&[], 5, false), Err(WordleError::EmptyWordList));
        assert_eq!(
            rank_words(&words(&["CRANE"]), 0, false),
            Err(WordleError::ZeroLimit)
        );
        assert!(matches!(
            rank_words(&words(&["CRANE", "CAT"]), 5, false),
            Err(WordleError::LengthMismatch { .. })
        ));
    }
}
