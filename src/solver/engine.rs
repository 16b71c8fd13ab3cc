//! Game simulation against a known answer

use super::constraints::ConstraintState;
use super::scorer::{ScoredWord, Scorer};
use crate::core::{Feedback, Result, Word, WordleError, uniform_len};

/// One played guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    /// Candidates still consistent after this guess
    pub remaining: usize,
}

/// Every guess of a finished game, ending with the answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTranscript {
    turns: Vec<Turn>,
}

impl GameTranscript {
    /// Turns in the order they were played
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The guessed words in order
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.turns.iter().map(|turn| &turn.guess)
    }

    /// Number of guesses taken
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True if no guesses were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The final guess, which is the answer
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        self.turns.last().map(|turn| &turn.guess)
    }
}

/// Plays games by repeatedly guessing the best-ranked remaining word
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    scorer: Scorer,
}

impl Solver {
    /// Create a solver that ranks guesses with `scorer`
    #[must_use]
    pub const fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    /// The scorer used to pick guesses
    #[must_use]
    pub const fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Best opening word: the top-ranked word with no repeated letters
    ///
    /// # Errors
    /// Fails like [`Scorer::rank_words`] on an empty or mixed-length pool.
    pub fn best_starting_word(&self, pool: &[Word]) -> Result<Word> {
        self.top(pool, true).map(|scored| scored.word)
    }

    /// Play a full game from `starting_guess` until `answer` is guessed
    ///
    /// The answer is added to the pool when missing, so the game always ends. Each round
    /// folds the feedback into the accumulated constraints, narrows the pool, and guesses
    /// the top-ranked remaining word.
    ///
    /// # Errors
    /// - `EmptyWordList` if `pool` is empty
    /// - `LengthMismatch` if the pool words, `starting_guess` or `answer` differ in length
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::Word;
    /// use wordle_greedy::solver::Solver;
    ///
    /// let pool: Vec<Word> = ["soare", "crane", "trace"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let answer = Word::new("trace").unwrap();
    ///
    /// let transcript = Solver::default().solve(&pool, &pool[0], &answer).unwrap();
    /// assert_eq!(transcript.answer(), Some(&answer));
    /// assert!(transcript.len() <= 3);
    /// ```
    pub fn solve(
        &self,
        pool: &[Word],
        starting_guess: &Word,
        answer: &Word,
    ) -> Result<GameTranscript> {
        let word_len = uniform_len(pool)?;
        starting_guess.ensure_len(word_len)?;
        answer.ensure_len(word_len)?;

        let mut pool = pool.to_vec();
        if !pool.contains(answer) {
            pool.push(answer.clone());
        }

        let mut constraints = ConstraintState::new();
        let mut turns = Vec::new();
        let mut guess = starting_guess.clone();

        loop {
            let feedback = Feedback::evaluate(&guess, answer)?;
            constraints.record(&guess, &feedback);
            constraints.retain(&mut pool);

            let solved = guess == *answer;
            turns.push(Turn {
                guess,
                feedback,
                remaining: pool.len(),
            });
            if solved {
                return Ok(GameTranscript { turns });
            }

            guess = self.top(&pool, false)?.word;
        }
    }

    fn top(&self, pool: &[Word], unique_only: bool) -> Result<ScoredWord> {
        self.scorer
            .rank_words(pool, 1, unique_only)?
            .into_iter()
            .next()
            .ok_or(WordleError::EmptyWordList)
    }
}

/// Play a game with the default scorer
///
/// # Errors
/// See [`Solver::solve`].
pub fn solve(pool: &[Word], starting_guess: &Word, answer: &Word) -> Result<GameTranscript> {
    Solver::default().solve(pool, starting_guess, answer)
}
