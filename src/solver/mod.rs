//! Word ranking and game solving
//!
//! The scorer ranks words by letter frequency; the solver and assistant narrow a candidate
//! pool with accumulated feedback and use the scorer to pick each guess.

mod assistant;
mod constraints;
mod engine;
mod scorer;

pub use assistant::Assistant;
pub use constraints::ConstraintState;
pub use engine::{GameTranscript, Solver, Turn, solve};
pub use scorer::{
    DEFAULT_UNIQUE_LETTER_BONUS, LetterCount, ScoredWord, Scorer, positional_matches, rank_words,
};
