//! Wordle Greedy
//!
//! A Wordle solver that ranks words by how common their letters are among the remaining
//! candidates, and narrows the candidates with the feedback of every guess so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_greedy::core::Word;
//! use wordle_greedy::solver::{rank_words, solve};
//!
//! let pool: Vec<Word> = ["soare", "crane", "trace"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let best = rank_words(&pool, 1, true).unwrap();
//! println!("Best opening word: {}", best[0].word);
//!
//! let transcript = solve(&pool, &pool[0], &pool[2]).unwrap();
//! assert_eq!(transcript.answer(), Some(&pool[2]));
//! ```

// Core domain types
pub mod core;

// Scoring and solving
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
