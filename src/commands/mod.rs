//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod solve;

pub use assist::{AssistOutcome, run_assist, run_assist_with};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, select_answers};
pub use solve::{PlayConfig, play_game, top_words};
