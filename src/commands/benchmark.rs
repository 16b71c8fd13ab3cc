//! Benchmark command
//!
//! Plays a full game against every selected answer and summarises the guess counts.

use crate::core::{Word, WordleError};
use crate::solver::Solver;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Answers reported as the hardest in a benchmark
const HARDEST_SHOWN: usize = 10;

/// Which answers a benchmark plays against
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkConfig {
    /// Only the first `limit` words of the list
    pub limit: Option<usize>,
    /// A random sample of this many words, taken after `limit`
    pub sample: Option<usize>,
    pub seed: u64,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub starting_word: Word,
    pub total_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    /// Answers needing the most guesses, worst first
    pub hardest: Vec<(Word, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the answers to play against, keeping list order
///
/// # Examples
/// ```
/// use wordle_greedy::commands::{BenchmarkConfig, select_answers};
/// use wordle_greedy::core::Word;
///
/// let words: Vec<Word> = ["crane", "slate", "trace"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let config = BenchmarkConfig { limit: Some(2), ..BenchmarkConfig::default() };
///
/// assert_eq!(select_answers(&words, &config).len(), 2);
/// ```
#[must_use]
pub fn select_answers(words: &[Word], config: &BenchmarkConfig) -> Vec<Word> {
    let limited = &words[..config.limit.unwrap_or(words.len()).min(words.len())];

    match config.sample {
        Some(amount) if amount < limited.len() => {
            let mut rng = StdRng::seed_from_u64(config.seed);
            let mut picked = rand::seq::index::sample(&mut rng, limited.len(), amount).into_vec();
            picked.sort_unstable();
            picked.into_iter().map(|i| limited[i].clone()).collect()
        }
        _ => limited.to_vec(),
    }
}

/// Solve every answer in parallel from `starting_word`
///
/// `pool` is the candidate list each game starts from.
///
/// # Errors
///
/// Returns an error if any game fails, which only happens for unusable input such as
/// an empty pool or words of differing lengths.
pub fn run_benchmark(
    solver: &Solver,
    pool: &[Word],
    answers: &[Word],
    starting_word: &Word,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let progress = if show_progress {
        let pb = ProgressBar::new(answers.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };
    progress.set_message(format!("starting with {starting_word}"));

    let start = Instant::now();
    let games = answers
        .par_iter()
        .map(|answer| -> Result<(Word, usize), WordleError> {
            let transcript = solver.solve(pool, starting_word, answer)?;
            progress.inc(1);
            Ok((answer.clone(), transcript.len()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    progress.finish_with_message("Complete!");
    let duration = start.elapsed();

    let total_words = games.len();
    let total_guesses: usize = games.iter().map(|(_, guesses)| guesses).sum();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for (_, guesses) in &games {
        *distribution.entry(*guesses).or_insert(0) += 1;
    }

    let mut hardest = games.clone();
    hardest.sort_by_key(|(_, guesses)| Reverse(*guesses));
    hardest.truncate(HARDEST_SHOWN);

    let seconds = duration.as_secs_f64();
    log::info!("benchmarked {total_words} answers in {seconds:.2}s");

    Ok(BenchmarkResult {
        starting_word: starting_word.clone(),
        total_words,
        total_guesses,
        average_guesses: if total_words > 0 {
            total_guesses as f64 / total_words as f64
        } else {
            0.0
        },
        min_guesses: games.iter().map(|(_, g)| *g).min().unwrap_or(0),
        max_guesses: games.iter().map(|(_, g)| *g).max().unwrap_or(0),
        distribution,
        hardest,
        duration,
        words_per_second: if seconds > 0.0 {
            total_words as f64 / seconds
        } else {
            0.0
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn sample_pool() -> Vec<Word> {
        words(&[
            "CRANE", "SLATE", "TRACE", "GRATE", "IRATE", "SHORE", "BRINE", "PLUMB", "QUICK",
            "ABBEY", "ABYSS", "KEBAB",
        ])
    }

    #[test]
    fn benchmark_runs() {
        let pool = sample_pool();
        let solver = Solver::default();
        let start = solver.best_starting_word(&pool).unwrap();

        let result = run_benchmark(&solver, &pool, &pool, &start, false).unwrap();

        assert_eq!(result.total_words, pool.len());
        assert_eq!(result.starting_word, start);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= pool.len() + 1);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn distribution_sums_to_total() {
        let pool = sample_pool();
        let solver = Solver::default();
        let start = Word::new("slate").unwrap();

        let result = run_benchmark(&solver, &pool, &pool, &start, false).unwrap();

        assert_eq!(result.distribution.values().sum::<usize>(), result.total_words);
        assert_eq!(result.distribution.get(&1), Some(&1));
        assert!(result.hardest.len() <= HARDEST_SHOWN);
        assert!(result.hardest.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn empty_answer_list() {
        let pool = sample_pool();
        let start = Word::new("slate").unwrap();

        let result = run_benchmark(&Solver::default(), &pool, &[], &start, false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn mismatched_start_fails() {
        let pool = sample_pool();
        let start = Word::new("cat").unwrap();

        assert!(run_benchmark(&Solver::default(), &pool, &pool, &start, false).is_err());
    }

    #[test]
    fn select_limit() {
        let pool = sample_pool();
        let config = BenchmarkConfig {
            limit: Some(3),
            ..BenchmarkConfig::default()
        };

        assert_eq!(select_answers(&pool, &config), pool[..3].to_vec());

        let config = BenchmarkConfig {
            limit: Some(100),
            ..BenchmarkConfig::default()
        };
        assert_eq!(select_answers(&pool, &config).len(), pool.len());
    }

    #[test]
    fn select_sample_is_seeded() {
        let pool = sample_pool();
        let config = BenchmarkConfig {
            sample: Some(4),
            seed: 7,
            ..BenchmarkConfig::default()
        };

        let first = select_answers(&pool, &config);
        let second = select_answers(&pool, &config);

        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
        assert!(first.iter().all(|w| pool.contains(w)));
    }

    #[test]
    fn oversized_sample_takes_everything() {
        let pool = sample_pool();
        let config = BenchmarkConfig {
            sample: Some(50),
            ..BenchmarkConfig::default()
        };

        assert_eq!(select_answers(&pool, &config), pool);
    }
}
