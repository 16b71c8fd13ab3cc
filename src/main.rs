//! Wordle Greedy - CLI
//!
//! Ranks opening words by letter frequency, replays games against known answers, and
//! helps with live games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_greedy::{
    commands::{
        AssistOutcome, BenchmarkConfig, PlayConfig, play_game, run_assist, run_benchmark,
        select_answers, top_words,
    },
    core::Word,
    output::{print_benchmark_result, print_letter_counts, print_ranking, print_transcript},
    solver::{DEFAULT_UNIQUE_LETTER_BONUS, LetterCount, Scorer, Solver},
    wordlists::{
        DEFAULT_WORDS_FILE, RemoteConfig, download_word_list, load_from_file, wordle_answer,
        wordle_count,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_greedy",
    about = "Wordle solver using letter-frequency scoring and accumulated constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Comma-separated word list file
    #[arg(short, long, global = true, default_value = DEFAULT_WORDS_FILE)]
    words: String,

    /// Download the word list instead of reading the file
    #[arg(short, long, global = true)]
    remote: bool,

    /// Score bonus for words without repeated letters (default 0, 1000 for assist)
    #[arg(short = 'b', long, global = true)]
    unique_bonus: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the best opening words
    Top {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Play a game against a known answer
    Play {
        /// The answer to solve for
        answer: String,

        /// Opening guess (default: best word without repeated letters)
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Download and print the word list
    List,

    /// Print the answer to puzzle number N
    Answer {
        /// Puzzle number
        index: u32,
    },

    /// Print the number of published puzzles
    Count,

    /// Solve every word in the list and report guess statistics
    Benchmark {
        /// Only use the first N words as answers
        #[arg(short, long)]
        limit: Option<usize>,

        /// Play against a random sample of N answers
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for the random sample
        #[arg(long, requires = "sample")]
        seed: Option<u64>,

        /// Opening guess (default: best word without repeated letters)
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Suggest guesses for a live game from the feedback you enter
    Assist {
        /// Opening guess (default: best ranked word)
        #[arg(short, long)]
        start: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let remote = RemoteConfig::default();

    match cli.command {
        Commands::List => {
            for word in download_word_list(&remote)? {
                println!("{word}");
            }
            Ok(())
        }
        Commands::Answer { index } => {
            println!("{}", wordle_answer(&remote, index)?);
            Ok(())
        }
        Commands::Count => {
            println!("{}", wordle_count(&remote)?);
            Ok(())
        }
        Commands::Top { count } => {
            let words = load_words(&cli.words, cli.remote, &remote)?;
            let solver = Solver::new(Scorer::with_unique_bonus(cli.unique_bonus.unwrap_or(0)));
            let ranking = top_words(&words, count, &solver)?;
            print_letter_counts(&LetterCount::tally(&words));
            print_ranking(&ranking);
            Ok(())
        }
        Commands::Play { answer, start } => {
            let words = load_words(&cli.words, cli.remote, &remote)?;
            let solver = Solver::new(Scorer::with_unique_bonus(cli.unique_bonus.unwrap_or(0)));
            let config = PlayConfig { answer, start };
            print_transcript(&play_game(&config, &words, &solver)?);
            Ok(())
        }
        Commands::Benchmark {
            limit,
            sample,
            seed,
            start,
        } => {
            let words = load_words(&cli.words, cli.remote, &remote)?;
            let solver = Solver::new(Scorer::with_unique_bonus(cli.unique_bonus.unwrap_or(0)));
            run_benchmark_command(&words, &solver, limit, sample, seed, start.as_deref())
        }
        Commands::Assist { start } => {
            let words = load_words(&cli.words, cli.remote, &remote)?;
            let scorer =
                Scorer::with_unique_bonus(cli.unique_bonus.unwrap_or(DEFAULT_UNIQUE_LETTER_BONUS));
            let start = start
                .map(Word::new)
                .transpose()
                .context("invalid starting word")?;

            match run_assist(&words, scorer, start.as_ref())? {
                AssistOutcome::Solved { guesses } => log::info!("solved in {guesses} guesses"),
                AssistOutcome::Exhausted => anyhow::bail!("no word matches the feedback given"),
                AssistOutcome::Quit => println!("\n👋 Thanks for playing!"),
            }
            Ok(())
        }
    }
}

/// Load the word list from the web or from `path`
fn load_words(path: &str, remote: bool, config: &RemoteConfig) -> Result<Vec<Word>> {
    if remote {
        download_word_list(config)
    } else {
        load_from_file(path)
    }
}

fn run_benchmark_command(
    words: &[Word],
    solver: &Solver,
    limit: Option<usize>,
    sample: Option<usize>,
    seed: Option<u64>,
    start: Option<&str>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    if sample.is_some() {
        log::info!("sampling answers with seed {seed}");
    }
    let config = BenchmarkConfig {
        limit,
        sample,
        seed,
    };
    let answers = select_answers(words, &config);

    let start = match start {
        Some(text) => Word::new(text).context("invalid starting word")?,
        None => solver.best_starting_word(words)?,
    };

    println!(
        "Running benchmark on {} words starting with {start}...",
        answers.len()
    );
    let result = run_benchmark(solver, words, &answers, &start, true)?;
    print_benchmark_result(&result);
    Ok(())
}
