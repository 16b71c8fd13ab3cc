//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, guesses_label};
use crate::commands::BenchmarkResult;
use crate::core::Word;
use crate::solver::{GameTranscript, LetterCount, ScoredWord};
use colored::Colorize;

/// Print how often each letter occurs, most common first
pub fn print_letter_counts(counts: &LetterCount) {
    println!("{}", "Most common letters:".bright_cyan().bold());
    let line: Vec<String> = counts
        .most_common()
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(letter, count)| format!("{letter} {count}"))
        .collect();
    println!("{}", line.join(", "));
    println!();
}

/// Print ranked words as `WORD SCORE` lines
pub fn print_ranking(ranking: &[ScoredWord]) {
    for scored in ranking {
        println!("{} {}", scored.word.text().bright_yellow().bold(), scored.score);
    }
}

/// Print a played game turn by turn
pub fn print_transcript(transcript: &GameTranscript) {
    let answer = transcript.answer().map_or("", Word::text);

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", answer.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in transcript.turns().iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&turn.guess, &turn.feedback),
            turn.feedback.to_emoji()
        );
        println!(
            "  {} correct, {} present, {} candidates left",
            turn.feedback.count_correct(),
            turn.feedback.count_present(),
            turn.remaining
        );
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Solved in {} {}!",
            transcript.len(),
            guesses_label(transcript.len())
        )
        .green()
        .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Starting word:    {}", result.starting_word.text().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = count as f64 / result.total_words as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("   {guess_count:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in result.hardest.iter().take(5) {
            println!("   {} ({guesses} {})", word.text().yellow(), guesses_label(*guesses));
        }
    }
}
