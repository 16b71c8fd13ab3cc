//! Interactive assistant for a live game
//!
//! Suggests a guess, reads the feedback the real game showed, and narrows the candidates
//! until the puzzle is solved or no word fits.

use crate::core::{Feedback, Word};
use crate::solver::{Assistant, Scorer};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// How an assistant session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistOutcome {
    Solved { guesses: usize },
    /// The reported feedback ruled out every word
    Exhausted,
    Quit,
}

/// Run the assistant on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word list is unusable or the terminal cannot be read or written.
pub fn run_assist(words: &[Word], scorer: Scorer, start: Option<&Word>) -> Result<AssistOutcome> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_assist_with(words, scorer, start, stdin.lock(), &mut stdout)
}

/// Run the assistant over arbitrary input and output streams
///
/// Each turn prints the suggestion and reads two lines: the word actually played (blank
/// accepts the suggestion) and its feedback (`0`/`1`/`2` or `-`/`Y`/`G` per letter).
/// `quit` on either prompt, or end of input, stops the session.
///
/// # Errors
///
/// Returns an error if the word list is unusable or the streams fail.
pub fn run_assist_with<R: BufRead, W: Write>(
    words: &[Word],
    scorer: Scorer,
    start: Option<&Word>,
    mut input: R,
    output: &mut W,
) -> Result<AssistOutcome> {
    let mut assistant = Assistant::new(words, scorer).context("starting assistant")?;
    if let Some(start) = start {
        start
            .ensure_len(assistant.word_len())
            .context("invalid starting word")?;
    }
    log::debug!("unique letter bonus {}", scorer.unique_letter_bonus());
    let mut suggestion = start.cloned();
    let mut turn = 1;

    writeln!(output, "{}", "─".repeat(60).cyan())?;
    writeln!(
        output,
        "Feedback per letter: 0/-/⬜ absent, 1/Y/🟨 present, 2/G/🟩 correct"
    )?;
    writeln!(output, "Type 'quit' to stop.")?;

    loop {
        let suggested = match suggestion.take() {
            Some(word) => word,
            None => match assistant.suggest()? {
                Some(scored) => scored.word,
                None => {
                    writeln!(
                        output,
                        "{}",
                        "❌ No candidates remain. The feedback may be wrong.".red()
                    )?;
                    return Ok(AssistOutcome::Exhausted);
                }
            },
        };

        writeln!(output, "{}", "─".repeat(60).cyan())?;
        writeln!(
            output,
            "Turn {turn}: {} candidates remaining",
            assistant.remaining().len()
        )?;
        writeln!(
            output,
            "Suggested guess: {}",
            suggested.text().bright_yellow().bold()
        )?;

        let Some(guess) = read_guess(&mut input, output, &suggested, assistant.word_len())? else {
            return Ok(AssistOutcome::Quit);
        };
        let Some(feedback) = read_feedback(&mut input, output, assistant.word_len())? else {
            return Ok(AssistOutcome::Quit);
        };

        log::debug!("turn {turn}: {guess} -> {feedback}");
        writeln!(
            output,
            "{} {}  {} correct, {} present",
            guess.text().bold(),
            feedback.to_emoji(),
            feedback.count_correct(),
            feedback.count_present()
        )?;

        if feedback.is_solved() {
            writeln!(
                output,
                "{}",
                format!("✅ Solved in {turn} guesses!").green().bold()
            )?;
            return Ok(AssistOutcome::Solved { guesses: turn });
        }

        assistant.apply(&guess, &feedback)?;
        turn += 1;
    }
}

/// Read the word played this turn; `None` on quit or end of input
fn read_guess<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    suggested: &Word,
    word_len: usize,
) -> Result<Option<Word>> {
    loop {
        let Some(line) = prompt(input, output, &format!("Guess [{suggested}]"))? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(suggested.clone()));
        }

        match Word::new(&line).and_then(|word| word.ensure_len(word_len).map(|()| word)) {
            Ok(word) => return Ok(Some(word)),
            Err(e) => writeln!(output, "{}", format!("❌ {e}").red())?,
        }
    }
}

/// Read the feedback for this turn; `None` on quit or end of input
fn read_feedback<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    word_len: usize,
) -> Result<Option<Feedback>> {
    loop {
        let Some(line) = prompt(input, output, "Feedback")? else {
            return Ok(None);
        };

        match Feedback::parse(&line) {
            Ok(feedback) if feedback.len() == word_len => return Ok(Some(feedback)),
            Ok(feedback) => writeln!(
                output,
                "{}",
                format!("❌ Expected {word_len} symbols, got {}", feedback.len()).red()
            )?,
            Err(e) => writeln!(output, "{}", format!("❌ {e}").red())?,
        }
    }
}

/// Print `label` and read one trimmed line; `None` on quit or end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim();
    if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}
