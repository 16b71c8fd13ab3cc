//! Word list loading utilities
//!
//! Word list files hold words separated by commas, whitespace or newlines.

use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Default word list file, read from the working directory
pub const DEFAULT_WORDS_FILE: &str = "words.txt";

/// Parse words separated by commas and/or whitespace
///
/// Entries are trimmed and uppercased. Empty entries are skipped, as are entries that are
/// not plain words (logged at `warn`).
///
/// # Examples
/// ```
/// use wordle_greedy::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("crane, slate,\nirate");
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[0].text(), "CRANE");
/// ```
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<Word> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("skipping word list entry '{entry}': {e}");
                None
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_greedy::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading word list {}", path.display()))?;

    let words = parse_word_list(&content);
    if words.is_empty() {
        anyhow::bail!("word list {} contains no words", path.display());
    }

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
