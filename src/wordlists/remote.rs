//! Word list and puzzle answer retrieval over HTTP
//!
//! Both sources are scraped from HTML pages. The page addresses live in [`RemoteConfig`];
//! the scraping patterns are private to this module. The parsing helpers are pure so they
//! can be exercised without the network.

use crate::core::Word;
use anyhow::{Context, Result, anyhow};
use regex::Regex;

/// Page listing every accepted word
pub const DEFAULT_WORD_LIST_URL: &str = "https://wordletoday.org/wordle-words.php";

/// Page embedding the history of puzzle answers as JSON
pub const DEFAULT_ANSWER_LIST_URL: &str = "https://wordfinder.yourdictionary.com/wordle/answers/";

const WORD_LIST_LINE: &str = r"^\s*([a-z]+(,\s|</p>))+\s*$";
const JSON_PARSE_CALL: &str = r".*JSON\.parse\((.+)";
const JSON_END: &str = "}\");";
const INDEX_KEY: &str = "\"index\":";
const ANSWER_KEY: &str = "\"answer\":\"";

/// Where word lists and answers are fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub word_list_url: String,
    pub answer_list_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            word_list_url: DEFAULT_WORD_LIST_URL.to_string(),
            answer_list_url: DEFAULT_ANSWER_LIST_URL.to_string(),
        }
    }
}

/// Download every accepted word
///
/// # Errors
/// Returns an error if the page cannot be fetched or lists no words.
pub fn download_word_list(config: &RemoteConfig) -> Result<Vec<Word>> {
    let html = fetch(&config.word_list_url)?;
    let words = scrape_word_list(&html)?;
    if words.is_empty() {
        anyhow::bail!("no words found at {}", config.word_list_url);
    }
    log::info!("downloaded {} words", words.len());
    Ok(words)
}

/// Answer to puzzle number `index`
///
/// # Errors
/// Returns an error if the page cannot be fetched or has no answer for `index`.
pub fn wordle_answer(config: &RemoteConfig, index: u32) -> Result<Word> {
    let html = fetch(&config.answer_list_url)?;
    let json = extract_answers_json(&html)?;
    answer_from_json(&json, index)
}

/// Number of puzzles published so far
///
/// # Errors
/// Returns an error if the page cannot be fetched or holds no answer data.
pub fn wordle_count(config: &RemoteConfig) -> Result<usize> {
    let html = fetch(&config.answer_list_url)?;
    let json = extract_answers_json(&html)?;
    Ok(count_from_json(&json))
}

fn fetch(url: &str) -> Result<String> {
    log::debug!("GET {url}");
    ureq::get(url)
        .call()
        .with_context(|| format!("requesting {url}"))?
        .into_string()
        .with_context(|| format!("reading response from {url}"))
}

/// Collect words from the lines of `html` that are comma-separated word runs
///
/// # Errors
/// Returns an error if the scraping pattern fails to compile.
pub fn scrape_word_list(html: &str) -> Result<Vec<Word>> {
    let line_pattern = Regex::new(WORD_LIST_LINE)?;

    Ok(html
        .lines()
        .filter(|line| line_pattern.is_match(line))
        .flat_map(|line| {
            line.replace("</p>", "")
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter_map(|entry| Word::new(entry).ok())
        .collect())
}

/// Pull the answers JSON out of the `JSON.parse("...")` call on the answers page
///
/// # Errors
/// Returns an error if no such call is present.
pub fn extract_answers_json(html: &str) -> Result<String> {
    let call_pattern = Regex::new(JSON_PARSE_CALL)?;

    let argument = call_pattern
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
        .find(|argument| argument.starts_with('"'))
        .ok_or_else(|| anyhow!("could not find the answers data"))?;

    let end = argument
        .find(JSON_END)
        .map_or(argument.len(), |position| position + 1);

    Ok(argument[..end].trim_start_matches('"').replace('\\', ""))
}

/// Answer recorded for puzzle `index` in the answers JSON
///
/// # Errors
/// Returns an error if `index` is not present or has no answer.
pub fn answer_from_json(json: &str, index: u32) -> Result<Word> {
    let marker = format!("{INDEX_KEY}{index},");
    let after_index = json
        .split_once(&marker)
        .map(|(_, rest)| rest)
        .ok_or_else(|| anyhow!("no puzzle with index {index}"))?;

    let answer = after_index
        .split_once(ANSWER_KEY)
        .and_then(|(_, rest)| rest.split('"').next())
        .ok_or_else(|| anyhow!("puzzle {index} has no answer"))?;

    Word::new(answer).with_context(|| format!("answer for puzzle {index}"))
}

/// Number of puzzles in the answers JSON
#[must_use]
pub fn count_from_json(json: &str) -> usize {
    json.split(INDEX_KEY).count().saturating_sub(2)
}
