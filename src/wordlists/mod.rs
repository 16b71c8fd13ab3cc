//! Word lists for Wordle solving
//!
//! Words come from a local comma-separated file or are scraped from the web.

pub mod loader;
pub mod remote;

pub use loader::{DEFAULT_WORDS_FILE, load_from_file, parse_word_list};
pub use remote::{RemoteConfig, download_word_list, wordle_answer, wordle_count};
