//! Word list loading utilities
//!
//! Parses newline-separated word files into the uppercase form the engine
//! works with, skipping anything that is not a plain five-letter word.

use std::fs;
use std::io;
use std::path::Path;

/// Load five-letter words from a file, one per line
///
/// Entries are trimmed and uppercased; lines that are empty or not exactly
/// five ASCII letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/common-words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse newline-separated words, keeping only five-letter ASCII words
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\nslate\ntoo long\n");
/// assert_eq!(words, ["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content.lines().filter_map(normalize_line).collect()
}

fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.len() == 5 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(trimmed.to_ascii_uppercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_keeps_valid_entries() {
        let words = parse_words("crane\nslate\nirate\n");
        assert_eq!(words, ["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn parse_words_skips_invalid_entries() {
        let words = parse_words("crane\ntoolong\nabc\ncran3\n\nslate");
        assert_eq!(words, ["CRANE", "SLATE"]);
    }

    #[test]
    fn parse_words_trims_and_uppercases() {
        let words = parse_words("  Hello \n\tWORLD\n");
        assert_eq!(words, ["HELLO", "WORLD"]);
    }

    #[test]
    fn parse_words_empty_input() {
        assert!(parse_words("").is_empty());
        assert!(parse_words("\n\n\n").is_empty());
    }
}
