//! Word list loading utilities
//!
//! Custom lists are plain text, one word per line. Validation is left to
//! [`PuzzleSelector`](crate::puzzle::PuzzleSelector) so a bad entry is
//! reported instead of silently shifting the schedule.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Blank lines are skipped, surrounding whitespace is trimmed and entries
/// are uppercased. Order is preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_daily::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/daily_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Split list text into trimmed, uppercased entries
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}
