//! Word lists for the daily puzzle
//!
//! Provides the embedded daily rotation and a loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DAILY_WORDS, DAILY_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PuzzleSelector;
    use std::collections::HashSet;

    #[test]
    fn daily_count_matches_const() {
        assert_eq!(DAILY_WORDS.len(), DAILY_WORDS_COUNT);
    }

    #[test]
    fn daily_words_are_valid() {
        for &word in DAILY_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn daily_words_are_unique() {
        let unique: HashSet<_> = DAILY_WORDS.iter().collect();
        assert_eq!(unique.len(), DAILY_WORDS.len());
    }

    #[test]
    fn daily_words_build_a_selector() {
        let selector = PuzzleSelector::new(DAILY_WORDS).unwrap();
        assert_eq!(selector.len(), DAILY_WORDS_COUNT);
    }
}
