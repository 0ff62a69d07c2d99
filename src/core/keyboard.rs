//! Best-status-so-far per letter, for colouring an on-screen keyboard

use super::feedback::GuessRow;
use super::status::LetterStatus;
use rustc_hash::FxHashMap;

/// Keyboard layout rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Mapping from letter to the best status observed across all rows
///
/// Precedence is `Correct > Present > Absent`; an unseen letter has no
/// entry, which ranks below all three.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatusMap {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl KeyboardStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one scored row, never downgrading a letter
    pub fn apply(&mut self, row: &GuessRow) {
        for (letter, status) in row.letters() {
            let entry = self.statuses.entry(letter).or_insert(status);
            *entry = (*entry).max(status);
        }
    }

    /// Best status for `letter`, or `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterStatus> {
        self.statuses.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Status for rendering; unseen letters report `Empty`
    #[must_use]
    pub fn display_status(&self, letter: u8) -> LetterStatus {
        self.get(letter).unwrap_or_default()
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn row(guess: &str, target: &str) -> GuessRow {
        GuessRow::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn starts_empty() {
        let map = KeyboardStatusMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(b'A'), None);
        assert_eq!(map.display_status(b'A'), LetterStatus::Empty);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut map = KeyboardStatusMap::new();

        // CIGAR vs CRANE: C correct, A and R present
        map.apply(&row("CIGAR", "CRANE"));
        assert_eq!(map.get(b'C'), Some(LetterStatus::Correct));
        assert_eq!(map.get(b'A'), Some(LetterStatus::Present));
        assert_eq!(map.get(b'I'), Some(LetterStatus::Absent));

        // ACCRA vs CRANE: first C present, second C absent, second A absent
        map.apply(&row("ACCRA", "CRANE"));
        assert_eq!(map.get(b'C'), Some(LetterStatus::Correct));
        assert_eq!(map.get(b'A'), Some(LetterStatus::Present));
        assert_eq!(map.get(b'R'), Some(LetterStatus::Present));
    }

    #[test]
    fn upgrades_within_a_single_row() {
        let mut map = KeyboardStatusMap::new();
        // LLAMA vs SLATE: first L absent, second L correct
        map.apply(&row("LLAMA", "SLATE"));
        assert_eq!(map.get(b'L'), Some(LetterStatus::Correct));
        assert_eq!(map.get(b'A'), Some(LetterStatus::Correct));
        assert_eq!(map.get(b'M'), Some(LetterStatus::Absent));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut map = KeyboardStatusMap::new();
        map.apply(&row("CRANE", "CRANE"));
        assert_eq!(map.get(b'c'), Some(LetterStatus::Correct));
        assert_eq!(map.len(), 5);

        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn layout_covers_alphabet_once() {
        let mut letters: Vec<u8> = KEYBOARD_ROWS.iter().flat_map(|r| r.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'A'..=b'Z').collect::<Vec<_>>());
    }
}
