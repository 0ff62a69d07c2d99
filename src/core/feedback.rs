//! Guess scoring
//!
//! A `GuessRow` is the feedback for one submitted guess: five cells, each a
//! letter and its `LetterStatus`.

use super::status::{Cell, LetterStatus};
use super::word::{WORD_LENGTH, Word};

/// Scored result of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRow {
    cells: [Cell; WORD_LENGTH],
}

impl GuessRow {
    /// Score `guess` against `target`
    ///
    /// Implements the duplicate-safe Wordle rule: every target letter can be
    /// claimed by at most one guess cell, and exact matches claim first.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches correct and claim them
    /// 2. Second pass: for each remaining cell, claim the first unclaimed
    ///    target position holding the same letter (present), else absent
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{GuessRow, LetterStatus, Word};
    ///
    /// let target = Word::new("SLATE").unwrap();
    /// let guess = Word::new("LLAMA").unwrap();
    /// let row = GuessRow::score(&guess, &target);
    ///
    /// // Only one L in SLATE, and the green L claims it
    /// assert_eq!(row.status_at(0), LetterStatus::Absent);
    /// assert_eq!(row.status_at(1), LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut claimed = [false; WORD_LENGTH];

        // Index needed to compare guess[i] with target[i] and mark both arrays
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                statuses[i] = LetterStatus::Correct;
                claimed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }

            let letter = guess.char_at(i);
            if let Some(&j) = target
                .positions_of(letter)
                .iter()
                .find(|&&j| !claimed[j])
            {
                statuses[i] = LetterStatus::Present;
                claimed[j] = true;
            }
        }

        let mut cells = [Cell::EMPTY; WORD_LENGTH];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = Cell::scored(guess.char_at(i), statuses[i]);
        }

        Self { cells }
    }

    /// The five scored cells, in guess order
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// Status of the cell at `position` (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.cells[position].status
    }

    /// Iterate `(letter, status)` pairs
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.cells
            .iter()
            .filter_map(|cell| cell.letter.map(|letter| (letter, cell.status)))
    }

    /// The guessed word as a string
    #[must_use]
    pub fn word(&self) -> String {
        self.cells.iter().map(|cell| cell.letter_char()).collect()
    }

    /// True when every cell is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.status == LetterStatus::Correct)
    }

    /// Number of correct cells
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    /// Number of present cells
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.cells.iter().filter(|cell| cell.status == status).count()
    }

    /// Render the row as share glyphs, e.g. "🟩🟨⬜🟩🟨"
    ///
    /// Letters are not included, so the row never reveals the target.
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.cells.iter().map(|cell| cell.status.glyph()).collect()
    }
}
