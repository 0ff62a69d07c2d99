//! Formatting utilities for terminal output

use crate::core::{Cell, GuessRow, KEYBOARD_ROWS, KeyboardStatusMap, LetterStatus};
use colored::{ColoredString, Colorize};

/// A letter tile coloured by its status
#[must_use]
pub fn colored_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
        LetterStatus::Empty => tile.bright_white(),
    }
}

/// One scored row as coloured tiles
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.cells()
        .iter()
        .map(|&cell: &Cell| colored_tile(cell.letter_char(), cell.status).to_string())
        .collect()
}

/// The three keyboard rows, letters coloured by best status so far
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardStatusMap) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| {
                    colored_tile(char::from(letter), keyboard.display_status(letter)).to_string()
                })
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn row_contains_letters_in_order() {
        colored::control::set_override(false);
        let row = GuessRow::score(&Word::new("CRANE").unwrap(), &Word::new("SLATE").unwrap());
        assert_eq!(colored_row(&row), " C  R  A  N  E ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let lines = keyboard_lines(&KeyboardStatusMap::new());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" Q "));
        assert!(lines[2].starts_with("     Z "));
    }
}
