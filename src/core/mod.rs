//! Core domain types for the daily puzzle
//!
//! Words, letter statuses, scored rows and the keyboard status map. Everything
//! here is pure: no I/O, no clocks, no global state.

mod feedback;
mod keyboard;
mod status;
mod word;

pub use feedback::GuessRow;
pub use keyboard::{KEYBOARD_ROWS, KeyboardStatusMap};
pub use status::{Cell, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
