//! Guess engine
//!
//! One game against one target word: scoring, history, keyboard status,
//! the win/loss state machine and share encoding.

mod engine;
mod error;
pub mod input;
mod share;

pub use engine::{GameState, GuessEngine, MAX_GUESSES};
pub use error::GuessError;
pub use input::{KeyOutcome, KeyToken, Keypad};
pub use share::share_text;
