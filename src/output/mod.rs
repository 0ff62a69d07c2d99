//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_game_over, print_keyboard, print_row, print_score_result, print_stats, print_today,
};
