//! Wordle Daily
//!
//! A daily five-letter word puzzle: one target per calendar day, six guesses,
//! duplicate-safe scoring and persisted stats.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::game::{GameState, GuessEngine};
//! use wordle_daily::puzzle::{EPOCH, PuzzleSelector};
//!
//! // Pick the day's word
//! let selector = PuzzleSelector::new(["CRANE", "SLATE"]).unwrap();
//! let target = selector.select(EPOCH).unwrap().clone();
//!
//! // Play it
//! let mut engine = GuessEngine::new(target);
//! let row = engine.submit_guess("slate").unwrap();
//! println!("{}", row.to_emoji());
//! assert_eq!(engine.state(), GameState::Playing);
//! ```

// Core domain types
pub mod core;

// Date-seeded target selection
pub mod puzzle;

// Guess engine and input surface
pub mod game;

// Key-value persistence
pub mod storage;

// Persisted player statistics
pub mod stats;

// Orchestration of one day's game
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
