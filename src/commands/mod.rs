//! Command implementations

pub mod score;
pub mod simple;
pub mod stats;
pub mod today;

pub use score::{ScoreResult, score_words};
pub use simple::run_simple;
pub use stats::load_stats;
pub use today::{TodayInfo, today_info};
