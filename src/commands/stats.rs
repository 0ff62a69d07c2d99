//! Stats inspection and reset

use crate::stats::{Stats, StatsStore};
use crate::storage::KeyValueStore;
use std::io;

/// Current stats, optionally wiping them first
///
/// # Errors
///
/// Returns an I/O error if a reset cannot be written to the store.
pub fn load_stats<S: KeyValueStore>(
    stats_store: &mut StatsStore<S>,
    reset: bool,
) -> io::Result<Stats> {
    if reset {
        stats_store.clear()?;
        log::info!("stats reset");
    }
    Ok(stats_store.load())
}
