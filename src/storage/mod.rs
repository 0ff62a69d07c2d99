//! Key-value persistence
//!
//! The engine never touches storage; the session shell receives a store and
//! keeps stats and the solved-today flag in it as plain strings.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::io;

/// Synchronous string key-value store
pub trait KeyValueStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an I/O error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Delete `key`; removing a missing key is not an error
    ///
    /// # Errors
    /// Returns an I/O error if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        (**self).remove(key)
    }
}
