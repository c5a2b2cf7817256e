//! In-memory key/value store.
//!
//! Used when no preference file can be located, so theme changes last for
//! the session only. Tests use it to inspect what the app wrote.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::traits::{KeyValueStore, StorageError};

/// Key/value store that keeps everything in memory.
///
/// Clones share the same map. `failing_writes` makes every `set` fail.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: bool,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Make all subsequent writes fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave the map half-written
    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io {
                path: PathBuf::from(":memory:"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
