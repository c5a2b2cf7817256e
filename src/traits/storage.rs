//! Durable key/value storage abstraction.
//!
//! Plays the role of per-user local storage: a flat map of string keys to
//! string values that survives restarts.

use std::path::PathBuf;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written
    #[error("Storage IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings
    #[error("Storage file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No location for the store could be determined
    #[error("Could not determine a storage location")]
    NoLocation,
}

/// Trait for synchronous string key/value storage.
///
/// Reads never fail: an unreadable store behaves as if the key were absent.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
