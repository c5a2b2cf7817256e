//! File-backed key/value store.
//!
//! Values live in a single JSON object, `<config dir>/postdeck/storage.json`
//! by default. The whole map is rewritten on every `set`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::traits::{KeyValueStore, StorageError};

const APP_DIR: &str = "postdeck";
const STORAGE_FILE: &str = "storage.json";

/// Key/value store persisted as a JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store in the user's config directory.
    pub fn new() -> Result<Self, StorageError> {
        let path = Self::default_path().ok_or(StorageError::NoLocation)?;
        Ok(Self::open(path))
    }

    /// Default location of the storage file, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(STORAGE_FILE))
    }

    /// Open the store at an explicit path.
    ///
    /// A missing or corrupt file yields an empty store; the problem is
    /// logged and the file is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("Ignoring unreadable storage: {}", err);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| StorageError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_entries(&self) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.write_entries()
    }
}
