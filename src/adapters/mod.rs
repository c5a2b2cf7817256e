//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileStore`] - key/value storage in a JSON file
//! - [`InMemoryStore`] - session-only key/value storage
//!
//! The [`mock`] submodule provides an HTTP test double.

pub mod file_store;
pub mod memory_store;
pub mod mock;
pub mod reqwest_http;

pub use file_store::FileStore;
pub use memory_store::InMemoryStore;
pub use mock::{MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;

use std::path::PathBuf;

use crate::traits::KeyValueStore;

/// Open the preference store.
///
/// An explicit path always gets a [`FileStore`]. Otherwise the file lives in
/// the user config dir, and when there is none the store is kept in memory
/// for this session.
pub fn open_preference_store(path: Option<PathBuf>) -> Box<dyn KeyValueStore> {
    match path {
        Some(path) => Box::new(FileStore::open(path)),
        None => match FileStore::new() {
            Ok(store) => {
                tracing::debug!(path = %store.path().display(), "Using preference file");
                Box::new(store)
            }
            Err(e) => {
                tracing::warn!("{}; theme changes will not be saved", e);
                Box::new(InMemoryStore::new())
            }
        },
    }
}
