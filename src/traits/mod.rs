//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - read-only HTTP access to the blog backend
//! - [`KeyValueStore`] - durable string key/value storage for preferences

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use storage::{KeyValueStore, StorageError};
