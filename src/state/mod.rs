//! Client-side state that outlives a single frame.

pub mod fetch;

pub use fetch::{FetchGuard, FetchState, Resource};
