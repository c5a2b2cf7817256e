//! One-shot fetch state machine.
//!
//! A [`Resource`] starts in `Loading`, spawns its fetch task at most once,
//! and settles on exactly one of `Loaded` or `Failed`. The task's result is
//! delivered back to the owner (usually as an `AppMessage`) and applied with
//! [`Resource::resolve`]; only the first resolution is observed.
//!
//! The spawned task is owned by a [`FetchGuard`] and aborted when the
//! resource is cancelled or dropped, so a late result never lands on a
//! resource that has gone away.

use std::future::Future;
use tokio::task::JoinHandle;

/// State of a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// Waiting for the first resolution
    Loading,
    /// Fetch succeeded
    Loaded(T),
    /// Fetch failed; only the error message is kept
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    /// Whether the state is terminal.
    pub fn is_settled(&self) -> bool {
        !matches!(self, FetchState::Loading)
    }
}

/// Owns a spawned fetch task and aborts it on drop.
#[derive(Debug)]
pub struct FetchGuard {
    handle: JoinHandle<()>,
}

impl FetchGuard {
    /// Spawn `future` on the current tokio runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A value fetched once per activation.
#[derive(Debug)]
pub struct Resource<T> {
    state: FetchState<T>,
    task: Option<FetchGuard>,
    started: bool,
    cancelled: bool,
}

impl<T> Resource<T> {
    /// A resource in the `Loading` state with no task yet.
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            task: None,
            started: false,
            cancelled: false,
        }
    }

    /// Spawn the fetch task. Only the first call does anything.
    ///
    /// Returns whether the task was spawned.
    pub fn start<F>(&mut self, future: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.started {
            return false;
        }
        self.started = true;
        self.task = Some(FetchGuard::spawn(future));
        true
    }

    /// Apply the outcome of the fetch.
    ///
    /// Ignored unless the resource is still `Loading` and not cancelled.
    /// Returns whether the state changed.
    pub fn resolve(&mut self, outcome: Result<T, String>) -> bool {
        if self.cancelled || self.state.is_settled() {
            return false;
        }
        self.state = match outcome {
            Ok(value) => FetchState::Loaded(value),
            Err(message) => FetchState::Failed(message),
        };
        self.task = None;
        true
    }

    /// Abort the in-flight task and ignore any result already on its way.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.task = None;
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Whether [`start`](Self::start) has been called.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether a spawned task is still held (not yet resolved or cancelled).
    pub fn has_pending_task(&self) -> bool {
        self.task.is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Resource<Vec<T>> {
    /// Loaded items, or an empty slice while loading or after failure.
    pub fn items(&self) -> &[T] {
        self.data().map(Vec::as_slice).unwrap_or(&[])
    }
}
