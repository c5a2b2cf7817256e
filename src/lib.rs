//! Postdeck - a terminal reader for a FastAPI blog
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod prelude;
pub mod settings;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
