//! Tracing setup.
//!
//! stdout belongs to the TUI, so log lines go to a file instead.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};

/// Parse a filter directive, falling back to the default level.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns the log path, or `None` when no location could be determined,
/// in which case logging stays disabled.
pub fn init(config: &AppConfig) -> Result<Option<PathBuf>> {
    let Some(path) = config.log_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}
