//! Application configuration.
//!
//! The API base is chosen once at startup from the build mode. Everything
//! else here is ambient: where preferences and logs live, and how verbose
//! logging is.

use std::env;
use std::path::PathBuf;

/// API base used by development builds.
pub const DEV_API_BASE: &str = "http://localhost:8000/api";

/// API path used by release builds, resolved against [`AppConfig::origin`].
pub const PROD_API_PATH: &str = "/api";

/// Origin that release builds resolve [`PROD_API_PATH`] against when none is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

const ENV_ORIGIN: &str = "POSTDECK_ORIGIN";
const ENV_STORAGE: &str = "POSTDECK_STORAGE";
const ENV_LOG: &str = "POSTDECK_LOG";
const ENV_LOG_FILE: &str = "POSTDECK_LOG_FILE";

/// Which kind of build is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// The mode of the current binary: debug builds are development builds.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

/// Startup configuration.
///
/// # Example
///
/// ```
/// use postdeck::config::{AppConfig, BuildMode};
///
/// let config = AppConfig::new(BuildMode::Production)
///     .with_origin(Some("https://blog.example.com/".to_string()));
/// assert_eq!(config.api_base(), "https://blog.example.com/api");
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub build_mode: BuildMode,
    /// Explicit backend origin (scheme + host + port)
    pub origin: Option<String>,
    /// Override for the preferences file
    pub storage_path: Option<PathBuf>,
    /// Override for the log file
    pub log_file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl AppConfig {
    /// Configuration with defaults for the given build mode.
    pub fn new(build_mode: BuildMode) -> Self {
        Self {
            build_mode,
            origin: None,
            storage_path: None,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Configuration for the running binary, read from the environment.
    pub fn from_env() -> Self {
        let non_empty = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());

        let mut config = Self::new(BuildMode::current());
        config.origin = non_empty(ENV_ORIGIN);
        config.storage_path = non_empty(ENV_STORAGE).map(PathBuf::from);
        config.log_file = non_empty(ENV_LOG_FILE).map(PathBuf::from);
        if let Some(filter) = non_empty(ENV_LOG) {
            config.log_filter = filter;
        }
        config
    }

    /// Override the origin; `None` keeps the current value.
    pub fn with_origin(mut self, origin: Option<String>) -> Self {
        if origin.is_some() {
            self.origin = origin;
        }
        self
    }

    /// The base URL every API request is built from.
    ///
    /// Development builds use [`DEV_API_BASE`] unless an origin was given
    /// explicitly; release builds join [`PROD_API_PATH`] onto the origin.
    pub fn api_base(&self) -> String {
        match (self.build_mode, self.origin.as_deref()) {
            (BuildMode::Development, None) => DEV_API_BASE.to_string(),
            (_, origin) => format!(
                "{}{}",
                origin.unwrap_or(DEFAULT_ORIGIN).trim_end_matches('/'),
                PROD_API_PATH
            ),
        }
    }

    /// Log file location: explicit override, else the user cache dir.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("postdeck").join("postdeck.log")))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(BuildMode::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_development_base() {
        let config = AppConfig::new(BuildMode::Development);
        assert_eq!(config.api_base(), "http://localhost:8000/api");
    }

    #[test]
    fn test_production_base_uses_default_origin() {
        let config = AppConfig::new(BuildMode::Production);
        assert_eq!(config.api_base(), "http://localhost:8000/api");
    }

    #[test]
    fn test_origin_trailing_slash_is_trimmed() {
        let config = AppConfig::new(BuildMode::Production)
            .with_origin(Some("https://blog.example.com//".to_string()));
        assert_eq!(config.api_base(), "https://blog.example.com/api");
    }

    #[test]
    fn test_explicit_origin_applies_in_development() {
        let config = AppConfig::new(BuildMode::Development)
            .with_origin(Some("http://10.0.0.2:9000".to_string()));
        assert_eq!(config.api_base(), "http://10.0.0.2:9000/api");
    }

    #[test]
    fn test_with_origin_none_keeps_existing() {
        let config = AppConfig::new(BuildMode::Production)
            .with_origin(Some("http://a".to_string()))
            .with_origin(None);
        assert_eq!(config.origin.as_deref(), Some("http://a"));
    }

    #[test]
    fn test_build_mode_current_matches_profile() {
        let expected = if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        };
        assert_eq!(BuildMode::current(), expected);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        env::set_var(ENV_ORIGIN, "http://env-origin:8000");
        env::set_var(ENV_STORAGE, "/tmp/postdeck-storage.json");
        env::set_var(ENV_LOG, "debug");
        env::remove_var(ENV_LOG_FILE);

        let config = AppConfig::from_env();
        assert_eq!(config.origin.as_deref(), Some("http://env-origin:8000"));
        assert_eq!(
            config.storage_path,
            Some(PathBuf::from("/tmp/postdeck-storage.json"))
        );
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.api_base(), "http://env-origin:8000/api");

        env::remove_var(ENV_ORIGIN);
        env::remove_var(ENV_STORAGE);
        env::remove_var(ENV_LOG);
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_blank_values() {
        env::set_var(ENV_ORIGIN, "   ");
        env::remove_var(ENV_LOG);

        let config = AppConfig::from_env();
        assert_eq!(config.origin, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);

        env::remove_var(ENV_ORIGIN);
    }

    #[test]
    fn test_log_path_override() {
        let mut config = AppConfig::new(BuildMode::Development);
        config.log_file = Some(PathBuf::from("/tmp/postdeck.log"));
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/postdeck.log")));
    }
}
