//! `--version` and `--help` output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version banner.
pub fn version_line() -> String {
    format!("postdeck {}", VERSION)
}

/// Usage text printed for `--help`.
pub fn help_text() -> String {
    format!(
        "{}
A terminal reader for the FastAPI blog.

USAGE:
    postdeck [OPTIONS]

OPTIONS:
    --origin <URL>    Server origin; the API lives under <URL>/api
    -V, --version     Print version and exit
    -h, --help        Print this help and exit

ENVIRONMENT:
    POSTDECK_ORIGIN     Same as --origin
    POSTDECK_STORAGE    Path of the preference file
    POSTDECK_LOG        Log filter (default: info)
    POSTDECK_LOG_FILE   Path of the log file",
        version_line()
    )
}
