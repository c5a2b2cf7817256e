//! Command-line argument parsing.

use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui {
        /// Server origin overriding the environment and build default
        origin: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
}

/// Parse command-line arguments, skipping the program name.
///
/// Unknown flags are ignored.
///
/// ```
/// use postdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["postdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut origin = None;
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--origin" => {
                let value = args.next().ok_or(ArgsError::MissingValue("--origin"))?;
                origin = Some(value);
            }
            other => {
                if let Some(value) = other.strip_prefix("--origin=") {
                    if value.is_empty() {
                        return Err(ArgsError::MissingValue("--origin"));
                    }
                    origin = Some(value.to_string());
                }
            }
        }
    }
    Ok(CliCommand::RunTui { origin })
}
