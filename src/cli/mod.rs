//! Command-line interface: argument parsing and the informational commands
//! that run instead of the TUI.
//!
//! ```ignore
//! use postdeck::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if run_cli_command(&command) {
//!     return Ok(());
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand};
pub use version::{help_text, version_line, VERSION};

/// Print output for informational commands.
///
/// Returns `true` when the command was handled and the process should exit
/// without starting the TUI.
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            true
        }
        CliCommand::Help => {
            println!("{}", help_text());
            true
        }
        CliCommand::RunTui { .. } => false,
    }
}
