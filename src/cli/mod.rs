//! CLI module for folio.
//!
//! The dispatcher is called early in main() to handle command-line flags
//! before initializing the TUI:
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &config) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod reset;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use reset::handle_reset_theme_command;
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::startup::Config;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `Run` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub fn run_cli_command(command: CliCommand, config: &Config) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            // This function never returns (calls exit)
            handle_version_command();
        }
        CliCommand::Help => {
            println!("folio {}\n\n{}", VERSION, USAGE);
            Some(Ok(()))
        }
        CliCommand::ResetTheme => Some(handle_reset_theme_command(config)),
        CliCommand::Run => None,
    }
}
