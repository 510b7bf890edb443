// CLI module
// Argument parsing and the interactive console adapter

mod args;
pub mod menu;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Returns a `CliArgs` struct with the parsed command-line arguments. If
/// parsing fails (invalid arguments or the --help flag), clap displays an
/// error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
