// CLI module
// Command-line interface, argument parsing and logging setup

mod args;

pub use args::{CliArgs, LogLevel};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// If parsing fails (unknown flag, invalid level) or `--help` / `--version`
/// is given, clap prints the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Initialize tracing for the process
///
/// Logs go to stderr so they never interleave with the console transcript
/// on stdout. `RUST_LOG` takes precedence over `level` when set. Calling
/// this more than once is a no-op.
pub fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    // Err only when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
