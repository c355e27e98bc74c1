//! ATM Console CLI
//!
//! Interactive ATM simulator on stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --log-level info
//! ```
//!
//! The program greets the user, asks for a User ID and PIN until they match
//! an account, then serves the menu until the user logs out.
//!
//! # Seed Accounts
//!
//! - `1234` / PIN `1234`, balance 150
//! - `5678` / PIN `5678`, balance 100
//!
//! # Exit Codes
//!
//! - 0: Logged out
//! - 1: Input ended before logout, or console I/O failed

use atm_console::cli;
use atm_console::{AccountDirectory, Session};
use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(AccountDirectory::seeded(), stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
