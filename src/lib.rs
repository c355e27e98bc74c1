//! ATM Console Library
//! # Overview
//!
//! This library provides a single-user ATM console simulator: a user logs in
//! against a fixed directory of accounts, then checks the balance, withdraws,
//! deposits and prints a mini-statement until logging out.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransactionRecord, AtmError)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Business logic components:
//!   - [`core::directory`] - Account lookup and PIN checks
//!   - [`core::menu`] - Menu entries
//!   - [`core::session`] - Login/menu/logout state machine
//! - [`io`] - Console I/O and text rendering
//!
//! # Operations
//!
//! - **Check Balance**: Print the current balance
//! - **Withdraw**: Debit funds (requires the balance to cover the amount)
//! - **Deposit**: Credit funds
//! - **Statement**: Print the balance and every transaction, oldest first
//! - **Logout**: End the session
//!
//! # Example
//!
//! ```
//! use atm_console::{AccountDirectory, Session};
//! use std::io::Cursor;
//!
//! let script = "1234\n1234\n1\n5\n";
//! let mut session = Session::new(AccountDirectory::seeded(), Cursor::new(script), Vec::new());
//! session.run().unwrap();
//!
//! let transcript = String::from_utf8(session.output().clone()).unwrap();
//! assert!(transcript.contains("Your Balance is: Rs.150/-"));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{AccountDirectory, MenuChoice, Session, SessionState};
pub use types::{Account, AccountId, AtmError, Statement, TransactionRecord, TransactionType};
