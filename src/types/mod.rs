//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: The Account entity and its balance operations
//! - `transaction`: Transaction records and statement snapshots
//! - `error`: Error types for the ATM console

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountId};
pub use error::AtmError;
pub use transaction::{Statement, TransactionRecord, TransactionType};
