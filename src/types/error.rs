//! Error types for the ATM console
//!
//! This module defines all error types that can occur during a session.
//! Errors are designed to be descriptive and user-friendly for console output.
//!
//! # Error Categories
//!
//! - **Credential Errors**: Unknown account identifier, PIN mismatch
//! - **Transaction Errors**: Insufficient funds, invalid amounts
//! - **Input Errors**: Invalid menu choice, closed input stream
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **I/O Errors**: Failure to read from or write to the console

use super::account::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ATM console
///
/// Every variant except `InputClosed` and `IoError` is recoverable: the
/// session reports it to the user and keeps going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmError {
    /// No account is registered under the given identifier
    ///
    /// Recovered by prompting for credentials again.
    #[error("Unknown account '{id}'")]
    UnknownAccount {
        /// The identifier that was not found
        id: AccountId,
    },

    /// The PIN does not match the account's PIN
    ///
    /// Recovered by prompting for credentials again.
    #[error("Invalid PIN for account '{id}'")]
    InvalidPin {
        /// The account the PIN was checked against
        id: AccountId,
    },

    /// Insufficient funds for withdrawal
    ///
    /// The withdrawal is rejected and the account state remains unchanged.
    #[error("Insufficient funds for account '{account}': balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account identifier
        account: AccountId,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Menu choice that is not a number between 1 and 5
    #[error("Invalid menu choice '{input}'")]
    InvalidMenuChoice {
        /// The raw input line
        input: String,
    },

    /// Amount that is malformed, zero or negative
    #[error("Invalid amount '{input}'")]
    InvalidAmount {
        /// The raw input (or the rejected decimal, rendered)
        input: String,
    },

    /// Well-formed amount that a `Decimal` cannot hold without rounding
    ///
    /// More than 28 decimal places, or larger than `Decimal::MAX`.
    #[error("Amount '{input}' is out of range")]
    AmountOutOfRange {
        /// The raw input
        input: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to maintain account integrity.
    #[error("Arithmetic overflow in {operation} for account '{account}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account identifier
        account: AccountId,
    },

    /// Standard input reached end of stream before logout
    #[error("Input stream closed before logout")]
    InputClosed,

    /// I/O error while reading from or writing to the console
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to AtmError
impl From<std::io::Error> for AtmError {
    fn from(error: std::io::Error) -> Self {
        AtmError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AtmError {
    /// Create an UnknownAccount error
    pub fn unknown_account(id: &str) -> Self {
        AtmError::UnknownAccount { id: id.to_string() }
    }

    /// Create an InvalidPin error
    pub fn invalid_pin(id: &str) -> Self {
        AtmError::InvalidPin { id: id.to_string() }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        AtmError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create an InvalidMenuChoice error
    pub fn invalid_menu_choice(input: &str) -> Self {
        AtmError::InvalidMenuChoice {
            input: input.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        AtmError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create an AmountOutOfRange error
    pub fn amount_out_of_range(input: &str) -> Self {
        AtmError::AmountOutOfRange {
            input: input.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        AtmError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Whether this error is a failed login (unknown id or wrong PIN)
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(
            self,
            AtmError::UnknownAccount { .. } | AtmError::InvalidPin { .. }
        )
    }
}
