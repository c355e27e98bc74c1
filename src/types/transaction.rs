//! Transaction-related types for the ATM console
//!
//! This module defines the records appended to an account's history and the
//! statement snapshot handed out to the session.

use rust_decimal::Decimal;
use std::fmt;

/// Kinds of balance-changing events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Requires the balance to cover the amount.
    Withdrawal,
}

/// A single entry in an account's transaction history
///
/// Records are only created for operations that changed the balance. The
/// `Display` form is the line printed on the mini-statement.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Deposit or withdrawal
    pub tx_type: TransactionType,

    /// The amount, as entered by the user (always positive)
    pub amount: Decimal,
}

impl TransactionRecord {
    pub fn deposit(amount: Decimal) -> Self {
        TransactionRecord {
            tx_type: TransactionType::Deposit,
            amount,
        }
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        TransactionRecord {
            tx_type: TransactionType::Withdrawal,
            amount,
        }
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tx_type {
            TransactionType::Deposit => write!(f, "Deposit: +{}", self.amount),
            TransactionType::Withdrawal => write!(f, "Withdrawal: -{}", self.amount),
        }
    }
}

/// Read-only snapshot of an account for the mini-statement
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Balance at the time the statement was taken
    pub balance: Decimal,

    /// Transaction history, oldest first
    pub transactions: Vec<TransactionRecord>,
}

impl Statement {
    /// Statement lines in insertion order
    pub fn lines(&self) -> Vec<String> {
        self.transactions.iter().map(ToString::to_string).collect()
    }
}
