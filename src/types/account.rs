//! Account-related types for the ATM console
//!
//! This module defines the Account structure and the balance operations the
//! session performs on it. Every operation either fully applies (balance
//! updated and history appended) or leaves the account untouched.

use super::error::AtmError;
use super::transaction::{Statement, TransactionRecord};
use rust_decimal::Decimal;

/// Account identifier, as typed at the "User ID" prompt
pub type AccountId = String;

/// Customer account state
///
/// The balance never goes below zero: withdrawals larger than the balance
/// are rejected and amounts must be strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    pin: String,
    balance: Decimal,
    transactions: Vec<TransactionRecord>,
}

impl Account {
    /// Create an account with an opening balance and empty history
    ///
    /// # Arguments
    ///
    /// * `id` - The account identifier
    /// * `pin` - The PIN required to log in
    /// * `balance` - The opening balance (not recorded as a transaction)
    pub fn new(id: impl Into<AccountId>, pin: impl Into<String>, balance: Decimal) -> Self {
        Account {
            id: id.into(),
            pin: pin.into(),
            balance,
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Transaction history, oldest first
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Check a PIN against the stored one
    ///
    /// Plain string equality; not constant-time.
    pub fn validate_pin(&self, input: &str) -> bool {
        self.pin == input
    }

    /// Deposit funds into the account
    ///
    /// Increases the balance by `amount` and appends a deposit record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative
    /// - Adding the amount to the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AtmError> {
        if amount <= Decimal::ZERO {
            return Err(AtmError::invalid_amount(&amount.to_string()));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AtmError::arithmetic_overflow("deposit", &self.id))?;

        self.balance = new_balance;
        self.transactions.push(TransactionRecord::deposit(amount));

        Ok(self.balance)
    }

    /// Withdraw funds from the account
    ///
    /// Decreases the balance by `amount` and appends a withdrawal record.
    /// On failure the balance and history are unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative
    /// - `amount` exceeds the current balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AtmError> {
        if amount <= Decimal::ZERO {
            return Err(AtmError::invalid_amount(&amount.to_string()));
        }

        if amount > self.balance {
            return Err(AtmError::insufficient_funds(
                &self.id,
                self.balance,
                amount,
            ));
        }

        // amount <= balance, so this cannot go negative
        self.balance -= amount;
        self.transactions.push(TransactionRecord::withdrawal(amount));

        Ok(self.balance)
    }

    /// Snapshot of the balance and history for the mini-statement
    pub fn statement(&self) -> Statement {
        Statement {
            balance: self.balance,
            transactions: self.transactions.clone(),
        }
    }
}
