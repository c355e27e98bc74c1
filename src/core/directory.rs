//! Account directory module
//!
//! This module provides the `AccountDirectory` which maps account identifiers
//! to accounts and performs credential checks for the session.
//!
//! The directory is responsible for:
//! - Holding the seed accounts for the lifetime of the process
//! - Authenticating an (identifier, PIN) pair
//! - Handing out the bound account to the session

use crate::types::{Account, AccountId, AtmError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Fixed mapping of account identifiers to accounts
pub struct AccountDirectory {
    /// Map of account identifiers to accounts
    accounts: HashMap<AccountId, Account>,
}

impl AccountDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        AccountDirectory {
            accounts: HashMap::new(),
        }
    }

    /// Create the directory the ATM ships with
    ///
    /// | id     | PIN    | balance |
    /// |--------|--------|---------|
    /// | "1234" | "1234" | 150     |
    /// | "5678" | "5678" | 100     |
    pub fn seeded() -> Self {
        let mut directory = AccountDirectory::new();
        directory.insert(Account::new("1234", "1234", Decimal::new(150, 0)));
        directory.insert(Account::new("5678", "5678", Decimal::new(100, 0)));
        directory
    }

    /// Register an account, replacing any account with the same identifier
    pub fn insert(&mut self, account: Account) {
        self.accounts.insert(account.id().to_string(), account);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn account_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Check an (identifier, PIN) pair
    ///
    /// # Returns
    ///
    /// * `Ok(AccountId)` - The identifier of the matched account
    /// * `Err(AtmError::UnknownAccount)` - No account has this identifier
    /// * `Err(AtmError::InvalidPin)` - The account exists but the PIN differs
    pub fn authenticate(&self, id: &str, pin: &str) -> Result<AccountId, AtmError> {
        let account = self
            .accounts
            .get(id)
            .ok_or_else(|| AtmError::unknown_account(id))?;

        if !account.validate_pin(pin) {
            return Err(AtmError::invalid_pin(id));
        }

        Ok(account.id().to_string())
    }
}

impl Default for AccountDirectory {
    fn default() -> Self {
        Self::new()
    }
}
