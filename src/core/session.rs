//! Session controller
//!
//! This module provides the `Session` state machine that drives one ATM
//! interaction from login to logout:
//!
//! ```text
//! Unauthenticated --(valid id + PIN)--> Authenticated(id) --(logout)--> Terminated
//! ```
//!
//! The session enforces these rules:
//! - Failed logins reprompt indefinitely (no lockout)
//! - Invalid menu choices and malformed amounts reprompt; they never end the session
//! - Every operation acts on the single account bound at login
//! - End of input ends the session with `AtmError::InputClosed`

use crate::core::directory::AccountDirectory;
use crate::core::menu::MenuChoice;
use crate::io::format;
use crate::io::Console;
use crate::types::{Account, AccountId, AtmError};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a valid identifier and PIN
    Unauthenticated,

    /// Logged in; the menu operates on this account
    Authenticated(AccountId),

    /// Logged out; `run` has returned
    Terminated,
}

/// One ATM session over a console
pub struct Session<R, W> {
    directory: AccountDirectory,
    console: Console<R, W>,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session in the `Unauthenticated` state
    ///
    /// # Arguments
    ///
    /// * `directory` - The accounts users may log in to
    /// * `input` - Source of user input lines
    /// * `output` - Destination for prompts and results
    pub fn new(directory: AccountDirectory, input: R, output: W) -> Self {
        Session {
            directory,
            console: Console::new(input, output),
            state: SessionState::Unauthenticated,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    /// The account bound at login, if any
    pub fn current_account(&self) -> Option<&Account> {
        match &self.state {
            SessionState::Authenticated(id) => self.directory.account(id),
            _ => None,
        }
    }

    pub fn output(&self) -> &W {
        self.console.output()
    }

    /// Consume the session, returning the directory and the output writer
    pub fn into_parts(self) -> (AccountDirectory, W) {
        (self.directory, self.console.into_output())
    }

    /// Run the session until the user logs out
    ///
    /// Prints the welcome banner, then alternates between the login loop and
    /// the menu loop according to the current state.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The user logged out
    /// * `Err(AtmError)` - Input ended before logout, or console I/O failed
    pub fn run(&mut self) -> Result<(), AtmError> {
        if self.state == SessionState::Unauthenticated {
            self.console.say(&format::welcome_banner())?;
        }

        loop {
            self.state = match self.state.clone() {
                SessionState::Unauthenticated => self.login()?,
                SessionState::Authenticated(id) => self.serve(&id)?,
                SessionState::Terminated => return Ok(()),
            };
        }
    }

    /// One login attempt
    ///
    /// Returns `Authenticated` on success and `Unauthenticated` when the
    /// credentials were rejected.
    fn login(&mut self) -> Result<SessionState, AtmError> {
        let id = self.console.prompt("\nEnter User ID: ")?;
        let pin = self.console.prompt("Enter PIN: ")?;

        match self.directory.authenticate(&id, &pin) {
            Ok(bound) => {
                info!(account = %bound, "authentication succeeded");
                self.console.say(&format::login_success(&bound))?;
                Ok(SessionState::Authenticated(bound))
            }
            Err(e) if e.is_invalid_credentials() => {
                warn!(account = %id, error = %e, "authentication failed");
                self.console.say(&format::login_failure(&e))?;
                Ok(SessionState::Unauthenticated)
            }
            Err(e) => Err(e),
        }
    }

    /// Show the menu once and carry out the chosen operation
    fn serve(&mut self, id: &str) -> Result<SessionState, AtmError> {
        self.console.say(&format::menu())?;
        let input = self.console.prompt("\nEnter your choice: ")?;

        let choice = match input.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                debug!(error = %e, "rejected menu choice");
                self.console.say(&format::invalid_choice())?;
                return Ok(SessionState::Authenticated(id.to_string()));
            }
        };

        match choice {
            MenuChoice::CheckBalance => self.check_balance(id)?,
            MenuChoice::Withdraw => self.withdraw(id)?,
            MenuChoice::Deposit => self.deposit(id)?,
            MenuChoice::Statement => self.show_statement(id)?,
            MenuChoice::Logout => {
                info!(account = %id, "logged out");
                self.console.say(&format::farewell())?;
                return Ok(SessionState::Terminated);
            }
        }

        Ok(SessionState::Authenticated(id.to_string()))
    }

    fn check_balance(&mut self, id: &str) -> Result<(), AtmError> {
        let balance = self.bound_account(id)?.balance();
        self.console.say(&format::balance(balance))
    }

    fn withdraw(&mut self, id: &str) -> Result<(), AtmError> {
        let input = self
            .console
            .prompt("\nEnter the amount you want to withdraw: Rs.")?;
        let Some(amount) = self.read_amount(&input)? else {
            return Ok(());
        };

        let account = self
            .directory
            .account_mut(id)
            .ok_or_else(|| AtmError::unknown_account(id))?;

        match account.withdraw(amount) {
            Ok(balance) => {
                info!(account = %id, %amount, %balance, "withdrawal");
                self.console.say(&format::withdrawal_success(balance))
            }
            Err(AtmError::InsufficientFunds {
                balance, requested, ..
            }) => {
                warn!(account = %id, %requested, %balance, "withdrawal rejected: insufficient funds");
                self.console
                    .say(&format::withdrawal_insufficient(requested, balance))
            }
            Err(e) => self.report_rejected(id, "withdrawal", &input, e),
        }
    }

    fn deposit(&mut self, id: &str) -> Result<(), AtmError> {
        let input = self
            .console
            .prompt("\nEnter the amount you want to deposit: Rs.")?;
        let Some(amount) = self.read_amount(&input)? else {
            return Ok(());
        };

        let account = self
            .directory
            .account_mut(id)
            .ok_or_else(|| AtmError::unknown_account(id))?;

        match account.deposit(amount) {
            Ok(balance) => {
                info!(account = %id, %amount, %balance, "deposit");
                self.console.say(&format::deposit_success(balance))
            }
            Err(e) => self.report_rejected(id, "deposit", &input, e),
        }
    }

    fn show_statement(&mut self, id: &str) -> Result<(), AtmError> {
        let statement = self.bound_account(id)?.statement();
        debug!(account = %id, entries = statement.transactions.len(), "statement");
        self.console.say(&format::statement(&statement))
    }

    /// Parse an amount, telling the user when it is malformed
    fn read_amount(&mut self, input: &str) -> Result<Option<Decimal>, AtmError> {
        match format::parse_amount(input) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                warn!(error = %e, "malformed amount");
                let message = match e {
                    AtmError::AmountOutOfRange { .. } => format::amount_out_of_range(input),
                    _ => format::invalid_amount(input),
                };
                self.console.say(&message)?;
                Ok(None)
            }
        }
    }

    /// Tell the user why the account rejected an operation
    fn report_rejected(
        &mut self,
        id: &str,
        operation: &str,
        input: &str,
        error: AtmError,
    ) -> Result<(), AtmError> {
        warn!(account = %id, operation, error = %error, "operation rejected");
        match error {
            AtmError::InvalidAmount { .. } => self.console.say(&format::invalid_amount(input)),
            other => self.console.say(&format!("\n{}", other)),
        }
    }

    fn bound_account(&self, id: &str) -> Result<&Account, AtmError> {
        self.directory
            .account(id)
            .ok_or_else(|| AtmError::unknown_account(id))
    }
}
