//! Text format handling for console input and output
//!
//! This module centralizes the wording of everything the ATM prints and the
//! parsing of amounts typed by the user. All functions are pure (no I/O)
//! for easy testing.

use crate::core::menu::MenuChoice;
use crate::types::{AtmError, Statement};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Render an amount the way the ATM displays money, e.g. `Rs.150/-`
pub fn format_money(amount: Decimal) -> String {
    format!("Rs.{}/-", amount)
}

/// Parse an amount typed at a deposit or withdrawal prompt
///
/// Accepts plain decimal notation only: an optional sign, digits, and at
/// most one '.' followed by more digits (`50`, `12.50`, `-3`). The parsed
/// value keeps every digit as typed. Whether the amount is positive is
/// checked by the account, not here.
///
/// # Errors
///
/// Returns an error if:
/// - The input is not in plain decimal notation (`InvalidAmount`)
/// - The value cannot be held without rounding, i.e. more than 28 decimal
///   places or beyond `Decimal::MAX` (`AmountOutOfRange`)
pub fn parse_amount(input: &str) -> Result<Decimal, AtmError> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) if !fraction.is_empty() => (whole, fraction),
        Some(_) => return Err(AtmError::invalid_amount(input)),
        None => (unsigned, ""),
    };

    let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() || !digits_only(whole) || !digits_only(fraction) {
        return Err(AtmError::invalid_amount(input));
    }

    let value =
        Decimal::from_str(unsigned).map_err(|_| AtmError::amount_out_of_range(input))?;

    // a smaller scale means digits were rounded away
    if value.scale() as usize != fraction.len() {
        return Err(AtmError::amount_out_of_range(input));
    }

    Ok(if negative { -value } else { value })
}

pub fn welcome_banner() -> String {
    [
        "",
        "Welcome to the ATM Machine!!!",
        "First let us verify your identity",
        "Insert your card details manually",
    ]
    .join("\n")
}

/// Menu block shown before each choice prompt
pub fn menu() -> String {
    let mut lines = vec![String::new(), "ATM Menu:".to_string()];
    lines.extend(
        MenuChoice::ALL
            .iter()
            .map(|choice| format!("{}. {}", choice.number(), choice.label())),
    );
    lines.join("\n")
}

/// Message shown for a failed login attempt
pub fn login_failure(error: &AtmError) -> String {
    match error {
        AtmError::UnknownAccount { .. } => "\nInvalid User ID. Please try again.".to_string(),
        AtmError::InvalidPin { .. } => "\nInvalid PIN. Please try again.".to_string(),
        other => format!("\n{}. Please try again.", other),
    }
}

pub fn login_success(id: &str) -> String {
    format!("\nAuthentication successful.\nWelcome, User {}!", id)
}

pub fn balance(balance: Decimal) -> String {
    format!("\nYour Balance is: {}", format_money(balance))
}

pub fn withdrawal_success(balance: Decimal) -> String {
    format!(
        "\nWithdrawal successful.\nYour new balance is: {}",
        format_money(balance)
    )
}

pub fn withdrawal_insufficient(requested: Decimal, balance: Decimal) -> String {
    format!(
        "\nWithdrawal of {} amount failed, due to insufficient funds!\nYour current balance is: {}",
        format_money(requested),
        format_money(balance)
    )
}

pub fn deposit_success(balance: Decimal) -> String {
    format!(
        "\nDeposit Successful!!\nAmount successfully deposited\nYour new balance is: {}",
        format_money(balance)
    )
}

pub fn invalid_amount(input: &str) -> String {
    format!("\nInvalid amount '{}'. Please enter a positive number.", input)
}

pub fn amount_out_of_range(input: &str) -> String {
    format!(
        "\nAmount '{}' is out of range. Please use at most 28 decimal places and a smaller value.",
        input
    )
}

pub fn invalid_choice() -> String {
    "\nInvalid choice. Please enter a number between 1 and 5.".to_string()
}

/// Mini-statement: remaining balance followed by every transaction line
pub fn statement(statement: &Statement) -> String {
    let mut lines = vec![
        "\nYour Account Statement:".to_string(),
        String::new(),
        format!("Remaining Balance: {}", format_money(statement.balance)),
    ];
    lines.extend(statement.lines());
    lines.join("\n")
}

pub fn farewell() -> String {
    "\nDont forget to collect your ATM card\nLogging out\nHave a nice day :)".to_string()
}
