//! ATM menu choices
//!
//! The authenticated menu offers five numbered entries. Parsing a choice is
//! strict: anything other than the numbers 1 through 5 is an
//! `InvalidMenuChoice`, which the session reports before showing the menu
//! again.

use crate::types::AtmError;
use std::str::FromStr;

/// An entry of the authenticated menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckBalance,
    Withdraw,
    Deposit,
    Statement,
    Logout,
}

impl MenuChoice {
    /// All entries in the order they are displayed
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::CheckBalance,
        MenuChoice::Withdraw,
        MenuChoice::Deposit,
        MenuChoice::Statement,
        MenuChoice::Logout,
    ];

    /// The number the user types to select this entry
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::CheckBalance => 1,
            MenuChoice::Withdraw => 2,
            MenuChoice::Deposit => 3,
            MenuChoice::Statement => 4,
            MenuChoice::Logout => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::Withdraw => "Withdraw Money",
            MenuChoice::Deposit => "Deposit Money",
            MenuChoice::Statement => "Account Statement",
            MenuChoice::Logout => "Logout",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = AtmError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let number = input
            .trim()
            .parse::<u8>()
            .map_err(|_| AtmError::invalid_menu_choice(input))?;

        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| AtmError::invalid_menu_choice(input))
    }
}
