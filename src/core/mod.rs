//! Core business logic module
//!
//! This module contains the ATM session components:
//! - `directory` - Account lookup and credential checks
//! - `menu` - The numbered menu entries and their parsing
//! - `session` - The login/menu/logout state machine

pub mod directory;
pub mod menu;
pub mod session;

pub use directory::AccountDirectory;
pub use menu::MenuChoice;
pub use session::{Session, SessionState};
