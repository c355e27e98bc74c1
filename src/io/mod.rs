//! I/O module
//!
//! Handles console interaction and text rendering.
//!
//! # Components
//!
//! - `console` - Line-based prompt/read/print over a reader/writer pair
//! - `format` - Wording of prompts and results, amount parsing

pub mod console;
pub mod format;

pub use console::Console;
pub use format::{format_money, parse_amount};
