//! Line-based console over any reader/writer pair
//!
//! `Console` wraps a `BufRead` for input and a `Write` for output. The
//! binary hands it locked stdin/stdout; tests hand it in-memory buffers.
//!
//! # Error Handling
//!
//! - End of input is reported as `AtmError::InputClosed`
//! - Read and write failures are converted into `AtmError::IoError`

use crate::types::AtmError;
use std::io::{BufRead, Write};

/// Prompt/read/print helper used by the session
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print `text` without a trailing newline, then read one line
    pub fn prompt(&mut self, text: &str) -> Result<String, AtmError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line with surrounding whitespace trimmed
    ///
    /// # Errors
    ///
    /// Returns `AtmError::InputClosed` when the input has no more lines.
    pub fn read_line(&mut self) -> Result<String, AtmError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AtmError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Print `text` followed by a newline
    pub fn say(&mut self, text: &str) -> Result<(), AtmError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_writes_text_and_reads_trimmed_line() {
        let mut console = console("  1234 \r\n");

        let line = console.prompt("Enter User ID: ").unwrap();

        assert_eq!(line, "1234");
        assert_eq!(console.output(), b"Enter User ID: ");
    }

    #[test]
    fn test_read_line_sequence() {
        let mut console = console("first\nsecond\n");

        assert_eq!(console.read_line().unwrap(), "first");
        assert_eq!(console.read_line().unwrap(), "second");
        assert_eq!(console.read_line(), Err(AtmError::InputClosed));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut console = console("5");
        assert_eq!(console.read_line().unwrap(), "5");
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() {
        let mut console = console("\n");
        assert_eq!(console.read_line().unwrap(), "");
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = console("");

        console.say("Logging out").unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Logging out\n");
    }
}
