//! Console infrastructure: menu rendering and prompt input.
//!
//! Rendering functions write to any [`std::io::Write`] so tests can capture
//! output in a `Vec<u8>`.  Input goes through the [`ChoiceSource`] trait;
//! the binary uses [`StdinChoiceSource`] and tests use
//! [`mock::MockChoiceSource`].

use std::io::{self, BufRead};

pub mod menu;
pub mod mock;

/// Supplies one line of user input per prompt.
pub trait ChoiceSource {
    /// Blocks until a line is available and returns it (terminator included
    /// or not; callers trim).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if input cannot be read, including
    /// [`io::ErrorKind::UnexpectedEof`] when input is closed before any
    /// character arrives.
    fn read_choice(&mut self) -> io::Result<String>;
}

/// Reads answers from the process's standard input.
#[derive(Debug, Default)]
pub struct StdinChoiceSource;

impl ChoiceSource for StdinChoiceSource {
    fn read_choice(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        Ok(line)
    }
}
