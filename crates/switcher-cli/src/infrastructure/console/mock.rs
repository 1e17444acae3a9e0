//! Mock choice source for unit testing.
//!
//! Allows tests to script the answers typed at the prompt without a
//! terminal.

use std::collections::VecDeque;
use std::io;

use super::ChoiceSource;

/// A scripted implementation of [`ChoiceSource`].
///
/// Each call to [`ChoiceSource::read_choice`] pops the next answer; once the
/// script is exhausted it behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct MockChoiceSource {
    answers: VecDeque<String>,
    reads: usize,
}

impl MockChoiceSource {
    /// Creates a mock that will return `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            reads: 0,
        }
    }

    /// Returns how many times input was requested.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ChoiceSource for MockChoiceSource {
    fn read_choice(&mut self) -> io::Result<String> {
        self.reads += 1;
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left")
        })
    }
}
