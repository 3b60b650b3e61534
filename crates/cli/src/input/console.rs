// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive console input.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::{InputError, InputProvider};

/// Writes the prompt to `writer` and reads one line from `reader`.
///
/// The prompt is written as-is, with no trailing newline, and flushed
/// before reading. Reading blocks until a full line arrives.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Console input over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the provider, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn input(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(InputError::EndOfInput);
        }
        tracing::debug!(bytes = read, "read console line");

        Ok(Some(strip_line_ending(line)))
    }
}

/// Remove one trailing `\n` or `\r\n`.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
