// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input providers.
//!
//! An [`InputProvider`] turns a prompt into a response. Two providers ship:
//! - [`ConsoleInput`] writes the prompt and reads a line from a reader
//!   (stdin for the binary)
//! - [`ScriptedInput`] answers from a fixed prompt → response table

mod console;
mod scripted;

pub use console::ConsoleInput;
pub use scripted::ScriptedInput;

/// Errors raised while asking for input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Writing the prompt or reading the reply failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream closed before a line was entered.
    #[error("input closed before a response was entered")]
    EndOfInput,
}

/// Something that can answer a prompt.
///
/// `Ok(None)` means the provider has no answer for this prompt. Only
/// scripted providers return it.
pub trait InputProvider {
    /// Ask `prompt` and return the response.
    fn input(&mut self, prompt: &str) -> Result<Option<String>, InputError>;
}

impl<P: InputProvider + ?Sized> InputProvider for &mut P {
    fn input(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        (**self).input(prompt)
    }
}

impl<P: InputProvider + ?Sized> InputProvider for Box<P> {
    fn input(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        (**self).input(prompt)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
