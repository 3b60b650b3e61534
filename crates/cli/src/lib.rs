// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! askname library.
//!
//! Asks for a name through an [`InputProvider`](input::InputProvider),
//! so the console can be swapped for scripted answers in tests.

pub mod cli;
pub mod input;
pub mod logging;
pub mod name;

#[cfg(test)]
pub mod test_utils;

pub use input::{ConsoleInput, InputError, InputProvider, ScriptedInput};
pub use name::{NAME_PROMPT, request_name};
