// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Asking the user for their name.

use crate::input::{InputError, InputProvider};

/// The prompt shown when asking for a name.
pub const NAME_PROMPT: &str = "What is your name?";

/// Ask `provider` for the user's name.
///
/// Makes exactly one [`InputProvider::input`] call with [`NAME_PROMPT`] and
/// returns its result untouched: no trimming, no emptiness check, no retry.
/// `Ok(None)` passes through when the provider has no answer.
pub fn request_name<P: InputProvider + ?Sized>(
    provider: &mut P,
) -> Result<Option<String>, InputError> {
    provider.input(NAME_PROMPT)
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
