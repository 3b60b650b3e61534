//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

use tempfile::NamedTempFile;

use crate::input::ScriptedInput;
use crate::name::NAME_PROMPT;

/// A scripted provider that answers the name prompt with `name`.
///
/// Builds a fresh table on every call so tests never share state.
pub fn scripted_name(name: &str) -> ScriptedInput {
    ScriptedInput::new().with_response(NAME_PROMPT, name)
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
