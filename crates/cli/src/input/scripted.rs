// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted input: canned answers keyed by exact prompt text.
//!
//! A response script is a TOML table of prompt → response:
//!
//! ```toml
//! "What is your name?" = "Test User"
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use super::{InputError, InputProvider};

/// Answers prompts from an owned prompt → response table.
///
/// Prompts must match exactly. An unknown prompt yields `Ok(None)`.
/// Never performs I/O and never fails.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ScriptedInput {
    responses: HashMap<String, String>,
}

impl ScriptedInput {
    /// Empty script; every prompt is unanswered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response, builder style.
    pub fn with_response(mut self, prompt: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses.insert(prompt.into(), response.into());
        self
    }

    /// Set the response for `prompt`, returning the one it replaced.
    pub fn set_response(
        &mut self,
        prompt: impl Into<String>,
        response: impl Into<String>,
    ) -> Option<String> {
        self.responses.insert(prompt.into(), response.into())
    }

    /// Look up the response for `prompt` without consuming it.
    pub fn response(&self, prompt: &str) -> Option<&str> {
        self.responses.get(prompt).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Parse a response script from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a response script from `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read response script {}", path.display()))?;
        let script = Self::from_toml(&content)
            .with_context(|| format!("invalid response script {}", path.display()))?;
        tracing::debug!(path = %path.display(), responses = script.len(), "loaded response script");
        Ok(script)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ScriptedInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            responses: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl InputProvider for ScriptedInput {
    fn input(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        let response = self.response(prompt).map(str::to_string);
        if response.is_none() {
            tracing::debug!(prompt, "no scripted response for prompt");
        }
        Ok(response)
    }
}

#[cfg(test)]
#[path = "scripted_tests.rs"]
mod tests;
