// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use assert_cmd::Command;

/// The prompt the binary prints.
pub const PROMPT: &str = "What is your name?";

/// Returns a Command configured to run the askname binary, isolated from
/// the caller's askname environment variables.
pub fn askname_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("askname"));
    cmd.env_remove("ASKNAME_RESPONSES").env_remove("ASKNAME_LOG");
    cmd
}

/// Get path to a test fixture file or directory
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}
