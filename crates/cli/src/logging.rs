// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging setup.
//!
//! Log events go to stderr so stdout carries only the prompt. The level is
//! `warn` by default and `debug` with `--verbose`; `ASKNAME_LOG` takes
//! `EnvFilter` directives and overrides both.

use tracing_subscriber::EnvFilter;

/// Environment variable holding log filter directives.
pub const LOG_ENV: &str = "ASKNAME_LOG";

/// Build the log filter: `ASKNAME_LOG` if set and valid, else a level from `verbose`.
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

/// Level used when `ASKNAME_LOG` is unset.
fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global stderr subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
