//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Ask for your name at the console
#[derive(Parser, Debug)]
#[command(name = "askname")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Answer prompts from a TOML response script instead of the console
    #[arg(short = 'R', long, value_name = "FILE", env = "ASKNAME_RESPONSES")]
    pub responses: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
