use clap::Parser;

use askname::cli::Cli;
use askname::input::{ConsoleInput, InputProvider, ScriptedInput};
use askname::{logging, request_name};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut provider: Box<dyn InputProvider> = match &cli.responses {
        Some(path) => Box::new(ScriptedInput::load(path)?),
        None => Box::new(ConsoleInput::stdio()),
    };

    run(provider.as_mut())
}

/// Ask for the user's name once.
fn run(provider: &mut dyn InputProvider) -> anyhow::Result<()> {
    match request_name(provider)? {
        Some(name) => tracing::debug!(name = %name, "received name"),
        None => tracing::debug!("no name provided"),
    }
    Ok(())
}
