//! # Stack console entry point

use anyhow::Result;
use clap::Parser;

use chainline_input::{RealEnv, TerminalSource};
use stack_example::cli::Cli;
use stack_example::{build_console, logging, prompt, Config, SharedStack, BANNER};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli, &RealEnv);
    logging::init(&config)?;
    tracing::debug!(?config, "starting stack console");

    let stack = SharedStack::default();
    let mut console = build_console(&stack, std::io::stdout())?;

    if config.banner {
        println!("{}", BANNER);
    }

    console.run_loop(TerminalSource::new(), prompt(&config, &stack))?;
    Ok(())
}
