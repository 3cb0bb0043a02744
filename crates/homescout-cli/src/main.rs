//! HomeScout CLI - Command-line interface
//!
//! Estimates Pune house prices from the terminal and inspects the search log.

mod cli;
mod commands;
mod config;
mod errors;
mod interactive;
mod output;
mod output_types;
mod storage;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Create async runtime
    let runtime = tokio::runtime::Runtime::new()?;

    // Execute the command
    if let Err(e) = runtime.block_on(commands::execute(cli)) {
        errors::from_anyhow(e).display();
        std::process::exit(1);
    }

    Ok(())
}
