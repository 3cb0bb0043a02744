//! Command implementations

mod db;
mod doctor;
mod insights;
mod listings;
mod options;
mod predict;
mod searches;

use crate::cli::{Cli, Commands};
use crate::config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = config::resolve(&cli)?;
    let backend = config::storage_backend(&cli, &config);

    match cli.command {
        Commands::Predict(args) => predict::execute(args, &config, backend, &output).await,
        Commands::Listings(args) => listings::execute(args, &output),
        Commands::Options => options::execute(&config, &output),
        Commands::Insights => insights::execute(&config, backend, &output).await,
        Commands::Searches(args) => searches::execute(args, &config, backend, &output).await,
        Commands::Db(args) => db::execute(args, &config, &output).await,
        Commands::Doctor(args) => doctor::execute(args, &config, &output).await,
    }
}
