use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HomeScout - Pune house price estimator
#[derive(Parser, Debug)]
#[command(name = "homescout")]
#[command(about = "Estimate Pune house prices and explore search history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Storage backend for the search log (defaults to postgres when DATABASE_URL is set)
    #[arg(long, global = true)]
    pub storage: Option<StorageBackend>,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the model artifact
    #[arg(long, global = true, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Path to the column configuration
    #[arg(long, global = true, value_name = "FILE")]
    pub columns: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// In-memory search log (lost when the command exits)
    Memory,
    /// PostgreSQL `searches` table
    Postgres,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the price of a property
    Predict(PredictArgs),

    /// Show listing-site search links for a location
    Listings(ListingsArgs),

    /// Show the locations, house types and ranges the model accepts
    Options,

    /// Summarize the search log
    Insights,

    /// List raw search log rows
    Searches(SearchesArgs),

    /// Manage the search log database
    Db(DbArgs),

    /// Run health checks and diagnostics
    Doctor(DoctorArgs),
}

#[derive(Parser, Debug)]
pub struct PredictArgs {
    /// Location name, e.g. "Wakad"
    #[arg(long, short = 'l', required_unless_present = "interactive")]
    pub location: Option<String>,

    /// House type, e.g. "Apartment" or "independent_house"
    #[arg(long = "house-type", short = 't', required_unless_present = "interactive")]
    pub house_type: Option<String>,

    /// Built-up area in square feet
    #[arg(long, short = 'a', default_value = "1000")]
    pub area: u32,

    /// Number of bedrooms
    #[arg(long, short = 'b', default_value = "2")]
    pub bhk: u32,

    /// Do not write the search to the search log
    #[arg(long)]
    pub no_log: bool,

    /// Interactive mode - choose every field with prompts
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(Parser, Debug)]
pub struct ListingsArgs {
    /// Location name
    pub location: String,

    /// Number of bedrooms
    #[arg(long, short = 'b', default_value = "2")]
    pub bhk: u32,
}

#[derive(Parser, Debug)]
pub struct SearchesArgs {
    /// Only show the most recent N searches
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct DbArgs {
    /// Database management command
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Subcommand, Debug)]
pub enum DbCommand {
    /// Create the searches table if it does not exist
    Init,

    /// Show search log statistics
    Stats,
}

#[derive(Parser, Debug)]
pub struct DoctorArgs {
    /// Show detailed diagnostic information
    #[arg(long)]
    pub verbose: bool,
}
