use crate::cli::{DbArgs, DbCommand};
use crate::output::OutputWriter;
use crate::output_types::DbStatsOutput;
use crate::storage::connect_postgres;
use anyhow::{Context, Result};
use homescout_core::config::LayeredConfig;
use homescout_store::ports::SearchLogStore;
use homescout_store::postgres::PostgresStore;

/// Execute database management commands
pub async fn execute(args: DbArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let store = connect_postgres(config.database_url.value.as_deref()).await?;

    match args.command {
        DbCommand::Init => execute_init(&store, output).await,
        DbCommand::Stats => execute_stats(&store, output).await,
    }
}

/// Create the searches table
async fn execute_init(store: &PostgresStore, output: &OutputWriter) -> Result<()> {
    let existed = store.has_schema().await?;
    store
        .ensure_schema()
        .await
        .context("Failed to create the searches table")?;

    if existed {
        output.success("searches table already exists");
    } else {
        output.success("Created searches table");
    }
    Ok(())
}

/// Show row count for the search log
async fn execute_stats(store: &PostgresStore, output: &OutputWriter) -> Result<()> {
    let table_exists = store.has_schema().await?;
    let searches = if table_exists {
        store.count().await.context("Failed to count searches")?
    } else {
        0
    };

    let stats = DbStatsOutput {
        backend: store.backend(),
        table_exists,
        searches,
    };

    if output.is_json() {
        return output.result(stats);
    }

    output.section("Search Log");
    output.kv("Backend", stats.backend);
    output.kv("Table", if stats.table_exists { "present" } else { "missing (run: homescout db init)" });
    output.kv("Searches", stats.searches);
    Ok(())
}
