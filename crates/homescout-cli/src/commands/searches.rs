use crate::cli::{SearchesArgs, StorageBackend};
use crate::output::OutputWriter;
use crate::output_types::SearchRow;
use crate::storage::Storage;
use anyhow::{Context, Result};
use homescout_core::config::LayeredConfig;
use homescout_core::insights::title_case;
use homescout_core::models::SearchRecord;

pub async fn execute(
    args: SearchesArgs,
    config: &LayeredConfig,
    backend: StorageBackend,
    output: &OutputWriter,
) -> Result<()> {
    let storage = Storage::new(backend, config.database_url.value.as_deref()).await?;
    let records = storage
        .search_log
        .read_all()
        .await
        .context("Failed to read the search log")?;
    let records = recent(records, args.limit);

    if output.is_json() {
        return output.result(records);
    }

    output.section(format!("Searches ({})", records.len()));
    output.table(records.iter().map(SearchRow::from).collect());
    Ok(())
}

/// Keep the last `limit` rows, locations spelled as the insights report them
fn recent(mut records: Vec<SearchRecord>, limit: Option<usize>) -> Vec<SearchRecord> {
    if let Some(limit) = limit {
        let skip = records.len().saturating_sub(limit);
        records.drain(..skip);
    }

    for record in &mut records {
        record.entry.location = title_case(&record.entry.location);
    }

    records
}
