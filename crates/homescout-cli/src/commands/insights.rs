//! Insights command implementation

use crate::cli::StorageBackend;
use crate::output::OutputWriter;
use crate::storage::Storage;
use anyhow::{Context, Result};
use homescout_core::config::LayeredConfig;
use homescout_core::insights::{self, Insights};
use tabled::Tabled;

pub async fn execute(config: &LayeredConfig, backend: StorageBackend, output: &OutputWriter) -> Result<()> {
    let storage = Storage::new(backend, config.database_url.value.as_deref()).await?;
    if storage.is_ephemeral() {
        output.warning("Reading the in-memory search log, which is empty for a fresh run. Use --storage postgres.");
    }

    let rows = storage
        .search_log
        .read_all()
        .await
        .context("Failed to read the search log")?;

    let insights = insights::compute(&rows);

    if output.is_json() {
        return output.result(&insights);
    }

    let summary = match insights {
        Insights::NoData => {
            output.info("No searches recorded yet. Run: homescout predict");
            return Ok(());
        }
        Insights::Summary(summary) => summary,
    };

    output.section("Search Insights");
    output.kv("Total Searches", summary.total_searches);
    output.kv("Most Popular Location", &summary.most_popular_location);
    output.kv("Average Price", format!("{:.2} Lakhs", summary.average_price_lakhs));

    #[derive(Tabled)]
    struct CountRow {
        #[tabled(rename = "Location")]
        location: String,
        #[tabled(rename = "Searches")]
        searches: usize,
    }

    output.section("Most Searched Locations");
    output.table(
        summary
            .top_locations
            .iter()
            .map(|c| CountRow {
                location: c.location.clone(),
                searches: c.searches,
            })
            .collect(),
    );

    #[derive(Tabled)]
    struct PriceRow {
        #[tabled(rename = "Location")]
        location: String,
        #[tabled(rename = "Avg Price (Lakhs)")]
        price: String,
    }

    output.section("Highest Average Price");
    output.table(
        summary
            .average_price_by_location
            .iter()
            .map(|p| PriceRow {
                location: p.location.clone(),
                price: format!("{:.2}", p.average_price_lakhs),
            })
            .collect(),
    );

    #[derive(Tabled)]
    struct BhkRow {
        #[tabled(rename = "BHK")]
        bhk: u32,
        #[tabled(rename = "Searches")]
        searches: usize,
        #[tabled(rename = "Share")]
        share: String,
    }

    output.section("BHK Distribution");
    output.table(
        summary
            .bhk_distribution
            .iter()
            .map(|b| BhkRow {
                bhk: b.bhk,
                searches: b.searches,
                share: format!("{:.1}%", b.percent),
            })
            .collect(),
    );

    Ok(())
}
