//! Predict command implementation

use crate::cli::{PredictArgs, StorageBackend};
use crate::config::load_predictor;
use crate::interactive::interactive_predict;
use crate::output::OutputWriter;
use crate::output_types::{ListingRow, PredictOutput};
use crate::storage::Storage;
use anyhow::{Context, Result};
use chrono::Utc;
use console::style;
use homescout_core::config::LayeredConfig;
use homescout_core::models::{HouseType, PropertyQuery};
use homescout_core::Prediction;

pub async fn execute(
    args: PredictArgs,
    config: &LayeredConfig,
    backend: StorageBackend,
    output: &OutputWriter,
) -> Result<()> {
    let predictor = load_predictor(config)?;

    let query = if args.interactive {
        interactive_predict(predictor.layout())?
    } else {
        let location = args.location.context("--location is required")?;
        let house_type: HouseType = args
            .house_type
            .as_deref()
            .context("--house-type is required")?
            .parse()?;
        PropertyQuery::new(location, house_type, args.area, args.bhk)
    };

    let prediction = predictor.predict(&query)?;

    let (logged, storage) = if args.no_log {
        (false, "none")
    } else {
        log_search(&prediction, config, backend, output).await
    };

    if output.is_json() {
        return output.result(PredictOutput {
            location: prediction.query.location.clone(),
            house_type: prediction.query.house_type.display_name().to_string(),
            area_sqft: prediction.query.area_sqft,
            bhk: prediction.query.bhk,
            price_rupees: prediction.estimate.rupees(),
            price_lakhs: prediction.estimate.lakhs(),
            display: prediction.estimate.display(),
            listings: prediction.links,
            logged,
            storage,
        });
    }

    output.section("Estimated Price");
    output.kv("Location", &prediction.query.location);
    output.kv("House Type", prediction.query.house_type);
    output.kv("Area", format!("{} sqft", prediction.query.area_sqft));
    output.kv("BHK", prediction.query.bhk);
    output.kv("Price", style(prediction.estimate.display()).green().bold());

    output.section("Browse Listings");
    output.table(prediction.links.iter().map(ListingRow::from).collect());

    if logged {
        output.success(format!("Search saved to {} log", storage));
    }

    Ok(())
}

/// Append the search to the log; failures become warnings and never hide the estimate
async fn log_search(
    prediction: &Prediction,
    config: &LayeredConfig,
    backend: StorageBackend,
    output: &OutputWriter,
) -> (bool, &'static str) {
    let storage = match Storage::new(backend, config.database_url.value.as_deref()).await {
        Ok(storage) => storage,
        Err(e) => {
            output.warning(format!("Search was not saved to history: {:#}", e));
            return (false, "none");
        }
    };

    let name = storage.search_log.backend();
    if storage.is_ephemeral() {
        output.info("Search log is in memory for this run only; use --storage postgres to keep history");
    }

    match storage.search_log.append(&prediction.log_entry(Utc::now())).await {
        Ok(id) => {
            tracing::debug!(search_id = id.0, backend = name, "Search logged");
            (true, name)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to log search");
            output.warning(format!("Search was not saved to history: {}", e));
            (false, name)
        }
    }
}
