use std::sync::Arc;

use axum::{extract::State, Json};
use homescout_core::insights::{self, Insights};
use homescout_core::models::SearchRecord;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_insights(State(state): State<Arc<AppState>>) -> Result<Json<Insights>, ApiError> {
    tracing::info!("Computing search insights");

    let rows = state.search_log.read_all().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read search log");
        ApiError::from(e)
    })?;

    Ok(Json(insights::compute(&rows)))
}

pub async fn list_searches(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SearchRecord>>, ApiError> {
    tracing::info!("Listing raw searches");

    let mut rows = state.search_log.read_all().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read search log");
        ApiError::from(e)
    })?;

    // Same spelling as the grouped insights
    for row in &mut rows {
        row.entry.location = insights::title_case(&row.entry.location);
    }

    Ok(Json(rows))
}
