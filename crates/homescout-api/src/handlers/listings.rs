use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use homescout_core::models::{ListingLink, BHK_RANGE};

use crate::dto::ListingsQuery;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_listings(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListingsQuery>, QueryRejection>,
) -> Result<Json<Vec<ListingLink>>, ApiError> {
    let Query(query) = query?;

    if query.location.trim().is_empty() {
        return Err(ApiError::bad_request("location cannot be empty"));
    }

    if !BHK_RANGE.contains(&query.bhk) {
        return Err(ApiError::bad_request("Invalid bhk").with_details(format!(
            "{} is outside {}..={}",
            query.bhk,
            BHK_RANGE.start(),
            BHK_RANGE.end()
        )));
    }

    Ok(Json(state.predictor.listings(&query.location, query.bhk)))
}
