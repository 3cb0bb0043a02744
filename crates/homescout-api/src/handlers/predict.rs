use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::dto::{PredictRequest, PredictResponse};
use crate::error::ApiError;
use crate::services::PredictionService;
use crate::state::AppState;

pub async fn handle_predict(
    State(state): State<Arc<AppState>>,
    request: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = request.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Malformed prediction request");
        ApiError::from(rejection)
    })?;

    tracing::info!(
        location = %request.location,
        house_type = %request.house_type,
        area_sqft = request.area_sqft,
        bhk = request.bhk,
        "Processing prediction request"
    );

    let response = PredictionService::execute(&state, &request).await.map_err(|e| {
        tracing::warn!(status = %e.status, error = %e.message, "Prediction rejected");
        e
    })?;

    Ok(Json(response))
}
