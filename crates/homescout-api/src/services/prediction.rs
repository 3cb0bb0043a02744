use chrono::Utc;

use crate::dto::{PredictRequest, PredictResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Service for running a prediction and recording it in the search log
pub struct PredictionService;

impl PredictionService {
    /// Estimate, build links, then append to the search log
    ///
    /// A failed append never hides the estimate: the response carries
    /// `logged: false` and a warning instead.
    pub async fn execute(state: &AppState, request: &PredictRequest) -> Result<PredictResponse, ApiError> {
        let query = request.to_query()?;
        let prediction = state.predictor.predict(&query)?;

        let entry = prediction.log_entry(Utc::now());
        let (search_id, warning) = match state.search_log.append(&entry).await {
            Ok(id) => {
                tracing::debug!(search_id = id.0, backend = state.search_log.backend(), "Search logged");
                (Some(id.0), None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to log search; returning estimate anyway");
                (None, Some(format!("Search was not saved to history: {}", e)))
            }
        };

        Ok(PredictResponse {
            location: prediction.query.location,
            house_type: prediction.query.house_type.display_name().to_string(),
            area_sqft: prediction.query.area_sqft,
            bhk: prediction.query.bhk,
            price: prediction.estimate.into(),
            listings: prediction.links,
            logged: search_id.is_some(),
            search_id,
            warning,
        })
    }
}
