use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Estimate view
        .route("/api/v1/options", get(handlers::get_options))
        .route("/api/v1/predict", post(handlers::handle_predict))
        .route("/api/v1/listings", get(handlers::get_listings))

        // Insights view
        .route("/api/v1/insights", get(handlers::get_insights))
        .route("/api/v1/searches", get(handlers::list_searches))

        .with_state(state)
}
