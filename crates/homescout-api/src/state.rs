use homescout_core::Predictor;
use homescout_store::ports::SearchLogStore;
use std::sync::Arc;

/// Process-wide context shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
    pub search_log: Arc<dyn SearchLogStore>,
}

impl AppState {
    pub fn new(predictor: Arc<Predictor>, search_log: Arc<dyn SearchLogStore>) -> Self {
        Self { predictor, search_log }
    }
}
