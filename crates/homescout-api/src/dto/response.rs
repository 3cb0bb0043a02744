use homescout_core::models::{ListingLink, PriceEstimate};
use serde::Serialize;

/// Estimated price in the units the form shows
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub rupees: f64,
    pub lakhs: f64,
    pub display: String,
}

impl From<PriceEstimate> for PriceResponse {
    fn from(estimate: PriceEstimate) -> Self {
        Self {
            rupees: estimate.rupees(),
            lakhs: estimate.lakhs(),
            display: estimate.display(),
        }
    }
}

/// Prediction response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub location: String,
    pub house_type: String,
    pub area_sqft: u32,
    pub bhk: u32,
    pub price: PriceResponse,
    pub listings: Vec<ListingLink>,
    /// Whether the search was written to the search log
    pub logged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Choices offered by the input form
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub locations: Vec<String>,
    pub house_types: Vec<HouseTypeOption>,
    pub area_sqft: Bounds,
    pub bhk: Bounds,
}

#[derive(Debug, Serialize)]
pub struct HouseTypeOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
    pub step: u32,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub storage: &'static str,
}

impl HealthResponse {
    pub fn ok(storage: &'static str) -> Self {
        Self {
            status: "ok",
            service: "homescout-api",
            storage,
        }
    }
}
