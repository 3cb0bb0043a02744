//! Prediction pipeline: validate, encode, infer, build listing links

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use crate::columns::ColumnLayout;
use crate::encoder;
use crate::error::{HomescoutError, Result};
use crate::estimator::PriceEstimator;
use crate::listings::LinkGenerator;
use crate::models::{ListingLink, PriceEstimate, PropertyQuery, SearchLogEntry};

/// Outcome of one successful prediction
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub query: PropertyQuery,
    pub estimate: PriceEstimate,
    pub links: Vec<ListingLink>,
}

impl Prediction {
    /// The search log row for this prediction
    pub fn log_entry(&self, timestamp: DateTime<Utc>) -> SearchLogEntry {
        SearchLogEntry::from_prediction(&self.query, self.estimate, timestamp)
    }
}

/// Read-only prediction context, built once at startup
#[derive(Debug, Clone)]
pub struct Predictor {
    layout: ColumnLayout,
    estimator: PriceEstimator,
    links: LinkGenerator,
}

impl Predictor {
    /// Pair a column layout with a model; their widths must agree
    pub fn new(layout: ColumnLayout, estimator: PriceEstimator) -> Result<Self> {
        if layout.len() != estimator.input_width() {
            return Err(HomescoutError::ConfigInvalid {
                key: "model".to_string(),
                reason: format!(
                    "model expects {} inputs but column configuration lists {}",
                    estimator.input_width(),
                    layout.len()
                ),
            });
        }

        Ok(Self {
            layout,
            estimator,
            links: LinkGenerator::default(),
        })
    }

    /// Load both artifacts from disk
    pub fn load(model_path: impl AsRef<Path>, columns_path: impl AsRef<Path>) -> Result<Self> {
        let layout = ColumnLayout::load(columns_path)?;
        let estimator = PriceEstimator::load(model_path)?;
        let predictor = Self::new(layout, estimator)?;

        tracing::info!(
            columns = predictor.layout.len(),
            locations = predictor.layout.locations().len(),
            "Price model ready"
        );

        Ok(predictor)
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Estimate a price and build listing links for a query
    pub fn predict(&self, query: &PropertyQuery) -> Result<Prediction> {
        query.validate()?;

        let features = encoder::encode(&self.layout, query)?;
        let estimate = self.estimator.estimate(&features)?;

        tracing::debug!(
            location = %query.location,
            house_type = %query.house_type,
            area_sqft = query.area_sqft,
            bhk = query.bhk,
            price = estimate.rupees(),
            "Estimated price"
        );

        Ok(Prediction {
            query: query.clone(),
            estimate,
            links: self.links.generate(&query.location, query.bhk),
        })
    }

    /// Listing links alone, without running the model
    pub fn listings(&self, location: &str, bhk: u32) -> Vec<ListingLink> {
        self.links.generate(location, bhk)
    }
}
