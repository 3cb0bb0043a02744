//! Price estimation over the exported regression model
//!
//! The model is an opaque artifact trained elsewhere. It is loaded once at
//! startup and only ever read afterwards.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::encoder::FeatureVector;
use crate::error::{HomescoutError, Result};
use crate::models::PriceEstimate;

/// A trained regressor mapping a fixed-width input to one value
pub trait Regressor: Send + Sync {
    /// Number of inputs the model was fit on
    fn input_width(&self) -> usize;

    /// Predict one value; `input.len()` equals `input_width()`
    fn predict(&self, input: &[f64]) -> f64;
}

/// Ordinary least squares model: `intercept + Σ coefficient·x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl Regressor for LinearRegressor {
    fn input_width(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, input: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(input)
                .map(|(coefficient, x)| coefficient * x)
                .sum::<f64>()
    }
}

/// On-disk model artifact, tagged by model kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearRegressor),
}

impl ModelArtifact {
    /// Parse an artifact from its JSON form
    pub fn from_json(content: &str) -> Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_str(content).map_err(|e| HomescoutError::ModelUnavailable {
                reason: format!("Failed to parse model artifact: {}", e),
            })?;

        let ModelArtifact::Linear(model) = &artifact;
        if model.coefficients.is_empty() {
            return Err(HomescoutError::ModelUnavailable {
                reason: "model has no coefficients".to_string(),
            });
        }
        if !model.intercept.is_finite() || model.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(HomescoutError::ModelUnavailable {
                reason: "model contains non-finite parameters".to_string(),
            });
        }

        Ok(artifact)
    }

    /// Load an artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| HomescoutError::ModelUnavailable {
            reason: format!("Failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json(&content)
    }

    /// Turn the artifact into a shareable regressor
    pub fn into_regressor(self) -> Arc<dyn Regressor> {
        match self {
            ModelArtifact::Linear(model) => Arc::new(model),
        }
    }
}

/// Wraps the loaded model and checks every input against its width
#[derive(Clone)]
pub struct PriceEstimator {
    model: Arc<dyn Regressor>,
}

impl std::fmt::Debug for PriceEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceEstimator")
            .field("input_width", &self.model.input_width())
            .finish()
    }
}

impl PriceEstimator {
    pub fn new(model: Arc<dyn Regressor>) -> Self {
        Self { model }
    }

    /// Load the model artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let model = ModelArtifact::load(path)?.into_regressor();

        tracing::debug!(
            path = %path.display(),
            input_width = model.input_width(),
            "Loaded price model"
        );

        Ok(Self::new(model))
    }

    pub fn input_width(&self) -> usize {
        self.model.input_width()
    }

    /// Run one inference
    pub fn estimate(&self, features: &FeatureVector) -> Result<PriceEstimate> {
        let expected = self.model.input_width();
        if features.len() != expected {
            return Err(HomescoutError::DimensionMismatch {
                expected,
                actual: features.len(),
            });
        }

        Ok(PriceEstimate(self.model.predict(features.as_slice())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearRegressor {
        LinearRegressor {
            intercept: 100_000.0,
            coefficients: vec![5_000.0, 200_000.0, 1_000_000.0, -500_000.0],
        }
    }

    #[test]
    fn test_linear_predict() {
        let prediction = model().predict(&[1000.0, 2.0, 1.0, 0.0]);
        assert_eq!(prediction, 100_000.0 + 5_000_000.0 + 400_000.0 + 1_000_000.0);
    }

    #[test]
    fn test_estimate_checks_width() {
        let estimator = PriceEstimator::new(Arc::new(model()));
        let short = FeatureVector::from(vec![1000.0, 2.0]);

        match estimator.estimate(&short) {
            Err(HomescoutError::DimensionMismatch { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 2);
            }
            other => panic!("Expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_estimate() {
        let estimator = PriceEstimator::new(Arc::new(model()));
        let features = FeatureVector::from(vec![800.0, 1.0, 0.0, 1.0]);
        let estimate = estimator.estimate(&features).unwrap();
        assert_eq!(estimate.rupees(), 100_000.0 + 4_000_000.0 + 200_000.0 - 500_000.0);
    }

    #[test]
    fn test_artifact_from_json() {
        let json = r#"{"kind": "linear", "intercept": 1.5, "coefficients": [1.0, 2.0]}"#;
        let regressor = ModelArtifact::from_json(json).unwrap().into_regressor();
        assert_eq!(regressor.input_width(), 2);
        assert_eq!(regressor.predict(&[1.0, 1.0]), 4.5);
    }

    #[test]
    fn test_artifact_rejects_unknown_kind() {
        let json = r#"{"kind": "random_forest", "trees": []}"#;
        assert!(matches!(
            ModelArtifact::from_json(json),
            Err(HomescoutError::ModelUnavailable { .. })
        ));
    }

    #[test]
    fn test_artifact_rejects_empty_model() {
        let json = r#"{"kind": "linear", "intercept": 0.0, "coefficients": []}"#;
        assert!(matches!(
            ModelArtifact::from_json(json),
            Err(HomescoutError::ModelUnavailable { .. })
        ));
    }

    #[test]
    fn test_load_missing_model() {
        let result = PriceEstimator::load("/nonexistent/model.json");
        assert!(matches!(result, Err(HomescoutError::ModelUnavailable { .. })));
    }
}
