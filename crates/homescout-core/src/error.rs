//! Error types for HomeScout

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HomescoutError {
    // Artifact errors
    #[error("Artifact not found at {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("Price model unavailable: {reason}")]
    ModelUnavailable { reason: String },

    #[error("Feature vector has {actual} values, model expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    // Query errors
    #[error("Unknown {kind} '{value}': not one of the model's trained columns")]
    UnknownCategory { kind: &'static str, value: String },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    // Search log errors
    #[error("Search log unavailable: {0}")]
    Persistence(String),

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HomescoutError {
    /// Whether this error means the service cannot start at all
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            HomescoutError::ArtifactNotFound { .. }
                | HomescoutError::ModelUnavailable { .. }
                | HomescoutError::ConfigInvalid { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HomescoutError>;
