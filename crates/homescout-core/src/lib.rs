//! HomeScout Core - Domain models, feature encoding, price estimation and insights
//!
//! This crate contains the domain logic shared by the HTTP service and the CLI.
//! Storage adapters live in `homescout-store`.

pub mod columns;
pub mod config;
pub mod encoder;
pub mod error;
pub mod estimator;
pub mod insights;
pub mod listings;
pub mod models;
pub mod predictor;

pub use error::{HomescoutError, Result};
pub use predictor::{Prediction, Predictor};
