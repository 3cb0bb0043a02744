use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PriceEstimate, PropertyQuery};

/// Surrogate key assigned by the search log store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SearchId(pub i64);

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One completed prediction, as written to the `searches` table
///
/// Entries are append-only: the store never updates or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchLogEntry {
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub house_type: String,
    pub area_sqft: u32,
    pub bhk: u32,
    pub predicted_price_lakhs: f64,
}

impl SearchLogEntry {
    /// Build the log entry for a successful prediction
    ///
    /// The timestamp is truncated to microseconds, the precision the
    /// `searches` table stores, so a written entry reads back equal.
    pub fn from_prediction(
        query: &PropertyQuery,
        estimate: PriceEstimate,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp: timestamp.trunc_subsecs(6),
            location: query.location.clone(),
            house_type: query.house_type.display_name().to_string(),
            area_sqft: query.area_sqft,
            bhk: query.bhk,
            predicted_price_lakhs: estimate.lakhs(),
        }
    }
}

/// A stored search log row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: SearchId,
    #[serde(flatten)]
    pub entry: SearchLogEntry,
}
