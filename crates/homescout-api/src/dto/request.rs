use homescout_core::error::Result;
use homescout_core::models::{HouseType, PropertyQuery};
use serde::Deserialize;

/// Prediction request body
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub location: String,
    /// Display name ("Independent House") or snake_case ("independent_house")
    pub house_type: String,
    pub area_sqft: u32,
    #[serde(alias = "bedrooms")]
    pub bhk: u32,
}

impl PredictRequest {
    pub fn to_query(&self) -> Result<PropertyQuery> {
        let house_type: HouseType = self.house_type.parse()?;
        Ok(PropertyQuery::new(self.location.trim(), house_type, self.area_sqft, self.bhk))
    }
}

/// Query string for the listings endpoint
#[derive(Debug, Deserialize)]
pub struct ListingsQuery {
    pub location: String,
    pub bhk: u32,
}
