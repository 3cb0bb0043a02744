use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{HomescoutError, Result};

/// Area bounds offered by the input form, in square feet
pub const AREA_RANGE: RangeInclusive<u32> = 300..=5000;

/// Bedroom counts offered by the input form
pub const BHK_RANGE: RangeInclusive<u32> = 1..=5;

/// Kind of property the model was trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseType {
    Apartment,
    IndependentFloor,
    IndependentHouse,
    StudioApartment,
    Villa,
}

impl HouseType {
    /// All house types, alphabetically by column name
    pub const ALL: [HouseType; 5] = [
        HouseType::Apartment,
        HouseType::IndependentFloor,
        HouseType::IndependentHouse,
        HouseType::StudioApartment,
        HouseType::Villa,
    ];

    /// Canonical lowercase name used in the column configuration
    pub fn column_name(&self) -> &'static str {
        match self {
            HouseType::Apartment => "apartment",
            HouseType::IndependentFloor => "independent floor",
            HouseType::IndependentHouse => "independent house",
            HouseType::StudioApartment => "studio apartment",
            HouseType::Villa => "villa",
        }
    }

    /// Title-cased name shown to users and written to the search log
    pub fn display_name(&self) -> &'static str {
        match self {
            HouseType::Apartment => "Apartment",
            HouseType::IndependentFloor => "Independent Floor",
            HouseType::IndependentHouse => "Independent House",
            HouseType::StudioApartment => "Studio Apartment",
            HouseType::Villa => "Villa",
        }
    }
}

impl fmt::Display for HouseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for HouseType {
    type Err = HomescoutError;

    /// Accepts "Independent House", "independent house" and "independent_house"
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', " ");
        HouseType::ALL
            .into_iter()
            .find(|ht| ht.column_name() == normalized)
            .ok_or_else(|| HomescoutError::UnknownCategory {
                kind: "house type",
                value: s.to_string(),
            })
    }
}

/// One user query from the input form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyQuery {
    pub location: String,
    pub house_type: HouseType,
    pub area_sqft: u32,
    pub bhk: u32,
}

impl PropertyQuery {
    pub fn new(location: impl Into<String>, house_type: HouseType, area_sqft: u32, bhk: u32) -> Self {
        Self {
            location: location.into(),
            house_type,
            area_sqft,
            bhk,
        }
    }

    /// Enforce the bounds advertised by the input form
    pub fn validate(&self) -> Result<()> {
        if self.location.trim().is_empty() {
            return Err(HomescoutError::InvalidInput {
                field: "location",
                reason: "cannot be empty".to_string(),
            });
        }

        if !AREA_RANGE.contains(&self.area_sqft) {
            return Err(HomescoutError::InvalidInput {
                field: "area_sqft",
                reason: format!(
                    "{} is outside {}..={}",
                    self.area_sqft,
                    AREA_RANGE.start(),
                    AREA_RANGE.end()
                ),
            });
        }

        if !BHK_RANGE.contains(&self.bhk) {
            return Err(HomescoutError::InvalidInput {
                field: "bhk",
                reason: format!(
                    "{} is outside {}..={}",
                    self.bhk,
                    BHK_RANGE.start(),
                    BHK_RANGE.end()
                ),
            });
        }

        Ok(())
    }
}
