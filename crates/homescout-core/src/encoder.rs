//! One-hot feature encoding for the price model

use serde::Serialize;

use crate::columns::ColumnLayout;
use crate::error::{HomescoutError, Result};
use crate::models::{HouseType, PropertyQuery};

/// Fixed-width model input: area, bhk, then one-hot category slots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<f64> {
        self.0.get(slot).copied()
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Encode a query into the model's input vector
pub fn encode(layout: &ColumnLayout, query: &PropertyQuery) -> Result<FeatureVector> {
    encode_parts(
        layout,
        &query.location,
        query.house_type.column_name(),
        query.area_sqft,
        query.bhk,
    )
}

/// Encode raw form values into the model's input vector
///
/// Area and bhk are written as given; bounds are the input layer's concern.
/// Location and house type lookups are case-insensitive and fail with
/// `UnknownCategory` rather than leaving the one-hot region empty.
pub fn encode_parts(
    layout: &ColumnLayout,
    location: &str,
    house_type: &str,
    area_sqft: u32,
    bhk: u32,
) -> Result<FeatureVector> {
    let location_slot = category_slot(layout, Category::Location, location)?;
    let house_type_slot = category_slot(layout, Category::HouseType, house_type)?;

    let mut values = vec![0.0; layout.len()];
    values[0] = f64::from(area_sqft);
    values[1] = f64::from(bhk);
    values[location_slot] = 1.0;
    values[house_type_slot] = 1.0;

    Ok(FeatureVector(values))
}

#[derive(Debug, Clone, Copy)]
enum Category {
    Location,
    HouseType,
}

impl Category {
    fn label(self) -> &'static str {
        match self {
            Category::Location => "location",
            Category::HouseType => "house type",
        }
    }
}

fn category_slot(layout: &ColumnLayout, category: Category, value: &str) -> Result<usize> {
    let unknown = || HomescoutError::UnknownCategory {
        kind: category.label(),
        value: value.to_string(),
    };

    let slot = match category {
        Category::Location if layout.is_known_location(value) => layout.index_of(value),
        Category::Location => None,
        Category::HouseType => {
            let house_type: HouseType = value.parse().map_err(|_| unknown())?;
            layout.index_of(house_type.column_name())
        }
    };

    slot.ok_or_else(unknown)
}
