//! Column configuration for the trained price model
//!
//! The model was fit on a fixed column order: `area`, `bhk`, then every
//! location and house type name in alphabetical order. [`ColumnLayout`] is
//! built once from `columns.json` and answers name → slot lookups.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{HomescoutError, Result};
use crate::models::HouseType;

/// Name of the area column (slot 0)
pub const AREA_COLUMN: &str = "area";

/// Name of the bedroom column (slot 1)
pub const BHK_COLUMN: &str = "bhk";

/// On-disk shape of `columns.json`
#[derive(Debug, Serialize, Deserialize)]
struct ColumnFile {
    data_columns: Vec<String>,
}

/// Validated name → index table for the model's input columns
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    locations: Vec<String>,
}

impl ColumnLayout {
    /// Build a layout from an ordered list of column names
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns: Vec<String> = columns.into_iter().map(|c| normalize(c.as_ref())).collect();

        if columns.len() < 2 || columns[0] != AREA_COLUMN || columns[1] != BHK_COLUMN {
            return Err(HomescoutError::ConfigInvalid {
                key: "data_columns".to_string(),
                reason: format!(
                    "first two columns must be '{}' and '{}'",
                    AREA_COLUMN, BHK_COLUMN
                ),
            });
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (slot, name) in columns.iter().enumerate() {
            if name.is_empty() {
                return Err(HomescoutError::ConfigInvalid {
                    key: "data_columns".to_string(),
                    reason: format!("column {} has an empty name", slot),
                });
            }
            if index.insert(name.clone(), slot).is_some() {
                return Err(HomescoutError::ConfigInvalid {
                    key: "data_columns".to_string(),
                    reason: format!("duplicate column '{}'", name),
                });
            }
        }

        for house_type in HouseType::ALL {
            if !index.contains_key(house_type.column_name()) {
                return Err(HomescoutError::ConfigInvalid {
                    key: "data_columns".to_string(),
                    reason: format!("missing house type column '{}'", house_type.column_name()),
                });
            }
        }

        let mut locations: Vec<String> = columns[2..]
            .iter()
            .filter(|name| !HouseType::ALL.iter().any(|ht| ht.column_name() == name.as_str()))
            .cloned()
            .collect();
        locations.sort();

        if locations.is_empty() {
            return Err(HomescoutError::ConfigInvalid {
                key: "data_columns".to_string(),
                reason: "no location columns".to_string(),
            });
        }

        Ok(Self { columns, index, locations })
    }

    /// Parse the contents of a `columns.json` file
    pub fn from_json(content: &str) -> Result<Self> {
        let file: ColumnFile = serde_json::from_str(content).map_err(|e| {
            HomescoutError::ConfigInvalid {
                key: "data_columns".to_string(),
                reason: format!("Failed to parse column configuration: {}", e),
            }
        })?;
        Self::from_columns(file.data_columns)
    }

    /// Load the layout from a `columns.json` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(HomescoutError::ArtifactNotFound { path: path.to_path_buf() });
        }

        let content = fs::read_to_string(path)?;
        let layout = Self::from_json(&content)?;

        tracing::debug!(
            path = %path.display(),
            columns = layout.len(),
            locations = layout.locations.len(),
            "Loaded column layout"
        );

        Ok(layout)
    }

    /// Total number of model input columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in model order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Slot of a column, ignoring case and surrounding whitespace
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(&normalize(name)).copied()
    }

    /// Known location names, alphabetically
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Known house types, alphabetically
    pub fn house_types(&self) -> &'static [HouseType] {
        &HouseType::ALL
    }

    /// Whether a location is one of the trained columns
    pub fn is_known_location(&self, location: &str) -> bool {
        self.locations.binary_search(&normalize(location)).is_ok()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
