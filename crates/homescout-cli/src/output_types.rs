use homescout_core::models::{ListingLink, SearchRecord};
use serde::Serialize;
use tabled::Tabled;

/// Output for predict command
#[derive(Debug, Serialize)]
pub struct PredictOutput {
    pub location: String,
    pub house_type: String,
    pub area_sqft: u32,
    pub bhk: u32,
    pub price_rupees: f64,
    pub price_lakhs: f64,
    pub display: String,
    pub listings: Vec<ListingLink>,
    pub logged: bool,
    pub storage: &'static str,
}

/// Output for options command
#[derive(Debug, Serialize)]
pub struct OptionsOutput {
    pub locations: Vec<String>,
    pub house_types: Vec<String>,
    pub area_sqft: RangeOutput,
    pub bhk: RangeOutput,
}

#[derive(Debug, Serialize)]
pub struct RangeOutput {
    pub min: u32,
    pub max: u32,
}

/// Output for db stats command
#[derive(Debug, Serialize)]
pub struct DbStatsOutput {
    pub backend: &'static str,
    pub table_exists: bool,
    pub searches: usize,
}

/// Table row for listing links
#[derive(Tabled)]
pub struct ListingRow {
    #[tabled(rename = "Site")]
    pub site: String,
    #[tabled(rename = "Search")]
    pub caption: String,
    #[tabled(rename = "URL")]
    pub url: String,
}

impl From<&ListingLink> for ListingRow {
    fn from(link: &ListingLink) -> Self {
        Self {
            site: link.site_name.clone(),
            caption: link.caption.clone(),
            url: link.url.clone(),
        }
    }
}

/// Table row for raw search log entries
#[derive(Tabled)]
pub struct SearchRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Time (UTC)")]
    pub timestamp: String,
    #[tabled(rename = "Location")]
    pub location: String,
    #[tabled(rename = "Type")]
    pub house_type: String,
    #[tabled(rename = "Area (sqft)")]
    pub area_sqft: u32,
    #[tabled(rename = "BHK")]
    pub bhk: u32,
    #[tabled(rename = "Price (Lakhs)")]
    pub price_lakhs: String,
}

impl From<&SearchRecord> for SearchRow {
    fn from(record: &SearchRecord) -> Self {
        Self {
            id: record.id.0,
            timestamp: record.entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            location: record.entry.location.clone(),
            house_type: record.entry.house_type.clone(),
            area_sqft: record.entry.area_sqft,
            bhk: record.entry.bhk,
            price_lakhs: format!("{:.2}", record.entry.predicted_price_lakhs),
        }
    }
}
