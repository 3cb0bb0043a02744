//! Aggregate statistics over the search log
//!
//! Everything is recomputed from a full snapshot on each call.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::SearchRecord;

/// Number of entries in the ranked location lists
pub const TOP_N: usize = 10;

/// Result of aggregating the search log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Insights {
    /// The log holds no rows yet
    NoData,
    #[serde(rename = "ok")]
    Summary(InsightsSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsSummary {
    pub total_searches: usize,
    pub most_popular_location: String,
    pub average_price_lakhs: f64,
    pub top_locations: Vec<LocationCount>,
    pub average_price_by_location: Vec<LocationPrice>,
    pub bhk_distribution: Vec<BhkShare>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCount {
    pub location: String,
    pub searches: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPrice {
    pub location: String,
    pub average_price_lakhs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BhkShare {
    pub bhk: u32,
    pub searches: usize,
    pub percent: f64,
}

#[derive(Default)]
struct LocationStats {
    searches: usize,
    price_total: f64,
}

/// Compute dashboard statistics from every logged search
pub fn compute(records: &[SearchRecord]) -> Insights {
    if records.is_empty() {
        return Insights::NoData;
    }

    let total = records.len();
    let mut by_location: BTreeMap<String, LocationStats> = BTreeMap::new();
    let mut by_bhk: BTreeMap<u32, usize> = BTreeMap::new();
    let mut price_total = 0.0;

    for record in records {
        let entry = &record.entry;
        let stats = by_location.entry(title_case(&entry.location)).or_default();
        stats.searches += 1;
        stats.price_total += entry.predicted_price_lakhs;

        *by_bhk.entry(entry.bhk).or_default() += 1;
        price_total += entry.predicted_price_lakhs;
    }

    let mut top_locations: Vec<LocationCount> = by_location
        .iter()
        .map(|(location, stats)| LocationCount {
            location: location.clone(),
            searches: stats.searches,
        })
        .collect();
    // BTreeMap iteration is alphabetical, so a stable sort keeps ties alphabetical
    top_locations.sort_by(|a, b| b.searches.cmp(&a.searches));

    let most_popular_location = top_locations[0].location.clone();
    top_locations.truncate(TOP_N);

    let mut average_price_by_location: Vec<LocationPrice> = by_location
        .iter()
        .map(|(location, stats)| LocationPrice {
            location: location.clone(),
            average_price_lakhs: stats.price_total / stats.searches as f64,
        })
        .collect();
    average_price_by_location.sort_by(|a, b| {
        b.average_price_lakhs
            .partial_cmp(&a.average_price_lakhs)
            .unwrap_or(Ordering::Equal)
    });
    average_price_by_location.truncate(TOP_N);

    let bhk_distribution = by_bhk
        .into_iter()
        .map(|(bhk, searches)| BhkShare {
            bhk,
            searches,
            percent: searches as f64 * 100.0 / total as f64,
        })
        .collect();

    Insights::Summary(InsightsSummary {
        total_searches: total,
        most_popular_location,
        average_price_lakhs: price_total / total as f64,
        top_locations,
        average_price_by_location,
        bhk_distribution,
    })
}

/// "koregaon PARK" -> "Koregaon Park"
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for ch in value.trim().chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SearchId, SearchLogEntry};
    use chrono::Utc;

    fn record(id: i64, location: &str, bhk: u32, price: f64) -> SearchRecord {
        SearchRecord {
            id: SearchId(id),
            entry: SearchLogEntry {
                timestamp: Utc::now(),
                location: location.to_string(),
                house_type: "Apartment".to_string(),
                area_sqft: 1000,
                bhk,
                predicted_price_lakhs: price,
            },
        }
    }

    fn summary(records: &[SearchRecord]) -> InsightsSummary {
        match compute(records) {
            Insights::Summary(summary) => summary,
            Insights::NoData => panic!("Expected a summary"),
        }
    }

    #[test]
    fn test_empty_log_is_no_data() {
        let insights = compute(&[]);
        assert_eq!(insights, Insights::NoData);

        let json = serde_json::to_value(&insights).unwrap();
        assert_eq!(json["status"], "no_data");
    }

    #[test]
    fn test_summary_metrics() {
        let records = vec![
            record(1, "Wakad", 2, 60.0),
            record(2, "wakad", 3, 80.0),
            record(3, "Baner", 2, 100.0),
            record(4, "Koregaon Park", 4, 200.0),
        ];
        let summary = summary(&records);

        assert_eq!(summary.total_searches, 4);
        assert_eq!(summary.most_popular_location, "Wakad");
        assert_eq!(summary.average_price_lakhs, 110.0);
        assert_eq!(
            summary.top_locations,
            vec![
                LocationCount { location: "Wakad".to_string(), searches: 2 },
                LocationCount { location: "Baner".to_string(), searches: 1 },
                LocationCount { location: "Koregaon Park".to_string(), searches: 1 },
            ]
        );

        let ranked: Vec<(&str, f64)> = summary
            .average_price_by_location
            .iter()
            .map(|p| (p.location.as_str(), p.average_price_lakhs))
            .collect();
        assert_eq!(ranked, vec![("Koregaon Park", 200.0), ("Baner", 100.0), ("Wakad", 70.0)]);

        assert_eq!(summary.bhk_distribution.len(), 3);
        assert_eq!(summary.bhk_distribution[0].bhk, 2);
        assert_eq!(summary.bhk_distribution[0].searches, 2);
        assert_eq!(summary.bhk_distribution[0].percent, 50.0);
        assert_eq!(summary.bhk_distribution[2].bhk, 4);
    }

    #[test]
    fn test_mode_ties_break_alphabetically() {
        let records = vec![record(1, "Wakad", 2, 50.0), record(2, "Aundh", 2, 90.0)];
        assert_eq!(summary(&records).most_popular_location, "Aundh");
    }

    #[test]
    fn test_rankings_truncate_to_top_n() {
        let records: Vec<SearchRecord> = (0..15)
            .map(|i| record(i, &format!("Area {}", i), 1, i as f64))
            .collect();
        let summary = summary(&records);

        assert_eq!(summary.top_locations.len(), TOP_N);
        assert_eq!(summary.average_price_by_location.len(), TOP_N);
        assert_eq!(summary.average_price_by_location[0].location, "Area 14");
        assert_eq!(summary.total_searches, 15);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("koregaon PARK"), "Koregaon Park");
        assert_eq!(title_case(" wakad "), "Wakad");
        assert_eq!(title_case("pimple-saudagar"), "Pimple-Saudagar");
    }
}
