//! SearchLogStore implementation for PostgreSQL

use async_trait::async_trait;
use chrono::NaiveDateTime;
use homescout_core::error::{HomescoutError, Result};
use homescout_core::models::{SearchId, SearchLogEntry, SearchRecord};
use sqlx::postgres::PgRow;
use sqlx::Row;

use super::{schema, PostgresStore};
use crate::ports::SearchLogStore;

/// Counts only the rows `read_all` can decode
const COUNT_COMPLETE_ROWS: &str = "SELECT COUNT(*) FROM searches \
    WHERE timestamp IS NOT NULL \
    AND location IS NOT NULL \
    AND house_type IS NOT NULL \
    AND area_sqft >= 0 \
    AND bhk >= 0 \
    AND predicted_price_lakhs IS NOT NULL";

#[async_trait]
impl SearchLogStore for PostgresStore {
    async fn ensure_schema(&self) -> Result<()> {
        schema::ensure_schema(&self.pool)
            .await
            .map_err(|e| HomescoutError::Persistence(format!("Failed to create schema: {}", e)))
    }

    async fn append(&self, entry: &SearchLogEntry) -> Result<SearchId> {
        let area_sqft = to_int("area_sqft", entry.area_sqft)?;
        let bhk = to_int("bhk", entry.bhk)?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO searches (timestamp, location, house_type, area_sqft, bhk, predicted_price_lakhs)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(entry.timestamp.naive_utc())
        .bind(&entry.location)
        .bind(&entry.house_type)
        .bind(area_sqft)
        .bind(bhk)
        .bind(entry.predicted_price_lakhs)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| HomescoutError::Persistence(format!("Failed to append search: {}", e)))?;

        Ok(SearchId(i64::from(id)))
    }

    async fn read_all(&self) -> Result<Vec<SearchRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, timestamp, location, house_type, area_sqft, bhk, predicted_price_lakhs
            FROM searches
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| HomescoutError::Persistence(format!("Failed to read searches: {}", e)))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            match row_to_record(row)? {
                Some(record) => records.push(record),
                None => {
                    let id: i32 = row.get("id");
                    tracing::warn!(id, "Skipping search row with missing or negative fields");
                }
            }
        }

        Ok(records)
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar(COUNT_COMPLETE_ROWS)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| HomescoutError::Persistence(format!("Failed to count searches: {}", e)))?;

        Ok(count as usize)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

fn to_int(field: &'static str, value: u32) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| HomescoutError::Persistence(format!("{} value {} does not fit in INT", field, value)))
}

/// The table has no NOT NULL constraints; rows with gaps are skipped
fn row_to_record(row: &PgRow) -> Result<Option<SearchRecord>> {
    let decode = |e: sqlx::Error| HomescoutError::Persistence(format!("Failed to decode search row: {}", e));

    let id: i32 = row.try_get("id").map_err(decode)?;
    let entry = entry_from_columns(
        row.try_get("timestamp").map_err(decode)?,
        row.try_get("location").map_err(decode)?,
        row.try_get("house_type").map_err(decode)?,
        row.try_get("area_sqft").map_err(decode)?,
        row.try_get("bhk").map_err(decode)?,
        row.try_get("predicted_price_lakhs").map_err(decode)?,
    );

    Ok(entry.map(|entry| SearchRecord {
        id: SearchId(i64::from(id)),
        entry,
    }))
}

/// Negative counts are treated like missing values
fn entry_from_columns(
    timestamp: Option<NaiveDateTime>,
    location: Option<String>,
    house_type: Option<String>,
    area_sqft: Option<i32>,
    bhk: Option<i32>,
    price: Option<f64>,
) -> Option<SearchLogEntry> {
    Some(SearchLogEntry {
        timestamp: timestamp?.and_utc(),
        location: location?,
        house_type: house_type?,
        area_sqft: u32::try_from(area_sqft?).ok()?,
        bhk: u32::try_from(bhk?).ok()?,
        predicted_price_lakhs: price?,
    })
}
