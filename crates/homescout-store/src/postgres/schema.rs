//! Schema for the search log
//!
//! There is exactly one table and no migration history; creation is
//! idempotent so it runs on every start.

use sqlx::PgPool;

/// Name of the search log table
pub const SEARCHES_TABLE: &str = "searches";

const CREATE_SEARCHES: &str = r#"
    CREATE TABLE IF NOT EXISTS searches (
        id SERIAL PRIMARY KEY,
        timestamp TIMESTAMP,
        location VARCHAR(255),
        house_type VARCHAR(255),
        area_sqft INT,
        bhk INT,
        predicted_price_lakhs FLOAT
    )
"#;

/// Create the `searches` table if absent
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_SEARCHES).execute(pool).await?;
    Ok(())
}

/// Whether the `searches` table exists
pub async fn table_exists(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let exists: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = current_schema() AND table_name = $1
        )
        "#,
    )
    .bind(SEARCHES_TABLE)
    .fetch_one(pool)
    .await?;

    Ok(exists.0)
}
