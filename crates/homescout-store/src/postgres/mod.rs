//! PostgreSQL storage adapter implementation

pub mod config;
pub mod schema;
mod searches;

pub use config::{ConfigError, PoolConfig, PostgresConfig};

use homescout_core::error::{HomescoutError, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};

/// PostgreSQL storage adapter
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given configuration
    pub async fn new(config: PostgresConfig) -> Result<Self> {
        config.validate().map_err(|e| HomescoutError::ConfigInvalid {
            key: "database_url".to_string(),
            reason: e.to_string(),
        })?;

        let pool = PgPoolOptions::new()
            .min_connections(config.pool.min_connections)
            .max_connections(config.pool.max_connections)
            .acquire_timeout(config.pool.acquire_timeout)
            .idle_timeout(config.pool.idle_timeout)
            .connect(&config.database_url)
            .await
            .map_err(|e| HomescoutError::Persistence(format!("Failed to connect to database: {}", e)))?;

        sqlx::query("SELECT 1")
            .fetch_one(&pool)
            .await
            .map_err(|e| HomescoutError::Persistence(format!("Connection test failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL store and make sure the `searches` table exists
    pub async fn with_schema(config: PostgresConfig) -> Result<Self> {
        let store = Self::new(config).await?;
        schema::ensure_schema(&store.pool)
            .await
            .map_err(|e| HomescoutError::Persistence(format!("Failed to create schema: {}", e)))?;
        Ok(store)
    }

    /// Whether the `searches` table exists yet
    pub async fn has_schema(&self) -> Result<bool> {
        schema::table_exists(&self.pool)
            .await
            .map_err(|e| HomescoutError::Persistence(format!("Failed to inspect schema: {}", e)))
    }
}
