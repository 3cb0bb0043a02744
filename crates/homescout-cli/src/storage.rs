use crate::cli::StorageBackend;
use anyhow::{anyhow, Context, Result};
use homescout_core::config::redact_password;
use homescout_store::memory::MemorySearchLog;
use homescout_store::ports::SearchLogStore;
use homescout_store::postgres::{PostgresConfig, PostgresStore};
use std::sync::Arc;

pub struct Storage {
    pub search_log: Arc<dyn SearchLogStore>,
}

impl Storage {
    /// Open the search log and make sure its schema exists
    pub async fn new(backend: StorageBackend, database_url: Option<&str>) -> Result<Self> {
        let storage = match backend {
            StorageBackend::Memory => Self::new_memory(),
            StorageBackend::Postgres => Self::new_postgres(database_url).await?,
        };

        storage
            .search_log
            .ensure_schema()
            .await
            .context("Failed to prepare the searches table")?;

        Ok(storage)
    }

    /// Create an in-memory search log
    fn new_memory() -> Self {
        Self {
            search_log: Arc::new(MemorySearchLog::new()),
        }
    }

    /// Create the PostgreSQL search log
    async fn new_postgres(database_url: Option<&str>) -> Result<Self> {
        let store = connect_postgres(database_url).await?;
        Ok(Self {
            search_log: Arc::new(store),
        })
    }

    /// In-memory logs start empty on every invocation
    pub fn is_ephemeral(&self) -> bool {
        self.search_log.backend() == "memory"
    }
}

/// Connect to PostgreSQL using the configured URL, falling back to DATABASE_URL
pub async fn connect_postgres(database_url: Option<&str>) -> Result<PostgresStore> {
    let config = match database_url {
        Some(url) => PostgresConfig::from_database_url(url),
        None => PostgresConfig::from_env(),
    }
    .context("Failed to load PostgreSQL configuration. Set DATABASE_URL environment variable.")?;

    PostgresStore::new(config.clone()).await.map_err(|e| {
        anyhow!(
            "Failed to connect to PostgreSQL\n\n\
                Database: {}\n\n\
                Remediation:\n\
                  1. Ensure PostgreSQL is running\n\
                  2. Check DATABASE_URL environment variable\n\
                  3. Verify credentials and database exists\n\n\
                Error: {}",
            redact_password(&config.database_url),
            e
        )
    })
}
