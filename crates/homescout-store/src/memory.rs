//! In-memory search log for development and testing.
//!
//! This implementation uses `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. For production workloads, use the PostgreSQL backend.

use async_trait::async_trait;
use homescout_core::error::Result;
use homescout_core::models::{SearchId, SearchLogEntry, SearchRecord};
use std::sync::{Arc, RwLock};

use crate::ports::SearchLogStore;

#[derive(Debug, Default)]
struct MemoryLog {
    rows: Vec<SearchRecord>,
    next_id: i64,
}

/// In-memory implementation of SearchLogStore
#[derive(Debug, Clone, Default)]
pub struct MemorySearchLog {
    inner: Arc<RwLock<MemoryLog>>,
}

impl MemorySearchLog {
    /// Create a new, empty in-memory search log
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SearchLogStore for MemorySearchLog {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn append(&self, entry: &SearchLogEntry) -> Result<SearchId> {
        let mut log = self.inner.write().unwrap();
        log.next_id += 1;

        let id = SearchId(log.next_id);
        log.rows.push(SearchRecord { id, entry: entry.clone() });
        Ok(id)
    }

    async fn read_all(&self) -> Result<Vec<SearchRecord>> {
        Ok(self.inner.read().unwrap().rows.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.inner.read().unwrap().rows.len())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
