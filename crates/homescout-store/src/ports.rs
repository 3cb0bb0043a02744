use async_trait::async_trait;
use homescout_core::error::Result;
use homescout_core::models::{SearchId, SearchLogEntry, SearchRecord};

/// Port for the append-only search log
///
/// Failures surface as `HomescoutError::Persistence`.
#[async_trait]
pub trait SearchLogStore: Send + Sync {
    /// Create the `searches` table if it does not exist; safe to call on every start
    async fn ensure_schema(&self) -> Result<()>;

    /// Append one entry and return its assigned id
    async fn append(&self, entry: &SearchLogEntry) -> Result<SearchId>;

    /// Every stored row, in insertion order
    async fn read_all(&self) -> Result<Vec<SearchRecord>>;

    /// Number of stored rows
    async fn count(&self) -> Result<usize> {
        Ok(self.read_all().await?.len())
    }

    /// Short backend name for logs and diagnostics
    fn backend(&self) -> &'static str;
}
