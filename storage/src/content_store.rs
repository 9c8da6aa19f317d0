use crate::error::StorageError;
use crate::models::{ContentRecord, ContentStats, MoodFilter, NewContent};
use async_trait::async_trait;

/// Row-level operations over the jar. Each call is a single committed statement.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Inserts a new unused item and returns its id.
    async fn insert(&self, content: &NewContent) -> Result<i64, StorageError>;
    /// Picks one item in scope uniformly at random; with `only_unused`, used items are skipped.
    async fn pick_random(
        &self,
        filter: &MoodFilter,
        only_unused: bool,
    ) -> Result<Option<ContentRecord>, StorageError>;
    /// Clears the used flag for every item in scope. Returns rows affected.
    async fn reset_used(&self, filter: &MoodFilter) -> Result<u64, StorageError>;
    async fn mark_used(&self, id: i64) -> Result<(), StorageError>;
    async fn stats(&self) -> Result<ContentStats, StorageError>;
}
