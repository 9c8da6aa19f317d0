//! Storage error types.
//!
//! Used by repository implementations and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Row with neither a content reference nor a text body.
    #[error("Invalid record {id}: no content reference and no text")]
    InvalidRecord { id: i64 },
}
