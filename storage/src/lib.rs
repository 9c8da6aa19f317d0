//! Storage crate: jar content persistence and the store abstraction the selector runs against.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – ContentRecord, NewContent, MoodFilter, ContentStats
//! - [`content_store`] – ContentStore trait
//! - [`content_repo`] – ContentRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod content_repo;
mod content_store;
mod error;
mod models;
mod sqlite_pool;

pub use content_repo::ContentRepository;
pub use content_store::ContentStore;
pub use error::StorageError;
pub use models::{ContentBody, ContentRecord, ContentStats, MoodCount, MoodFilter, NewContent, ANY_MOOD};
pub use sqlite_pool::SqlitePoolManager;
