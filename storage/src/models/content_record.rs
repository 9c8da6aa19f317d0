//! Jar item model for persistence.
//!
//! Maps to the `jar_items` table and is used by ContentRepository.

use crate::error::StorageError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContentRecord {
    pub id: i64,
    /// Transport reference to an uploaded voice note.
    pub content_ref: Option<String>,
    pub mood: String,
    pub text: Option<String>,
    pub used: bool,
}

/// What an item delivers: exactly one of a voice reference or a text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBody {
    Audio(String),
    Text(String),
}

impl ContentRecord {
    /// Resolves the body. A content reference wins if a row somehow carries both.
    pub fn into_body(self) -> Result<ContentBody, StorageError> {
        match (self.content_ref, self.text) {
            (Some(content_ref), _) => Ok(ContentBody::Audio(content_ref)),
            (None, Some(text)) => Ok(ContentBody::Text(text)),
            (None, None) => Err(StorageError::InvalidRecord { id: self.id }),
        }
    }
}

/// A new item to insert. One variant per upload flow, so an item always has exactly one body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewContent {
    Audio { content_ref: String, mood: String },
    Text { text: String, mood: String },
}

impl NewContent {
    pub fn mood(&self) -> &str {
        match self {
            Self::Audio { mood, .. } | Self::Text { mood, .. } => mood,
        }
    }

    pub(crate) fn columns(&self) -> (Option<&str>, Option<&str>) {
        match self {
            Self::Audio { content_ref, .. } => (Some(content_ref.as_str()), None),
            Self::Text { text, .. } => (None, Some(text.as_str())),
        }
    }
}
