//! Aggregate counts over the jar.
//!
//! Returned by ContentStore::stats.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCount {
    pub mood: String,
    pub total: i64,
    pub used: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    /// One entry per mood, sorted by mood.
    pub moods: Vec<MoodCount>,
}

impl ContentStats {
    pub fn total(&self) -> i64 {
        self.moods.iter().map(|m| m.total).sum()
    }

    pub fn used(&self) -> i64 {
        self.moods.iter().map(|m| m.used).sum()
    }

    pub fn unused(&self) -> i64 {
        self.total() - self.used()
    }
}
