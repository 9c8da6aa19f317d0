//! Mood scope for selection and reset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel mood meaning "no filter". Never a real tag when used as a filter.
pub const ANY_MOOD: &str = "any";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodFilter {
    Any,
    Tag(String),
}

impl MoodFilter {
    /// `"any"` maps to [`MoodFilter::Any`]; every other string is a tag.
    pub fn parse(mood: &str) -> Self {
        if mood == ANY_MOOD {
            Self::Any
        } else {
            Self::Tag(mood.to_string())
        }
    }

    /// The tag to filter on, or None for [`MoodFilter::Any`].
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Tag(tag) => Some(tag.as_str()),
        }
    }
}

impl fmt::Display for MoodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().unwrap_or(ANY_MOOD))
    }
}
