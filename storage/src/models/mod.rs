mod content_record;
mod content_stats;
mod mood_filter;

pub use content_record::{ContentBody, ContentRecord, NewContent};
pub use content_stats::{ContentStats, MoodCount};
pub use mood_filter::{MoodFilter, ANY_MOOD};
