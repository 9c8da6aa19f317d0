//! Rotation selector: picks a random unseen item for a mood and resets the mood's pool once
//! every item in it has been delivered.

use rand::seq::IndexedRandom;
use std::sync::Arc;
use storage::{ContentBody, ContentStore, MoodFilter, StorageError};
use teloxide::utils::html;
use tokio::sync::Mutex;
use tracing::{info, instrument};

/// Captions attached to every delivery, one picked at random.
pub const CAPTIONS: [&str; 5] = [
    "For you. Always.",
    "He recorded this softly.",
    "Listen slowly 🌙",
    "Just a thought...",
    "Close your eyes.",
];

/// What to send for one selected item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryPayload {
    Audio { content_ref: String, caption: String },
    Text { body: String, caption: String },
}

impl DeliveryPayload {
    pub fn caption(&self) -> &str {
        match self {
            Self::Audio { caption, .. } | Self::Text { caption, .. } => caption,
        }
    }

    /// HTML message for a text payload, with body and caption escaped. None for audio.
    pub fn render_html(&self) -> Option<String> {
        match self {
            Self::Audio { .. } => None,
            Self::Text { body, caption } => Some(format!(
                "💌 {}\n\n<i>{}</i>",
                html::escape(body),
                html::escape(caption)
            )),
        }
    }
}

fn pick_caption() -> String {
    CAPTIONS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(CAPTIONS[0])
        .to_string()
}

/// Selects and marks items against an explicit store handle.
///
/// The whole pick → reset → retry → mark sequence holds one lock, so concurrent requests cannot
/// both reset the same pool or both deliver the same row.
pub struct RotationSelector {
    store: Arc<dyn ContentStore>,
    rotation: Mutex<()>,
}

impl RotationSelector {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            rotation: Mutex::new(()),
        }
    }

    /// Returns a payload for a random unused item in scope and marks it used.
    /// Returns Ok(None) when the scope has no items at all.
    #[instrument(skip(self), fields(mood = %filter))]
    pub async fn select_and_mark(
        &self,
        filter: &MoodFilter,
    ) -> Result<Option<DeliveryPayload>, StorageError> {
        let _rotation = self.rotation.lock().await;

        let record = match self.store.pick_random(filter, true).await? {
            Some(record) => record,
            None => {
                let reset = self.store.reset_used(filter).await?;
                info!(rows = reset, "Pool exhausted, rotation reset");
                match self.store.pick_random(filter, false).await? {
                    Some(record) => record,
                    None => {
                        info!("Jar is empty for this mood");
                        return Ok(None);
                    }
                }
            }
        };

        // Marked before the body is read so a broken row leaves the unused pool.
        let id = record.id;
        self.store.mark_used(id).await?;

        let caption = pick_caption();
        let payload = match record.into_body()? {
            ContentBody::Audio(content_ref) => DeliveryPayload::Audio {
                content_ref,
                caption,
            },
            ContentBody::Text(body) => DeliveryPayload::Text { body, caption },
        };
        info!(item_id = id, "Selected jar item");
        Ok(Some(payload))
    }
}
