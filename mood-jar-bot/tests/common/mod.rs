//! Shared helpers for mood-jar-bot integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use dbot_core::{Chat, Message, MessageKind, User};
use storage::ContentRepository;
use tempfile::TempDir;

pub const ADMIN_ID: i64 = 1384677187;
pub const RECIPIENT_ID: i64 = 987654321;
pub const STRANGER_ID: i64 = 42;
pub const CHAT_ID: i64 = 555;

/// Repository on a fresh SQLite file; keep the TempDir alive for the test's duration.
pub async fn temp_repo() -> (TempDir, ContentRepository) {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}", dir.path().join("jar.db").display());
    let repo = ContentRepository::new(&url)
        .await
        .expect("Failed to create repository");
    (dir, repo)
}

fn base_message(user_id: i64, kind: MessageKind, content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: user_id,
            username: None,
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        kind,
        voice_file_id: None,
        created_at: Utc::now(),
    }
}

pub fn text_message(user_id: i64, content: &str) -> Message {
    base_message(user_id, MessageKind::Text, content)
}

pub fn voice_message(user_id: i64, file_id: &str) -> Message {
    let mut message = base_message(user_id, MessageKind::Voice, "");
    message.voice_file_id = Some(file_id.to_string());
    message
}

pub fn sticker_message(user_id: i64) -> Message {
    base_message(user_id, MessageKind::Other, "")
}
