//! Mock implementation of [`dbot_core::Bot`] for integration tests.
//!
//! Records every outgoing call so tests can assert on what the chat would have received.

use async_trait::async_trait;
use dbot_core::{Bot, Chat, ChatAction, Result};
use std::sync::{Arc, Mutex};

/// One recorded outgoing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Html { chat_id: i64, html: String },
    Voice { chat_id: i64, content_ref: String, caption: String },
    Action { chat_id: i64, action: ChatAction },
    Menu { chat_id: i64, text: String, rows: Vec<Vec<String>> },
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Recorded calls except chat actions.
    pub fn deliveries(&self) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| !matches!(s, Sent::Action { .. }))
            .collect()
    }

    pub fn last_text(&self) -> Option<String> {
        self.sent().into_iter().rev().find_map(|s| match s {
            Sent::Text { text, .. } => Some(text),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()> {
        self.record(Sent::Html {
            chat_id: chat.id,
            html: html.to_string(),
        });
        Ok(())
    }

    async fn send_voice(&self, chat: &Chat, content_ref: &str, caption: &str) -> Result<()> {
        self.record(Sent::Voice {
            chat_id: chat.id,
            content_ref: content_ref.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }

    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> Result<()> {
        self.record(Sent::Action {
            chat_id: chat.id,
            action,
        });
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, rows: &[Vec<String>]) -> Result<()> {
        self.record(Sent::Menu {
            chat_id: chat.id,
            text: text.to_string(),
            rows: rows.to_vec(),
        });
        Ok(())
    }
}
