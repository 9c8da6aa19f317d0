//! Bot abstraction for delivering replies and content.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide and tests substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Status shown to the chat while content is being prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
    UploadVoice,
}

/// Abstraction for sending messages, voice notes and menus. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a message rendered as HTML. Callers must escape untrusted parts.
    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()>;
    /// Sends a previously stored voice note by its transport reference, with a caption.
    async fn send_voice(&self, chat: &Chat, content_ref: &str, caption: &str) -> Result<()>;
    /// Shows a transient status (typing, uploading) in the chat.
    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> Result<()>;
    /// Sends text with a reply keyboard; each inner vec is one row of button labels.
    async fn send_menu(&self, chat: &Chat, text: &str, rows: &[Vec<String>]) -> Result<()>;

    /// Sends a plain reply into the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
