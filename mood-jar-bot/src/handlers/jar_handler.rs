//! Jar command handler: uploads, text inserts, menu, stats, and mood deliveries.

use async_trait::async_trait;
use dbot_core::{Bot, DbotError, Handler, HandlerResponse, Message, MessageKind, Result};
use std::sync::Arc;
use storage::{ContentStore, MoodFilter, NewContent, StorageError};
use tracing::{error, info, instrument};

use crate::access::{AccessConfig, Role};
use crate::command::{Command, MENU_ROWS};
use crate::delivery::Delivery;
use crate::selector::RotationSelector;
use crate::sessions::UploadSessions;

pub const NOT_FOUND_MESSAGE: &str = "He hasn’t filled this jar yet 💭";
pub const NOT_VOICE_MESSAGE: &str = "❌ That wasn't a voice note. Cancelled.";
pub const ADDTEXT_USAGE: &str = "Usage: /addtext <mood> <shayari>";
pub const MENU_PROMPT: &str = "How are you feeling right now? 🌙";

fn storage_error(e: StorageError) -> DbotError {
    error!(error = %e, "Jar storage failed");
    DbotError::Database(e.to_string())
}

/// Terminal handler for the jar bot. Expects [`crate::AuthHandler`] earlier in the chain but
/// re-checks roles itself so admin-only commands stay admin-only.
pub struct JarHandler {
    access: AccessConfig,
    store: Arc<dyn ContentStore>,
    selector: RotationSelector,
    delivery: Delivery,
    sessions: UploadSessions,
    bot: Arc<dyn Bot>,
}

impl JarHandler {
    pub fn new(
        access: AccessConfig,
        store: Arc<dyn ContentStore>,
        bot: Arc<dyn Bot>,
        delivery: Delivery,
    ) -> Self {
        Self {
            access,
            selector: RotationSelector::new(store.clone()),
            store,
            delivery,
            sessions: UploadSessions::new(),
            bot,
        }
    }

    async fn reply(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }

    async fn finish_upload(&self, message: &Message, mood: String) -> Result<HandlerResponse> {
        let Some(file_id) = message.voice() else {
            info!(user_id = message.user.id, "Upload cancelled, not a voice note");
            return self.reply(message, NOT_VOICE_MESSAGE.to_string()).await;
        };

        let content = NewContent::Audio {
            content_ref: file_id.to_string(),
            mood,
        };
        self.store.insert(&content).await.map_err(storage_error)?;
        self.reply(message, format!("✨ Voice saved as '{}'.", content.mood()))
            .await
    }

    async fn add_text(&self, message: &Message, mood: String, text: String) -> Result<HandlerResponse> {
        let content = NewContent::Text { text, mood };
        self.store.insert(&content).await.map_err(storage_error)?;
        self.reply(message, format!("📝 Text saved as '{}'.", content.mood()))
            .await
    }

    async fn deliver(&self, message: &Message, filter: &MoodFilter) -> Result<HandlerResponse> {
        match self
            .selector
            .select_and_mark(filter)
            .await
            .map_err(storage_error)?
        {
            Some(payload) => {
                self.delivery.deliver(&message.chat, &payload).await?;
                Ok(HandlerResponse::Stop)
            }
            None => self.reply(message, NOT_FOUND_MESSAGE.to_string()).await,
        }
    }

    async fn stats(&self, message: &Message) -> Result<HandlerResponse> {
        let stats = self.store.stats().await.map_err(storage_error)?;
        let mut text = format!(
            "📊 {} items in the jar, {} not yet delivered.",
            stats.total(),
            stats.unused()
        );
        for mood in &stats.moods {
            text.push_str(&format!("\n{}: {} ({} used)", mood.mood, mood.total, mood.used));
        }
        self.reply(message, text).await
    }

    async fn menu(&self, message: &Message) -> Result<HandlerResponse> {
        let rows: Vec<Vec<String>> = MENU_ROWS
            .iter()
            .map(|row| row.iter().map(|label| label.to_string()).collect())
            .collect();
        self.bot.send_menu(&message.chat, MENU_PROMPT, &rows).await?;
        Ok(HandlerResponse::Reply(MENU_PROMPT.to_string()))
    }
}

#[async_trait]
impl Handler for JarHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(role) = self.access.role_of(message.user.id) else {
            return Ok(HandlerResponse::Stop);
        };

        // A pending /upload takes the admin's very next message, whatever it is.
        if role == Role::Admin {
            if let Some(mood) = self.sessions.take(message.chat.id, message.user.id) {
                return self.finish_upload(message, mood).await;
            }
        }

        if message.kind != MessageKind::Text {
            return Ok(HandlerResponse::Continue);
        }
        let Some(command) = Command::parse(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };
        if !role.allows(command.required_role()) {
            info!(command = ?command, "Admin-only command from recipient ignored");
            return Ok(HandlerResponse::Stop);
        }

        match command {
            Command::Upload { mood } => {
                let prompt = format!("Send the voice note 🌙\nMood: {}", mood);
                self.sessions.begin(message.chat.id, message.user.id, mood);
                self.reply(message, prompt).await
            }
            Command::AddText { mood, text } => self.add_text(message, mood, text).await,
            Command::AddTextUsage => self.reply(message, ADDTEXT_USAGE.to_string()).await,
            Command::Menu => self.menu(message).await,
            Command::Deliver(filter) => self.deliver(message, &filter).await,
            Command::Stats => self.stats(message).await,
        }
    }
}
