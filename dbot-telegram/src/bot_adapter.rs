//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, ChatAction, DbotError, Result};
use teloxide::payloads::{SendMessageSetters, SendVoiceSetters};
use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile, KeyboardButton, KeyboardMarkup, ParseMode};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

fn bot_error(e: teloxide::RequestError) -> DbotError {
    DbotError::Bot(e.to_string())
}

fn to_keyboard(rows: &[Vec<String>]) -> KeyboardMarkup {
    KeyboardMarkup::new(
        rows.iter()
            .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect::<Vec<_>>())
            .collect::<Vec<_>>(),
    )
    .resize_keyboard()
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), html.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_voice(&self, chat: &Chat, content_ref: &str, caption: &str) -> Result<()> {
        self.bot
            .send_voice(ChatId(chat.id), InputFile::file_id(FileId(content_ref.to_string())))
            .caption(caption.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> Result<()> {
        let action = match action {
            ChatAction::Typing => teloxide::types::ChatAction::Typing,
            ChatAction::UploadVoice => teloxide::types::ChatAction::UploadVoice,
        };
        self.bot
            .send_chat_action(ChatId(chat.id), action)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, rows: &[Vec<String>]) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(to_keyboard(rows))
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}
