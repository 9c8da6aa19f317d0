//! Sends a selected payload to the chat: chat action, pacing pause, then the content.

use dbot_core::{Bot, Chat, ChatAction, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::selector::DeliveryPayload;

pub struct Delivery {
    bot: Arc<dyn Bot>,
    pause: Duration,
}

impl Delivery {
    pub fn new(bot: Arc<dyn Bot>, pause: Duration) -> Self {
        Self { bot, pause }
    }

    async fn announce(&self, chat: &Chat, action: ChatAction) {
        // The status is cosmetic; a failure here must not cost the delivery.
        if let Err(e) = self.bot.send_chat_action(chat, action).await {
            warn!(error = %e, chat_id = chat.id, "Failed to send chat action");
        }
        if !self.pause.is_zero() {
            tokio::time::sleep(self.pause).await;
        }
    }

    pub async fn deliver(&self, chat: &Chat, payload: &DeliveryPayload) -> Result<()> {
        match payload {
            DeliveryPayload::Audio {
                content_ref,
                caption,
            } => {
                self.announce(chat, ChatAction::UploadVoice).await;
                self.bot.send_voice(chat, content_ref, caption).await?;
            }
            DeliveryPayload::Text { .. } => {
                self.announce(chat, ChatAction::Typing).await;
                let html = payload.render_html().unwrap_or_default();
                self.bot.send_html(chat, &html).await?;
            }
        }
        info!(chat_id = chat.id, caption = %payload.caption(), "Delivered jar item");
        Ok(())
    }
}
