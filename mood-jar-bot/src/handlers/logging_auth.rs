//! Handlers for logging and identity checks.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument, warn};

use crate::access::AccessConfig;

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            kind = ?message.kind,
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = ?message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}

/// Stops the chain silently unless the sender is the admin or the recipient. Strangers get no reply.
pub struct AuthHandler {
    access: AccessConfig,
}

impl AuthHandler {
    pub fn new(access: AccessConfig) -> Self {
        Self { access }
    }
}

#[async_trait]
impl Handler for AuthHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let user_id = message.user.id;
        match self.access.role_of(user_id) {
            Some(role) => {
                debug!(user_id = user_id, role = ?role, "User authorized");
                Ok(true)
            }
            None => {
                warn!(user_id = user_id, chat_id = message.chat.id, "Ignoring message from unknown user");
                Ok(false)
            }
        }
    }
}
