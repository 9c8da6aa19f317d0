//! Component factory: builds the store, the Telegram bot and the handler chain from config.

use anyhow::Result;
use dbot_core::Bot;
use dbot_telegram::TelegramBotAdapter;
use handler_chain::HandlerChain;
use std::sync::Arc;
use std::time::Duration;
use storage::{ContentRepository, ContentStore};
use tracing::{error, info, instrument};

use crate::access::AccessConfig;
use crate::config::BotConfig;
use crate::delivery::Delivery;
use crate::handlers::{AuthHandler, JarHandler, LoggingHandler};

/// Core dependencies for run_bot; produced by the component factory.
pub struct BotComponents {
    pub store: Arc<ContentRepository>,
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
}

/// Builds BotComponents. A schema failure is logged and the bot keeps running; requests that
/// touch the jar will then fail on their own.
#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let store = Arc::new(ContentRepository::connect(&config.database_url).map_err(|e| {
        error!(error = %e, database_url = %config.database_url, "Invalid database URL");
        anyhow::anyhow!("Invalid database URL: {}", e)
    })?);

    match store.init().await {
        Ok(()) => info!("Jar storage ready"),
        Err(e) => error!(
            error = %e,
            database_url = %config.database_url,
            "Failed to initialize jar storage, continuing degraded"
        ),
    }

    let teloxide_bot = config.telegram.build_bot();
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    Ok(BotComponents {
        store,
        teloxide_bot,
        bot,
    })
}

/// Builds the handler chain (logging → auth → jar commands).
pub fn build_handler_chain(
    access: AccessConfig,
    store: Arc<dyn ContentStore>,
    bot: Arc<dyn Bot>,
    delivery_pause: Duration,
) -> HandlerChain {
    let delivery = Delivery::new(bot.clone(), delivery_pause);
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(AuthHandler::new(access)))
        .add_handler(Arc::new(JarHandler::new(access, store, bot, delivery)))
}
