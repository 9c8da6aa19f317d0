use anyhow::Result;
use dbot_core::init_tracing;
use dbot_telegram::run_repl;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;

/// Main entry: validate config, init logging, build components and chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        database_url = %config.database_url,
        admin_id = config.access.admin_id,
        recipient_id = config.access.recipient_id,
        delivery_delay_ms = config.delivery_delay_ms,
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let handler_chain = build_handler_chain(
        config.access,
        components.store.clone(),
        components.bot.clone(),
        config.delivery_pause(),
    );

    info!(handlers = handler_chain.len(), "Bot started successfully");
    run_repl(components.teloxide_bot, handler_chain).await
}
