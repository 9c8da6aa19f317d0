//! Component factory: startup survives a schema failure and the bot runs degraded.

mod common;

use std::time::Duration;

use common::mock_bot::MockBot;
use common::{text_message, ADMIN_ID, RECIPIENT_ID};
use dbot_core::DbotError;
use dbot_telegram::TelegramConfig;
use mood_jar_bot::{build_bot_components, build_handler_chain, AccessConfig, BotConfig};

fn config_for(database_url: String) -> BotConfig {
    BotConfig {
        telegram: TelegramConfig::with_token("123456:test_token".to_string()),
        database_url,
        log_file: "logs/test.log".to_string(),
        access: AccessConfig::new(ADMIN_ID, RECIPIENT_ID),
        delivery_delay_ms: 0,
    }
}

#[tokio::test]
async fn test_schema_init_failure_does_not_abort_startup() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=ro", dir.path().join("missing/jar.db").display());

    let components = build_bot_components(&config_for(url)).await;

    assert!(components.is_ok());
}

#[tokio::test]
async fn test_degraded_store_fails_requests_not_startup() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=ro", dir.path().join("missing/jar.db").display());
    let components = build_bot_components(&config_for(url)).await.unwrap();

    let bot = MockBot::new();
    let chain = build_handler_chain(
        AccessConfig::new(ADMIN_ID, RECIPIENT_ID),
        components.store.clone(),
        bot.clone(),
        Duration::ZERO,
    );

    let err = chain
        .handle(&text_message(RECIPIENT_ID, "/shayari"))
        .await
        .unwrap_err();

    assert!(matches!(err, DbotError::Database(_)));
    assert!(bot.sent().is_empty());
}

#[tokio::test]
async fn test_components_on_fresh_database() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("jar.db").display());

    let components = build_bot_components(&config_for(url)).await.unwrap();

    assert!(components.store.get_by_id(1).await.unwrap().is_none());
}
