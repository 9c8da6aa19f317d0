//! Bot configuration loaded from environment variables.
//!
//! Required: BOT_TOKEN (or CLI override), DATABASE_URL, ADMIN_ID, RECIPIENT_ID.
//! Optional: LOG_FILE, TELEGRAM_API_URL / TELOXIDE_API_URL, DELIVERY_DELAY_MS.

use anyhow::{Context, Result};
use dbot_telegram::TelegramConfig;
use std::env;
use std::time::Duration;

use crate::access::AccessConfig;

pub const DEFAULT_LOG_FILE: &str = "logs/mood-jar-bot.log";
pub const DEFAULT_DELIVERY_DELAY_MS: u64 = 1000;

pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// SQLite URL (`sqlite://jar.db`) or file path.
    pub database_url: String,
    pub log_file: String,
    pub access: AccessConfig,
    /// Pause between the chat action and the content; 0 disables it.
    pub delivery_delay_ms: u64,
}

fn required_var(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{} not set", name))
}

fn required_id(name: &str) -> Result<i64> {
    let raw = required_var(name)?;
    raw.trim()
        .parse()
        .with_context(|| format!("{} must be a numeric Telegram user id, got {:?}", name, raw))
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to fail fast before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let database_url = required_var("DATABASE_URL")?;
        let access = AccessConfig::new(required_id("ADMIN_ID")?, required_id("RECIPIENT_ID")?);
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let delivery_delay_ms = env::var("DELIVERY_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_DELIVERY_DELAY_MS);

        Ok(Self {
            telegram,
            database_url,
            log_file,
            access,
            delivery_delay_ms,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }

    pub fn delivery_pause(&self) -> Duration {
        Duration::from_millis(self.delivery_delay_ms)
    }
}
