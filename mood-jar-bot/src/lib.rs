//! # Mood jar bot
//!
//! An admin fills a jar with mood-tagged voice notes and text; the recipient asks for a mood and
//! gets a random item not seen since the jar for that mood was last emptied.
//!
//! Wires dbot-core (Handler, Bot, Message), handler-chain, storage and dbot-telegram together.

pub mod access;
pub mod cli;
pub mod command;
pub mod components;
pub mod config;
pub mod delivery;
pub mod handlers;
pub mod runner;
pub mod selector;
pub mod sessions;

pub use access::{AccessConfig, Role};
pub use cli::{load_config, Cli, Commands};
pub use command::{Command, MENU_ROWS};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use delivery::Delivery;
pub use handlers::{AuthHandler, JarHandler, LoggingHandler};
pub use runner::run_bot;
pub use selector::{DeliveryPayload, RotationSelector, CAPTIONS};
pub use sessions::UploadSessions;
