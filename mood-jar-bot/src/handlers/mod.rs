//! Handler implementations: logging, auth (configured identities only), and the jar commands.

mod jar_handler;
mod logging_auth;

pub use jar_handler::{
    JarHandler, ADDTEXT_USAGE, MENU_PROMPT, NOT_FOUND_MESSAGE, NOT_VOICE_MESSAGE,
};
pub use logging_auth::{AuthHandler, LoggingHandler};
