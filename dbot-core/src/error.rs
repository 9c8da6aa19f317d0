use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;
