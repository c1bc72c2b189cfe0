use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    /// The transport failed to deliver a reply.
    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;
