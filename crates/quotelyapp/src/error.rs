use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotelyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A backup file that is not valid JSON or lacks a `customers` list.
    #[error("Invalid backup file format: {0}")]
    Format(String),

    #[error("{0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<confique::Error> for QuotelyError {
    fn from(err: confique::Error) -> Self {
        QuotelyError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuotelyError>;
