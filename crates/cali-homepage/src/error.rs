//! Error types for the homepage server

use thiserror::Error;

/// Errors that can occur while starting the server
///
/// Requests themselves never fail: an unknown country is a 404 page,
/// not an error.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration file is unreadable or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset failed to load
    #[error("Dataset error: {0}")]
    Dataset(#[from] cali_core::DatasetError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ServerError {
    fn from(e: toml::de::Error) -> Self {
        ServerError::Config(e.to_string())
    }
}

/// Result type alias for server operations
pub type ServerResult<T> = Result<T, ServerError>;
