//! Centralized error types for tunegraph.

use thiserror::Error;

/// Main error type for tunegraph operations.
#[derive(Error, Debug)]
pub enum TunegraphError {
    #[error("Tune not found: {0}")]
    TuneNotFound(i64),

    #[error("Set not found: {0}")]
    SetNotFound(i64),

    #[error("Session not found: {0}")]
    SessionNotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] tunegraph_db::DbError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for tunegraph operations.
pub type TunegraphResult<T> = Result<T, TunegraphError>;

impl TunegraphError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error means the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TuneNotFound(_)
                | Self::SetNotFound(_)
                | Self::SessionNotFound(_)
                | Self::Database(tunegraph_db::DbError::NotFound(_))
        )
    }
}
