//! Error types for the Fantasy Baseball Roster Tracker

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Event log is locked by another process: {path}")]
    LogLocked { path: PathBuf },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Player not found in event log: {name}")]
    PlayerNotFound { name: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for RosterError {
    fn from(err: anyhow::Error) -> Self {
        // Typed variants wrapped by the storage layer survive the conversion
        match err.downcast::<RosterError>() {
            Ok(inner) => inner,
            Err(err) => RosterError::Storage {
                message: format!("{err:#}"),
            },
        }
    }
}
