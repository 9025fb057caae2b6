//! Error types for settings persistence

use thiserror::Error;

/// Settings storage errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Backing file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;
