//! Error types for playback and capture

use thiserror::Error;

/// Playback and capture errors
///
/// All variants are recoverable: the controllers return to a well-defined
/// state after every error path and never terminate the process.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Playlist index outside `0..len`
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Decode/IO failure reported by the platform transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Seek requested outside a seekable state or known duration
    #[error("Invalid seek: {0}")]
    InvalidSeek(String),

    /// Capture attempted without microphone authorization
    #[error("Permission denied: microphone capture not authorized")]
    PermissionDenied,

    /// Capture attempted while playback holds the audio route
    #[error("Conflicting session: playback is active")]
    ConflictingSession,

    /// Command rejected in the current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
