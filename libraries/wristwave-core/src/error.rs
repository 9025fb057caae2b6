/// Core error types for WristWave
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for WristWave
#[derive(Error, Debug)]
pub enum CoreError {
    /// A collaborator failed to supply media (picker, renderer)
    #[error("Media source error: {0}")]
    MediaSource(String),

    /// Image could not be rendered
    #[error("Render error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
