/// Core error types for the podcast player
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for the podcast player
#[derive(Error, Debug)]
pub enum CoreError {
    /// Feed document could not be decoded
    #[error("Feed error: {0}")]
    Feed(#[from] serde_json::Error),

    /// Episode record is structurally valid JSON but unusable
    #[error("Invalid episode: {0}")]
    InvalidEpisode(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Create an invalid episode error
    pub fn invalid_episode(msg: impl Into<String>) -> Self {
        Self::InvalidEpisode(msg.into())
    }
}
