//! Error types for playback management
//!
//! The queue state machine itself never fails; these errors come from the
//! validating entry points and from the external media primitive.

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Start index outside the playlist
    #[error("Invalid argument: index {index} out of bounds for playlist of {len}")]
    InvalidArgument { index: usize, len: usize },

    /// No episode is currently loaded
    #[error("No episode loaded")]
    NoEpisodeLoaded,

    /// Seek target past the end of the episode
    #[error("Invalid seek position: {0}s")]
    InvalidSeekPosition(u64),

    /// External media primitive error
    #[error("Media error: {0}")]
    Media(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
