//! Playback Events
//!
//! Event-based communication for UI synchronization. The controller records an
//! event only when the observed value actually changed; the host drains them
//! after dispatching an intent.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playing flag changed
    StateChanged {
        /// New value of `is_playing`
        is_playing: bool,
    },

    /// Cursor moved, or the queue was replaced
    EpisodeChanged {
        /// New current index
        index: usize,
    },

    /// Queue replaced by `play` or `play_list`
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Looping flag changed
    LoopingChanged { is_looping: bool },

    /// Random flag changed
    RandomChanged { is_random: bool },

    /// Queue emptied (end of playback or explicit clear)
    QueueCleared,
}
