//! Core types for playback management

use podcast_core::Episode;
use serde::{Deserialize, Serialize};

/// Transient playback flags
///
/// The three flags are independent: toggling one never touches the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackFlags {
    /// Whether the current episode should be audible
    pub is_playing: bool,

    /// Whether the external primitive should loop the current episode
    pub is_looping: bool,

    /// Whether `next` re-rolls a random index instead of advancing
    pub is_random: bool,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial looping flag (default: false)
    #[serde(default)]
    pub looping: bool,

    /// Initial random flag (default: false)
    #[serde(default)]
    pub random: bool,

    /// Seed for the random-next generator
    ///
    /// `None` seeds from OS entropy. A fixed seed makes random navigation
    /// reproducible (replays, tests).
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Read-only view of the player for the presentation layer
///
/// Derived fields (`has_next`, `has_previous`) are computed when the snapshot is
/// taken and are never stored by the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub episode_list: Vec<Episode>,
    pub current_episode: Option<Episode>,
    pub current_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_random: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

/// A named operation a caller invokes to change playback state
///
/// Value form of the controller's intent methods, for hosts that receive intents
/// as data (scripts, remote commands, property tests).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    Play(Episode),
    PlayList { episodes: Vec<Episode>, index: usize },
    TogglePlay,
    ToggleLoop,
    ToggleRandom,
    SetPlayingState(bool),
    Next,
    Previous,
    EpisodeEnded,
    ClearPlayerState,
}
