//! Episode queue
//!
//! Ordered episode list plus a cursor on the current episode. The queue is
//! replaced wholesale, never edited in place.

use podcast_core::Episode;

/// Ordered episode list and current position
///
/// ```text
/// episodes:  [ A ][ B ][ C ]
/// current:         ^ 1
/// ```
///
/// `current_index` is only meaningful while the queue is non-empty. The index
/// mutators do not validate bounds; an out-of-range index simply yields no
/// current episode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackQueue {
    episodes: Vec<Episode>,
    current_index: usize,
}

impl PlaybackQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue with a single episode
    pub fn play_one(&mut self, episode: Episode) {
        self.episodes = vec![episode];
        self.current_index = 0;
    }

    /// Replace the queue with `episodes`, positioned at `start_index`
    ///
    /// `start_index` must be within `0..episodes.len()`; this is the caller's
    /// responsibility and is not checked here.
    pub fn play_list(&mut self, episodes: Vec<Episode>, start_index: usize) {
        self.episodes = episodes;
        self.current_index = start_index;
    }

    /// Empty the queue and reset the position
    pub fn clear(&mut self) {
        self.episodes.clear();
        self.current_index = 0;
    }

    /// Move the cursor (unchecked)
    pub fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }

    /// Episode under the cursor, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episodes.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}
