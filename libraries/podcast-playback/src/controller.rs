//! Playback controller - queue state machine
//!
//! Translates intents into queue mutations and flag changes, and derives the
//! navigation predicates from (queue, flags) on every read.

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    queue::PlaybackQueue,
    shuffle::RandomPicker,
    types::{Intent, PlaybackConfig, PlaybackFlags, PlaybackSnapshot},
};
use podcast_core::Episode;
use tracing::{debug, info};

/// Central playback state
///
/// Owns the episode queue and the playing/looping/random flags. Nothing else may
/// write to either; every change goes through one of the intent methods below.
///
/// No intent fails. Boundary navigation is a no-op, and an out-of-range start
/// index passed to [`play_list`](Self::play_list) leaves the player without a
/// current episode rather than panicking.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    queue: PlaybackQueue,
    flags: PlaybackFlags,
    picker: RandomPicker,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    /// Create new controller with an empty queue
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            queue: PlaybackQueue::new(),
            flags: PlaybackFlags {
                is_playing: false,
                is_looping: config.looping,
                is_random: config.random,
            },
            picker: RandomPicker::new(config.seed),
            pending_events: Vec::new(),
        }
    }

    // ===== Intents =====

    /// Play a single episode, replacing the whole queue
    pub fn play(&mut self, episode: Episode) {
        debug!("Playing single episode {:?}", episode.title);
        let same_list = self.queue.episodes() == std::slice::from_ref(&episode);
        let previous_index = self.queue.current_index();
        self.queue.play_one(episode);
        self.emit_replacement(same_list, previous_index);
        self.set_playing_state(true);
    }

    /// Play `episodes` starting at `index`
    ///
    /// `index` must be within `0..episodes.len()`. It is not checked; use
    /// [`try_play_list`](Self::try_play_list) for input that has not been
    /// validated.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) {
        debug!(
            "Playing list of {} episodes from index {}",
            episodes.len(),
            index
        );
        let same_list = self.queue.episodes() == episodes.as_slice();
        let previous_index = self.queue.current_index();
        self.queue.play_list(episodes, index);
        self.emit_replacement(same_list, previous_index);
        self.set_playing_state(true);
    }

    /// Validating variant of [`play_list`](Self::play_list)
    ///
    /// Leaves the player untouched when `index` is out of bounds.
    pub fn try_play_list(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        if index >= episodes.len() {
            return Err(PlaybackError::InvalidArgument {
                index,
                len: episodes.len(),
            });
        }
        self.play_list(episodes, index);
        Ok(())
    }

    pub fn toggle_play(&mut self) {
        self.set_playing_state(!self.flags.is_playing);
    }

    pub fn toggle_loop(&mut self) {
        self.flags.is_looping = !self.flags.is_looping;
        self.emit(PlaybackEvent::LoopingChanged {
            is_looping: self.flags.is_looping,
        });
    }

    /// Flip shuffle mode
    ///
    /// The current episode is kept; only future `next` calls are affected.
    pub fn toggle_random(&mut self) {
        self.flags.is_random = !self.flags.is_random;
        self.emit(PlaybackEvent::RandomChanged {
            is_random: self.flags.is_random,
        });
    }

    /// Set the playing flag directly
    ///
    /// Used to resynchronize with the media primitive when it reports that
    /// playback actually started or stopped.
    pub fn set_playing_state(&mut self, is_playing: bool) {
        if self.flags.is_playing != is_playing {
            self.flags.is_playing = is_playing;
            self.emit(PlaybackEvent::StateChanged { is_playing });
        }
    }

    /// Advance to the next episode
    ///
    /// Random mode draws any index of the queue, possibly the current one.
    /// Otherwise advances by one, or does nothing at the end of the queue.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let target = if self.flags.is_random {
            self.picker.pick(self.queue.len())
        } else if self.has_next() {
            Some(self.queue.current_index() + 1)
        } else {
            None
        };

        if let Some(index) = target {
            self.move_to(index);
        }
    }

    /// Step back one episode; no-op at the start of the queue
    pub fn previous(&mut self) {
        if self.has_previous() {
            self.move_to(self.queue.current_index() - 1);
        }
    }

    /// Handle the media primitive reporting the end of the current episode
    ///
    /// Moves on when a next episode exists, otherwise clears the queue.
    pub fn episode_ended(&mut self) {
        if self.has_next() {
            self.next();
        } else {
            info!("Reached end of queue, clearing player");
            self.clear_player_state();
        }
    }

    /// Empty the queue; flags are left as they are
    pub fn clear_player_state(&mut self) {
        let was_empty = self.queue.is_empty();
        self.queue.clear();
        if !was_empty {
            self.emit(PlaybackEvent::QueueCleared);
        }
    }

    /// Dispatch an intent given as a value
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Play(episode) => self.play(episode),
            Intent::PlayList { episodes, index } => self.play_list(episodes, index),
            Intent::TogglePlay => self.toggle_play(),
            Intent::ToggleLoop => self.toggle_loop(),
            Intent::ToggleRandom => self.toggle_random(),
            Intent::SetPlayingState(is_playing) => self.set_playing_state(is_playing),
            Intent::Next => self.next(),
            Intent::Previous => self.previous(),
            Intent::EpisodeEnded => self.episode_ended(),
            Intent::ClearPlayerState => self.clear_player_state(),
        }
    }

    // ===== Derived State =====

    /// Whether `next` would move
    ///
    /// Always true in random mode for a non-empty queue.
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
            && (self.flags.is_random
                || self.queue.current_index() < self.queue.len().saturating_sub(1))
    }

    /// Whether `previous` would move
    pub fn has_previous(&self) -> bool {
        !self.queue.is_empty() && self.queue.current_index() > 0
    }

    /// Shuffle only changes anything with more than one episode queued
    pub fn can_shuffle(&self) -> bool {
        self.queue.len() > 1
    }

    // ===== State Queries =====

    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current_episode()
    }

    pub fn current_index(&self) -> usize {
        self.queue.current_index()
    }

    pub fn episode_list(&self) -> &[Episode] {
        self.queue.episodes()
    }

    pub fn flags(&self) -> PlaybackFlags {
        self.flags
    }

    pub fn is_playing(&self) -> bool {
        self.flags.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.flags.is_looping
    }

    pub fn is_random(&self) -> bool {
        self.flags.is_random
    }

    pub fn queue(&self) -> &PlaybackQueue {
        &self.queue
    }

    /// Capture the presentation-layer view of the player
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            episode_list: self.queue.episodes().to_vec(),
            current_episode: self.queue.current_episode().cloned(),
            current_index: self.queue.current_index(),
            is_playing: self.flags.is_playing,
            is_looping: self.flags.is_looping,
            is_random: self.flags.is_random,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn move_to(&mut self, index: usize) {
        let previous = self.queue.current_index();
        self.queue.set_current_index(index);
        if previous != index {
            debug!("Current episode index {} -> {}", previous, index);
            self.emit(PlaybackEvent::EpisodeChanged { index });
        }
    }

    /// Record the events for a queue replacement
    ///
    /// Nothing is recorded when the same list is replayed from the same index.
    fn emit_replacement(&mut self, same_list: bool, previous_index: usize) {
        let index = self.queue.current_index();
        if !same_list {
            self.emit(PlaybackEvent::QueueChanged {
                length: self.queue.len(),
            });
        }
        if !same_list || previous_index != index {
            self.emit(PlaybackEvent::EpisodeChanged { index });
        }
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn episode(title: &str, duration: u64) -> Episode {
        Episode::new(
            title,
            "Test Host",
            format!("/thumbs/{}.jpg", title),
            duration,
            format!("https://cdn.example.com/{}.mp3", title),
        )
    }

    fn abc() -> Vec<Episode> {
        vec![episode("A", 10), episode("B", 20), episode("C", 5)]
    }

    fn seeded() -> PlaybackController {
        PlaybackController::new(PlaybackConfig {
            seed: Some(99),
            ..Default::default()
        })
    }

    #[test]
    fn new_controller_is_empty_and_stopped() {
        let controller = PlaybackController::default();
        assert!(controller.current_episode().is_none());
        assert!(!controller.is_playing());
        assert!(!controller.has_next());
        assert!(!controller.has_previous());
    }

    #[test]
    fn config_sets_initial_flags() {
        let controller = PlaybackController::new(PlaybackConfig {
            looping: true,
            random: true,
            seed: None,
        });
        assert!(controller.is_looping());
        assert!(controller.is_random());
        assert!(!controller.is_playing());
    }

    #[test]
    fn play_replaces_queue_and_starts() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), 2);

        controller.play(episode("D", 30));

        assert_eq!(controller.episode_list(), &[episode("D", 30)]);
        assert_eq!(controller.current_index(), 0);
        assert!(controller.is_playing());
    }

    #[test]
    fn play_list_sets_position_and_starts() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), 1);

        assert_eq!(controller.episode_list(), abc().as_slice());
        assert_eq!(controller.current_index(), 1);
        assert_eq!(controller.current_episode().unwrap().title, "B");
        assert!(controller.is_playing());
    }

    #[test]
    fn unchecked_play_list_leaves_no_current_episode() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), 7);

        assert!(controller.current_episode().is_none());
        assert_eq!(controller.current_index(), 7);
        assert!(!controller.has_next());
    }

    #[test]
    fn huge_unchecked_index_does_not_overflow() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), usize::MAX);

        let snapshot = controller.snapshot();
        assert!(snapshot.current_episode.is_none());
        assert!(!snapshot.has_next);
        assert!(snapshot.has_previous);

        controller.next();
        assert_eq!(controller.current_index(), usize::MAX);
        controller.episode_ended();
        assert!(controller.episode_list().is_empty());

        controller.play_list(abc(), usize::MAX);
        controller.previous();
        assert_eq!(controller.current_index(), usize::MAX - 1);
    }

    #[test]
    fn replaying_same_queue_records_no_queue_events() {
        let mut controller = PlaybackController::default();
        controller.play(episode("A", 10));
        controller.drain_events();

        controller.play(episode("A", 10));
        assert!(controller.drain_events().is_empty());

        controller.play_list(abc(), 1);
        controller.drain_events();
        controller.set_playing_state(false);
        controller.play_list(abc(), 1);
        assert_eq!(
            controller.drain_events(),
            vec![
                PlaybackEvent::StateChanged { is_playing: false },
                PlaybackEvent::StateChanged { is_playing: true },
            ]
        );

        controller.play_list(abc(), 2);
        assert_eq!(
            controller.drain_events(),
            vec![PlaybackEvent::EpisodeChanged { index: 2 }]
        );
    }

    #[test]
    fn try_play_list_rejects_out_of_range() {
        let mut controller = PlaybackController::default();
        controller.play(episode("D", 30));

        let err = controller.try_play_list(abc(), 3).unwrap_err();
        assert!(matches!(
            err,
            PlaybackError::InvalidArgument { index: 3, len: 3 }
        ));

        // Untouched
        assert_eq!(controller.episode_list(), &[episode("D", 30)]);
    }

    #[test]
    fn try_play_list_rejects_empty_list() {
        let mut controller = PlaybackController::default();
        assert!(controller.try_play_list(Vec::new(), 0).is_err());
    }

    #[test]
    fn try_play_list_accepts_valid_index() {
        let mut controller = PlaybackController::default();
        controller.try_play_list(abc(), 2).unwrap();
        assert_eq!(controller.current_episode().unwrap().title, "C");
    }

    #[test]
    fn next_advances_until_end() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), 0);

        controller.next();
        assert_eq!(controller.current_index(), 1);
        controller.next();
        assert_eq!(controller.current_index(), 2);
        assert!(!controller.has_next());

        controller.next();
        assert_eq!(controller.current_index(), 2);
    }

    #[test]
    fn previous_stops_at_start() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), 1);

        controller.previous();
        assert_eq!(controller.current_index(), 0);
        assert!(!controller.has_previous());

        controller.previous();
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn random_next_always_available() {
        let mut controller = seeded();
        controller.play_list(abc(), 0);
        controller.toggle_random();

        assert!(controller.has_next());

        controller.play_list(abc(), 2);
        assert!(controller.has_next(), "last index still has a next in random mode");
    }

    #[test]
    fn random_next_covers_whole_queue() {
        let mut controller = seeded();
        controller.play_list(abc(), 0);
        controller.toggle_random();

        let mut seen = HashSet::new();
        for _ in 0..300 {
            controller.next();
            assert!(controller.current_index() < 3);
            seen.insert(controller.current_index());
        }
        assert_eq!(seen, HashSet::from([0, 1, 2]));
    }

    #[test]
    fn random_next_on_empty_queue_is_noop() {
        let mut controller = seeded();
        controller.toggle_random();

        controller.next();

        assert!(controller.current_episode().is_none());
        assert_eq!(controller.current_index(), 0);
        assert!(!controller.has_next());
    }

    #[test]
    fn toggle_random_keeps_current_episode() {
        let mut controller = seeded();
        controller.play_list(abc(), 1);

        controller.toggle_random();

        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn episode_ended_advances_when_possible() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), 0);

        controller.episode_ended();

        assert_eq!(controller.current_index(), 1);
        assert_eq!(controller.episode_list().len(), 3);
    }

    #[test]
    fn episode_ended_at_end_clears_queue_but_not_flags() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), 2);
        controller.toggle_loop();

        controller.episode_ended();

        assert!(controller.episode_list().is_empty());
        assert_eq!(controller.current_index(), 0);
        assert!(controller.current_episode().is_none());
        assert!(controller.is_looping());
    }

    #[test]
    fn clear_player_state_keeps_flags() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), 1);
        controller.toggle_random();

        controller.clear_player_state();

        assert!(controller.episode_list().is_empty());
        assert_eq!(controller.current_index(), 0);
        assert!(controller.is_playing());
        assert!(controller.is_random());
    }

    #[test]
    fn toggles_are_pure_flips() {
        let mut controller = PlaybackController::default();
        let before = controller.flags();

        controller.toggle_play();
        controller.toggle_loop();
        controller.toggle_random();
        assert!(controller.is_playing());
        assert!(controller.is_looping());
        assert!(controller.is_random());

        controller.toggle_play();
        controller.toggle_loop();
        controller.toggle_random();
        assert_eq!(controller.flags(), before);
    }

    #[test]
    fn set_playing_state_is_idempotent() {
        let mut controller = PlaybackController::default();
        controller.set_playing_state(true);
        controller.set_playing_state(true);
        assert!(controller.is_playing());

        let events = controller.drain_events();
        assert_eq!(events, vec![PlaybackEvent::StateChanged { is_playing: true }]);
    }

    #[test]
    fn can_shuffle_needs_two_episodes() {
        let mut controller = PlaybackController::default();
        assert!(!controller.can_shuffle());

        controller.play(episode("A", 10));
        assert!(!controller.can_shuffle());

        controller.play_list(abc(), 0);
        assert!(controller.can_shuffle());
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), 1);
        controller.toggle_loop();

        let snapshot = controller.snapshot();

        assert_eq!(snapshot.episode_list, abc());
        assert_eq!(snapshot.current_episode, Some(episode("B", 20)));
        assert_eq!(snapshot.current_index, 1);
        assert!(snapshot.is_playing);
        assert!(snapshot.is_looping);
        assert!(!snapshot.is_random);
        assert!(snapshot.has_next);
        assert!(snapshot.has_previous);
    }

    #[test]
    fn play_list_emits_queue_then_episode_then_state() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), 1);

        assert!(controller.has_pending_events());
        assert_eq!(
            controller.drain_events(),
            vec![
                PlaybackEvent::QueueChanged { length: 3 },
                PlaybackEvent::EpisodeChanged { index: 1 },
                PlaybackEvent::StateChanged { is_playing: true },
            ]
        );
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn boundary_noops_emit_nothing() {
        let mut controller = PlaybackController::default();
        controller.play_list(abc(), 0);
        controller.drain_events();

        controller.previous();
        assert!(controller.drain_events().is_empty());

        controller.next();
        controller.next();
        controller.drain_events();
        controller.next();
        assert!(controller.drain_events().is_empty());
    }

    #[test]
    fn clearing_empty_queue_emits_nothing() {
        let mut controller = PlaybackController::default();
        controller.clear_player_state();
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn apply_dispatches_intents() {
        let mut controller = PlaybackController::default();

        controller.apply(Intent::PlayList {
            episodes: abc(),
            index: 0,
        });
        controller.apply(Intent::Next);
        controller.apply(Intent::ToggleLoop);
        controller.apply(Intent::SetPlayingState(false));

        assert_eq!(controller.current_index(), 1);
        assert!(controller.is_looping());
        assert!(!controller.is_playing());

        controller.apply(Intent::Previous);
        assert_eq!(controller.current_index(), 0);

        controller.apply(Intent::ClearPlayerState);
        assert!(controller.episode_list().is_empty());
    }
}
