//! Player session - binds the controller to a media primitive
//!
//! The controller only knows about intents and flags. The session watches the
//! controller after every intent and issues the matching primitive commands,
//! and feeds primitive events back into the controller.

use crate::{
    controller::PlaybackController,
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    media::{MediaEvent, MediaPrimitive},
    progress::Progress,
    types::{Intent, PlaybackConfig, PlaybackSnapshot},
};
use podcast_core::Episode;
use tracing::{debug, info};

/// Controller plus the primitive it drives
///
/// Primitive commands issued after each change:
/// - current episode changed: `load(url)`, progress back to zero
/// - queue emptied: `unload()`
/// - playing flag differs from the primitive: `play()` / `pause()`
/// - looping flag differs from the primitive: `set_looping(v)`
pub struct PlayerSession<M: MediaPrimitive> {
    controller: PlaybackController,
    media: M,
    progress: Progress,

    // What the primitive was last told
    loaded: Option<(usize, Episode)>,
    media_playing: bool,
    media_looping: bool,
}

impl<M: MediaPrimitive> PlayerSession<M> {
    /// Create a session around an idle primitive
    pub fn new(config: PlaybackConfig, media: M) -> Self {
        Self {
            controller: PlaybackController::new(config),
            media,
            progress: Progress::new(),
            loaded: None,
            media_playing: false,
            media_looping: false,
        }
    }

    /// Apply an intent and bring the primitive in line with the new state
    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        self.controller.apply(intent);
        self.reconcile()
    }

    /// Feed a primitive event back into the controller
    pub fn handle_media_event(&mut self, event: MediaEvent) -> Result<()> {
        match event {
            MediaEvent::Started => {
                self.media_playing = true;
                self.controller.set_playing_state(true);
            }
            MediaEvent::Paused => {
                self.media_playing = false;
                self.controller.set_playing_state(false);
            }
            MediaEvent::PositionUpdated { seconds } => {
                self.progress.update(seconds);
                return Ok(());
            }
            MediaEvent::MetadataLoaded { duration } => {
                self.progress.reset(duration);
                return Ok(());
            }
            MediaEvent::Ended => return self.finish_episode(),
        }
        self.reconcile()
    }

    /// Jump to `seconds` in the current episode
    pub fn seek(&mut self, seconds: u64) -> Result<()> {
        let duration = self
            .controller
            .current_episode()
            .map(|episode| episode.duration)
            .ok_or(PlaybackError::NoEpisodeLoaded)?;

        if seconds > duration {
            return Err(PlaybackError::InvalidSeekPosition(seconds));
        }

        self.media.seek(seconds)?;
        self.progress.set_position(seconds);
        Ok(())
    }

    // ===== State Queries =====

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.controller.snapshot()
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Drain controller events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.controller.drain_events()
    }

    // ===== Internal =====

    /// Handle the end of the current episode
    ///
    /// Playback carries on into whatever episode follows, even if the primitive
    /// reported a pause on the way out. When a random draw lands on the episode
    /// that just ended, it is restarted from the beginning.
    fn finish_episode(&mut self) -> Result<()> {
        self.media_playing = false;
        self.controller.episode_ended();

        let current = self.current_position();
        if current.is_some() {
            self.controller.set_playing_state(true);
            if current == self.loaded {
                debug!("Restarting episode that just ended");
                self.media.seek(0)?;
                self.progress.set_position(0);
            }
        }

        self.reconcile()
    }

    fn current_position(&self) -> Option<(usize, Episode)> {
        self.controller
            .current_episode()
            .map(|episode| (self.controller.current_index(), episode.clone()))
    }

    fn reconcile(&mut self) -> Result<()> {
        let current = self.current_position();

        if current != self.loaded {
            match &current {
                Some((index, episode)) => {
                    info!("Loading episode {} ({:?})", index, episode.title);
                    self.media.load(&episode.url)?;
                    self.progress.reset(episode.duration);
                }
                None => {
                    info!("Player emptied, unloading media");
                    self.media.unload()?;
                    self.progress.reset(0);
                }
            }
            self.media_playing = false;
            self.loaded = current;
        }

        let should_play = self.loaded.is_some() && self.controller.is_playing();
        if should_play != self.media_playing && self.loaded.is_some() {
            if should_play {
                debug!("Starting media playback");
                self.media.play()?;
            } else {
                debug!("Pausing media playback");
                self.media.pause()?;
            }
            self.media_playing = should_play;
        }

        if self.controller.is_looping() != self.media_looping {
            self.media.set_looping(self.controller.is_looping())?;
            self.media_looping = self.controller.is_looping();
        }

        Ok(())
    }
}
