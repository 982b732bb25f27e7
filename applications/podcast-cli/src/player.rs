//! Headless player: runs script commands against a session
//!
//! Stands in for the visual player. The media primitive only logs the commands
//! it receives; position and end-of-episode reports come from the script.

use crate::script::ScriptCommand;
use podcast_core::{time::format_duration, Episode};
use podcast_playback::{
    Intent, MediaEvent, MediaPrimitive, PlaybackConfig, PlaybackSnapshot, PlayerSession, Result,
};
use tracing::{info, warn};

/// Media primitive that only logs the commands sent to it
#[derive(Debug, Default)]
pub struct LoggingPrimitive {
    pub loaded: Option<String>,
    pub playing: bool,
    pub looping: bool,
}

impl MediaPrimitive for LoggingPrimitive {
    fn load(&mut self, url: &str) -> Result<()> {
        info!(url, "media: load");
        self.loaded = Some(url.to_string());
        self.playing = false;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        info!("media: play");
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        info!("media: pause");
        self.playing = false;
        Ok(())
    }

    fn seek(&mut self, seconds: u64) -> Result<()> {
        info!(seconds, "media: seek");
        Ok(())
    }

    fn set_looping(&mut self, looping: bool) -> Result<()> {
        info!(looping, "media: set looping");
        self.looping = looping;
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        info!("media: unload");
        self.loaded = None;
        self.playing = false;
        Ok(())
    }
}

/// Feed plus the session playing from it
pub struct HeadlessPlayer {
    feed: Vec<Episode>,
    session: PlayerSession<LoggingPrimitive>,
}

impl HeadlessPlayer {
    pub fn new(feed: Vec<Episode>, config: PlaybackConfig) -> Self {
        Self {
            feed,
            session: PlayerSession::new(config, LoggingPrimitive::default()),
        }
    }

    /// Run one command; returns a status line when the command asks for one
    pub fn execute(&mut self, command: ScriptCommand) -> anyhow::Result<Option<String>> {
        match command {
            ScriptCommand::Play(index) => {
                if index >= self.feed.len() {
                    anyhow::bail!(
                        "episode {} does not exist (feed has {})",
                        index,
                        self.feed.len()
                    );
                }
                self.session.dispatch(Intent::PlayList {
                    episodes: self.feed.clone(),
                    index,
                })?;
            }
            ScriptCommand::Next => self.session.dispatch(Intent::Next)?,
            ScriptCommand::Prev => self.session.dispatch(Intent::Previous)?,
            ScriptCommand::TogglePlay => self.session.dispatch(Intent::TogglePlay)?,
            ScriptCommand::ToggleLoop => self.session.dispatch(Intent::ToggleLoop)?,
            ScriptCommand::ToggleRandom => {
                if !self.session.controller().can_shuffle() {
                    warn!("Shuffle has no effect with fewer than two episodes queued");
                }
                self.session.dispatch(Intent::ToggleRandom)?;
            }
            ScriptCommand::Ended => self.session.handle_media_event(MediaEvent::Ended)?,
            ScriptCommand::Started => self.session.handle_media_event(MediaEvent::Started)?,
            ScriptCommand::Paused => self.session.handle_media_event(MediaEvent::Paused)?,
            ScriptCommand::Position(seconds) => self
                .session
                .handle_media_event(MediaEvent::PositionUpdated { seconds })?,
            ScriptCommand::Seek(seconds) => self.session.seek(seconds)?,
            ScriptCommand::Clear => self.session.dispatch(Intent::ClearPlayerState)?,
            ScriptCommand::Status => return Ok(Some(self.status_line())),
        }

        for event in self.session.drain_events() {
            info!(?event, "playback event");
        }
        Ok(None)
    }

    /// One-line rendering of the player
    pub fn status_line(&self) -> String {
        let snapshot = self.session.snapshot();
        render_status(
            &snapshot,
            self.session.progress().position(),
            self.session.progress().duration(),
        )
    }

    pub fn session(&self) -> &PlayerSession<LoggingPrimitive> {
        &self.session
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn render_status(snapshot: &PlaybackSnapshot, position: u64, duration: u64) -> String {
    let Some(episode) = &snapshot.current_episode else {
        return "[empty] Select a podcast to listen".to_string();
    };

    format!(
        "[{}/{}] {} {} - {}  {} / {}  loop:{} random:{} prev:{} next:{}",
        snapshot.current_index + 1,
        snapshot.episode_list.len(),
        if snapshot.is_playing { "playing" } else { "paused" },
        episode.title,
        episode.members,
        format_duration(position),
        format_duration(duration),
        on_off(snapshot.is_looping),
        on_off(snapshot.is_random),
        on_off(snapshot.has_previous),
        on_off(snapshot.has_next),
    )
}

/// Feed listing with formatted durations
pub fn render_feed(feed: &[Episode]) -> String {
    feed.iter()
        .enumerate()
        .map(|(index, episode)| {
            format!(
                "{:>3}  {}  {} - {}",
                index,
                format_duration(episode.duration),
                episode.title,
                episode.members
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
