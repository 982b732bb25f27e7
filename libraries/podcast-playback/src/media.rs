//! External media primitive
//!
//! The controller never touches audio. A platform playback handle (an audio
//! element, a native player, a test double) implements [`MediaPrimitive`] and
//! reports back through [`MediaEvent`].

use crate::error::Result;

/// Platform-agnostic playback handle
///
/// Commands are fire-and-forget from the core's point of view: the primitive owns
/// buffering and decoding, and reports progress through [`MediaEvent`]s.
pub trait MediaPrimitive {
    /// Point the primitive at a new media URI
    ///
    /// Replaces whatever was loaded. Playback does not start until
    /// [`play`](Self::play) is called.
    fn load(&mut self, url: &str) -> Result<()>;

    /// Begin or resume playback of the loaded media
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the position
    fn pause(&mut self) -> Result<()>;

    /// Seek to an offset in whole seconds from the start
    fn seek(&mut self, seconds: u64) -> Result<()>;

    /// Restart the media on its own when it reaches the end
    ///
    /// While looping, the primitive is expected not to report
    /// [`MediaEvent::Ended`].
    fn set_looping(&mut self, looping: bool) -> Result<()>;

    /// Drop the loaded media (empty player)
    fn unload(&mut self) -> Result<()>;
}

/// Events reported by the media primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Playback position moved
    PositionUpdated {
        /// Current position in (fractional) seconds
        seconds: f64,
    },

    /// Playback actually started or resumed
    Started,

    /// Playback actually paused
    Paused,

    /// Media reached its end
    Ended,

    /// Media metadata is available
    MetadataLoaded {
        /// Duration reported by the media, in whole seconds
        duration: u64,
    },
}

/// Command log primitive for tests
///
/// Records every command in order and never fails.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPrimitive {
    pub commands: Vec<String>,
}

#[cfg(test)]
impl MediaPrimitive for RecordingPrimitive {
    fn load(&mut self, url: &str) -> Result<()> {
        self.commands.push(format!("load {}", url));
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.commands.push("play".to_string());
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.commands.push("pause".to_string());
        Ok(())
    }

    fn seek(&mut self, seconds: u64) -> Result<()> {
        self.commands.push(format!("seek {}", seconds));
        Ok(())
    }

    fn set_looping(&mut self, looping: bool) -> Result<()> {
        self.commands.push(format!("loop {}", looping));
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        self.commands.push("unload".to_string());
        Ok(())
    }
}
