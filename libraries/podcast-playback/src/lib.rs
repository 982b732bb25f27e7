//! Podcast Player - Playback Management
//!
//! Platform-agnostic playback state for a queue of podcast episodes.
//!
//! This crate provides:
//! - Episode queue with a current position (replaced wholesale, never edited)
//! - Playing / looping / random flags
//! - Next / previous navigation with end-of-queue rules
//! - Random "next" drawn from the whole queue
//! - Playback events for UI synchronization
//! - A session type that drives an external media primitive
//!
//! # Architecture
//!
//! `podcast-playback` does no audio work. Decoding and output belong to an
//! external primitive (an audio element, a native player) that the session
//! commands through the [`MediaPrimitive`] trait.
//!
//! # Example: Queue Navigation
//!
//! ```rust
//! use podcast_core::Episode;
//! use podcast_playback::PlaybackController;
//!
//! let episodes = vec![
//!     Episode::new("A", "Host", "a.jpg", 10, "a.mp3"),
//!     Episode::new("B", "Host", "b.jpg", 20, "b.mp3"),
//! ];
//!
//! let mut controller = PlaybackController::default();
//! controller.play_list(episodes, 0);
//! assert!(controller.has_next());
//!
//! controller.next();
//! assert_eq!(controller.current_episode().unwrap().title, "B");
//!
//! // End of a non-random queue clears the player
//! controller.episode_ended();
//! assert!(controller.current_episode().is_none());
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust
//! use podcast_core::Episode;
//! use podcast_playback::{Intent, MediaEvent, MediaPrimitive, PlaybackConfig, PlayerSession, Result};
//!
//! // Implement MediaPrimitive for your platform
//! struct MyAudioElement;
//!
//! impl MediaPrimitive for MyAudioElement {
//!     fn load(&mut self, _url: &str) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn seek(&mut self, _seconds: u64) -> Result<()> { Ok(()) }
//!     fn set_looping(&mut self, _looping: bool) -> Result<()> { Ok(()) }
//!     fn unload(&mut self) -> Result<()> { Ok(()) }
//! }
//!
//! let mut session = PlayerSession::new(PlaybackConfig::default(), MyAudioElement);
//! session.dispatch(Intent::Play(Episode::new("A", "Host", "a.jpg", 10, "a.mp3"))).unwrap();
//!
//! // Forward primitive callbacks
//! session.handle_media_event(MediaEvent::PositionUpdated { seconds: 3.2 }).unwrap();
//! assert_eq!(session.progress().position(), 3);
//! ```

mod controller;
mod error;
mod events;
mod media;
mod progress;
mod queue;
mod session;
mod shuffle;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use media::{MediaEvent, MediaPrimitive};
pub use progress::Progress;
pub use queue::PlaybackQueue;
pub use session::PlayerSession;
pub use types::{Intent, PlaybackConfig, PlaybackFlags, PlaybackSnapshot};
