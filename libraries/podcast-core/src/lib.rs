//! Podcast Player Core
//!
//! Platform-agnostic core types and error handling for the podcast player.
//!
//! This crate provides the building blocks shared by the playback library and the
//! applications:
//! - **Domain Types**: `Episode`
//! - **Feed Decoding**: turning an already-fetched episode feed into `Vec<Episode>`
//! - **Formatting**: `HH:MM:SS` duration labels
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use podcast_core::{feed, time::format_duration};
//!
//! let json = r#"[{
//!     "title": "Episode 1",
//!     "members": "Host A, Host B",
//!     "thumbnail": "https://example.com/1.jpg",
//!     "duration": 3725,
//!     "url": "https://example.com/1.mp3"
//! }]"#;
//!
//! let episodes = feed::parse_episodes(json).unwrap();
//! assert_eq!(episodes.len(), 1);
//! assert_eq!(format_duration(episodes[0].duration), "01:02:05");
//! ```

pub mod error;
pub mod feed;
pub mod time;
pub mod types;

pub use error::{CoreError, Result};
pub use types::Episode;
