//! Episode feed decoding
//!
//! The feed is fetched elsewhere; this module only turns the fetched JSON document
//! into episodes ready for a playlist. Both a bare array and an
//! `{ "episodes": [...] }` envelope are accepted.

use crate::error::{CoreError, Result};
use crate::types::Episode;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    List(Vec<Episode>),
    Envelope { episodes: Vec<Episode> },
}

/// Decode a JSON feed document into episodes
///
/// Order is preserved, duplicates are kept. Every episode must carry a
/// non-empty media `url`.
pub fn parse_episodes(json: &str) -> Result<Vec<Episode>> {
    let episodes = match serde_json::from_str::<FeedDocument>(json)? {
        FeedDocument::List(episodes) | FeedDocument::Envelope { episodes } => episodes,
    };

    for (index, episode) in episodes.iter().enumerate() {
        validate(index, episode)?;
    }

    debug!("Decoded {} episodes from feed", episodes.len());
    Ok(episodes)
}

/// Read and decode a feed file
pub fn load_episodes(path: impl AsRef<Path>) -> Result<Vec<Episode>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    debug!("Loading feed from {:?}", path);
    parse_episodes(&json)
}

fn validate(index: usize, episode: &Episode) -> Result<()> {
    if episode.url.trim().is_empty() {
        return Err(CoreError::invalid_episode(format!(
            "episode {} ({:?}) has no media url",
            index, episode.title
        )));
    }
    Ok(())
}
