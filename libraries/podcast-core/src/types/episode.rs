/// Episode domain type
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One playable podcast episode
///
/// Plain value type: two episodes are the same episode when every field matches.
/// Playlists may contain the same episode more than once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Display label for the people on the episode
    pub members: String,

    /// Thumbnail image URI
    pub thumbnail: String,

    /// Length in whole seconds
    pub duration: u64,

    /// Playable media URI
    pub url: String,
}

impl Episode {
    /// Create a new episode
    pub fn new(
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        duration: u64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            duration,
            url: url.into(),
        }
    }

    /// Episode length as a `Duration`
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }
}
