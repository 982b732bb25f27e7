/// CLI configuration
use podcast_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Feed used when `--feed` is not given
    #[serde(default)]
    pub feed_path: Option<PathBuf>,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl CliConfig {
    /// Load configuration from `podcast.toml` (if present) and environment
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("podcast.toml"))
    }

    /// Load configuration from `path` (if present) and environment
    ///
    /// Environment variables are prefixed with `PODCAST_` and use `__` between
    /// nested keys, e.g. `PODCAST_PLAYBACK__RANDOM=true`.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let mut settings = config::Config::builder();

        if path.exists() {
            settings = settings.add_source(config::File::from(path.to_path_buf()));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PODCAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Pick the feed path, preferring the command line
    pub fn feed_path(&self, cli_feed: Option<PathBuf>) -> anyhow::Result<PathBuf> {
        cli_feed
            .or_else(|| self.feed_path.clone())
            .ok_or_else(|| anyhow::anyhow!("No feed given (use --feed or set feed_path)"))
    }
}
