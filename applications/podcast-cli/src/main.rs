/// Podcast CLI - headless podcast player driven by scripts
mod config;
mod player;
mod script;

use clap::{Parser, Subcommand};
use config::CliConfig;
use player::{render_feed, HeadlessPlayer};
use std::{
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcast-cli")]
#[command(about = "Headless podcast player", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "podcast.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a feed, reading player commands from a script or stdin
    Play {
        /// Episode feed (JSON)
        #[arg(short, long, env = "PODCAST_FEED")]
        feed: Option<PathBuf>,
        /// Episode to start from
        #[arg(short, long, default_value_t = 0)]
        start: usize,
        /// Script file; stdin when omitted
        #[arg(long)]
        script: Option<PathBuf>,
    },
    /// List the episodes of a feed
    List {
        /// Episode feed (JSON)
        #[arg(short, long, env = "PODCAST_FEED")]
        feed: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, player output to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podcast_cli=info,podcast_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = CliConfig::load_from(&cli.config)?;

    match cli.command {
        Commands::Play {
            feed,
            start,
            script,
        } => {
            let feed_path = settings.feed_path(feed)?;
            play(&settings, &feed_path, start, script.as_deref())?;
        }
        Commands::List { feed } => {
            let feed_path = settings.feed_path(feed)?;
            let episodes = podcast_core::feed::load_episodes(&feed_path)?;
            println!("{}", render_feed(&episodes));
        }
    }

    Ok(())
}

fn play(
    settings: &CliConfig,
    feed_path: &Path,
    start: usize,
    script_path: Option<&Path>,
) -> anyhow::Result<()> {
    let episodes = podcast_core::feed::load_episodes(feed_path)?;
    info!("Loaded {} episodes from {}", episodes.len(), feed_path.display());

    let text = match script_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut commands = Vec::new();
    for (line, parsed) in script::parse_script(&text) {
        match parsed {
            Ok(command) => commands.push(command),
            Err(e) => anyhow::bail!("script line {}: {}", line, e),
        }
    }

    let mut player = HeadlessPlayer::new(episodes, settings.playback.clone());
    player.execute(script::ScriptCommand::Play(start))?;
    println!("{}", player.status_line());

    for command in commands {
        match player.execute(command) {
            Ok(Some(status)) => println!("{}", status),
            Ok(None) => {}
            Err(e) => warn!("{:?} failed: {}", command, e),
        }
    }

    println!("{}", player.status_line());
    Ok(())
}
