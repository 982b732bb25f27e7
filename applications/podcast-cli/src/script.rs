//! Player script parsing
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.

use std::str::FromStr;
use thiserror::Error;

/// A single scripted player action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    /// Play the whole feed starting at an index
    Play(usize),
    Next,
    Prev,
    TogglePlay,
    ToggleLoop,
    ToggleRandom,
    /// Media reported the end of the episode
    Ended,
    /// Media reported that playback started
    Started,
    /// Media reported that playback paused
    Paused,
    /// Media reported a position, in seconds
    Position(f64),
    Seek(u64),
    Clear,
    Status,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command} expects {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
}

impl FromStr for ScriptCommand {
    type Err = ScriptError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        let command = match name {
            "play" => Self::Play(parse_arg(arg, "play", "an episode index")?),
            "next" => Self::Next,
            "prev" | "previous" => Self::Prev,
            "toggle-play" => Self::TogglePlay,
            "toggle-loop" => Self::ToggleLoop,
            "toggle-random" | "shuffle" => Self::ToggleRandom,
            "ended" => Self::Ended,
            "started" => Self::Started,
            "paused" => Self::Paused,
            "position" => Self::Position(parse_arg(arg, "position", "seconds")?),
            "seek" => Self::Seek(parse_arg(arg, "seek", "whole seconds")?),
            "clear" => Self::Clear,
            "status" => Self::Status,
            other => return Err(ScriptError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn parse_arg<T: FromStr>(
    arg: Option<&str>,
    command: &'static str,
    expected: &'static str,
) -> Result<T, ScriptError> {
    arg.and_then(|value| value.parse().ok())
        .ok_or(ScriptError::BadArgument { command, expected })
}

/// Parse script text, skipping blanks and comments
///
/// Returns the 1-based line number alongside each parse result.
pub fn parse_script(text: &str) -> Vec<(usize, Result<ScriptCommand, ScriptError>)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| (number, line.parse()))
        .collect()
}
