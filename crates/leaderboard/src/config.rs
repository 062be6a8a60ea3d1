//! Loading configuration and player data from JSON or YAML files.
//!
//! The format is picked from the file extension. Configuration is validated
//! on load, so a [`LeaderboardConfig`] returned from here is always usable.

use std::fs;
use std::path::Path;

use leaderboard_query::LeaderboardConfig;
use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, Result};
use crate::player::Player;

/// Serialization format of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Picks the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FileFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(FileFormat::Yaml)
            }
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Deserializes `text` in this format.
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T> {
        match self {
            FileFormat::Json => Ok(serde_json::from_str(text)?),
            FileFormat::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses and validates a configuration document.
pub fn parse_config(text: &str, format: FileFormat) -> Result<LeaderboardConfig> {
    let config: LeaderboardConfig = format.parse(text)?;
    config.validate()?;
    Ok(config)
}

/// Reads, parses and validates a configuration file.
pub fn load_config(path: &Path) -> Result<LeaderboardConfig> {
    let config = parse_config(&read(path)?, FileFormat::from_path(path)?)?;
    debug!("loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Reads a player list from a file.
pub fn load_players(path: &Path) -> Result<Vec<Player>> {
    let players: Vec<Player> = FileFormat::from_path(path)?.parse(&read(path)?)?;
    debug!("loaded {} players from {}", players.len(), path.display());
    Ok(players)
}
