//! Terminal leaderboard viewer built on `leaderboard-query`.
//!
//! Reads a list of [`Player`] records, applies the search, sort and page
//! given on the command line, and prints the visible page as a table, JSON
//! or YAML.

pub mod cli;
pub mod config;
pub mod error;
pub mod player;
pub mod render;

pub use cli::{run, run_with, Cli, OutputMode};
pub use config::{load_config, load_players, parse_config, FileFormat};
pub use error::ConfigError;
pub use player::Player;
