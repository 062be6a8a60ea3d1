//! Error types for loading viewer inputs.

use std::path::PathBuf;

use leaderboard_query::QueryError;
use thiserror::Error;

/// Errors from reading configuration and player files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] QueryError),
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
