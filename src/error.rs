//! Error types for ltc

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ltc operations
pub type Result<T> = std::result::Result<T, LtcError>;

/// Main error type for ltc
#[derive(Error, Debug)]
pub enum LtcError {
    /// Command lookup and flag validation errors
    #[error("{0}")]
    Command(#[from] CommandError),

    /// Help rendering errors
    #[error("Help error: {0}")]
    Help(#[from] HelpError),

    /// Configuration store errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors returned by a command action
    #[error(transparent)]
    Action(#[from] anyhow::Error),
}

/// Command registry errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Command not found")]
    NotFound,

    /// Carries the formatted unknown-flag message from the matcher,
    /// e.g. `Unknown flag "--badflag"`.
    #[error("{0}")]
    UnknownFlags(String),
}

/// Help rendering errors
#[derive(Error, Debug)]
pub enum HelpError {
    #[error("Unknown placeholder '${{{0}}}' in help template")]
    UnknownPlaceholder(String),

    #[error("Failed to write help output: {0}")]
    Write(#[from] io::Error),
}

/// Configuration store errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Invalid config file '{path}': {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Failed to write config file '{path}': {error}")]
    Write { path: PathBuf, error: String },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for help rendering
pub type HelpResult<T> = std::result::Result<T, HelpError>;
