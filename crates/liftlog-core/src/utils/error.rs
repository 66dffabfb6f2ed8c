//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by the aggregation engine itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    /// Unknown range token, or a range whose start cannot be represented
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Record collection is missing where one is required
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors that can occur while reading a set log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Settings TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}
