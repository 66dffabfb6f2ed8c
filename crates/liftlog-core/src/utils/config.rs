//! Configuration and constants for the engine and the CLI.
//!
//! Constants live at the top; runtime settings are read from an
//! optional TOML file (see [`load_settings`]).

use crate::aggregator::ProgressRange;
use crate::utils::error::ConfigError;
use chrono::FixedOffset;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Range used when neither the command line nor the settings name one
pub const DEFAULT_RANGE: ProgressRange = ProgressRange::Month;

/// Rate of Perceived Exertion bounds (inclusive)
pub const RPE_MIN: u8 = 1;
pub const RPE_MAX: u8 = 10;

// A fixed offset must stay strictly inside one day
pub const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Top-level settings file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Progress query defaults
    #[serde(default)]
    pub progress: ProgressSettings,

    /// Report output options
    #[serde(default)]
    pub output: OutputSettings,
}

/// `[progress]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProgressSettings {
    /// Range token used when `--range` is omitted
    #[serde(default = "default_range_token")]
    pub default_range: String,

    /// Offset from UTC that defines where one calendar day ends
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            default_range: default_range_token(),
            utc_offset_minutes: 0,
        }
    }
}

impl ProgressSettings {
    /// Parsed default range
    ///
    /// # Errors
    /// * `ConfigError::Invalid` - token is not `week`, `month` or `year`
    pub fn range(&self) -> Result<ProgressRange, ConfigError> {
        self.default_range
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("progress.default_range: {}", e)))
    }

    /// Day boundary offset used for bucketing
    ///
    /// # Errors
    /// * `ConfigError::Invalid` - offset is a full day or more
    pub fn day_offset(&self) -> Result<FixedOffset, ConfigError> {
        let minutes = self.utc_offset_minutes;

        (-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES)
            .contains(&minutes)
            .then(|| minutes.checked_mul(60))
            .flatten()
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "progress.utc_offset_minutes out of bounds: {}",
                    minutes
                ))
            })
    }
}

/// `[output]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Pretty-print JSON reports
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_range_token() -> String {
    DEFAULT_RANGE.as_str().to_string()
}

fn default_pretty() -> bool {
    true
}

impl Settings {
    /// Check every value that can only be validated after parsing
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.progress.range()?;
        self.progress.day_offset()?;
        Ok(())
    }
}

/// Parse settings from a TOML string
///
/// **Public** - used by [`load_settings`] and by tests
pub fn parse_settings(contents: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = toml::from_str(contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from a TOML file
///
/// # Arguments
/// * `path` - Path to the TOML settings file
///
/// # Errors
/// * `ConfigError::IoError` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::Invalid` - If a value is out of bounds
///
/// # Example
/// ```ignore
/// let settings = load_settings("liftlog.toml")?;
/// ```
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    debug!("Loading settings from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_settings(&contents)
}
