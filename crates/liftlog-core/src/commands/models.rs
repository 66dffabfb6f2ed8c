use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Arguments for the history command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct HistoryArgs {
    /// Path to the set log JSON
    pub input: PathBuf,

    /// Only use sets of this exercise
    pub exercise_id: Option<i64>,

    /// Display name, overrides the one in the set log
    pub exercise_name: Option<String>,

    /// Generation timestamp
    pub now: DateTime<Utc>,

    /// Optional settings file (TOML)
    pub settings_path: Option<PathBuf>,

    /// Path to write the report JSON
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for HistoryArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("sets.json"),
            exercise_id: None,
            exercise_name: None,
            now: Utc::now(),
            settings_path: None,
            output_json: None,
            print_summary: false,
        }
    }
}

/// Arguments for the progress command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ProgressArgs {
    /// Path to the set log JSON
    pub input: PathBuf,

    /// Only use sets of this exercise
    pub exercise_id: Option<i64>,

    /// Display name, overrides the one in the set log
    pub exercise_name: Option<String>,

    /// Range token (`week`, `month`, `year`); settings default when absent
    pub range: Option<String>,

    /// Anchor of the lookback window
    pub now: DateTime<Utc>,

    /// Optional settings file (TOML)
    pub settings_path: Option<PathBuf>,

    /// Path to write the report JSON
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ProgressArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("sets.json"),
            exercise_id: None,
            exercise_name: None,
            range: None,
            now: Utc::now(),
            settings_path: None,
            output_json: None,
            print_summary: false,
        }
    }
}
