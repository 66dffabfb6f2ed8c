//! Helpers shared by the commands, plus the small standalone commands.

use crate::parser::{load_set_log, validate_records, SetLog, SetRecord};
use crate::report::ExerciseRef;
use crate::utils::config::{load_settings, Settings, SCHEMA_VERSION};
use anyhow::{Context, Result};
use colored::*;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Load settings from `path`, or defaults when no path is given
pub fn settings_or_default(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => load_settings(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => {
            debug!("No settings file given, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Pick the exercise a command works on and the records that belong to it
///
/// The exercise is the requested one, else the one the log declares. Once
/// known, sets of other exercises are dropped; a bare log with no exercise
/// anywhere keeps every set. The display name comes from the override, then
/// the log, then the id.
pub fn select_exercise(
    log: &SetLog,
    exercise_id: Option<i64>,
    exercise_name: Option<&str>,
) -> (ExerciseRef, Vec<SetRecord>) {
    let id = exercise_id.or(log.exercise_id);

    let records = match id {
        Some(id) => log.records_for_exercise(id),
        None => log.sets.clone(),
    };

    let name = exercise_name
        .map(str::to_string)
        .or_else(|| log.exercise_name.clone())
        .unwrap_or_else(|| match id {
            Some(id) => format!("exercise {}", id),
            None => "unnamed exercise".to_string(),
        });

    debug!(
        "Selected `{}`: {} of {} sets",
        name,
        records.len(),
        log.sets.len()
    );

    (ExerciseRef::new(id, name), records)
}

/// Common validation for the set log input path
pub fn validate_input_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    if path.is_dir() {
        anyhow::bail!("Input path is a directory: {}", path.display());
    }

    Ok(())
}

/// Validate a set log file against the producer contract
///
/// **Public** - backs the `validate` command
///
/// # Returns
/// Number of records checked. Fails if the log cannot be read or any
/// record violates the contract.
pub fn validate_set_log_file(file_path: impl AsRef<Path>) -> Result<usize> {
    let file_path = file_path.as_ref();

    println!("Validating set log: {}", file_path.display());

    let log = load_set_log(file_path)
        .with_context(|| format!("Failed to read set log {}", file_path.display()))?;

    let issues = validate_records(&log.sets);

    if issues.is_empty() {
        println!("{} Valid set log", "✓".green());
        if let Some(name) = &log.exercise_name {
            println!("  Exercise: {}", name);
        }
        println!("  Sets: {}", log.sets.len());
        info!("Validated {} sets", log.sets.len());
        return Ok(log.sets.len());
    }

    for issue in &issues {
        warn!("{}", issue);
        println!("  {} {}", "✗".red(), issue);
    }

    anyhow::bail!(
        "Set log has {} contract violations across {} sets",
        issues.len(),
        log.sets.len()
    )
}

/// Display version information
pub fn display_version() {
    println!("liftlog v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Workout progress metrics from strength training set logs.");
}
