//! History command implementation.
//!
//! The history command:
//! 1. Loads the set log
//! 2. Selects the exercise's sets
//! 3. Computes lifetime metrics
//! 4. Writes the report and/or prints a summary

use super::models::HistoryArgs;
use super::utils::{select_exercise, settings_or_default, validate_input_path};
use crate::output::{render_history_report, write_report};
use crate::parser::load_set_log;
use crate::report::{build_history_report, ExerciseHistoryReport};
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the history command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was built, Err with context if any step fails
///
/// # Errors
/// * Settings or set log cannot be read
/// * Report file cannot be written
pub fn execute_history(args: HistoryArgs) -> Result<ExerciseHistoryReport> {
    let start_time = Instant::now();

    let settings = settings_or_default(args.settings_path.as_ref())?;

    info!("Loading set log: {}", args.input.display());
    let log = load_set_log(&args.input).context("Failed to load set log")?;

    let (exercise, records) =
        select_exercise(&log, args.exercise_id, args.exercise_name.as_deref());

    let report = build_history_report(&exercise, &records, args.now);

    match &report.metrics {
        Some(metrics) => info!("Metrics: {}", metrics.summary()),
        None => info!("No sets recorded for `{}`", exercise.name),
    }

    if let Some(path) = &args.output_json {
        write_report(&report, path, settings.output.pretty)
            .context("Failed to write history report JSON")?;
        info!("✓ History written to: {}", path.display());
    }

    if args.print_summary {
        println!("{}", render_history_report(&report));
    }

    info!(
        "History completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(report)
}

/// Validate history arguments
///
/// **Public** - can be called before execute_history for early validation
pub fn validate_history_args(args: &HistoryArgs) -> Result<()> {
    validate_input_path(&args.input)?;

    if let Some(name) = &args.exercise_name {
        if name.trim().is_empty() {
            anyhow::bail!("Exercise name cannot be blank");
        }
    }

    Ok(())
}
