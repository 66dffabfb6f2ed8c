//! Progress command implementation.
//!
//! The progress command:
//! 1. Loads settings and resolves the range token
//! 2. Loads the set log and selects the exercise's sets
//! 3. Keeps the sets inside `[now - range, now]`
//! 4. Computes the summary and the daily series
//! 5. Writes the report and/or prints a summary

use super::models::ProgressArgs;
use super::utils::{select_exercise, settings_or_default, validate_input_path};
use crate::aggregator::ProgressRange;
use crate::output::{render_progress_report, write_report};
use crate::parser::load_set_log;
use crate::report::{build_progress_report, ExerciseProgressReport};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the progress command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was built, Err with context if any step fails
///
/// # Errors
/// * Unknown range token (from the arguments or the settings)
/// * Settings or set log cannot be read
/// * Report file cannot be written
pub fn execute_progress(args: ProgressArgs) -> Result<ExerciseProgressReport> {
    let start_time = Instant::now();

    let settings = settings_or_default(args.settings_path.as_ref())?;

    let range = match &args.range {
        Some(token) => token
            .parse::<ProgressRange>()
            .context("Failed to parse --range")?,
        None => settings.progress.range()?,
    };
    let day_offset = settings.progress.day_offset()?;
    debug!("Range {} with day boundary at {}", range, day_offset);

    info!("Loading set log: {}", args.input.display());
    let log = load_set_log(&args.input).context("Failed to load set log")?;

    let (exercise, records) =
        select_exercise(&log, args.exercise_id, args.exercise_name.as_deref());

    let report = build_progress_report(&exercise, range, args.now, &records, &day_offset)
        .context("Failed to build progress report")?;

    match &report.summary {
        Some(summary) => info!("Summary: {}", summary.summary()),
        None => info!("No sets for `{}` in the last {}", exercise.name, range),
    }
    info!("{} daily data points", report.data_points.len());

    if let Some(path) = &args.output_json {
        write_report(&report, path, settings.output.pretty)
            .context("Failed to write progress report JSON")?;
        info!("✓ Progress written to: {}", path.display());
    }

    if args.print_summary {
        println!("{}", render_progress_report(&report));
    }

    info!(
        "Progress completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(report)
}

/// Validate progress arguments
///
/// **Public** - can be called before execute_progress for early validation
pub fn validate_progress_args(args: &ProgressArgs) -> Result<()> {
    validate_input_path(&args.input)?;

    if let Some(token) = &args.range {
        token.parse::<ProgressRange>()?;
    }

    if let Some(name) = &args.exercise_name {
        if name.trim().is_empty() {
            anyhow::bail!("Exercise name cannot be blank");
        }
    }

    Ok(())
}
