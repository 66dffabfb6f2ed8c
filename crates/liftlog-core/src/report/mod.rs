//! Exercise history and progress reports.
//!
//! Builds the two report envelopes on top of the aggregator:
//! - History: every set plus lifetime metrics
//! - Progress: range-selected sets reduced to a summary and a daily series
//!
//! Both take `now` explicitly; nothing here reads the clock.

pub mod schema;

pub use schema::{ExerciseHistoryReport, ExerciseProgressReport, ExerciseRef};

use crate::aggregator::{
    bucketize_with_offset, resolve_range_with_offset, select_in_range, summarize, ProgressRange,
};
use crate::parser::SetRecord;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::AggregationError;
use chrono::{DateTime, FixedOffset, Utc};
use log::{debug, info};

/// Build the history report for one exercise
///
/// **Public** - main entry point for history
///
/// # Arguments
/// * `exercise` - Exercise the records belong to
/// * `records` - Every set recorded for it
/// * `now` - Generation timestamp
pub fn build_history_report(
    exercise: &ExerciseRef,
    records: &[SetRecord],
    now: DateTime<Utc>,
) -> ExerciseHistoryReport {
    debug!(
        "Building history for `{}` from {} sets",
        exercise.name,
        records.len()
    );

    ExerciseHistoryReport {
        version: SCHEMA_VERSION.to_string(),
        exercise_id: exercise.id,
        exercise_name: exercise.name.clone(),
        sets: records.to_vec(),
        metrics: summarize(records),
        generated_at: now.to_rfc3339(),
    }
}

/// Build the progress report for one exercise
///
/// **Public** - main entry point for progress
///
/// # Arguments
/// * `exercise` - Exercise the records belong to
/// * `range` - Lookback window
/// * `now` - Anchor of the window and generation timestamp
/// * `records` - Candidate sets; only those inside `[start, now]` are used
/// * `day_offset` - Offset that defines the calendar for the window and the day buckets
///
/// # Errors
/// * `AggregationError::InvalidRange` - window start cannot be represented
pub fn build_progress_report(
    exercise: &ExerciseRef,
    range: ProgressRange,
    now: DateTime<Utc>,
    records: &[SetRecord],
    day_offset: &FixedOffset,
) -> Result<ExerciseProgressReport, AggregationError> {
    let window = resolve_range_with_offset(range, now, day_offset)?;
    let selected = select_in_range(records, &window);

    info!(
        "Progress for `{}` over last {}: {} of {} sets in range",
        exercise.name,
        range,
        selected.len(),
        records.len()
    );

    Ok(ExerciseProgressReport {
        version: SCHEMA_VERSION.to_string(),
        exercise_id: exercise.id,
        exercise_name: exercise.name.clone(),
        range,
        start_date: window.start,
        end_date: window.end,
        data_points: bucketize_with_offset(&selected, day_offset),
        summary: summarize(&selected),
        generated_at: now.to_rfc3339(),
    })
}

/// Same as [`build_progress_report`], starting from a range token
///
/// # Errors
/// * `AggregationError::InvalidRange` - token is not `week`, `month` or `year`
pub fn build_progress_report_for_token(
    exercise: &ExerciseRef,
    range: &str,
    now: DateTime<Utc>,
    records: &[SetRecord],
    day_offset: &FixedOffset,
) -> Result<ExerciseProgressReport, AggregationError> {
    build_progress_report(exercise, range.parse()?, now, records, day_offset)
}
