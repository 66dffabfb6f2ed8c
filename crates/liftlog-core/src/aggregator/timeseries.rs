//! Day-bucketed progress series.
//!
//! Groups sets by the calendar day of `recorded_at` and reduces each day
//! to a [`ProgressDataPoint`]. The day boundary is the civil date in one
//! fixed UTC offset per call; [`bucketize`] uses UTC itself.
//!
//! No range filtering happens here: every record given is placed in a
//! bucket. Points come back in ascending date order.

use super::numeric::{canonical_max, canonical_sum, integer_mean};
use super::summary::optional_sum;
use crate::parser::SetRecord;
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metrics for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressDataPoint {
    /// Civil date of the bucket
    pub date: NaiveDate,

    /// Sum of weight x reps for the day
    pub total_volume: f64,

    pub max_weight: f64,

    pub total_sets: usize,

    /// Mean RPE over the day's sets that recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rpe: Option<f64>,
}

/// Calendar day of `at` under `offset`
pub fn day_key(at: DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
    at.with_timezone(offset).date_naive()
}

/// Bucket `records` by UTC calendar day
///
/// **Public** - main entry point for the progress series
///
/// # Returns
/// One point per day with at least one record, oldest first. Empty input
/// yields an empty vector.
pub fn bucketize(records: &[SetRecord]) -> Vec<ProgressDataPoint> {
    bucketize_with_offset(records, &utc_offset())
}

/// Bucket `records` by calendar day in a fixed UTC offset
///
/// Same contract as [`bucketize`]; only the day boundary moves.
pub fn bucketize_with_offset(
    records: &[SetRecord],
    offset: &FixedOffset,
) -> Vec<ProgressDataPoint> {
    let mut days: BTreeMap<NaiveDate, Vec<&SetRecord>> = BTreeMap::new();

    for record in records {
        days.entry(day_key(record.recorded_at, offset))
            .or_default()
            .push(record);
    }

    debug!(
        "Bucketed {} sets into {} days (offset {})",
        records.len(),
        days.len(),
        offset
    );

    days.into_iter()
        .filter_map(|(date, day)| build_data_point(date, &day))
        .collect()
}

/// Reduce one day's records
///
/// **Private** - `None` only for an empty day, which bucketing never produces
fn build_data_point(date: NaiveDate, day: &[&SetRecord]) -> Option<ProgressDataPoint> {
    let max_weight = canonical_max(day.iter().map(|r| r.weight))?;
    let (rpe_sum, rpe_count) = optional_sum(day.iter().map(|r| r.rpe));

    Some(ProgressDataPoint {
        date,
        total_volume: canonical_sum(day.iter().map(|r| r.volume()).collect()),
        max_weight,
        total_sets: day.len(),
        average_rpe: integer_mean(rpe_sum, rpe_count),
    })
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}
