//! Summary metrics across a collection of sets.
//!
//! Produces totals, maxima, averages and the temporal bounds of whatever
//! records it is given. Empty input produces no summary at all: zero totals
//! would be indistinguishable from "nothing tracked yet".

use super::numeric::{canonical_max, canonical_sum, integer_mean};
use crate::parser::SetRecord;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Aggregated metrics for a set collection
///
/// **Public** - returned from [`summarize`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Number of sets
    pub total_sets: usize,

    /// Sum of weight x reps
    pub total_volume: f64,

    pub max_weight: f64,

    pub max_reps: u32,

    /// Mean weight over all sets
    pub average_weight: f64,

    /// Mean reps over all sets
    pub average_reps: f64,

    /// Mean rest over the sets that recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rest: Option<f64>,

    /// Mean RPE over the sets that recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rpe: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_recorded_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_recorded_at: Option<DateTime<Utc>>,
}

impl MetricsSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let mut line = format!(
            "Sets: {} | Volume: {} | Max: {} x {} | Avg: {:.1} x {:.1}",
            self.total_sets,
            self.total_volume,
            self.max_weight,
            self.max_reps,
            self.average_weight,
            self.average_reps
        );
        if let Some(rpe) = self.average_rpe {
            line.push_str(&format!(" | RPE: {:.1}", rpe));
        }
        line
    }
}

/// Reduce `records` into one summary
///
/// **Public** - main entry point for summary metrics
///
/// # Arguments
/// * `records` - Sets to summarise, any size, any order
///
/// # Returns
/// `None` for empty input, otherwise the summary. Every field is
/// independent of input order, down to the last bit.
pub fn summarize(records: &[SetRecord]) -> Option<MetricsSummary> {
    if records.is_empty() {
        return None;
    }

    let total_sets = records.len();
    debug!("Summarising {} sets", total_sets);

    let total_volume = canonical_sum(records.iter().map(SetRecord::volume).collect());
    let total_weight = canonical_sum(records.iter().map(|r| r.weight).collect());
    let total_reps: u64 = records.iter().map(|r| u64::from(r.reps)).sum();

    let max_weight = canonical_max(records.iter().map(|r| r.weight))?;
    let max_reps = records.iter().map(|r| r.reps).max()?;

    let (rest_sum, rest_count) = optional_sum(records.iter().map(|r| r.rest_seconds));
    let (rpe_sum, rpe_count) = optional_sum(records.iter().map(|r| r.rpe));

    Some(MetricsSummary {
        total_sets,
        total_volume,
        max_weight,
        max_reps,
        average_weight: total_weight / total_sets as f64,
        average_reps: total_reps as f64 / total_sets as f64,
        average_rest: integer_mean(rest_sum, rest_count),
        average_rpe: integer_mean(rpe_sum, rpe_count),
        first_recorded_at: records.iter().map(|r| r.recorded_at).min(),
        last_recorded_at: records.iter().map(|r| r.recorded_at).max(),
    })
}

/// Sum and count of the present values only
pub(crate) fn optional_sum<T: Into<u64>>(values: impl Iterator<Item = Option<T>>) -> (u64, usize) {
    values.flatten().fold((0, 0), |(sum, count), v| {
        let v: u64 = v.into();
        (sum + v, count + 1)
    })
}
