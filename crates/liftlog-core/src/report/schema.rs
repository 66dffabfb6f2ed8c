//! Report JSON schema definitions.
//!
//! This module defines the structure of the reports we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{MetricsSummary, ProgressDataPoint, ProgressRange};
use crate::parser::SetRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of the exercise a report is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRef {
    pub id: Option<i64>,
    pub name: String,
}

impl ExerciseRef {
    pub fn new(id: Option<i64>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Full history of an exercise with lifetime metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryReport {
    /// Schema version for compatibility checking
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<i64>,

    pub exercise_name: String,

    /// Every set, in input order
    pub sets: Vec<SetRecord>,

    /// Absent when no set has been recorded yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSummary>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Progress of an exercise over a lookback range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgressReport {
    /// Schema version for compatibility checking
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<i64>,

    pub exercise_name: String,

    pub range: ProgressRange,

    /// Inclusive lower bound of the range
    pub start_date: DateTime<Utc>,

    /// Inclusive upper bound of the range
    pub end_date: DateTime<Utc>,

    /// One point per day with sets, oldest first
    pub data_points: Vec<ProgressDataPoint>,

    /// Absent when the range holds no sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<MetricsSummary>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}
