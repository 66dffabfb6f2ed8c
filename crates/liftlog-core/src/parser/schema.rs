//! Input schema for set logs.
//!
//! A set log is what the storage side hands over: the sets of one
//! (or several) exercises, already scoped to a single owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded set: a weight lifted for a number of reps
///
/// `weight >= 0` and `reps >= 1` are guaranteed by whoever produced the
/// record. Nothing downstream re-checks them; see
/// [`validate_records`](super::validate_records) for an explicit report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<i64>,

    /// Load lifted, in the user's unit
    pub weight: f64,

    /// Repetitions performed
    pub reps: u32,

    /// Rest taken before the next set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,

    /// Rate of Perceived Exertion (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Creation time of the set; ordering and bucketing key
    #[serde(alias = "created_at")]
    pub recorded_at: DateTime<Utc>,
}

impl SetRecord {
    /// Create a record with only the required fields set
    pub fn new(weight: f64, reps: u32, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            workout_id: None,
            exercise_id: None,
            weight,
            reps,
            rest_seconds: None,
            rpe: None,
            notes: None,
            recorded_at,
        }
    }

    pub fn with_rest(mut self, rest_seconds: u32) -> Self {
        self.rest_seconds = Some(rest_seconds);
        self
    }

    pub fn with_rpe(mut self, rpe: u8) -> Self {
        self.rpe = Some(rpe);
        self
    }

    pub fn with_exercise(mut self, exercise_id: i64) -> Self {
        self.exercise_id = Some(exercise_id);
        self
    }

    /// Volume of this set: weight x reps
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// A materialised set log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetLog {
    /// Exercise the whole log belongs to, if the producer said so
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_name: Option<String>,

    pub sets: Vec<SetRecord>,
}

impl SetLog {
    /// Records belonging to one exercise
    ///
    /// A record without its own `exercise_id` inherits the log's.
    pub fn records_for_exercise(&self, exercise_id: i64) -> Vec<SetRecord> {
        self.sets
            .iter()
            .filter(|set| set.exercise_id.or(self.exercise_id) == Some(exercise_id))
            .cloned()
            .collect()
    }
}
