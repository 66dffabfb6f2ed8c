//! Producer-contract checks for set records.
//!
//! The aggregation engine computes over whatever it receives. These checks
//! exist so a set log can be audited before it is trusted; they never drop
//! or alter records.

use super::schema::SetRecord;
use crate::utils::config::{RPE_MAX, RPE_MIN};
use std::fmt;

/// What is wrong with a record
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    NegativeWeight(f64),
    NonFiniteWeight,
    ZeroReps,
    RpeOutOfRange(u8),
}

/// A violation found at a given position in the log
#[derive(Debug, Clone, PartialEq)]
pub struct RecordIssue {
    /// Zero-based index of the record in the input
    pub index: usize,
    pub kind: IssueKind,
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::NegativeWeight(w) => {
                write!(f, "set #{}: negative weight {}", self.index, w)
            }
            IssueKind::NonFiniteWeight => write!(f, "set #{}: weight is not finite", self.index),
            IssueKind::ZeroReps => write!(f, "set #{}: reps must be at least 1", self.index),
            IssueKind::RpeOutOfRange(rpe) => write!(
                f,
                "set #{}: rpe {} outside {}-{}",
                self.index, rpe, RPE_MIN, RPE_MAX
            ),
        }
    }
}

/// Report every producer-contract violation in `records`
///
/// **Public** - used by the validate command
pub fn validate_records(records: &[SetRecord]) -> Vec<RecordIssue> {
    let mut issues = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if !record.weight.is_finite() {
            issues.push(RecordIssue {
                index,
                kind: IssueKind::NonFiniteWeight,
            });
        } else if record.weight < 0.0 {
            issues.push(RecordIssue {
                index,
                kind: IssueKind::NegativeWeight(record.weight),
            });
        }

        if record.reps == 0 {
            issues.push(RecordIssue {
                index,
                kind: IssueKind::ZeroReps,
            });
        }

        if let Some(rpe) = record.rpe {
            if !(RPE_MIN..=RPE_MAX).contains(&rpe) {
                issues.push(RecordIssue {
                    index,
                    kind: IssueKind::RpeOutOfRange(rpe),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_valid_records_have_no_issues() {
        let records = vec![
            SetRecord::new(0.0, 1, at()),
            SetRecord::new(100.0, 5, at()).with_rpe(10).with_rest(0),
        ];
        assert!(validate_records(&records).is_empty());
    }

    #[test]
    fn test_each_violation_reported_with_index() {
        let records = vec![
            SetRecord::new(60.0, 10, at()),
            SetRecord::new(-5.0, 0, at()),
            SetRecord::new(f64::NAN, 3, at()).with_rpe(11),
        ];

        let issues = validate_records(&records);
        assert_eq!(issues.len(), 4);
        assert_eq!(
            issues[0],
            RecordIssue {
                index: 1,
                kind: IssueKind::NegativeWeight(-5.0)
            }
        );
        assert_eq!(
            issues[1],
            RecordIssue {
                index: 1,
                kind: IssueKind::ZeroReps
            }
        );
        assert_eq!(issues[2].kind, IssueKind::NonFiniteWeight);
        assert_eq!(
            issues[3],
            RecordIssue {
                index: 2,
                kind: IssueKind::RpeOutOfRange(11)
            }
        );
    }

    #[test]
    fn test_rpe_zero_is_out_of_range() {
        let records = vec![SetRecord::new(20.0, 5, at()).with_rpe(0)];
        let issues = validate_records(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "set #0: rpe 0 outside 1-10");
    }
}
