//! Lookback range resolution.
//!
//! Turns a symbolic range (`week`, `month`, `year`) into a concrete
//! interval ending at a caller-supplied `now`. The clock is never read
//! here.
//!
//! Calendar months and years are counted in the same fixed offset that
//! defines day buckets, so a month back lands on the civil date the series
//! uses.
//!
//! The interval is inclusive on both ends. Whatever selects records for a
//! range must use [`DateRange::contains`] (or [`select_in_range`]) so that
//! storage and engine agree on the boundary.

use crate::parser::SetRecord;
use crate::utils::error::AggregationError;
use chrono::{DateTime, Duration, FixedOffset, Months, Offset, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbolic lookback window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressRange {
    Week,
    Month,
    Year,
}

impl ProgressRange {
    pub const ALL: [ProgressRange; 3] = [Self::Week, Self::Month, Self::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for ProgressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressRange {
    type Err = AggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(AggregationError::InvalidRange(format!(
                "unknown range `{}` (expected week, month or year)",
                other
            ))),
        }
    }
}

/// Concrete `[start, end]` interval, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Shared selection predicate: `start <= at <= end`
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

/// Resolve a range against `now` in the UTC calendar
///
/// **Public** - main entry point for range resolution
///
/// Calendar months and years are subtracted with clamping: the 31st minus
/// one month lands on the last day of the shorter month, Feb 29 minus one
/// year lands on Feb 28.
///
/// # Errors
/// * `AggregationError::InvalidRange` - start falls outside the representable calendar
pub fn resolve_range(
    range: ProgressRange,
    now: DateTime<Utc>,
) -> Result<DateRange, AggregationError> {
    resolve_range_with_offset(range, now, &Utc.fix())
}

/// Resolve a range against `now` in the calendar of a fixed UTC offset
///
/// Same contract as [`resolve_range`]; months and years are stepped back
/// on the civil date at `offset`, then converted back to UTC.
///
/// # Errors
/// * `AggregationError::InvalidRange` - start falls outside the representable calendar
pub fn resolve_range_with_offset(
    range: ProgressRange,
    now: DateTime<Utc>,
    offset: &FixedOffset,
) -> Result<DateRange, AggregationError> {
    let local = now.with_timezone(offset);

    let start = match range {
        ProgressRange::Week => local.checked_sub_signed(Duration::days(7)),
        ProgressRange::Month => local.checked_sub_months(Months::new(1)),
        ProgressRange::Year => local.checked_sub_months(Months::new(12)),
    }
    .map(|start| start.with_timezone(&Utc))
    .ok_or_else(|| {
        AggregationError::InvalidRange(format!("{} before {} is out of bounds", range, now))
    })?;

    debug!(
        "Resolved range {} to [{}, {}] (offset {})",
        range, start, now, offset
    );

    Ok(DateRange { start, end: now })
}

/// Parse a range token and resolve it against `now`
///
/// # Errors
/// * `AggregationError::InvalidRange` - token is not `week`, `month` or `year`
pub fn resolve_range_token(token: &str, now: DateTime<Utc>) -> Result<DateRange, AggregationError> {
    resolve_range(token.parse()?, now)
}

/// Records whose `recorded_at` lies inside `range` (inclusive)
pub fn select_in_range(records: &[SetRecord], range: &DateRange) -> Vec<SetRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.recorded_at))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_parse_tokens() {
        for range in ProgressRange::ALL {
            assert_eq!(range.as_str().parse::<ProgressRange>().unwrap(), range);
        }
    }

    #[test]
    fn test_unknown_token_is_invalid_range() {
        for token in ["", "day", "Week", " month", "years"] {
            assert!(matches!(
                token.parse::<ProgressRange>(),
                Err(AggregationError::InvalidRange(_))
            ));
        }
    }

    #[test]
    fn test_week() {
        let now = utc(2024, 3, 5, 9, 30);
        let range = resolve_range(ProgressRange::Week, now).unwrap();
        assert_eq!(range.start, utc(2024, 2, 27, 9, 30));
        assert_eq!(range.end, now);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange {
            start: utc(2024, 1, 1, 0, 0),
            end: utc(2024, 1, 31, 0, 0),
        };
        assert!(range.contains(range.start));
        assert!(range.contains(range.end));
        assert!(!range.contains(range.end + Duration::seconds(1)));
        assert!(!range.contains(range.start - Duration::seconds(1)));
    }

    #[test]
    fn test_resolve_token() {
        let now = utc(2024, 6, 15, 12, 0);
        let range = resolve_range_token("year", now).unwrap();
        assert_eq!(range.start, utc(2023, 6, 15, 12, 0));
        assert!(resolve_range_token("fortnight", now).is_err());
    }
}
