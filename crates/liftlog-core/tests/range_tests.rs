use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use liftlog_core::aggregator::{
    resolve_range, resolve_range_token, resolve_range_with_offset, select_in_range, ProgressRange,
};
use liftlog_core::parser::SetRecord;
use liftlog_core::utils::AggregationError;

fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 15, 45, 30).unwrap()
}

#[test]
fn test_month_back_from_31st_clamps() {
    let cases = [
        // (now, expected start)
        (utc(2024, 3, 31), utc(2024, 2, 29)), // leap February
        (utc(2023, 3, 31), utc(2023, 2, 28)), // common February
        (utc(2024, 5, 31), utc(2024, 4, 30)),
        (utc(2024, 7, 31), utc(2024, 6, 30)),
        (utc(2024, 12, 31), utc(2024, 11, 30)),
        (utc(2024, 3, 30), utc(2024, 2, 29)),
        (utc(2024, 3, 29), utc(2024, 2, 29)),
        (utc(2024, 3, 28), utc(2024, 2, 28)),
    ];

    for (now, expected) in cases {
        let range = resolve_range(ProgressRange::Month, now).unwrap();
        assert_eq!(range.start, expected, "month before {}", now);
        assert_eq!(range.end, now);
    }
}

#[test]
fn test_month_back_in_local_calendar() {
    let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
    let plus_nine = FixedOffset::east_opt(9 * 3600).unwrap();

    let hms = |y, m, d, h| Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
    let cases = [
        // (offset, now, expected start)
        // Feb 29 21:00 at -05:00 steps back to Jan 29 21:00 local
        (minus_five, hms(2024, 3, 1, 2), hms(2024, 1, 30, 2)),
        // May 1 05:00 at +09:00 steps back to Apr 1 05:00 local
        (plus_nine, hms(2024, 4, 30, 20), hms(2024, 3, 31, 20)),
    ];

    for (offset, now, expected) in cases {
        let range = resolve_range_with_offset(ProgressRange::Month, now, &offset).unwrap();
        assert_eq!(range.start, expected, "month before {} at {}", now, offset);
        assert_eq!(range.end, now);
    }
}

#[test]
fn test_utc_offset_matches_plain_resolution() {
    let utc_offset = FixedOffset::east_opt(0).unwrap();
    let now = utc(2024, 3, 31);
    for range in ProgressRange::ALL {
        assert_eq!(
            resolve_range_with_offset(range, now, &utc_offset),
            resolve_range(range, now)
        );
    }
}

#[test]
fn test_month_crosses_year() {
    let range = resolve_range(ProgressRange::Month, utc(2024, 1, 31)).unwrap();
    assert_eq!(range.start, utc(2023, 12, 31));

    let range = resolve_range(ProgressRange::Month, utc(2024, 1, 15)).unwrap();
    assert_eq!(range.start, utc(2023, 12, 15));
}

#[test]
fn test_year_back() {
    let cases = [
        (utc(2024, 2, 29), utc(2023, 2, 28)),
        (utc(2025, 2, 28), utc(2024, 2, 28)),
        (utc(2024, 6, 15), utc(2023, 6, 15)),
        (utc(2024, 1, 1), utc(2023, 1, 1)),
    ];

    for (now, expected) in cases {
        let range = resolve_range(ProgressRange::Year, now).unwrap();
        assert_eq!(range.start, expected, "year before {}", now);
    }
}

#[test]
fn test_week_back_keeps_time_of_day() {
    let range = resolve_range(ProgressRange::Week, utc(2024, 3, 3)).unwrap();
    assert_eq!(range.start, utc(2024, 2, 25));

    let range = resolve_range(ProgressRange::Week, utc(2024, 1, 4)).unwrap();
    assert_eq!(range.start, utc(2023, 12, 28));
}

#[test]
fn test_unknown_token() {
    let result = resolve_range_token("quarter", utc(2024, 3, 3));
    assert!(matches!(result, Err(AggregationError::InvalidRange(_))));
}

#[test]
fn test_resolution_is_deterministic() {
    let now = utc(2024, 8, 31);
    for range in ProgressRange::ALL {
        assert_eq!(resolve_range(range, now), resolve_range(range, now));
    }
}

#[test]
fn test_selection_includes_both_bounds() {
    let now = utc(2024, 3, 31);
    let range = resolve_range(ProgressRange::Month, now).unwrap();

    let records = vec![
        SetRecord::new(10.0, 1, range.start - chrono::Duration::seconds(1)),
        SetRecord::new(20.0, 1, range.start),
        SetRecord::new(30.0, 1, utc(2024, 3, 10)),
        SetRecord::new(40.0, 1, range.end),
        SetRecord::new(50.0, 1, range.end + chrono::Duration::seconds(1)),
    ];

    let selected: Vec<f64> = select_in_range(&records, &range)
        .iter()
        .map(|r| r.weight)
        .collect();
    assert_eq!(selected, vec![20.0, 30.0, 40.0]);
}
