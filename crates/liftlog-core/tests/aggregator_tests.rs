use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use liftlog_core::aggregator::{bucketize, summarize};
use liftlog_core::parser::SetRecord;
use pretty_assertions::assert_eq;

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, hour, minute, 0).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

fn pyramid() -> Vec<SetRecord> {
    vec![
        SetRecord::new(60.0, 10, at(6, 18, 0)).with_rest(120).with_rpe(7),
        SetRecord::new(65.0, 8, at(6, 18, 4)).with_rest(120).with_rpe(8),
        SetRecord::new(70.0, 6, at(6, 18, 8)).with_rpe(9),
    ]
}

#[test]
fn test_pyramid_summary() {
    let summary = summarize(&pyramid()).unwrap();

    assert_eq!(summary.total_sets, 3);
    assert_eq!(summary.total_volume, 1540.0);
    assert_eq!(summary.max_weight, 70.0);
    assert_eq!(summary.max_reps, 10);
    assert_eq!(summary.average_weight, 65.0);
    assert_eq!(summary.average_reps, 8.0);
    assert_eq!(summary.average_rest, Some(120.0));
    assert_eq!(summary.average_rpe, Some(8.0));
    assert_eq!(summary.first_recorded_at, Some(at(6, 18, 0)));
    assert_eq!(summary.last_recorded_at, Some(at(6, 18, 8)));
}

#[test]
fn test_pyramid_series() {
    let points = bucketize(&pyramid());

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].date, date(6));
    assert_eq!(points[0].total_volume, 1540.0);
    assert_eq!(points[0].max_weight, 70.0);
    assert_eq!(points[0].total_sets, 3);
    assert_eq!(points[0].average_rpe, Some(8.0));
}

#[test]
fn test_empty_input_asymmetry() {
    // No summary, but an empty (present) series
    assert!(summarize(&[]).is_none());
    assert_eq!(bucketize(&[]), Vec::new());
}

#[test]
fn test_zero_weight_still_summarised() {
    let records = vec![
        SetRecord::new(0.0, 15, at(1, 7, 0)),
        SetRecord::new(0.0, 12, at(1, 7, 5)),
    ];

    let summary = summarize(&records).unwrap();
    assert_eq!(summary.total_sets, 2);
    assert_eq!(summary.total_volume, 0.0);
    assert_eq!(summary.max_weight, 0.0);
    assert_eq!(summary.average_reps, 13.5);
}

#[test]
fn test_rpe_mean_divides_by_rated_sets_only() {
    let records = vec![
        SetRecord::new(50.0, 5, at(1, 7, 0)).with_rpe(6),
        SetRecord::new(50.0, 5, at(1, 7, 5)),
        SetRecord::new(50.0, 5, at(1, 7, 10)),
        SetRecord::new(50.0, 5, at(1, 7, 15)).with_rpe(9),
    ];

    let summary = summarize(&records).unwrap();
    assert_eq!(summary.average_rpe, Some(7.5));
    assert!(summary.average_rest.is_none());
}

#[test]
fn test_no_rpe_anywhere() {
    let records = vec![SetRecord::new(50.0, 5, at(1, 7, 0)).with_rest(90)];

    let summary = summarize(&records).unwrap();
    assert!(summary.average_rpe.is_none());
    assert_eq!(summary.average_rest, Some(90.0));
    assert!(bucketize(&records)[0].average_rpe.is_none());
}

#[test]
fn test_single_rep_boundary() {
    let summary = summarize(&[SetRecord::new(140.0, 1, at(2, 9, 0))]).unwrap();
    assert_eq!(summary.total_volume, 140.0);
    assert_eq!(summary.max_reps, 1);
}

#[test]
fn test_days_do_not_merge() {
    let records = vec![
        SetRecord::new(60.0, 10, at(6, 23, 59)),
        SetRecord::new(60.0, 10, at(7, 0, 0)),
    ];

    let points = bucketize(&records);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, date(6));
    assert_eq!(points[1].date, date(7));
}

#[test]
fn test_series_matches_summary_volume() {
    let mut records = pyramid();
    records.push(SetRecord::new(80.0, 5, at(8, 18, 0)).with_rpe(9));
    records.push(SetRecord::new(82.5, 4, at(10, 18, 0)));

    let summary = summarize(&records).unwrap();
    let points = bucketize(&records);

    let bucket_sets: usize = points.iter().map(|p| p.total_sets).sum();
    let bucket_volume: f64 = points.iter().map(|p| p.total_volume).sum();

    assert_eq!(bucket_sets, records.len());
    assert_eq!(bucket_volume, summary.total_volume);
    assert_eq!(summary.total_volume, 1540.0 + 400.0 + 330.0);
}

#[test]
fn test_negative_weight_does_not_panic() {
    // Producer contract violated; still computed, never rejected
    let records = vec![
        SetRecord::new(-10.0, 5, at(1, 7, 0)),
        SetRecord::new(20.0, 0, at(1, 7, 5)),
    ];

    let summary = summarize(&records).unwrap();
    assert_eq!(summary.total_volume, -50.0);
    assert_eq!(summary.max_weight, 20.0);
    assert_eq!(summary.max_reps, 5);
}
