//! Terminal rendering for reports.
//!
//! Human-readable summaries of history and progress reports, with a
//! simple bar per day so trends are visible at a glance.

use crate::aggregator::{MetricsSummary, ProgressDataPoint};
use crate::report::{ExerciseHistoryReport, ExerciseProgressReport};
use colored::*;

const RULE: &str = "---------------------------------------------------";
const BAR_WIDTH: usize = 30;

/// Render a history report for the terminal
pub fn render_history_report(report: &ExerciseHistoryReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header("Exercise History", &report.exercise_name));
    out.push_str(&format!("Sets logged: {}\n", report.sets.len()));
    out.push_str(&render_metrics(report.metrics.as_ref()));

    out
}

/// Render a progress report for the terminal
pub fn render_progress_report(report: &ExerciseProgressReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header("Exercise Progress", &report.exercise_name));
    out.push_str(&format!(
        "Range: last {} ({} -> {})\n",
        report.range,
        report.start_date.format("%Y-%m-%d"),
        report.end_date.format("%Y-%m-%d")
    ));
    out.push_str(&render_metrics(report.summary.as_ref()));
    out.push_str(&render_series(&report.data_points));

    out
}

fn render_header(title: &str, exercise_name: &str) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&title.bold().to_string());
    out.push_str(": ");
    out.push_str(&exercise_name.cyan().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out
}

fn render_metrics(metrics: Option<&MetricsSummary>) -> String {
    let Some(m) = metrics else {
        return format!("{}\n", "No sets tracked yet".yellow());
    };

    let mut out = String::new();
    out.push_str(&format!("Total sets:     {}\n", m.total_sets));
    out.push_str(&format!("Total volume:   {:.1}\n", m.total_volume));
    out.push_str(&format!("Max weight:     {:.1}\n", m.max_weight));
    out.push_str(&format!("Max reps:       {}\n", m.max_reps));
    out.push_str(&format!("Avg weight:     {:.1}\n", m.average_weight));
    out.push_str(&format!("Avg reps:       {:.1}\n", m.average_reps));
    out.push_str(&format!("Avg rest (s):   {}\n", format_optional(m.average_rest)));
    out.push_str(&format!("Avg RPE:        {}\n", format_optional(m.average_rpe)));

    if let (Some(first), Some(last)) = (m.first_recorded_at, m.last_recorded_at) {
        out.push_str(&format!(
            "Recorded:       {} -> {}\n",
            first.format("%Y-%m-%d %H:%M"),
            last.format("%Y-%m-%d %H:%M")
        ));
    }

    out
}

fn render_series(points: &[ProgressDataPoint]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let peak = points
        .iter()
        .map(|p| p.total_volume)
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "Daily volume:".bold()));

    for point in points {
        out.push_str(&format!(
            "  {}  {:<width$} {:>10.1}  ({} sets, max {:.1}, RPE {})\n",
            point.date.format("%Y-%m-%d"),
            volume_bar(point.total_volume, peak).green(),
            point.total_volume,
            point.total_sets,
            point.max_weight,
            format_optional(point.average_rpe),
            width = BAR_WIDTH
        ));
    }

    out
}

/// Bar proportional to `volume / peak`, at least one cell for non-zero volume
fn volume_bar(volume: f64, peak: f64) -> String {
    if peak <= 0.0 || volume <= 0.0 {
        return String::new();
    }
    let cells = ((volume / peak) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(cells.clamp(1, BAR_WIDTH))
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}
