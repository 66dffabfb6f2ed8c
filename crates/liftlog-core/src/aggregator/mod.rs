//! Aggregation of set records into progress metrics.
//!
//! This module reduces a snapshot of set records into:
//! - A single summary (totals, maxima, averages, temporal bounds)
//! - A day-bucketed series for progress charts
//! - The concrete interval behind a symbolic lookback range
//!
//! Everything here is a pure function of its arguments.

mod numeric;
pub mod range;
pub mod summary;
pub mod timeseries;

// Re-export main types and functions
pub use range::{
    resolve_range, resolve_range_token, resolve_range_with_offset, select_in_range, DateRange,
    ProgressRange,
};
pub use summary::{summarize, MetricsSummary};
pub use timeseries::{bucketize, bucketize_with_offset, day_key, ProgressDataPoint};
