//! liftlog core library
//!
//! Progress metrics for strength training: summary statistics over set
//! records, day-bucketed progress series, and lookback range resolution.
//! This exposes the internal modules for the CLI and for testing.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod report;
pub mod utils;
