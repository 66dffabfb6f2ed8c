//! Set log parsing and validation.
//!
//! This module turns raw JSON set logs into [`SetRecord`]s and audits
//! them against the producer contract (non-negative weight, at least one
//! rep, RPE within 1-10).

pub mod schema;
pub mod set_log;
pub mod validate;

// Re-export main types and functions
pub use schema::{SetLog, SetRecord};
pub use set_log::{load_set_log, parse_set_log};
pub use validate::{validate_records, IssueKind, RecordIssue};
