//! Output writers for reports.
//!
//! This module handles writing reports:
//! - JSON reports (pretty and compact) to disk
//! - Text summaries for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report};
pub use text::{render_history_report, render_progress_report};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
