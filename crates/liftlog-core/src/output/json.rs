//! JSON report writer.
//!
//! Writes any serialisable report to a JSON file, pretty or compact.

use crate::utils::error::OutputError;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report to write
/// * `output_path` - Path to output JSON file
/// * `pretty` - Indent the output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = build_history_report(&exercise, &sets, now);
/// write_report(&report, "history.json", true)?;
/// ```
pub fn write_report<T: Serialize>(
    report: &T,
    output_path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    super::validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }
    writer.flush()?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a report back from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report<T: DeserializeOwned>(input_path: impl AsRef<Path>) -> Result<T, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report = serde_json::from_reader(BufReader::new(file))?;

    Ok(report)
}
