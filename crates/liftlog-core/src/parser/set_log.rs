//! Set log reader.
//!
//! Accepts either a bare JSON array of sets or an object carrying the
//! exercise identity next to a `sets` array. Anything else, `null`
//! included, is rejected before any aggregation runs.

use super::schema::{SetLog, SetRecord};
use crate::utils::error::{AggregationError, ParseError};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a set log from raw JSON
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw` - Set log JSON (array of sets, or object with `sets`)
///
/// # Errors
/// * `ParseError::Aggregation(InvalidInput)` - null document, missing or non-array `sets`
/// * `ParseError::JsonError` - a record does not match the set schema
pub fn parse_set_log(raw: &serde_json::Value) -> Result<SetLog, ParseError> {
    match raw {
        serde_json::Value::Null => Err(invalid_input("set log is null")),

        serde_json::Value::Array(_) => {
            debug!("Set log is a bare array");
            let sets: Vec<SetRecord> = serde_json::from_value(raw.clone())?;
            Ok(SetLog {
                exercise_id: None,
                exercise_name: None,
                sets,
            })
        }

        serde_json::Value::Object(obj) => match obj.get("sets") {
            None | Some(serde_json::Value::Null) => {
                Err(invalid_input("set log object has no `sets` collection"))
            }
            Some(serde_json::Value::Array(_)) => {
                let log: SetLog = serde_json::from_value(raw.clone())?;
                debug!(
                    "Set log for exercise {:?} with {} sets",
                    log.exercise_id,
                    log.sets.len()
                );
                Ok(log)
            }
            Some(_) => Err(invalid_input("`sets` must be a JSON array")),
        },

        _ => Err(invalid_input("set log must be a JSON array or object")),
    }
}

/// Read and parse a set log file
///
/// **Public** - used by the commands
///
/// # Errors
/// * `ParseError::IoError` - file cannot be opened
/// * `ParseError::JsonError` - file is not valid JSON
/// * anything [`parse_set_log`] rejects
pub fn load_set_log(input_path: impl AsRef<Path>) -> Result<SetLog, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading set log from: {}", input_path.display());

    let file = File::open(input_path)?;
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    parse_set_log(&raw)
}

fn invalid_input(message: &str) -> ParseError {
    ParseError::Aggregation(AggregationError::InvalidInput(message.to_string()))
}
