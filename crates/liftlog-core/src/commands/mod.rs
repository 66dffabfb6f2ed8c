//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod history;
pub mod models;
pub mod progress;
pub mod utils;

// Re-export main command functions
pub use history::{execute_history, validate_history_args};
pub use models::{HistoryArgs, ProgressArgs};
pub use progress::{execute_progress, validate_progress_args};
pub use utils::{display_version, validate_set_log_file};
