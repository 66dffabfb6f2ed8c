//! liftlog CLI
//!
//! Exercise history and progress reports from strength training set logs.
//! Reads a JSON set log, computes summary metrics and a daily progress
//! series, and writes JSON reports or terminal summaries.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use liftlog_core::commands::{
    display_version, execute_history, execute_progress, validate_history_args,
    validate_progress_args, validate_set_log_file, HistoryArgs, ProgressArgs,
};

/// liftlog - Workout progress metrics
#[derive(Parser, Debug)]
#[command(name = "liftlog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Full history of an exercise with lifetime metrics
    History {
        /// Set log JSON (array of sets, or object with `sets`)
        #[arg(short, long)]
        input: PathBuf,

        /// Report timestamp in RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<String>,

        /// Only use sets of this exercise
        #[arg(short, long)]
        exercise: Option<i64>,

        /// Exercise display name
        #[arg(long)]
        name: Option<String>,

        /// Settings file (TOML)
        #[arg(short, long, env = "LIFTLOG_CONFIG")]
        config: Option<PathBuf>,

        /// Output path for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Progress of an exercise over the last week, month or year
    Progress {
        /// Set log JSON (array of sets, or object with `sets`)
        #[arg(short, long)]
        input: PathBuf,

        /// Lookback range: week, month or year (settings default if omitted)
        #[arg(short, long)]
        range: Option<String>,

        /// Anchor instant in RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<String>,

        /// Only use sets of this exercise
        #[arg(short, long)]
        exercise: Option<i64>,

        /// Exercise display name
        #[arg(long)]
        name: Option<String>,

        /// Settings file (TOML)
        #[arg(short, long, env = "LIFTLOG_CONFIG")]
        config: Option<PathBuf>,

        /// Output path for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Check a set log against the record contract
    Validate {
        /// Path to set log JSON
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::History {
            input,
            now,
            exercise,
            name,
            config,
            output,
            summary,
        } => {
            let print_summary = summary || output.is_none();
            let args = HistoryArgs {
                input,
                exercise_id: exercise,
                exercise_name: name,
                now: now_or_clock(now.as_deref())?,
                settings_path: config,
                output_json: output,
                print_summary,
            };

            validate_history_args(&args)?;
            execute_history(args)?;
        }

        Commands::Progress {
            input,
            range,
            now,
            exercise,
            name,
            config,
            output,
            summary,
        } => {
            let print_summary = summary || output.is_none();
            let args = ProgressArgs {
                input,
                exercise_id: exercise,
                exercise_name: name,
                range,
                now: now_or_clock(now.as_deref())?,
                settings_path: config,
                output_json: output,
                print_summary,
            };

            validate_progress_args(&args)?;
            execute_progress(args)?;
        }

        Commands::Validate { file } => {
            validate_set_log_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Resolve `--now`: an RFC 3339 instant in UTC, or the system clock when absent
///
/// **Private** - internal helper for the report commands
fn now_or_clock(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(raw) => parse_instant(raw),
        None => Ok(Utc::now()),
    }
}

/// Parse an RFC 3339 instant into UTC
///
/// **Private** - internal helper for the report commands
fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Invalid --now value `{}` (expected RFC 3339)", raw))?;
    Ok(parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_history_accepts_now() {
        let cli = Cli::try_parse_from([
            "liftlog",
            "history",
            "--input",
            "sets.json",
            "--now",
            "2024-05-10T14:00:00+02:00",
        ])
        .unwrap();

        let Commands::History { now, .. } = cli.command else {
            panic!("expected history command");
        };
        assert_eq!(
            now_or_clock(now.as_deref()).unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_invalid_now_rejected() {
        assert!(now_or_clock(Some("yesterday")).is_err());
    }

    #[test]
    fn test_missing_now_reads_clock() {
        let before = Utc::now();
        let now = now_or_clock(None).unwrap();
        assert!(now >= before);
    }
}
