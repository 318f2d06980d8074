//! CLI argument definitions for the referral dashboard.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "referral-dashboard",
    version,
    about = "Referral dashboard - classify pending referral tasks and build the report workbook",
    long_about = "Read a referral export (XLSX or CSV), validate its columns, apply the\n\
                  pending-task rules, and write a styled multi-sheet report workbook.\n\
                  Prints a per-category summary to the terminal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a referral export and write the report workbook.
    Report(ReportArgs),

    /// List the required export columns.
    Columns,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Referral export file (.xlsx, .xls, or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Workbook destination (default: referral_dashboard_<timestamp>.xlsx
    /// next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Evaluate the rules as of this date instead of today (YYYY-MM-DD).
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Classify and print the summary without writing the workbook.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
