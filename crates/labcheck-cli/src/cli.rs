//! CLI argument definitions for labcheck.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "labcheck",
    version,
    about = "Check a patient's laboratory results against range and interaction rules",
    long_about = "Check a patient's laboratory results against two rule catalogs.\n\n\
                  Range rules require a test value to lie strictly between a minimum and\n\
                  maximum. Interaction rules flag a forbidden combination of two test\n\
                  values. Every failing test is listed with the rules it violated."
)]
pub struct Cli {
    /// Tab-separated range rule file (Id, Test, Min, Max).
    #[arg(value_name = "RANGE_RULES")]
    pub range_rules: PathBuf,

    /// Tab-separated interaction rule file
    /// (Id, Test1, Comparison1, Value1, Test2, Comparison2, Value2).
    #[arg(value_name = "INTERACTION_RULES")]
    pub interaction_rules: PathBuf,

    /// Patient file: name on the first line, then one `Test<TAB>Value` per line.
    #[arg(value_name = "PATIENT")]
    pub patient: PathBuf,

    /// Output format for the annotated record.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow patient names and measured values in log output.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
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
