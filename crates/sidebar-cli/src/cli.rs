//! CLI argument definitions for the sidebar replay tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sidebar-replay",
    version,
    about = "Replay annotation sidebar actions through the client-state store",
    long_about = "Replay a JSON-lines script of sidebar actions through the store.\n\n\
                  Each line is one action object, e.g. {\"action\": \"selectTab\", \"tab\": \"notes\"}.\n\
                  Blank lines and lines starting with '#' are skipped."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Replay an action script and print the resulting state.
    Replay(ReplayArgs),

    /// List the sort keys each tab offers.
    SortKeys,
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// Path to the JSON-lines action script.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Host configuration (.json or .toml) used to initialize the store.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the final state as JSON instead of a summary table.
    #[arg(long = "json")]
    pub json: bool,
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
