//! CLI argument definitions for the mail report summarizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mailsum",
    version,
    about = "Summarize Cainiao mail delivery reports",
    long_about = "Batch-process postal delivery report spreadsheets (.xlsx/.xls/.csv).\n\n\
                  Locates columns by fuzzy header matching, keeps rows matching the\n\
                  Cainiao tracking pattern, classifies delivery outcomes, aggregates\n\
                  per-courier counts, and writes a cleaned export file."
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
    /// Process report files and write the cleaned export.
    Process(ProcessArgs),

    /// Show the fixed filter and classification keyword policy.
    Keywords,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Report files or folders containing them (.xlsx/.xls/.csv).
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory for the export file (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Export file name inside the output directory.
    #[arg(long = "export-file", value_name = "NAME")]
    pub export_file: Option<String>,

    /// Analyze and print statistics without writing the export.
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
