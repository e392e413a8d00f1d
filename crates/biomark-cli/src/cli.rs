//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "biomark",
    version,
    about = "Normalize lab report biomarker readings against a canonical catalog",
    long_about = "Ingest lab reports, structure their readings, and map each\n\
                  provider-specific biomarker name onto the canonical catalog\n\
                  with a confidence tier and an optimal-range flag."
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

    /// Reference data directory (default: BIOMARK_REFERENCE_DIR or the
    /// workspace reference/ directory).
    #[arg(long = "reference-dir", value_name = "DIR", global = true)]
    pub reference_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a lab report and print matched readings.
    Process(ProcessArgs),

    /// List the canonical catalog with registered aliases.
    Catalog,

    /// Inspect or extend the provider alias table.
    #[command(subcommand)]
    Alias(AliasCommand),

    /// Verify the reference directory against its manifest.
    Doctor,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the report document.
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Lab provider that produced the report (e.g. QUEST, LABCORP).
    #[arg(long = "provider", value_name = "PROVIDER")]
    pub provider: String,

    /// Pre-structured extraction payload (JSON) to use instead of calling
    /// the structuring service.
    #[arg(long = "structured", value_name = "JSON")]
    pub structured: Option<PathBuf>,

    /// Print the full processing result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Also write the processing result JSON to a file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum AliasCommand {
    /// Register a provider alias for an existing catalog entry.
    Add(AliasAddArgs),

    /// Show alias totals per provider.
    Stats,
}

#[derive(Parser)]
pub struct AliasAddArgs {
    /// Canonical biomarker code (e.g. TOTAL_TESTOSTERONE).
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Lab provider the alias belongs to.
    #[arg(value_name = "PROVIDER")]
    pub provider: String,

    /// Alias text exactly as printed by the provider.
    #[arg(value_name = "ALIAS")]
    pub alias: String,

    /// Persist the alias to the overlay file next to the reference tables.
    #[arg(long = "save")]
    pub save: bool,
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
