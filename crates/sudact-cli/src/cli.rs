//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Sudact CLI - Extract metadata and narrative zones from court rulings.
#[derive(Debug, Parser)]
#[command(name = "sudact")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SUDACT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one summary line per document)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a single ruling
    Parse(ParseArgs),

    /// Parse every ruling in a directory
    Batch(BatchArgs),

    /// List the canonical regions
    Regions,

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Ruling file: raw HTML, or a JSON document with `html`
    pub file: PathBuf,

    /// Document identifier for HTML input
    #[arg(long, default_value = "0")]
    pub id: i64,

    /// Source URL for HTML input
    #[arg(long, default_value = "")]
    pub url: String,

    /// Extract metadata only and skip the body classifier
    #[arg(long, conflicts_with = "output")]
    pub metadata_only: bool,

    /// Write the JSON record into this directory, named after the case
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Directory with `.html`, `.htm` or `.json` rulings
    pub dir: PathBuf,

    /// Documents processed at the same time
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Extract metadata only and skip the body classifier
    #[arg(long, conflicts_with = "output")]
    pub metadata_only: bool,

    /// Write one JSON record per document into this directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
