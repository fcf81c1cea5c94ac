//! stavis — an interactive teaching tool for static timing analysis.
//!
//! Provides `stavis tui` for the interactive visualizer, `stavis report`
//! for scripted path reports, and `stavis init` for writing a default
//! configuration file.

#![warn(missing_docs)]

mod init;
mod report;
mod tui;

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use stavis_config::{ConfigError, StavisConfig};
use stavis_timing::BufferVariant;

/// stavis — visualize buffer insertion and setup slack on a data path.
#[derive(Parser, Debug)]
#[command(name = "stavis", version, about = "STA buffer-insertion visualizer")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory containing `stavis.toml` (defaults to the current directory).
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Launch the interactive terminal visualizer.
    Tui,
    /// Print a timing report for a scripted buffer chain.
    Report(ReportArgs),
    /// Write a default `stavis.toml` into a directory.
    Init {
        /// Target directory. Defaults to the current directory.
        dir: Option<String>,
    },
}

/// Arguments for the `stavis report` subcommand.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Buffer insertions in path order, comma separated
    /// (e.g. `--buffers normal,lvt,hvt`).
    #[arg(long, value_delimiter = ',')]
    pub buffers: Vec<BufferKind>,

    /// Include the setup-time penalty in the required time.
    #[arg(long)]
    pub setup: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Buffer variant names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BufferKind {
    /// Standard-threshold buffer.
    Normal,
    /// Low-threshold buffer (faster).
    Lvt,
    /// High-threshold buffer (slower).
    Hvt,
}

impl BufferKind {
    /// The engine-side variant for this CLI name.
    pub fn variant(self) -> BufferVariant {
        match self {
            Self::Normal => BufferVariant::Normal,
            Self::Lvt => BufferVariant::LowThreshold,
            Self::Hvt => BufferVariant::HighThreshold,
        }
    }
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable table and summary.
    Text,
    /// Machine-readable JSON breakdown.
    Json,
}

/// Loads `stavis.toml` from the given directory, or the current directory.
pub(crate) fn load_config_dir(dir: Option<&str>) -> Result<StavisConfig, ConfigError> {
    stavis_config::load_config(Path::new(dir.unwrap_or(".")))
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Tui => tui::run(cli.config_dir.as_deref()),
        Command::Report(ref args) => report::run(args, cli.config_dir.as_deref()),
        Command::Init { ref dir } => init::run(dir.as_deref(), cli.quiet),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
