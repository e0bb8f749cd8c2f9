//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::app::DocsTarget;

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input odds format (decimal, american, fractional)
    #[arg(short, long, env = "INPUT_ODDS_FORMAT")]
    pub from: Option<String>,

    /// Output odds format (decimal, american, fractional)
    #[arg(short, long, env = "OUTPUT_ODDS_FORMAT")]
    pub to: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Odds to convert, e.g. -110 150 or 5/2
    #[arg(required = true, allow_negative_numbers = true)]
    pub odds: Vec<String>,
}

/// Arguments for the implied command
#[derive(Args, Debug)]
pub struct ImpliedArgs {
    /// Input odds format (decimal, american, fractional)
    #[arg(short, long, env = "INPUT_ODDS_FORMAT")]
    pub from: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Prices of every outcome in the market
    #[arg(required = true, allow_negative_numbers = true)]
    pub odds: Vec<String>,
}

/// Arguments for the docs command
#[derive(Args, Debug)]
pub struct DocsArgs {
    /// Print the steps instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Documentation source directory
    #[arg(long, global = true)]
    pub source_dir: Option<PathBuf>,

    /// Build directory (HTML goes to <build-dir>/html)
    #[arg(long, global = true)]
    pub build_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub target: DocsCommand,
}

/// Documentation targets
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum DocsCommand {
    /// Build the HTML documentation
    Build,
    /// Serve the documentation with live reload
    Live,
    /// Remove the build directory
    Clean,
    /// Clean, then build every released version
    Multiversion,
}

impl From<DocsCommand> for DocsTarget {
    fn from(command: DocsCommand) -> Self {
        match command {
            DocsCommand::Build => DocsTarget::Build,
            DocsCommand::Live => DocsTarget::Live,
            DocsCommand::Clean => DocsTarget::Clean,
            DocsCommand::Multiversion => DocsTarget::Multiversion,
        }
    }
}
