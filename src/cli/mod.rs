//! CLI module for Oddslib
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// Oddslib
///
/// Convert betting odds between decimal, American and fractional formats,
/// inspect implied probabilities, and drive the documentation build.
#[derive(Parser, Debug)]
#[command(name = "oddslib")]
#[command(about = "Oddslib - Odds format conversions and implied probabilities")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "ODDSLIB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format (pretty, compact, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Config file (default: ./oddslib.toml when present)
    #[arg(long, global = true, env = "ODDSLIB_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert odds between formats
    Convert(args::ConvertArgs),
    /// Show implied and margin-free probabilities for a market
    Implied(args::ImpliedArgs),
    /// Build, serve or clean the documentation
    Docs(args::DocsArgs),
}
