//! Oddslib CLI
//!
//! Convert betting odds between decimal, American and fractional formats.
//!
//! # Usage
//!
//! ```bash
//! oddslib convert --from american --to fractional -- 110 -200
//! oddslib implied --from decimal 1.91 1.91
//! oddslib docs build
//! oddslib docs multiversion --dry-run
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use oddslib::app::DefaultAppContainer;
use oddslib::cli::{commands, Cli, Commands};
use oddslib::config::AppConfig;
use oddslib::utils::logging::{LogFormat, LogLevel, LoggingConfig};

/// Main entry point for the Oddslib CLI application
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let config_path = AppConfig::locate(cli.config.as_deref(), &cwd);
    let config = AppConfig::discover(config_path.as_deref(), &cwd)
        .context("Failed to load configuration")?;

    init_logging(&cli, &config)?;
    match &config_path {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }
    debug!("Configuration: {:?}", config);

    match cli.command {
        Commands::Convert(args) => {
            info!("Executing convert command");
            commands::convert(args, &config)?;
        }
        Commands::Implied(args) => {
            info!("Executing implied command");
            commands::implied(args, &config)?;
        }
        Commands::Docs(args) => {
            info!("Executing docs command");
            let container = DefaultAppContainer::new();
            commands::docs(args, &config, &container).await?;
        }
    }

    Ok(())
}

/// Logging follows CLI > Env > File > Defaults
fn init_logging(cli: &Cli, config: &AppConfig) -> Result<()> {
    let defaults = LoggingConfig::default();
    let level = match cli.log_level.as_deref() {
        Some(text) => text.parse::<LogLevel>()?,
        None => config.log.level.unwrap_or(defaults.level),
    };
    let format = match cli.log_format.as_deref() {
        Some(text) => text.parse::<LogFormat>()?,
        None => config.log.format.unwrap_or(defaults.format),
    };
    LoggingConfig { level, format }.init();
    Ok(())
}
