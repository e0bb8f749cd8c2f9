//! Configuration loading and hierarchy management
//!
//! Precedence follows CLI > Env > File > Defaults. The CLI and environment
//! layers are merged by clap before they reach [`AppConfig::resolve_formats`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::model::OddsFormat;
use crate::error::{OddsError, OddsResult};
use crate::utils::logging::{LogFormat, LogLevel};

pub mod formats;

pub use formats::{
    get_input_odds_format, get_output_odds_format, resolve_input_format, resolve_output_format,
    FormatDefaults,
};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "oddslib.toml";

/// Root of `oddslib.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub odds: OddsSection,
    pub docs: DocsConfig,
    pub log: LogSection,
}

/// `[odds]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OddsSection {
    pub input_format: Option<OddsFormat>,
    pub output_format: Option<OddsFormat>,
}

/// `[docs]` section: directories and the external builder executables
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub sphinx_build: String,
    pub sphinx_autobuild: String,
    pub sphinx_multiversion: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("docs"),
            build_dir: PathBuf::from("docs").join("_build"),
            sphinx_build: "sphinx-build".to_string(),
            sphinx_autobuild: "sphinx-autobuild".to_string(),
            sphinx_multiversion: "sphinx-multiversion".to_string(),
        }
    }
}

impl DocsConfig {
    /// HTML output directory inside the build directory
    pub fn html_dir(&self) -> PathBuf {
        self.build_dir.join("html")
    }
}

/// `[log]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: Option<LogLevel>,
    pub format: Option<LogFormat>,
}

impl AppConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> OddsResult<Self> {
        toml::from_str(content).map_err(|e| OddsError::ConfigError {
            message: format!("Failed to parse TOML config: {}", e),
        })
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> OddsResult<Self> {
        if !path.exists() {
            return Err(OddsError::ConfigError {
                message: format!("Config file does not exist: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Config file to read: the explicit path if given, otherwise
    /// `oddslib.toml` in `dir` when present
    pub fn locate(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        candidate.is_file().then_some(candidate)
    }

    /// Load the file picked by [`AppConfig::locate`], otherwise defaults.
    ///
    /// This runs before the subscriber exists, so it does not log.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> OddsResult<Self> {
        match Self::locate(explicit, dir) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// File layer over package defaults
    pub fn format_defaults(&self) -> FormatDefaults {
        let base = FormatDefaults::default();
        FormatDefaults {
            input: self.odds.input_format.unwrap_or(base.input),
            output: self.odds.output_format.unwrap_or(base.output),
        }
    }

    /// Final formats given the CLI/env layer (`from`, `to`) and this file
    pub fn resolve_formats(
        &self,
        from: Option<OddsFormat>,
        to: Option<OddsFormat>,
    ) -> (OddsFormat, OddsFormat) {
        let defaults = self.format_defaults();
        (defaults.resolve_input(from), defaults.resolve_output(to))
    }
}
