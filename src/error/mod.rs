//! Error handling module for Oddslib

use thiserror::Error;

/// Main error type for Oddslib operations
#[derive(Error, Debug)]
pub enum OddsError {
    /// Odds format string not recognised
    #[error("Unsupported odds format: {0}")]
    UnsupportedFormat(String),

    /// No format given and no default to fall back on
    #[error("Odds format value is required when no default is provided")]
    MissingFormat,

    /// A quote that is invalid for its format
    #[error("{0}")]
    InvalidOdds(String),

    /// Fraction text that could not be parsed
    #[error("Invalid fraction: {0}")]
    InvalidFraction(String),

    /// Fraction with a zero denominator
    #[error("Fraction denominator cannot be zero")]
    ZeroDenominator,

    /// Value does not fit the fraction representation
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Probability outside of (0, 1]
    #[error("Invalid probability: {0}")]
    InvalidProbability(String),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    /// External documentation tool could not be started
    #[error("Documentation tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// External documentation tool exited unsuccessfully
    #[error("{tool} exited with status {status}")]
    DocsToolFailed { tool: String, status: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Oddslib operations
pub type OddsResult<T> = std::result::Result<T, OddsError>;
