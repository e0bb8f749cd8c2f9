//! Utility modules for Oddslib

pub mod logging;

pub use logging::{LogFormat, LogLevel, LoggingConfig};
