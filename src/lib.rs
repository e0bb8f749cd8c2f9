//! Oddslib
//!
//! Conversions between decimal, American and fractional betting odds, plus
//! implied probability helpers. Every conversion goes through decimal odds.
//!
//! ```
//! use oddslib::{convert_odds, OddsFormat};
//!
//! let odds = convert_odds(-110, Some(OddsFormat::American), Some(OddsFormat::Fractional)).unwrap();
//! assert_eq!(odds.to_string(), "10/11");
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use config::{
    get_input_odds_format, get_output_odds_format, resolve_input_format, resolve_output_format,
    FormatDefaults,
};
pub use domain::fraction::{Fraction, MAX_DENOMINATOR};
pub use domain::model::{Odds, OddsFormat, OddsInput, DEFAULT_INPUT_FORMAT, DEFAULT_OUTPUT_FORMAT};
pub use domain::probability::{
    decimal_from_probability, fair_decimal_odds, implied_probability, overround, remove_vig,
    BookSummary,
};
pub use domain::rules::{
    convert_odds, convert_odds_many, decimal_to_odds, decimal_to_odds_many, odds_to_decimal,
    odds_to_decimal_many,
};
pub use error::{OddsError, OddsResult};
