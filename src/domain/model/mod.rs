// Domain models - Odds formats, caller inputs and converted quotes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::fraction::Fraction;
use crate::error::{OddsError, OddsResult};

#[cfg(test)]
mod tests;

/// Supported odds representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OddsFormat {
    /// Total return per unit stake, e.g. `2.5`
    Decimal,
    /// Moneyline, e.g. `+150` or `-110`
    American,
    /// Profit to stake ratio, e.g. `3/2`
    Fractional,
}

/// Format assumed for inputs when nothing else is configured
pub const DEFAULT_INPUT_FORMAT: OddsFormat = OddsFormat::American;

/// Format produced when nothing else is configured
pub const DEFAULT_OUTPUT_FORMAT: OddsFormat = OddsFormat::American;

impl OddsFormat {
    /// All formats, in display order
    pub const ALL: [OddsFormat; 3] = [
        OddsFormat::Decimal,
        OddsFormat::American,
        OddsFormat::Fractional,
    ];

    /// Parse an optional format name, falling back to `default`.
    ///
    /// Parsing is case-insensitive. `default` must be supplied when `value`
    /// is `None`.
    pub fn parse(value: Option<&str>, default: Option<OddsFormat>) -> OddsResult<Self> {
        match value {
            Some(text) => text.parse(),
            None => default.ok_or(OddsError::MissingFormat),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            OddsFormat::Decimal => "decimal",
            OddsFormat::American => "american",
            OddsFormat::Fractional => "fractional",
        }
    }
}

impl FromStr for OddsFormat {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decimal" => Ok(OddsFormat::Decimal),
            "american" => Ok(OddsFormat::American),
            "fractional" => Ok(OddsFormat::Fractional),
            _ => Err(OddsError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OddsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single odds quote as handed in by a caller
///
/// Which variants make sense depends on the input format: decimal and
/// American quotes are numbers (text is parsed as a float), fractional quotes
/// accept every variant.
#[derive(Debug, Clone, PartialEq)]
pub enum OddsInput {
    Number(f64),
    Text(String),
    /// `(numerator, denominator)`
    Pair(i64, i64),
    Fraction(Fraction),
}

impl OddsInput {
    /// Numeric value for decimal and American quotes
    pub fn as_number(&self) -> OddsResult<f64> {
        match self {
            OddsInput::Number(value) => Ok(*value),
            OddsInput::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                OddsError::InvalidOdds(format!("Could not parse odds value: {}", text))
            }),
            OddsInput::Pair(n, d) => Err(OddsError::InvalidOdds(format!(
                "Numeric odds expected, received pair ({}, {})",
                n, d
            ))),
            OddsInput::Fraction(frac) => Err(OddsError::InvalidOdds(format!(
                "Numeric odds expected, received fraction {}",
                frac
            ))),
        }
    }

    /// Fractional value; floats are approximated to a bounded denominator
    pub fn as_fraction(&self) -> OddsResult<Fraction> {
        match self {
            OddsInput::Number(value) => Fraction::approximate(*value),
            OddsInput::Text(text) => text.parse(),
            OddsInput::Pair(n, d) => Fraction::new(*n, *d),
            OddsInput::Fraction(frac) => Ok(*frac),
        }
    }
}

impl fmt::Display for OddsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddsInput::Number(value) => write!(f, "{}", value),
            OddsInput::Text(text) => f.write_str(text),
            OddsInput::Pair(n, d) => write!(f, "({}, {})", n, d),
            OddsInput::Fraction(frac) => write!(f, "{}", frac),
        }
    }
}

impl From<f64> for OddsInput {
    fn from(value: f64) -> Self {
        OddsInput::Number(value)
    }
}

impl From<i32> for OddsInput {
    fn from(value: i32) -> Self {
        OddsInput::Number(value as f64)
    }
}

impl From<i64> for OddsInput {
    fn from(value: i64) -> Self {
        OddsInput::Number(value as f64)
    }
}

impl From<&str> for OddsInput {
    fn from(value: &str) -> Self {
        OddsInput::Text(value.to_string())
    }
}

impl From<String> for OddsInput {
    fn from(value: String) -> Self {
        OddsInput::Text(value)
    }
}

impl From<(i64, i64)> for OddsInput {
    fn from((numer, denom): (i64, i64)) -> Self {
        OddsInput::Pair(numer, denom)
    }
}

impl From<Fraction> for OddsInput {
    fn from(value: Fraction) -> Self {
        OddsInput::Fraction(value)
    }
}

/// A quote expressed in a concrete format
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Odds {
    Decimal(f64),
    American(f64),
    Fractional(Fraction),
}

impl Odds {
    pub const fn format(&self) -> OddsFormat {
        match self {
            Odds::Decimal(_) => OddsFormat::Decimal,
            Odds::American(_) => OddsFormat::American,
            Odds::Fractional(_) => OddsFormat::Fractional,
        }
    }

    /// Numeric value, `None` for fractional quotes
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Odds::Decimal(value) | Odds::American(value) => Some(*value),
            Odds::Fractional(_) => None,
        }
    }

    pub const fn as_fraction(&self) -> Option<Fraction> {
        match self {
            Odds::Fractional(frac) => Some(*frac),
            _ => None,
        }
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Odds::Decimal(value) => write!(f, "{}", value),
            Odds::American(value) if *value > 0.0 => write!(f, "+{}", value),
            Odds::American(value) => write!(f, "{}", value),
            Odds::Fractional(frac) => write!(f, "{}", frac),
        }
    }
}

impl From<Odds> for OddsInput {
    fn from(value: Odds) -> Self {
        match value {
            Odds::Decimal(v) | Odds::American(v) => OddsInput::Number(v),
            Odds::Fractional(frac) => OddsInput::Fraction(frac),
        }
    }
}
