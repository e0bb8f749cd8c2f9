//! Default odds format resolution
//!
//! An explicit format always wins. Otherwise `INPUT_ODDS_FORMAT` /
//! `OUTPUT_ODDS_FORMAT` are consulted, and finally the fallback defaults.

use tracing::debug;

use crate::domain::model::{OddsFormat, DEFAULT_INPUT_FORMAT, DEFAULT_OUTPUT_FORMAT};
use crate::error::OddsResult;

/// Environment variable holding the default input format
pub const INPUT_ENV: &str = "INPUT_ODDS_FORMAT";

/// Environment variable holding the default output format
pub const OUTPUT_ENV: &str = "OUTPUT_ODDS_FORMAT";

/// Input and output formats used when a caller does not name one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDefaults {
    pub input: OddsFormat,
    pub output: OddsFormat,
}

impl Default for FormatDefaults {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_FORMAT,
            output: DEFAULT_OUTPUT_FORMAT,
        }
    }
}

impl FormatDefaults {
    /// Layer values from `lookup` over `fallback`. Unset keys keep the
    /// fallback, set keys must name a valid format.
    pub fn from_lookup<F>(lookup: F, fallback: FormatDefaults) -> OddsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = lookup_format(&lookup, INPUT_ENV, fallback.input)?;
        let output = lookup_format(&lookup, OUTPUT_ENV, fallback.output)?;
        debug!(%input, %output, "Resolved default odds formats");
        Ok(Self { input, output })
    }

    pub fn resolve_input(&self, fmt: Option<OddsFormat>) -> OddsFormat {
        fmt.unwrap_or(self.input)
    }

    pub fn resolve_output(&self, fmt: Option<OddsFormat>) -> OddsFormat {
        fmt.unwrap_or(self.output)
    }
}

fn lookup_format<F>(lookup: &F, key: &str, fallback: OddsFormat) -> OddsResult<OddsFormat>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key);
    OddsFormat::parse(value.as_deref(), Some(fallback))
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Input odds format from the environment, falling back to the package default
pub fn get_input_odds_format() -> OddsResult<OddsFormat> {
    lookup_format(&env_lookup, INPUT_ENV, DEFAULT_INPUT_FORMAT)
}

/// Output odds format from the environment, falling back to the package default
pub fn get_output_odds_format() -> OddsResult<OddsFormat> {
    lookup_format(&env_lookup, OUTPUT_ENV, DEFAULT_OUTPUT_FORMAT)
}

/// Concrete input format, preferring the explicit argument over the environment
pub fn resolve_input_format(fmt: Option<OddsFormat>) -> OddsResult<OddsFormat> {
    match fmt {
        Some(format) => Ok(format),
        None => get_input_odds_format(),
    }
}

/// Concrete output format, preferring the explicit argument over the environment
pub fn resolve_output_format(fmt: Option<OddsFormat>) -> OddsResult<OddsFormat> {
    match fmt {
        Some(format) => Ok(format),
        None => get_output_odds_format(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_unset_lookup_keeps_fallback() {
        let defaults = FormatDefaults::from_lookup(lookup_from(&[]), FormatDefaults::default()).unwrap();
        assert_eq!(defaults.input, DEFAULT_INPUT_FORMAT);
        assert_eq!(defaults.output, DEFAULT_OUTPUT_FORMAT);
    }

    #[test]
    fn test_lookup_overrides_fallback() {
        let defaults = FormatDefaults::from_lookup(
            lookup_from(&[(INPUT_ENV, "decimal"), (OUTPUT_ENV, "Fractional")]),
            FormatDefaults::default(),
        )
        .unwrap();
        assert_eq!(defaults.input, OddsFormat::Decimal);
        assert_eq!(defaults.output, OddsFormat::Fractional);
    }

    #[test]
    fn test_lookup_rejects_unknown_format() {
        let result = FormatDefaults::from_lookup(
            lookup_from(&[(INPUT_ENV, "hongkong")]),
            FormatDefaults::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_prefers_argument() {
        let defaults = FormatDefaults {
            input: OddsFormat::Decimal,
            output: OddsFormat::Fractional,
        };
        assert_eq!(
            defaults.resolve_input(Some(OddsFormat::American)),
            OddsFormat::American
        );
        assert_eq!(defaults.resolve_input(None), OddsFormat::Decimal);
        assert_eq!(defaults.resolve_output(None), OddsFormat::Fractional);
    }

    #[test]
    fn test_resolve_explicit_format_skips_environment() {
        assert_eq!(
            resolve_input_format(Some(OddsFormat::Fractional)).unwrap(),
            OddsFormat::Fractional
        );
        assert_eq!(
            resolve_output_format(Some(OddsFormat::Decimal)).unwrap(),
            OddsFormat::Decimal
        );
    }
}
