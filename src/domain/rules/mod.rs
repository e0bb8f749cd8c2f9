// Conversion rules - every conversion is routed through decimal odds

use tracing::trace;

use crate::config::formats::{resolve_input_format, resolve_output_format};
use crate::domain::fraction::Fraction;
use crate::domain::model::{Odds, OddsFormat, OddsInput};
use crate::error::{OddsError, OddsResult};


/// Convert one quote from `odds_format` into decimal odds.
///
/// When `odds_format` is `None` the input format comes from
/// `INPUT_ODDS_FORMAT`, or the package default.
pub fn odds_to_decimal(
    odds: impl Into<OddsInput>,
    odds_format: Option<OddsFormat>,
) -> OddsResult<f64> {
    let format = resolve_input_format(odds_format)?;
    let odds = odds.into();
    match format {
        OddsFormat::Decimal => odds.as_number(),
        OddsFormat::American => {
            let value = odds.as_number()?;
            validate_american(&[value])?;
            Ok(american_to_decimal(value))
        }
        OddsFormat::Fractional => fractional_to_decimal(&odds),
    }
}

/// Batch form of [`odds_to_decimal`]. Either every quote converts or the
/// whole batch fails.
pub fn odds_to_decimal_many(
    odds: &[OddsInput],
    odds_format: Option<OddsFormat>,
) -> OddsResult<Vec<f64>> {
    let format = resolve_input_format(odds_format)?;
    trace!(count = odds.len(), %format, "Converting batch to decimal");
    match format {
        OddsFormat::Decimal => odds.iter().map(OddsInput::as_number).collect(),
        OddsFormat::American => {
            let values = odds
                .iter()
                .map(OddsInput::as_number)
                .collect::<OddsResult<Vec<f64>>>()?;
            validate_american(&values)?;
            Ok(values.into_iter().map(american_to_decimal).collect())
        }
        OddsFormat::Fractional => odds.iter().map(fractional_to_decimal).collect(),
    }
}

/// Convert decimal odds into `target_format`.
///
/// When `target_format` is `None` the output format comes from
/// `OUTPUT_ODDS_FORMAT`, or the package default.
pub fn decimal_to_odds(decimal_odds: f64, target_format: Option<OddsFormat>) -> OddsResult<Odds> {
    let format = resolve_output_format(target_format)?;
    validate_decimal(&[decimal_odds])?;
    decimal_to(decimal_odds, format)
}

/// Batch form of [`decimal_to_odds`]
pub fn decimal_to_odds_many(
    decimal_odds: &[f64],
    target_format: Option<OddsFormat>,
) -> OddsResult<Vec<Odds>> {
    let format = resolve_output_format(target_format)?;
    validate_decimal(decimal_odds)?;
    decimal_odds
        .iter()
        .map(|value| decimal_to(*value, format))
        .collect()
}

/// Convert a quote from `from_format` into `to_format` via decimal odds
pub fn convert_odds(
    odds: impl Into<OddsInput>,
    from_format: Option<OddsFormat>,
    to_format: Option<OddsFormat>,
) -> OddsResult<Odds> {
    let intermediate = odds_to_decimal(odds, from_format)?;
    decimal_to_odds(intermediate, to_format)
}

/// Batch form of [`convert_odds`]
pub fn convert_odds_many(
    odds: &[OddsInput],
    from_format: Option<OddsFormat>,
    to_format: Option<OddsFormat>,
) -> OddsResult<Vec<Odds>> {
    let intermediate = odds_to_decimal_many(odds, from_format)?;
    decimal_to_odds_many(&intermediate, to_format)
}

fn validate_american(values: &[f64]) -> OddsResult<()> {
    if values.iter().any(|v| *v == 0.0) {
        return Err(OddsError::InvalidOdds(
            "American odds cannot be zero".to_string(),
        ));
    }
    let bad: Vec<String> = values
        .iter()
        .filter(|v| !v.is_finite() || v.abs() < 100.0)
        .map(|v| format!("{:?}", v))
        .collect();
    if !bad.is_empty() {
        return Err(OddsError::InvalidOdds(format!(
            "American odds must be <= -100 or >= 100; received: {}",
            bad.join(", ")
        )));
    }
    Ok(())
}

fn american_to_decimal(value: f64) -> f64 {
    if value > 0.0 {
        value / 100.0 + 1.0
    } else {
        100.0 / value.abs() + 1.0
    }
}

fn fractional_to_decimal(odds: &OddsInput) -> OddsResult<f64> {
    let frac = odds.as_fraction()?;
    if !frac.is_positive() {
        return Err(OddsError::InvalidOdds(
            "Fractional odds require positive numerator and denominator".to_string(),
        ));
    }
    Ok(frac.to_f64() + 1.0)
}

fn validate_decimal(values: &[f64]) -> OddsResult<()> {
    if values.iter().any(|v| v.is_nan() || *v < 1.0) {
        return Err(OddsError::InvalidOdds(
            "Decimal odds must be >= 1.0".to_string(),
        ));
    }
    Ok(())
}

fn decimal_to(value: f64, format: OddsFormat) -> OddsResult<Odds> {
    match format {
        OddsFormat::Decimal => Ok(Odds::Decimal(value)),
        OddsFormat::American => decimal_to_american(value).map(Odds::American),
        OddsFormat::Fractional => decimal_to_fractional(value).map(Odds::Fractional),
    }
}

fn decimal_to_american(value: f64) -> OddsResult<f64> {
    let frac = Fraction::approximate(value)?;
    let ratio = frac.checked_sub(&Fraction::from_integer(1))?;
    if frac >= Fraction::from_integer(2) {
        return Ok(ratio.numer() as f64 * 100.0 / ratio.denom() as f64);
    }
    if ratio.numer() == 0 {
        return Err(OddsError::InvalidOdds(
            "Decimal odds of 1.0 cannot be represented as American odds".to_string(),
        ));
    }
    Ok(-100.0 * ratio.denom() as f64 / ratio.numer() as f64)
}

fn decimal_to_fractional(value: f64) -> OddsResult<Fraction> {
    let frac = Fraction::approximate(value - 1.0)?;
    if !frac.is_positive() {
        return Err(OddsError::InvalidOdds(
            "Fractional odds require positive ratio".to_string(),
        ));
    }
    Ok(frac)
}
