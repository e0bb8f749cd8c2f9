//! Implied probability helpers over decimal odds
//!
//! The bookmaker margin is removed proportionally: each leg keeps its share
//! of the book's total implied probability.

use serde::Serialize;

use crate::error::{OddsError, OddsResult};

/// Probability implied by a decimal price
pub fn implied_probability(decimal_odds: f64) -> OddsResult<f64> {
    if decimal_odds.is_nan() || decimal_odds < 1.0 {
        return Err(OddsError::InvalidOdds(
            "Decimal odds must be >= 1.0".to_string(),
        ));
    }
    Ok(1.0 / decimal_odds)
}

/// Decimal price for a probability in `(0, 1]`
pub fn decimal_from_probability(probability: f64) -> OddsResult<f64> {
    if !(probability > 0.0 && probability <= 1.0) {
        return Err(OddsError::InvalidProbability(format!(
            "{} is outside (0, 1]",
            probability
        )));
    }
    Ok(1.0 / probability)
}

/// Sum of implied probabilities minus one
pub fn overround(decimal_odds: &[f64]) -> OddsResult<f64> {
    Ok(book_total(decimal_odds)? - 1.0)
}

/// Margin-free probabilities, one per leg, summing to one
pub fn remove_vig(decimal_odds: &[f64]) -> OddsResult<Vec<f64>> {
    let total = book_total(decimal_odds)?;
    Ok(decimal_odds.iter().map(|d| (1.0 / d) / total).collect())
}

/// Decimal prices with the margin removed
pub fn fair_decimal_odds(decimal_odds: &[f64]) -> OddsResult<Vec<f64>> {
    Ok(remove_vig(decimal_odds)?.into_iter().map(|p| 1.0 / p).collect())
}

fn book_total(decimal_odds: &[f64]) -> OddsResult<f64> {
    if decimal_odds.is_empty() {
        return Err(OddsError::InvalidOdds(
            "A book needs at least one price".to_string(),
        ));
    }
    decimal_odds
        .iter()
        .map(|d| implied_probability(*d))
        .sum::<OddsResult<f64>>()
}

/// One leg of a [`BookSummary`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegSummary {
    pub decimal: f64,
    pub implied_probability: f64,
    pub fair_probability: f64,
    pub fair_decimal: f64,
}

/// Implied and margin-free view of a set of prices on one market
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookSummary {
    pub legs: Vec<LegSummary>,
    pub overround: f64,
}

impl BookSummary {
    pub fn from_decimals(decimal_odds: &[f64]) -> OddsResult<Self> {
        let fair = remove_vig(decimal_odds)?;
        let legs = decimal_odds
            .iter()
            .zip(fair)
            .map(|(decimal, fair_probability)| LegSummary {
                decimal: *decimal,
                implied_probability: 1.0 / decimal,
                fair_probability,
                fair_decimal: 1.0 / fair_probability,
            })
            .collect();
        Ok(Self {
            legs,
            overround: overround(decimal_odds)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_implied_probability() {
        assert_close(implied_probability(2.0).unwrap(), 0.5);
        assert_close(implied_probability(4.0).unwrap(), 0.25);
        assert!(implied_probability(0.5).is_err());
        assert!(implied_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_decimal_from_probability() {
        assert_close(decimal_from_probability(0.25).unwrap(), 4.0);
        assert_close(decimal_from_probability(1.0).unwrap(), 1.0);
        assert!(decimal_from_probability(0.0).is_err());
        assert!(decimal_from_probability(1.5).is_err());
    }

    #[test]
    fn test_overround_two_way_book() {
        let price = 1.0 / 0.55;
        assert_close(overround(&[price, price]).unwrap(), 0.1);
        assert_close(overround(&[2.0, 2.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_remove_vig_sums_to_one() {
        let fair = remove_vig(&[1.5, 3.5, 6.0]).unwrap();
        assert_close(fair.iter().sum::<f64>(), 1.0);
        assert!(fair[0] > fair[1] && fair[1] > fair[2]);
    }

    #[test]
    fn test_fair_decimal_odds_symmetric_book() {
        let price = 1.0 / 0.525;
        let fair = fair_decimal_odds(&[price, price]).unwrap();
        assert_close(fair[0], 2.0);
        assert_close(fair[1], 2.0);
    }

    #[test]
    fn test_empty_book_rejected() {
        assert!(overround(&[]).is_err());
        assert!(BookSummary::from_decimals(&[]).is_err());
    }

    #[test]
    fn test_book_summary() {
        let summary = BookSummary::from_decimals(&[2.0, 2.0]).unwrap();
        assert_eq!(summary.legs.len(), 2);
        assert_close(summary.overround, 0.0);
        assert_close(summary.legs[0].fair_probability, 0.5);
        assert_close(summary.legs[1].fair_decimal, 2.0);
    }
}
