//! Exact rationals for fractional odds
//!
//! Fractions are kept reduced with a positive denominator. Floating point
//! values are brought into fractional form through [`Fraction::approximate`],
//! which takes the exact binary value of the float and picks the closest
//! fraction whose denominator does not exceed [`MAX_DENOMINATOR`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{OddsError, OddsResult};

/// Largest denominator produced when approximating floats
pub const MAX_DENOMINATOR: i64 = 1000;

/// A reduced rational number `numer / denom` with `denom > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

impl Fraction {
    /// Create a fraction, reducing it to lowest terms
    pub fn new(numer: i64, denom: i64) -> OddsResult<Self> {
        if denom == 0 {
            return Err(OddsError::ZeroDenominator);
        }
        Self::from_i128(numer as i128, denom as i128)
    }

    /// Whole number fraction
    pub const fn from_integer(value: i64) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }

    pub const fn numer(&self) -> i64 {
        self.numer
    }

    pub const fn denom(&self) -> i64 {
        self.denom
    }

    /// Both numerator and denominator are strictly positive
    pub const fn is_positive(&self) -> bool {
        self.numer > 0 && self.denom > 0
    }

    /// Correctly rounded conversion to `f64`
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// `self - other`
    pub fn checked_sub(&self, other: &Fraction) -> OddsResult<Fraction> {
        let n = self.numer as i128 * other.denom as i128 - other.numer as i128 * self.denom as i128;
        let d = self.denom as i128 * other.denom as i128;
        Self::from_i128(n, d)
    }

    /// Closest fraction with a denominator of at most `max_denominator`
    pub fn limit_denominator(&self, max_denominator: i64) -> OddsResult<Fraction> {
        if max_denominator < 1 {
            return Err(OddsError::OutOfRange(
                "max_denominator should be at least 1".to_string(),
            ));
        }
        let (n, d) = limit_ratio(self.numer as i128, self.denom as i128, max_denominator as i128);
        Self::from_i128(n, d)
    }

    /// Approximate a float by the closest fraction with denominator at most
    /// [`MAX_DENOMINATOR`]
    pub fn approximate(value: f64) -> OddsResult<Fraction> {
        if !value.is_finite() {
            return Err(OddsError::OutOfRange(format!(
                "cannot represent {} as a fraction",
                value
            )));
        }
        if value < 0.0 {
            let positive = Self::approximate(-value)?;
            return Ok(Self {
                numer: -positive.numer,
                denom: positive.denom,
            });
        }

        let (mantissa, exponent) = decompose(value);
        if mantissa == 0 {
            return Ok(Self::from_integer(0));
        }

        if exponent >= 0 {
            let whole = (mantissa as i128)
                .checked_shl(exponent as u32)
                .filter(|v| *v <= i64::MAX as i128 && exponent < 64)
                .ok_or_else(|| OddsError::OutOfRange(format!("{} is too large", value)))?;
            return Self::from_i128(whole, 1);
        }

        let shift = (-exponent) as u32;
        if shift > 64 {
            // value < 2^-11, closer to zero than to 1/MAX_DENOMINATOR
            return Ok(Self::from_integer(0));
        }
        let n = mantissa as i128;
        let d = 1i128 << shift;
        let g = gcd(n, d);
        let (n, d) = limit_ratio(n / g, d / g, MAX_DENOMINATOR as i128);
        Self::from_i128(n, d)
    }

    fn from_i128(numer: i128, denom: i128) -> OddsResult<Self> {
        if denom == 0 {
            return Err(OddsError::ZeroDenominator);
        }
        let sign = if denom < 0 { -1 } else { 1 };
        let g = gcd(numer, denom).max(1);
        let numer = sign * numer / g;
        let denom = sign * denom / g;
        let out_of_range = || OddsError::OutOfRange(format!("{}/{}", numer, denom));
        Ok(Self {
            numer: i64::try_from(numer).map_err(|_| out_of_range())?,
            denom: i64::try_from(denom).map_err(|_| out_of_range())?,
        })
    }
}

/// Split a non-negative finite float into `mantissa * 2^exponent`
fn decompose(value: f64) -> (u64, i32) {
    let bits = value.to_bits();
    let raw_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mut mantissa, mut exponent) = if raw_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), raw_exponent - 1075)
    };
    if mantissa == 0 {
        return (0, 0);
    }
    let zeros = mantissa.trailing_zeros();
    mantissa >>= zeros;
    exponent += zeros as i32;
    (mantissa, exponent)
}

fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Best rational approximation of the reduced ratio `n / d` (`d > 0`) with a
/// denominator bounded by `max`
fn limit_ratio(n: i128, d: i128, max: i128) -> (i128, i128) {
    if d <= max {
        return (n, d);
    }
    let original_d = d;
    let (mut p0, mut q0, mut p1, mut q1) = (0i128, 1i128, 1i128, 0i128);
    let (mut n, mut d) = (n, d);
    loop {
        let a = n.div_euclid(d);
        let q2 = q0 + a * q1;
        if q2 > max {
            break;
        }
        let p2 = p0 + a * p1;
        p0 = p1;
        q0 = q1;
        p1 = p2;
        q1 = q2;
        let r = n - a * d;
        n = d;
        d = r;
    }
    let k = (max - q0) / q1;
    let (bn, bd) = (p0 + k * p1, q0 + k * q1);

    // The candidates are 1/(q1*bd) apart and p1/q1 sits d/(q1*original_d)
    // from the exact value.
    if 2 * d * bd <= original_d {
        (p1, q1)
    } else {
        (bn, bd)
    }
}

/// Exact value of a decimal literal such as `-2.75` or `1.5e2`
fn parse_decimal_literal(text: &str) -> Option<(i128, i128)> {
    let (body, exponent) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], text[pos + 1..].parse::<i32>().ok()?),
        None => (text, 0),
    };
    let (negative, body) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body.strip_prefix('+').unwrap_or(body)),
    };
    let (whole, frac) = match body.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (body, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit() || c == '_');
    if !digits(whole) || !digits(frac) {
        return None;
    }

    let mut numer: i128 = 0;
    for c in whole.chars().chain(frac.chars()).filter(|c| *c != '_') {
        numer = numer.checked_mul(10)?.checked_add(c.to_digit(10)? as i128)?;
    }
    let frac_digits = i32::try_from(frac.chars().filter(|c| *c != '_').count()).ok()?;
    let scale = exponent.checked_sub(frac_digits)?;
    let mut denom: i128 = 1;
    if scale >= 0 {
        numer = numer.checked_mul(10i128.checked_pow(scale.unsigned_abs())?)?;
    } else {
        denom = 10i128.checked_pow(scale.unsigned_abs())?;
    }
    if negative {
        numer = -numer;
    }
    Some((numer, denom))
}

impl FromStr for Fraction {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || OddsError::InvalidFraction(s.to_string());

        if let Some((numer, denom)) = text.split_once('/') {
            let numer = numer.trim().parse::<i64>().map_err(|_| invalid())?;
            let denom = denom.trim().parse::<i64>().map_err(|_| invalid())?;
            return Fraction::new(numer, denom);
        }

        let (numer, denom) = parse_decimal_literal(text).ok_or_else(invalid)?;
        Self::from_i128(numer, denom)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numer as i128 * other.denom as i128;
        let rhs = other.numer as i128 * self.denom as i128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
