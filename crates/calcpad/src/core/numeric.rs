//! Working-precision decimal policy
//!
//! All values carry at most 16 significant digits, rounded half-up (ties away
//! from zero). Division is the one exception: its quotient is rounded to 16
//! fractional digits instead, so `1 / 3` shows sixteen threes.

use std::num::NonZeroU64;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};

use crate::core::{CalcError, CalcResult};

/// Significant digits kept by parsing, add, subtract, multiply and percent
pub const PRECISION: u64 = 16;

const SIGNIFICANT: NonZeroU64 = match NonZeroU64::new(PRECISION) {
    Some(digits) => digits,
    None => NonZeroU64::MIN,
};

/// Fractional digits kept by division
pub const DIVISION_SCALE: i64 = 16;

/// Returns true if `text` is a decimal numeral the engine can display:
/// an optional leading `-`, at least one digit, at most one `.`.
#[must_use]
pub fn is_numeral(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0usize;
    let mut points = 0usize;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

/// Parses display text into a decimal rounded to the working precision.
pub fn parse_decimal(text: &str) -> CalcResult<BigDecimal> {
    if !is_numeral(text) {
        return Err(CalcError::parse_failure(text));
    }
    let value =
        BigDecimal::from_str(&canonical(text)).map_err(|_| CalcError::parse_failure(text))?;
    Ok(round_significant(value))
}

/// Rewrites `"5."` as `"5"` and `"-.5"` as `"-0.5"`.
fn canonical(text: &str) -> String {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let body = body.strip_suffix('.').unwrap_or(body);
    if body.starts_with('.') {
        format!("{sign}0{body}")
    } else {
        format!("{sign}{body}")
    }
}

/// Rounds `value` half-up to [`PRECISION`] significant digits.
///
/// Values that already fit are returned untouched, so the scale of short
/// operands is never padded out.
#[must_use]
pub fn round_significant(value: BigDecimal) -> BigDecimal {
    if value.digits() <= PRECISION {
        return value;
    }
    value.with_precision_round(SIGNIFICANT, RoundingMode::HalfUp)
}

/// Rounds a quotient half-up to [`DIVISION_SCALE`] fractional digits.
#[must_use]
pub fn round_quotient(value: BigDecimal) -> BigDecimal {
    value.with_scale_round(DIVISION_SCALE, RoundingMode::HalfUp)
}

/// Formats a value for the display.
///
/// Trailing fractional zeros and a trailing point are stripped and the output
/// is always plain notation. Zero normalizes to an unsigned `0`.
#[must_use]
pub fn format_decimal(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}
