//! Money rounding using rust_decimal for precision
//!
//! Amounts are stored as `f64` with 2 decimal places. Rounding goes through
//! `Decimal` so that e.g. `2.005` rounds up instead of falling to `2.00`.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a monetary value to 2 decimal places
pub fn round_money(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(round_money(2.005), 2.01);
        assert_eq!(round_money(-2.005), -2.01);
        assert_eq!(round_money(1.004), 1.0);
    }

    #[test]
    fn test_already_rounded_is_unchanged() {
        assert_eq!(round_money(15.5), 15.5);
        assert_eq!(round_money(10.0), 10.0);
        assert_eq!(round_money(0.0), 0.0);
    }

    #[test]
    fn test_non_finite_becomes_zero() {
        assert_eq!(round_money(f64::NAN), 0.0);
    }
}
