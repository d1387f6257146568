//! Monetary conversion helpers
//!
//! Models carry `f64` (wire/storage); every calculation runs in `Decimal`
//! and is rounded only when handed back to callers.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Largest amount (rate, threshold, deposit) accepted by validation
pub const MAX_AMOUNT: f64 = 1e12;

/// Convert f64 to Decimal for comparisons and display.
///
/// NaN becomes zero; values beyond Decimal's range saturate at its bounds
/// so an oversized amount never turns into zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    if value.is_nan() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(if value > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    })
}

/// Convert f64 to Decimal for arithmetic, `None` when non-finite or out of range
#[inline]
pub fn checked_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}

/// Round to cents, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for output, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Two amounts are equal to the cent
pub fn same_cents(a: f64, b: f64) -> bool {
    round_money(to_decimal(a)) == round_money(to_decimal(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::MAX);
        assert_eq!(to_decimal(1e30), Decimal::MAX);
        assert_eq!(to_decimal(-1e30), Decimal::MIN);
        assert_eq!(to_decimal(MAX_AMOUNT), Decimal::from(1_000_000_000_000i64));
    }

    #[test]
    fn test_checked_decimal() {
        assert_eq!(checked_decimal(12.5), Some(Decimal::new(125, 1)));
        assert_eq!(checked_decimal(1e30), None);
        assert_eq!(checked_decimal(f64::NAN), None);
        assert_eq!(checked_decimal(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(to_f64(Decimal::new(10005, 3)), 10.01);
        assert_eq!(to_f64(Decimal::new(10004, 3)), 10.0);
        // 10 * 4/3 hours
        let hours = Decimal::from(80) / Decimal::from(60);
        assert_eq!(to_f64(Decimal::from(10) * hours), 13.33);
    }

    #[test]
    fn test_same_cents() {
        assert!(same_cents(42.0, 42.001));
        assert!(same_cents(13.333, 13.33));
        assert!(!same_cents(42.0, 42.01));
    }
}
