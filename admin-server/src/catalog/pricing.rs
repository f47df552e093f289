//! Flyer pricing
//!
//! Uses rust_decimal for the arithmetic and keeps f64 on the entity. No
//! rounding happens here; only [`display_price`] rounds, for human-facing
//! text.

use rust_decimal::prelude::*;

/// Decimal places used when a price is shown to people
const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// `None` when the value does not fit a `Decimal` (NaN, infinite, beyond
/// ~7.9e28, or below its 28-digit scale)
#[inline]
fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value).filter(|d| !d.is_zero() || value == 0.0)
}

fn decimal_final_price(price: f64, discount_percentage: f64) -> Option<f64> {
    let price_dec = to_decimal(price)?;
    let discount = to_decimal(discount_percentage)?;
    let off = price_dec
        .checked_mul(discount)?
        .checked_div(Decimal::ONE_HUNDRED)?;
    price_dec.checked_sub(off)?.to_f64()
}

/// Final price of a flyer: `price − price × discount / 100`, or `price` when
/// there is no discount.
///
/// Values outside the `Decimal` range use plain f64 arithmetic.
pub fn final_price(price: f64, discount_percentage: f64) -> f64 {
    if discount_percentage <= 0.0 {
        return price;
    }
    decimal_final_price(price, discount_percentage)
        .unwrap_or_else(|| price - price * discount_percentage / 100.0)
}

/// Price formatted with two decimals, half away from zero
pub fn display_price(value: f64) -> String {
    match to_decimal(value) {
        Some(d) => format!(
            "{:.2}",
            d.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{value:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_quarter_off() {
        assert_close(final_price(15.99, 25.0), 11.9925);
    }

    #[test]
    fn test_no_discount_keeps_price() {
        assert_eq!(final_price(15.99, 0.0), 15.99);
        assert_eq!(final_price(7.5, 0.0), 7.5);
    }

    #[test]
    fn test_full_discount_is_free() {
        assert_close(final_price(49.0, 100.0), 0.0);
    }

    #[test]
    fn test_matches_formula_over_a_grid() {
        for price in [0.01, 1.0, 9.99, 120.0, 1999.95] {
            for discount in [0.0, 5.0, 12.5, 33.0, 50.0, 99.0, 100.0] {
                assert_close(final_price(price, discount), price - price * discount / 100.0);
            }
        }
    }

    #[test]
    fn test_out_of_decimal_range_never_collapses_to_zero() {
        let huge = final_price(1e30, 10.0);
        assert!((huge - 9e29).abs() / 9e29 < 1e-12, "got {huge}");

        let tiny = final_price(1e-30, 10.0);
        assert!((tiny - 9e-31).abs() / 9e-31 < 1e-12, "got {tiny}");

        // product overflows Decimal; falls back instead of panicking
        assert_close(final_price(1e27, 100.0), 0.0);
        let big = final_price(7e28, 50.0);
        assert!((big - 3.5e28).abs() / 3.5e28 < 1e-12, "got {big}");
    }

    #[test]
    fn test_display_price() {
        assert_eq!(display_price(11.9925), "11.99");
        assert_eq!(display_price(3.9975), "4.00");
        assert_eq!(display_price(10.0), "10.00");
    }
}
