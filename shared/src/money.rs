//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for the wire, which is what the backend speaks. Prices are always
//! rendered with exactly two fractional digits.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per cart item
pub const MAX_QUANTITY: i32 = 9999;

/// Convert f64 to Decimal for calculation
///
/// Wire values should be pre-validated via [`validate_price`] at the
/// boundary. If NaN/Infinity somehow reaches here, logs an error and
/// returns ZERO rather than corrupting a monetary calculation.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for the wire, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with inputs validated against MAX_PRICE
        // is always within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Round a monetary value to 2 decimal places, half-up
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a monetary value with exactly two fractional digits
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

/// Line total for a price/quantity pair
pub fn line_total(price: f64, quantity: i32) -> Decimal {
    round_money(to_decimal(price) * Decimal::from(quantity))
}

/// Validate a wire price: finite, non-negative, below the sanity ceiling
pub fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() {
        return Err(format!("price must be a finite number, got {}", price));
    }
    if price < 0.0 {
        return Err(format!("price must be non-negative, got {}", price));
    }
    if price > MAX_PRICE {
        return Err(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, price
        ));
    }
    Ok(())
}

/// Validate a cart quantity: at least 1, below the sanity ceiling
pub fn validate_quantity(quantity: i32) -> Result<(), String> {
    if quantity < 1 {
        return Err(format!("quantity must be at least 1, got {}", quantity));
    }
    if quantity > MAX_QUANTITY {
        return Err(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let a = 0.1_f64;
        let b = 0.2_f64;
        assert_ne!(a + b, 0.3);

        let sum_dec = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(to_f64(line_total(10.99, 3)), 32.97);
        assert_eq!(to_f64(line_total(100.0, 2)), 200.0);
    }

    #[test]
    fn test_format_money_two_digits() {
        assert_eq!(format_money(to_decimal(5.0)), "5.00");
        assert_eq!(format_money(to_decimal(5.005)), "5.01");
        assert_eq!(format_money(to_decimal(249.999)), "250.00");
    }

    #[test]
    fn test_non_finite_defaults_to_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(19.95).is_ok());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(2_000_000.0).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(10_000).is_err());
    }
}
