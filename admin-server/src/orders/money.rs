//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic goes through this module so the rounding strategy
//! stays fixed in one place: 2 decimal places, half-up.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum currency amount: 6 integer digits (999,999.99)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

/// Round a value to currency precision
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line total: quantity × unit price, rounded to currency precision
pub fn line_total(quantity: i32, unit_price: Decimal) -> Decimal {
    round_money(Decimal::from(quantity) * unit_price)
}

/// Order total: sum of line totals plus shipping price
pub fn order_total(line_totals: &[Decimal], shipping_price: Decimal) -> Decimal {
    let sum: Decimal = line_totals.iter().copied().sum();
    round_money(sum + shipping_price)
}

/// Validate a line-item quantity (must be positive)
pub fn validate_quantity(quantity: i32) -> AppResult<()> {
    if quantity <= 0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!("quantity must be positive, got {quantity}"),
        ));
    }
    Ok(())
}

/// Whether a value fits the currency format: non-negative, at most 6 integer
/// digits and 2 fraction digits
fn fits_currency_format(value: Decimal) -> bool {
    !value.is_sign_negative()
        && value <= MAX_AMOUNT
        && value.normalize().scale() <= DECIMAL_PLACES
}

/// Validate a product price
pub fn validate_product_price(price: Decimal) -> AppResult<()> {
    if !fits_currency_format(price) {
        return Err(
            AppError::new(ErrorCode::ProductInvalidPrice).with_detail("price", price.to_string())
        );
    }
    Ok(())
}

/// Validate an order's shipping price
pub fn validate_shipping_price(price: Decimal) -> AppResult<()> {
    if !fits_currency_format(price) {
        return Err(AppError::with_message(
            ErrorCode::InvalidAmount,
            format!("shipping price must be a non-negative amount, got {price}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec("2.005")), dec("2.01"));
        assert_eq!(round_money(dec("2.004")), dec("2.00"));
        assert_eq!(round_money(dec("2.0")), dec("2.0"));
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(2, dec("10.00")), dec("20.00"));
        assert_eq!(line_total(3, dec("10.99")), dec("32.97"));
        assert_eq!(line_total(1, dec("3.50")), dec("3.50"));
    }

    #[test]
    fn test_line_total_zero_price() {
        assert_eq!(line_total(5, dec("0")), dec("0"));
    }

    #[test]
    fn test_order_total_spec_scenario() {
        // shipping 5.00, items (qty=2, price=10.00) and (qty=1, price=3.50)
        let lines = [line_total(2, dec("10.00")), line_total(1, dec("3.50"))];
        assert_eq!(order_total(&lines, dec("5.00")), dec("28.50"));
    }

    #[test]
    fn test_order_total_no_items_is_shipping() {
        assert_eq!(order_total(&[], dec("7.25")), dec("7.25"));
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let lines: Vec<_> = (0..1000).map(|_| dec("0.01")).collect();
        assert_eq!(order_total(&lines, dec("0")), dec("10.00"));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(9999).is_ok());

        let err = validate_quantity(0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        let err = validate_quantity(-3).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
    }

    #[test]
    fn test_validate_product_price() {
        assert!(validate_product_price(dec("0")).is_ok());
        assert!(validate_product_price(dec("129.99")).is_ok());
        assert!(validate_product_price(dec("999999.99")).is_ok());

        // negative
        let err = validate_product_price(dec("-1.00")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);
        // more than 6 integer digits
        let err = validate_product_price(dec("1000000.00")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);
        // more than 2 fraction digits
        let err = validate_product_price(dec("9.999")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);
    }

    #[test]
    fn test_validate_product_price_trailing_zeros_ok() {
        // 10.100 normalizes to 10.1; only meaningful digits count
        assert!(validate_product_price(dec("10.100")).is_ok());
    }

    #[test]
    fn test_validate_shipping_price() {
        assert!(validate_shipping_price(dec("0")).is_ok());
        assert!(validate_shipping_price(dec("5.00")).is_ok());

        let err = validate_shipping_price(dec("-0.01")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAmount);
    }
}
