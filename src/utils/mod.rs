//! Utility functions for formatting monetary values

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a tax amount with exactly two fraction digits.
///
/// Midpoints round away from zero, matching conventional currency
/// rounding rather than banker's rounding.
///
/// # Examples
/// ```
/// use capgains::utils::format_tax;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_tax(dec!(0)), "0.00");
/// assert_eq!(format_tax(dec!(400)), "400.00");
/// assert_eq!(format_tax(dec!(12.345)), "12.35");
/// ```
pub fn format_tax(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
