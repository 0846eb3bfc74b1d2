//! Lenient parsing of operator-typed numbers.

use std::str::FromStr;

use bigdecimal::BigDecimal;

/// Parses a quantity field. Empty, non-numeric or zero input becomes 1.
///
/// ```rust
/// use draft_order_admin::editor::coerce_quantity;
///
/// assert_eq!(coerce_quantity("3"), 3);
/// assert_eq!(coerce_quantity(""), 1);
/// assert_eq!(coerce_quantity("abc"), 1);
/// ```
#[must_use]
pub fn coerce_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => quantity,
        _ => 1,
    }
}

/// Parses a price field. Empty or non-numeric input becomes 0.
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use draft_order_admin::editor::coerce_price;
/// use std::str::FromStr;
///
/// assert_eq!(coerce_price("12.5"), BigDecimal::from_str("12.5").unwrap());
/// assert_eq!(coerce_price(""), BigDecimal::from(0));
/// ```
#[must_use]
pub fn coerce_price(raw: &str) -> BigDecimal {
    BigDecimal::from_str(raw.trim()).unwrap_or_else(|_| BigDecimal::from(0))
}
