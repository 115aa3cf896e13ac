//! Raw-text normalization for user-entered amounts.
//!
//! The calculator is deliberately permissive: invalid input never produces
//! an error, it produces the "unset" marker. This module is the one place
//! that contract lives.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Converts raw user-entered text to the numeric-or-unset representation.
///
/// Empty (after trimming), unparseable, and negative input all collapse to
/// `None`. Everything else is the parsed amount, unchanged.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Decimal::from_str(trimmed) {
        Ok(value) if value >= Decimal::ZERO => Some(value),
        _ => None,
    }
}

/// The engine-side collapse of unset fields to zero, shared by adapters and
/// tests so there is exactly one definition of it.
pub fn amount_or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_is_unset() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
    }

    #[test]
    fn test_garbage_is_unset() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12.3.4"), None);
        assert_eq!(parse_amount("1e999"), None);
    }

    #[test]
    fn test_negative_is_unset() {
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("-0.01"), None);
    }

    #[test]
    fn test_valid_amounts_parse() {
        assert_eq!(parse_amount("100000"), Some(dec!(100000)));
        assert_eq!(parse_amount(" 12.50 "), Some(dec!(12.50)));
        assert_eq!(parse_amount("0"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_unset_collapses_to_zero() {
        assert_eq!(amount_or_zero(None), Decimal::ZERO);
        assert_eq!(amount_or_zero(Some(dec!(7))), dec!(7));
    }
}
