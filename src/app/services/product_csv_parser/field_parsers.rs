//! Field parsing utilities for product rows
//!
//! Prices and quantities are parsed with a fixed grammar so results never
//! depend on the host locale.

use crate::{Error, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a required, non-blank product name
pub fn parse_name(value: &str, line: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::missing_name(line));
    }
    Ok(trimmed.to_string())
}

/// Parse a non-negative price written with a period decimal separator
///
/// Accepts an optional leading sign, ASCII digits and at most one `.`.
/// Grouping separators, decimal commas, exponents and currency symbols are
/// rejected, as is any value below zero.
pub fn parse_price(value: &str, line: usize) -> Result<Decimal> {
    let trimmed = value.trim();
    if !is_invariant_decimal(trimmed) {
        return Err(Error::invalid_price(line, trimmed));
    }

    let price = Decimal::from_str(&normalize_decimal(trimmed))
        .map_err(|_| Error::invalid_price(line, trimmed))?;

    if price < Decimal::ZERO {
        return Err(Error::invalid_price(line, trimmed));
    }

    Ok(price)
}

/// Parse a non-negative base-10 quantity
pub fn parse_quantity(value: &str, line: usize) -> Result<u32> {
    let trimmed = value.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| Error::invalid_quantity(line, trimmed))
}

/// Check `value` against `[+-]? digits* ('.' digits*)?` with at least one digit
pub fn is_invariant_decimal(value: &str) -> bool {
    let digits = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);

    let mut seen_digit = false;
    let mut seen_point = false;

    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }

    seen_digit
}

/// Rewrite a value accepted by [`is_invariant_decimal`] into `-?digits(.digits)?`
fn normalize_decimal(value: &str) -> String {
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value.strip_prefix('+').unwrap_or(value)),
    };

    let digits = digits.strip_suffix('.').unwrap_or(digits);
    if digits.starts_with('.') {
        format!("{}0{}", sign, digits)
    } else {
        format!("{}{}", sign, digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_price_plain_values() {
        assert_eq!(parse_price("10.99", 2).unwrap(), dec("10.99"));
        assert_eq!(parse_price("0", 2).unwrap(), Decimal::ZERO);
        assert_eq!(parse_price("  24.95 ", 2).unwrap(), dec("24.95"));
        assert_eq!(parse_price("100", 2).unwrap(), dec("100"));
    }

    #[test]
    fn test_parse_price_signs_and_bare_points() {
        assert_eq!(parse_price("+8.99", 2).unwrap(), dec("8.99"));
        assert_eq!(parse_price(".5", 2).unwrap(), dec("0.5"));
        assert_eq!(parse_price("5.", 2).unwrap(), dec("5"));
        assert_eq!(parse_price("-0", 2).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_price_keeps_precision() {
        let price = parse_price("19.990", 2).unwrap();
        assert_eq!(price, dec("19.99"));
        assert_eq!(price.to_string(), "19.990");
    }

    #[test]
    fn test_parse_price_rejects_locale_formats() {
        for value in ["1,000.00", "10,99", "1 000", "1_000", "1e3", "R10", "$5", "10.9.9"] {
            let err = parse_price(value, 7).unwrap_err();
            assert!(
                matches!(err, Error::InvalidPrice { line: 7, .. }),
                "expected InvalidPrice for {:?}, got {:?}",
                value,
                err
            );
        }
    }

    #[test]
    fn test_parse_price_rejects_garbage_and_negatives() {
        assert!(parse_price("NOT_A_NUMBER", 2).is_err());
        assert!(parse_price("", 2).is_err());
        assert!(parse_price(".", 2).is_err());
        assert!(parse_price("+", 2).is_err());
        assert!(parse_price("-1.50", 2).is_err());
    }

    #[test]
    fn test_parse_price_rejects_overflow() {
        let huge = "9".repeat(40);
        assert!(matches!(
            parse_price(&huge, 3),
            Err(Error::InvalidPrice { line: 3, .. })
        ));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("100", 2).unwrap(), 100);
        assert_eq!(parse_quantity(" 0 ", 2).unwrap(), 0);
        assert_eq!(parse_quantity("+5", 2).unwrap(), 5);

        for value in ["-1", "1.5", "ten", "", "1,000", "99999999999"] {
            assert!(
                matches!(parse_quantity(value, 4), Err(Error::InvalidQuantity { line: 4, .. })),
                "expected InvalidQuantity for {:?}",
                value
            );
        }
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("  Widget A ", 2).unwrap(), "Widget A");
        assert!(matches!(
            parse_name("   ", 5),
            Err(Error::MissingName { line: 5 })
        ));
    }

    #[test]
    fn test_invariant_decimal_grammar() {
        assert!(is_invariant_decimal("0"));
        assert!(is_invariant_decimal("-12.5"));
        assert!(is_invariant_decimal("+.5"));
        assert!(!is_invariant_decimal("+-1"));
        assert!(!is_invariant_decimal("1-"));
        assert!(!is_invariant_decimal(""));
    }
}
