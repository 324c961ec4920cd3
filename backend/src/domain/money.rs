//! Monetary input parsing and formatting.
//!
//! Amounts are held as integer minor units (cents). User input arrives as a
//! decimal string with either a comma or a dot separator ("12,50" and
//! "12.50" both mean 1250 cents). Each field applies its own acceptance
//! rule: entries and fixed-charge amounts must be strictly positive,
//! envelope limits may be zero, and the income field falls back to zero on
//! anything unparseable.

use thiserror::Error;

/// Why a user-supplied amount string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Enter an amount, e.g. 12,50 or 12.50")]
    Empty,
    #[error("'{0}' is not a valid amount, expected e.g. 12,50 or 12.50")]
    InvalidFormat(String),
    #[error("Amount must be greater than zero")]
    NotPositive,
    #[error("Amount must not be negative")]
    Negative,
}

/// Parse a decimal amount string into cents, rounding to the nearest cent.
/// Returns `None` for empty or non-numeric input.
fn parse_decimal(input: &str) -> Option<i64> {
    let cleaned = input.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    let value = cleaned.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some((value * 100.0).round() as i64)
}

/// Lenient rule used for the income field: empty or unparseable input
/// counts as zero cents.
pub fn parse_cents_lenient(input: &str) -> i64 {
    parse_decimal(input).unwrap_or(0)
}

/// Strict rule for new entries and fixed-charge amounts: the input must
/// parse and round to at least one cent.
pub fn parse_positive_cents(input: &str) -> Result<i64, AmountError> {
    if input.trim().is_empty() {
        return Err(AmountError::Empty);
    }
    let cents =
        parse_decimal(input).ok_or_else(|| AmountError::InvalidFormat(input.trim().to_string()))?;
    if cents <= 0 {
        return Err(AmountError::NotPositive);
    }
    Ok(cents)
}

/// Rule for envelope limits: zero is allowed (an empty input means a zero
/// cap), negatives and non-numeric input are not.
pub fn parse_non_negative_cents(input: &str) -> Result<i64, AmountError> {
    if input.trim().is_empty() {
        return Ok(0);
    }
    let cents =
        parse_decimal(input).ok_or_else(|| AmountError::InvalidFormat(input.trim().to_string()))?;
    if cents < 0 {
        return Err(AmountError::Negative);
    }
    Ok(cents)
}

/// Render cents as a decimal-comma string with two fractional digits,
/// e.g. 1050 becomes "10,50".
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{},{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_and_dot_separators_parse_alike() {
        assert_eq!(parse_positive_cents("10,50").unwrap(), 1050);
        assert_eq!(parse_positive_cents("10.50").unwrap(), 1050);
        assert_eq!(parse_positive_cents(" 4,50 ").unwrap(), 450);
        assert_eq!(parse_positive_cents("5").unwrap(), 500);
    }

    #[test]
    fn test_positive_rule_rejections() {
        assert_eq!(parse_positive_cents(""), Err(AmountError::Empty));
        assert_eq!(parse_positive_cents("   "), Err(AmountError::Empty));
        assert_eq!(
            parse_positive_cents("abc"),
            Err(AmountError::InvalidFormat("abc".to_string()))
        );
        assert_eq!(parse_positive_cents("-5,00"), Err(AmountError::NotPositive));
        assert_eq!(parse_positive_cents("0"), Err(AmountError::NotPositive));
        // Rounds to zero cents, so it is not a positive amount.
        assert_eq!(parse_positive_cents("0,004"), Err(AmountError::NotPositive));
        assert_eq!(parse_positive_cents("inf"), Err(AmountError::InvalidFormat("inf".to_string())));
    }

    #[test]
    fn test_non_negative_rule() {
        assert_eq!(parse_non_negative_cents("0").unwrap(), 0);
        assert_eq!(parse_non_negative_cents("").unwrap(), 0);
        assert_eq!(parse_non_negative_cents("200,00").unwrap(), 20000);
        assert_eq!(
            parse_non_negative_cents("-1"),
            Err(AmountError::Negative)
        );
        assert_eq!(
            parse_non_negative_cents("x"),
            Err(AmountError::InvalidFormat("x".to_string()))
        );
    }

    #[test]
    fn test_lenient_rule_defaults_to_zero() {
        assert_eq!(parse_cents_lenient(""), 0);
        assert_eq!(parse_cents_lenient("garbage"), 0);
        assert_eq!(parse_cents_lenient("3000"), 300000);
        assert_eq!(parse_cents_lenient("3000,00"), 300000);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(1050), "10,50");
        assert_eq!(format_cents(0), "0,00");
        assert_eq!(format_cents(5), "0,05");
        assert_eq!(format_cents(-500), "-5,00");
        assert_eq!(format_cents(123456), "1234,56");
    }

    #[test]
    fn test_parse_format_round_trip() {
        for raw in ["10,50", "0,05", "1234,56"] {
            let cents = parse_positive_cents(raw).unwrap();
            assert_eq!(format_cents(cents), raw);
        }
    }
}
