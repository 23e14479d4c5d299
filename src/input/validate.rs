//! Validation of raw user input
//!
//! Each parser takes the text exactly as typed and returns either the typed
//! value or a `LedgerError::Validation` describing what's wrong.

use chrono::NaiveDate;

use crate::error::{display_format, LedgerError, LedgerResult};
use crate::models::{parse_date_str, Category, Money, MoneyParseError};

/// Parse a date in `format`; blank input means `today` when `allow_default` is set
pub fn parse_date(
    input: &str,
    format: &str,
    allow_default: bool,
    today: NaiveDate,
) -> LedgerResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return if allow_default {
            Ok(today)
        } else {
            Err(LedgerError::Validation(format!(
                "A date is required ({})",
                display_format(format)
            )))
        };
    }

    parse_date_str(input, format)
}

/// Parse an amount that must be positive and at most `Money::MAX_ENTRY`
pub fn parse_amount(input: &str) -> LedgerResult<Money> {
    let amount = Money::parse(input).map_err(|e| match e {
        MoneyParseError::TooPrecise(_) => LedgerError::Validation(format!(
            "Invalid amount '{}'. Use at most two decimal places",
            input.trim()
        )),
        MoneyParseError::InvalidFormat(_) => LedgerError::Validation(format!(
            "Invalid amount '{}'. Enter a number like 12.50",
            input.trim()
        )),
    })?;

    if !amount.is_positive() {
        return Err(LedgerError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }
    if amount > Money::MAX_ENTRY {
        return Err(LedgerError::Validation(format!(
            "Amount must be at most {}",
            Money::MAX_ENTRY
        )));
    }

    Ok(amount)
}

/// Parse "Income" or "Expense" in any case
pub fn parse_category(input: &str) -> LedgerResult<Category> {
    input.parse()
}

/// Descriptions are free text; only surrounding whitespace is dropped
pub fn parse_description(input: &str) -> String {
    input.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_DATE_FORMAT;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("01-01-2024", DEFAULT_DATE_FORMAT, false, today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_blank_date_defaults_only_when_allowed() {
        assert_eq!(parse_date("", DEFAULT_DATE_FORMAT, true, today()).unwrap(), today());
        assert_eq!(parse_date("  ", DEFAULT_DATE_FORMAT, true, today()).unwrap(), today());

        let err = parse_date("", DEFAULT_DATE_FORMAT, false, today()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_bad_date_is_validation_error() {
        for input in ["2024-01-01", "1/1/2024", "32-01-2024", "yesterday"] {
            let err = parse_date(input, DEFAULT_DATE_FORMAT, true, today()).unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", input);
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap().cents(), 1250);
        assert_eq!(parse_amount(" 100 ").unwrap().cents(), 10000);
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert!(parse_amount("0").unwrap_err().is_validation());
        assert!(parse_amount("0.00").unwrap_err().is_validation());
        assert!(parse_amount("-5").unwrap_err().is_validation());
        assert!(parse_amount("ten").unwrap_err().is_validation());
        assert!(parse_amount("").unwrap_err().is_validation());
        assert_eq!(
            parse_amount("0").unwrap_err().to_string(),
            "Validation error: Amount must be greater than zero"
        );
    }

    #[test]
    fn test_amount_upper_bound() {
        assert_eq!(parse_amount("1000000000000").unwrap(), Money::MAX_ENTRY);

        let err = parse_amount("1000000000000.01").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("at most $1000000000000.00"));
        assert!(parse_amount("90000000000000000").unwrap_err().is_validation());
    }

    #[test]
    fn test_amount_rejects_sub_cent_precision() {
        let err = parse_amount("0.019").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("two decimal places"));
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("income").unwrap(), Category::Income);
        assert_eq!(parse_category("Expense").unwrap(), Category::Expense);
        assert!(parse_category("I").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_description() {
        assert_eq!(parse_description("  lunch with Sam \n"), "lunch with Sam");
        assert_eq!(parse_description(""), "");
    }
}
