//! Date formatting helpers
//!
//! The store and the prompts share one configurable strftime format
//! (`%d-%m-%Y` by default).

use std::fmt::Write;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};

/// Default date format for the store and for user input
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Format a date, rejecting format strings chrono can't render
pub fn format_date(date: NaiveDate, format: &str) -> LedgerResult<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format))
        .map_err(|_| LedgerError::Config(format!("Invalid date format '{}'", format)))?;
    Ok(out)
}

/// Parse a date string strictly against the given format
pub fn parse_date_str(input: &str, format: &str) -> LedgerResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, format).map_err(|_| LedgerError::invalid_date(input, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(format_date(date, DEFAULT_DATE_FORMAT).unwrap(), "02-01-2024");
    }

    #[test]
    fn test_parse_default() {
        let date = parse_date_str("02-01-2024", DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        assert!(parse_date_str("2024-01-02", DEFAULT_DATE_FORMAT).is_err());
        assert!(parse_date_str("31-02-2024", DEFAULT_DATE_FORMAT).is_err());
        assert!(parse_date_str("", DEFAULT_DATE_FORMAT).is_err());
    }

    #[test]
    fn test_invalid_format_string() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert!(format_date(date, "%Q").is_err());
    }
}
