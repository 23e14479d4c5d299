//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, summaries and charts for
//! terminal display.

pub mod report;
pub mod transaction;

pub use report::{format_daily_chart, format_monthly_chart, format_range_report, format_summary};
pub use transaction::format_transaction_table;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::{format_date, Money};

/// How dates and amounts are rendered for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub date_format: String,
    pub currency_symbol: String,
}

impl DisplayOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            date_format: settings.date_format.clone(),
            currency_symbol: settings.currency_symbol.clone(),
        }
    }

    pub fn date(&self, date: NaiveDate) -> String {
        format_date(date, &self.date_format).unwrap_or_else(|_| date.to_string())
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
