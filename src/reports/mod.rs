//! Reports module for the ledger
//!
//! Income/expense summaries over a date range, plus daily and monthly
//! time series used by the charts.

pub mod series;
pub mod summary;

pub use series::{daily_series, monthly_series, DailySeries, MonthlyBucket};
pub use summary::{summarize, RangeReport, Summary};
