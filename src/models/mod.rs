//! Core data models for the ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: money amounts, categories, dates, and transactions.

pub mod category;
pub mod date;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use date::{format_date, parse_date_str, DEFAULT_DATE_FORMAT};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionPatch};
