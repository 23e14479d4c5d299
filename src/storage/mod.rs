//! Storage layer for the ledger
//!
//! Provides the CSV-backed [`LedgerStore`] and the atomic file helpers it
//! writes through.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_csv, write_csv_atomic, CsvTable};
pub use ledger::{Column, LedgerStore, StoreConfig, DEFAULT_COLUMNS};
