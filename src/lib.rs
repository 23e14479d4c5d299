//! ledger-cli - Terminal-based personal income and expense ledger
//!
//! This library provides the core functionality for the `ledger` binary: a
//! CSV-backed store of dated income and expense transactions, range queries
//! with totals, natural-key update/delete, and daily/monthly summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, transactions)
//! - `input`: Validation of user input and the re-prompting collector
//! - `storage`: CSV ledger store
//! - `reports`: Summaries and time series
//! - `display`: Tables and text charts for the terminal
//! - `cli`: Interactive menu and subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger::config::{LedgerPaths, Settings};
//! use ledger::storage::LedgerStore;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = LedgerStore::new(settings.store_config(&paths, None));
//! store.initialize()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
