//! CLI command handlers
//!
//! This module contains the interactive menu and the clap subcommands,
//! bridging user input with the ledger store and reports.

pub mod commands;
pub mod shell;

pub use commands::{handle_ledger_command, LedgerCommand};
pub use shell::Shell;

/// "Entry" for one row, "N entries" otherwise
fn format_count(count: usize) -> String {
    if count == 1 {
        "Entry".to_string()
    } else {
        format!("{} entries", count)
    }
}
