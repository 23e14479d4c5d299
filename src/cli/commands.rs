//! Non-interactive ledger commands
//!
//! Each subcommand maps onto one store or report operation, so the ledger
//! can be scripted without going through the menu.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use super::format_count;
use crate::display::{format_daily_chart, format_monthly_chart, format_range_report, DisplayOptions};
use crate::error::LedgerResult;
use crate::input::{parse_amount, parse_category, parse_date, parse_description};
use crate::models::TransactionPatch;
use crate::reports::{monthly_series, RangeReport};
use crate::storage::LedgerStore;

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum LedgerCommand {
    /// Add a new transaction
    Add {
        /// Amount (e.g., "12.50")
        #[arg(short, long)]
        amount: String,
        /// Income or Expense
        #[arg(short, long)]
        category: String,
        /// Transaction date (dd-mm-yyyy), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// View transactions and totals within a date range
    View {
        /// Start date (dd-mm-yyyy), inclusive
        start: String,
        /// End date (dd-mm-yyyy), inclusive
        end: String,
        /// Also draw daily income and expense bars
        #[arg(long)]
        plot: bool,
    },

    /// Delete every transaction with this date and description
    Delete {
        /// Transaction date (dd-mm-yyyy)
        date: String,
        /// Exact description
        description: String,
    },

    /// Update every transaction with this date and description
    Update {
        /// Transaction date (dd-mm-yyyy)
        date: String,
        /// Exact description
        description: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(long)]
        new_description: Option<String>,
    },

    /// Chart the monthly totals
    Monthly,

    /// Copy the ledger file to another location
    Export {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle a ledger command, writing results to `out`
pub fn handle_ledger_command<W: Write>(
    store: &LedgerStore,
    display: &DisplayOptions,
    today: NaiveDate,
    cmd: LedgerCommand,
    out: &mut W,
) -> LedgerResult<()> {
    let format = display.date_format.as_str();

    match cmd {
        LedgerCommand::Add {
            amount,
            category,
            date,
            description,
        } => {
            let date = parse_date(date.as_deref().unwrap_or(""), format, true, today)?;
            let amount = parse_amount(&amount)?;
            let category = parse_category(&category)?;
            let description = parse_description(&description);

            store.add_entry(date, amount, category, &description)?;
            writeln!(out, "Entry added successfully")?;
        }

        LedgerCommand::View { start, end, plot } => {
            let start = parse_date(&start, format, false, today)?;
            let end = parse_date(&end, format, false, today)?;

            let report = RangeReport::generate(store, start, end)?;
            write!(out, "{}", format_range_report(&report, display))?;
            if plot && !report.is_empty() {
                write!(out, "{}", format_daily_chart(&report.transactions, display))?;
            }
        }

        LedgerCommand::Delete { date, description } => {
            let date = parse_date(&date, format, false, today)?;
            let description = parse_description(&description);
            match store.delete_entry(date, &description)? {
                0 => writeln!(out, "No matching entry found to delete")?,
                n => writeln!(out, "{} deleted successfully", format_count(n))?,
            }
        }

        LedgerCommand::Update {
            date,
            description,
            amount,
            category,
            new_description,
        } => {
            let date = parse_date(&date, format, false, today)?;
            let description = parse_description(&description);

            let mut patch = TransactionPatch::new();
            if let Some(amount) = amount.filter(|s| !s.trim().is_empty()) {
                patch = patch.amount(parse_amount(&amount)?);
            }
            if let Some(category) = category.filter(|s| !s.trim().is_empty()) {
                patch = patch.category(parse_category(&category)?);
            }
            if let Some(text) = new_description {
                patch = patch.description(parse_description(&text));
            }

            match store.update_entry(date, &description, &patch)? {
                0 => writeln!(out, "No matching entry found to update")?,
                _ if patch.is_empty() => writeln!(out, "Nothing to change; entry left as is")?,
                n => writeln!(out, "{} updated successfully", format_count(n))?,
            }
        }

        LedgerCommand::Monthly => {
            let transactions = store.load()?;
            write!(
                out,
                "{}",
                format_monthly_chart(&monthly_series(&transactions), display)
            )?;
        }

        LedgerCommand::Export { output } => {
            store.export_to(&output)?;
            writeln!(out, "CSV file exported to {}", output.display())?;
        }
    }

    Ok(())
}
