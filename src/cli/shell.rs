//! Interactive menu loop
//!
//! Mirrors the numbered menu of the ledger: add, view a range (with an
//! optional chart), delete, update, monthly chart, export, exit. Errors from
//! the store are reported and the loop carries on; only failures to read or
//! write the terminal end the session.

use std::io::{BufRead, Write};

use tracing::warn;

use super::format_count;
use crate::display::{format_daily_chart, format_monthly_chart, format_range_report, DisplayOptions};
use crate::error::{display_format, LedgerResult};
use crate::input::InputCollector;
use crate::models::TransactionPatch;
use crate::reports::{monthly_series, RangeReport};
use crate::storage::LedgerStore;

const MENU: &str = "\n\
1. Add a new transaction\n\
2. View transactions and summary within a date range\n\
3. Delete a transaction\n\
4. Update a transaction\n\
5. Plot monthly summary\n\
6. Export CSV file\n\
7. Exit\n";

/// The interactive ledger session
pub struct Shell<R, W> {
    store: LedgerStore,
    input: InputCollector<R, W>,
    display: DisplayOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: LedgerStore, input: InputCollector<R, W>, display: DisplayOptions) -> Self {
        Self {
            store,
            input,
            display,
        }
    }

    /// Hand back the collector, e.g. to inspect what was written
    pub fn into_input(self) -> InputCollector<R, W> {
        self.input
    }

    /// Run until the user picks "Exit"
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            write!(self.input.writer(), "{}", MENU)?;
            let choice = self.input.read_line("Enter your choice (1-7): ")?;

            match choice.trim() {
                "1" => self.add()?,
                "2" => self.view()?,
                "3" => self.delete()?,
                "4" => self.update()?,
                "5" => self.monthly()?,
                "6" => self.export()?,
                "7" => {
                    writeln!(self.input.writer(), "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(
                    self.input.writer(),
                    "Invalid choice. Enter 1, 2, 3, 4, 5, 6 or 7."
                )?,
            }
        }
    }

    fn add(&mut self) -> LedgerResult<()> {
        let prompt = format!(
            "Enter the date of the transaction ({}) or enter for today's date: ",
            self.format_hint()
        );
        let date = self.input.get_date(&prompt, true)?;
        let amount = self.input.get_amount()?;
        let category = self.input.get_category()?;
        let description = self.input.get_description()?;

        let result = self.store.add_entry(date, amount, category, &description);
        if self.report(result)?.is_some() {
            writeln!(self.input.writer(), "Entry added successfully")?;
        }
        Ok(())
    }

    fn view(&mut self) -> LedgerResult<()> {
        let hint = self.format_hint();
        let start = self
            .input
            .get_date(&format!("Enter the start date ({}): ", hint), false)?;
        let end = self
            .input
            .get_date(&format!("Enter the end date ({}): ", hint), false)?;

        let result = RangeReport::generate(&self.store, start, end);
        let Some(report) = self.report(result)? else {
            return Ok(());
        };

        write!(
            self.input.writer(),
            "{}",
            format_range_report(&report, &self.display)
        )?;

        if !report.is_empty() && self.input.confirm("Do you want to see a plot? (y/n) ")? {
            let chart = format_daily_chart(&report.transactions, &self.display);
            write!(self.input.writer(), "{}", chart)?;
        }
        Ok(())
    }

    fn delete(&mut self) -> LedgerResult<()> {
        let prompt = format!(
            "Enter the date of the transaction to delete ({}): ",
            self.format_hint()
        );
        let date = self.input.get_date(&prompt, false)?;
        let description = self
            .input
            .read_line("Enter the description of the transaction to delete: ")?;

        let result = self.store.delete_entry(date, description.trim());
        match self.report(result)? {
            Some(0) => writeln!(self.input.writer(), "No matching entry found to delete")?,
            Some(n) => writeln!(
                self.input.writer(),
                "{} deleted successfully",
                format_count(n)
            )?,
            None => {}
        }
        Ok(())
    }

    fn update(&mut self) -> LedgerResult<()> {
        let prompt = format!(
            "Enter the date of the transaction to update ({}): ",
            self.format_hint()
        );
        let date = self.input.get_date(&prompt, false)?;
        let description = self
            .input
            .read_line("Enter the description of the transaction to update: ")?;

        let patch = TransactionPatch {
            amount: self.input.get_optional_amount(
                "Enter the new amount (or leave blank to keep the current amount): ",
            )?,
            category: self.input.get_optional_category(
                "Enter the new category (or leave blank to keep the current category): ",
            )?,
            description: self.input.get_optional_text(
                "Enter the new description (or leave blank to keep the current description): ",
            )?,
        };

        let result = self.store.update_entry(date, description.trim(), &patch);
        match self.report(result)? {
            Some(0) => writeln!(self.input.writer(), "No matching entry found to update")?,
            Some(_) if patch.is_empty() => {
                writeln!(self.input.writer(), "Nothing to change; entry left as is")?
            }
            Some(n) => writeln!(
                self.input.writer(),
                "{} updated successfully",
                format_count(n)
            )?,
            None => {}
        }
        Ok(())
    }

    fn monthly(&mut self) -> LedgerResult<()> {
        let result = self.store.load();
        if let Some(transactions) = self.report(result)? {
            let chart = format_monthly_chart(&monthly_series(&transactions), &self.display);
            write!(self.input.writer(), "{}", chart)?;
        }
        Ok(())
    }

    fn export(&mut self) -> LedgerResult<()> {
        let path = self
            .input
            .read_line("Enter the export file path (e.g., export.csv): ")?;
        let path = path.trim();
        if path.is_empty() {
            writeln!(self.input.writer(), "Export path cannot be empty")?;
            return Ok(());
        }

        let result = self.store.export_to(path);
        if self.report(result)?.is_some() {
            writeln!(self.input.writer(), "CSV file exported to {}", path)?;
        }
        Ok(())
    }

    /// Print a store failure and turn it into `None` so the menu continues
    fn report<T>(&mut self, result: LedgerResult<T>) -> LedgerResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(error = %e, "ledger operation failed");
                writeln!(self.input.writer(), "{}", e)?;
                Ok(None)
            }
        }
    }

    fn format_hint(&self) -> String {
        display_format(self.input.date_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use crate::storage::StoreConfig;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestShell = Shell<Cursor<Vec<u8>>, Vec<u8>>;

    fn shell(temp_dir: &TempDir, script: &str) -> TestShell {
        let store = LedgerStore::new(StoreConfig::new(temp_dir.path().join("ledger.csv")));
        let input = InputCollector::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
            .with_today(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        Shell::new(store, input, DisplayOptions::default())
    }

    fn run(temp_dir: &TempDir, script: &str) -> (LedgerStore, String) {
        let mut shell = shell(temp_dir, script);
        shell.run().unwrap();
        let store = shell.store.clone();
        let output = String::from_utf8(shell.into_input().into_writer()).unwrap();
        (store, output)
    }

    #[test]
    fn test_add_and_view() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\n01-01-2024\n100\nincome\nsalary\n\
                      1\n02-01-2024\n20\nExpense\ncoffee\n\
                      2\n01-01-2024\n02-01-2024\nn\n\
                      7\n";

        let (store, output) = run(&temp_dir, script);

        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(output.matches("Entry added successfully").count(), 2);
        assert!(output.contains("Transactions from 01-01-2024 to 02-01-2024"));
        assert!(output.contains("Total Income: $100.00"));
        assert!(output.contains("Total Expense: $20.00"));
        assert!(output.contains("Net Saving: $80.00"));
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_add_defaults_to_today() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = run(&temp_dir, "1\n\n5\nexpense\nbus\n7\n");

        let all = store.load().unwrap();
        assert_eq!(all[0].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn test_invalid_choice() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run(&temp_dir, "9\n7\n");
        assert!(output.contains("Invalid choice. Enter 1, 2, 3, 4, 5, 6 or 7."));
    }

    #[test]
    fn test_view_with_plot() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\n01-01-2024\n100\nincome\nsalary\n\
                      2\n01-01-2024\n31-01-2024\ny\n7\n";
        let (_, output) = run(&temp_dir, script);
        assert!(output.contains("Income and Expenses Over Time"));
    }

    #[test]
    fn test_view_empty_range() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run(&temp_dir, "2\n01-01-2024\n31-01-2024\n7\n");
        assert!(output.contains("No transactions found in the given date range."));
        assert!(!output.contains("Do you want to see a plot?"));
    }

    #[test]
    fn test_delete_flow() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\n02-01-2024\n20\nexpense\ncoffee\n\
                      3\n02-01-2024\ntea\n\
                      3\n02-01-2024\ncoffee\n7\n";
        let (store, output) = run(&temp_dir, script);

        assert!(output.contains("No matching entry found to delete"));
        assert!(output.contains("Entry deleted successfully"));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_update_flow() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\n02-01-2024\n20\nexpense\ncoffee\n\
                      4\n02-01-2024\ncoffee\n25.50\n\nlatte\n7\n";
        let (store, output) = run(&temp_dir, script);

        assert!(output.contains("Entry updated successfully"));
        let all = store.load().unwrap();
        assert_eq!(all[0].amount, Money::from_cents(2550));
        assert_eq!(all[0].category, Category::Expense);
        assert_eq!(all[0].description, "latte");
    }

    #[test]
    fn test_update_missing_entry() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run(&temp_dir, "4\n02-01-2024\ncoffee\n1\n\n\n7\n");
        assert!(output.contains("No matching entry found to update"));
    }

    #[test]
    fn test_monthly_plot() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\n01-01-2024\n100\nincome\nsalary\n5\n7\n";
        let (_, output) = run(&temp_dir, script);
        assert!(output.contains("Monthly Net Amount Summary"));
        assert!(output.contains("Jan 2024"));
    }

    #[test]
    fn test_export_flow_and_failure() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("export.csv");
        let bad = temp_dir.path().join("missing").join("export.csv");
        let script = format!(
            "1\n01-01-2024\n100\nincome\nsalary\n6\n{}\n6\n{}\n7\n",
            bad.display(),
            good.display()
        );

        let (store, output) = run(&temp_dir, &script);

        assert!(output.contains("I/O error: Failed to export ledger"));
        assert!(output.contains(&format!("CSV file exported to {}", good.display())));
        assert_eq!(
            std::fs::read(&good).unwrap(),
            std::fs::read(store.path()).unwrap()
        );
    }

    #[test]
    fn test_closed_input_ends_session_with_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut shell = shell(&temp_dir, "1\n");
        assert!(shell.run().unwrap_err().is_io());
    }
}
