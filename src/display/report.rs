//! Report formatting utilities for terminal output
//!
//! Summaries and the text charts that stand in for plots.

use super::transaction::format_transaction_table;
use super::DisplayOptions;
use crate::models::{Category, Money, Transaction};
use crate::reports::{daily_series, MonthlyBucket, RangeReport, Summary};

const BAR_WIDTH: usize = 30;

/// Income, expense and net saving lines
pub fn format_summary(summary: &Summary, options: &DisplayOptions) -> String {
    format!(
        "Total Income: {}\nTotal Expense: {}\nNet Saving: {}\n",
        options.money(summary.total_income),
        options.money(summary.total_expense),
        options.money(summary.net_saving)
    )
}

/// Transactions in a date range followed by their totals
pub fn format_range_report(report: &RangeReport, options: &DisplayOptions) -> String {
    if report.is_empty() {
        return "No transactions found in the given date range.\n".to_string();
    }

    let mut output = format!(
        "Transactions from {} to {}\n",
        options.date(report.start),
        options.date(report.end)
    );
    output.push_str(&format_transaction_table(&report.transactions, options));
    output.push('\n');
    output.push_str(&format_summary(&report.summary, options));
    output
}

/// Day-by-day income and expense bars over the span of `transactions`
pub fn format_daily_chart(transactions: &[Transaction], options: &DisplayOptions) -> String {
    let income = daily_series(transactions, Category::Income);
    let expense = daily_series(transactions, Category::Expense);

    let max = income
        .clone()
        .chain(expense.clone())
        .map(|(_, amount)| amount)
        .max()
        .unwrap_or_default();

    let mut output = String::new();
    output.push_str(&format_header("Income and Expenses Over Time", 80));
    output.push('\n');
    output.push_str(&separator(80));
    output.push('\n');

    if income.span().is_none() {
        output.push_str("Nothing to plot.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<12} {:<w$} {:>12}  {:<w$} {:>12}\n",
        "Date",
        "Income",
        "",
        "Expense",
        "",
        w = BAR_WIDTH
    ));

    for ((day, earned), (_, spent)) in income.zip(expense) {
        output.push_str(&format!(
            "{:<12} {} {:>12}  {} {:>12}\n",
            options.date(day),
            format_bar(earned, max, BAR_WIDTH),
            options.money(earned),
            format_bar(spent, max, BAR_WIDTH),
            options.money(spent)
        ));
    }

    output
}

/// One bar per month showing the summed amount
pub fn format_monthly_chart(buckets: &[MonthlyBucket], options: &DisplayOptions) -> String {
    let mut output = String::new();
    output.push_str(&format_header("Monthly Net Amount Summary", 80));
    output.push('\n');
    output.push_str(&separator(80));
    output.push('\n');

    if buckets.is_empty() {
        output.push_str("Nothing to plot.\n");
        return output;
    }

    let max = buckets.iter().map(|b| b.total).max().unwrap_or_default();

    for bucket in buckets {
        output.push_str(&format!(
            "{:<10} {} {:>12}   (income {}, expense {}, net {})\n",
            bucket.label(),
            format_bar(bucket.total, max, BAR_WIDTH),
            options.money(bucket.total),
            options.money(bucket.income),
            options.money(bucket.expense),
            options.money(bucket.net())
        ));
    }

    output
}

/// Create a simple bar chart representation
pub fn format_bar(value: Money, max_value: Money, width: usize) -> String {
    if !max_value.is_positive() || !value.is_positive() {
        return "░".repeat(width);
    }

    let filled = ((value.as_f64() / max_value.as_f64()) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.len()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{monthly_series, summarize};
    use chrono::NaiveDate;

    fn scenario() -> Vec<Transaction> {
        vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                Money::from_cents(2000),
                Category::Expense,
                "coffee",
            ),
            Transaction::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                Money::from_cents(10000),
                Category::Income,
                "salary",
            ),
        ]
    }

    #[test]
    fn test_format_summary() {
        let formatted = format_summary(&summarize(&scenario()), &DisplayOptions::default());
        assert_eq!(
            formatted,
            "Total Income: $100.00\nTotal Expense: $20.00\nNet Saving: $80.00\n"
        );
    }

    #[test]
    fn test_format_empty_range_report() {
        let report = RangeReport {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            transactions: Vec::new(),
            summary: Summary::default(),
        };
        assert_eq!(
            format_range_report(&report, &DisplayOptions::default()),
            "No transactions found in the given date range.\n"
        );
    }

    #[test]
    fn test_format_range_report() {
        let transactions = scenario();
        let report = RangeReport {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            summary: summarize(&transactions),
            transactions,
        };

        let formatted = format_range_report(&report, &DisplayOptions::default());
        assert!(formatted.starts_with("Transactions from 01-01-2024 to 02-01-2024\n"));
        assert!(formatted.contains("salary"));
        assert!(formatted.contains("Net Saving: $80.00"));
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(Money::from_cents(50), Money::from_cents(100), 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);

        let empty = format_bar(Money::zero(), Money::zero(), 4);
        assert_eq!(empty, "░░░░");
    }

    #[test]
    fn test_daily_chart_has_a_row_per_day() {
        let formatted = format_daily_chart(&scenario(), &DisplayOptions::default());
        assert!(formatted.contains("Income and Expenses Over Time"));
        assert!(formatted.contains("01-01-2024"));
        assert!(formatted.contains("02-01-2024"));
        assert!(formatted.contains("$100.00"));
    }

    #[test]
    fn test_daily_chart_empty() {
        let formatted = format_daily_chart(&[], &DisplayOptions::default());
        assert!(formatted.contains("Nothing to plot."));
    }

    #[test]
    fn test_monthly_chart() {
        let formatted =
            format_monthly_chart(&monthly_series(&scenario()), &DisplayOptions::default());
        assert!(formatted.contains("Monthly Net Amount Summary"));
        assert!(formatted.contains("Jan 2024"));
        assert!(formatted.contains("$120.00"));
        assert!(formatted.contains("net $80.00"));
    }
}
