//! Time series over the ledger
//!
//! Daily totals for one category and monthly totals across both, each
//! zero-filled over the span of dates present in the input.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{Category, Money, Transaction};

/// Lazy day-by-day totals for one category
///
/// Walks every day from the earliest to the latest date in the input (of
/// either category). Cloning gives an independent iterator from the same
/// position, and [`DailySeries::restart`] rewinds to the first day.
#[derive(Debug, Clone)]
pub struct DailySeries {
    totals: BTreeMap<NaiveDate, Money>,
    span: Option<(NaiveDate, NaiveDate)>,
    cursor: Option<NaiveDate>,
}

impl DailySeries {
    pub fn new(transactions: &[Transaction], category: Category) -> Self {
        let mut totals: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        for t in transactions.iter().filter(|t| t.category == category) {
            *totals.entry(t.date).or_default() += t.amount;
        }

        let span = date_span(transactions);
        Self {
            totals,
            span,
            cursor: span.map(|(first, _)| first),
        }
    }

    /// Rewind to the first day of the span
    pub fn restart(&mut self) {
        self.cursor = self.span.map(|(first, _)| first);
    }

    /// First and last day covered
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.span
    }
}

impl Iterator for DailySeries {
    type Item = (NaiveDate, Money);

    fn next(&mut self) -> Option<Self::Item> {
        let (_, last) = self.span?;
        let day = self.cursor.filter(|day| *day <= last)?;

        self.cursor = day.succ_opt();
        let total = self.totals.get(&day).copied().unwrap_or_default();
        Some((day, total))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match (self.span, self.cursor) {
            (Some((_, last)), Some(day)) if day <= last => (last - day).num_days() as usize + 1,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

/// Daily totals of `category`, zero-filled across the input's date span
pub fn daily_series(transactions: &[Transaction], category: Category) -> DailySeries {
    DailySeries::new(transactions, category)
}

/// Totals for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyBucket {
    /// First day of the month
    pub month: NaiveDate,
    /// Sum of every amount in the month, income and expense alike
    pub total: Money,
    pub income: Money,
    pub expense: Money,
}

impl MonthlyBucket {
    fn empty(month: NaiveDate) -> Self {
        Self {
            month,
            total: Money::zero(),
            income: Money::zero(),
            expense: Money::zero(),
        }
    }

    fn record(&mut self, transaction: &Transaction) {
        self.total += transaction.amount;
        match transaction.category {
            Category::Income => self.income += transaction.amount,
            Category::Expense => self.expense += transaction.amount,
        }
    }

    /// Income minus expense for the month
    pub fn net(&self) -> Money {
        self.income - self.expense
    }

    /// Short label such as "Jan 2024"
    pub fn label(&self) -> String {
        self.month.format("%b %Y").to_string()
    }
}

/// Per-month totals for every month between the earliest and latest dates
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyBucket> {
    let Some((first, last)) = date_span(transactions) else {
        return Vec::new();
    };

    let mut buckets: BTreeMap<NaiveDate, MonthlyBucket> = BTreeMap::new();
    let last_month = month_start(last);
    let mut month = Some(month_start(first));
    while let Some(current) = month.filter(|m| *m <= last_month) {
        buckets.insert(current, MonthlyBucket::empty(current));
        month = current.checked_add_months(Months::new(1));
    }

    for t in transactions {
        if let Some(bucket) = buckets.get_mut(&month_start(t.date)) {
            bucket.record(t);
        }
    }

    buckets.into_values().collect()
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn date_span(transactions: &[Transaction]) -> Option<(NaiveDate, NaiveDate)> {
    let first = transactions.iter().map(|t| t.date).min()?;
    let last = transactions.iter().map(|t| t.date).max()?;
    Some((first, last))
}
