//! Income / expense summary
//!
//! Totals for a set of transactions, typically the result of a range query.

use std::iter::Sum;
use std::ops::Add;

use chrono::NaiveDate;

use crate::error::LedgerResult;
use crate::models::{Category, Money, Transaction};
use crate::storage::LedgerStore;

/// Aggregate totals over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Sum of all income amounts
    pub total_income: Money,
    /// Sum of all expense amounts
    pub total_expense: Money,
    /// Income minus expense
    pub net_saving: Money,
}

impl Summary {
    /// Summarize a set of transactions; empty input gives all zeros
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions.into_iter().map(Self::of).sum()
    }

    /// Summary of a single transaction
    pub fn of(transaction: &Transaction) -> Self {
        let (income, expense) = match transaction.category {
            Category::Income => (transaction.amount, Money::zero()),
            Category::Expense => (Money::zero(), transaction.amount),
        };
        Self::new(income, expense)
    }

    pub fn new(total_income: Money, total_expense: Money) -> Self {
        Self {
            total_income,
            total_expense,
            net_saving: total_income - total_expense,
        }
    }

    /// Combine summaries of two disjoint sets
    pub fn combine(self, other: Self) -> Self {
        Self::new(
            self.total_income + other.total_income,
            self.total_expense + other.total_expense,
        )
    }
}

/// Shorthand for [`Summary::from_transactions`]
pub fn summarize(transactions: &[Transaction]) -> Summary {
    Summary::from_transactions(transactions)
}

impl Add for Summary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.combine(other)
    }
}

impl Sum for Summary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Summary::default(), Summary::combine)
    }
}

/// A range query together with its totals
#[derive(Debug, Clone)]
pub struct RangeReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
}

impl RangeReport {
    /// Query the store for `[start, end]` and summarize the result
    pub fn generate(store: &LedgerStore, start: NaiveDate, end: NaiveDate) -> LedgerResult<Self> {
        let transactions = store.get_transactions(start, end)?;
        let summary = summarize(&transactions);
        Ok(Self {
            start,
            end,
            transactions,
            summary,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
