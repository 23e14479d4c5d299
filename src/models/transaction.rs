//! Transaction model
//!
//! A ledger row: a dated, categorized amount with a free-text description.
//! There is no surrogate ID; `(date, description)` is the natural key used
//! to find rows for update and delete.

use chrono::NaiveDate;

use super::category::Category;
use super::money::Money;

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Day the transaction happened
    pub date: NaiveDate,

    /// Non-negative amount; the category carries the direction
    pub amount: Money,

    /// Income or expense
    pub category: Category,

    /// Free-text description, also half of the natural key
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Check whether this row is identified by the given natural key
    pub fn matches_key(&self, date: NaiveDate, description: &str) -> bool {
        self.date == date && self.description == description
    }

    pub fn is_income(&self) -> bool {
        self.category == Category::Income
    }

    pub fn is_expense(&self) -> bool {
        self.category == Category::Expense
    }

    /// Overwrite the fields the patch provides, leaving the rest untouched
    pub fn apply(&mut self, patch: &TransactionPatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
    }
}

/// Replacement values for an update; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub description: Option<String>,
}

impl TransactionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set a new description; an empty string means "keep the current one"
    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.description.is_none()
    }
}
