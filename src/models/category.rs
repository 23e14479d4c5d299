//! Transaction category
//!
//! Every ledger entry is either income or an expense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Whether a transaction brings money in or sends it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    /// All categories, in menu order
    pub fn all() -> &'static [Category] {
        &[Category::Income, Category::Expense]
    }

    /// The label written to the store and shown to the user
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    /// Case-insensitive: "income", "EXPENSE" and "Income" are all accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(LedgerError::Validation(format!(
                "Invalid category '{}'. Please enter 'Income' or 'Expense'",
                s.trim()
            ))),
        }
    }
}
