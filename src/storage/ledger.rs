//! Ledger store backed by a single CSV file
//!
//! Every mutation loads the whole file, changes it in memory, sorts by date
//! descending and rewrites it. Rows are addressed by their natural key
//! `(date, description)`; when several rows share a key, update and delete
//! affect all of them.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    format_date, parse_date_str, Category, Money, Transaction, TransactionPatch,
    DEFAULT_DATE_FORMAT,
};

use super::file_io::{read_csv, write_csv_atomic};

/// A column of the store file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    Amount,
    Category,
    Description,
}

impl Column {
    /// Header name as written to the file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column order used when writing the store
pub const DEFAULT_COLUMNS: [Column; 4] = [
    Column::Date,
    Column::Amount,
    Column::Category,
    Column::Description,
];

/// Everything a [`LedgerStore`] needs to know about its file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Location of the CSV file
    pub path: PathBuf,
    /// strftime format of the date column
    pub date_format: String,
    /// Column order used when writing
    pub columns: [Column; 4],
}

impl StoreConfig {
    /// Config with the default date format and column order
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            columns: DEFAULT_COLUMNS,
        }
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub fn with_columns(mut self, columns: [Column; 4]) -> Self {
        self.columns = columns;
        self
    }

    fn header(&self) -> [&'static str; 4] {
        self.columns.map(|c| c.as_str())
    }
}

/// Positions of each column in a file that was read back
struct ColumnIndex {
    date: usize,
    amount: usize,
    category: usize,
    description: usize,
}

impl ColumnIndex {
    fn from_header(header: &StringRecord, path: &Path) -> LedgerResult<Self> {
        let find = |column: Column| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column.as_str()))
                .ok_or_else(|| {
                    LedgerError::Storage(format!(
                        "{} is missing the '{}' column",
                        path.display(),
                        column
                    ))
                })
        };

        Ok(Self {
            date: find(Column::Date)?,
            amount: find(Column::Amount)?,
            category: find(Column::Category)?,
            description: find(Column::Description)?,
        })
    }
}

/// The persisted ledger
#[derive(Debug, Clone)]
pub struct LedgerStore {
    config: StoreConfig,
}

impl LedgerStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Create the store with just a header row if it doesn't exist yet
    ///
    /// Returns `true` when the file was created by this call.
    pub fn initialize(&self) -> LedgerResult<bool> {
        if self.path().exists() {
            return Ok(false);
        }

        write_csv_atomic(self.path(), &self.config.header(), Vec::<[String; 4]>::new())?;
        info!(path = %self.path().display(), "created empty ledger");
        Ok(true)
    }

    /// Load the full ledger in file order, creating the store if it's missing
    pub fn load(&self) -> LedgerResult<Vec<Transaction>> {
        self.initialize()?;

        let table = read_csv(self.path())?;
        if table.header.is_empty() {
            return Ok(Vec::new());
        }

        let index = ColumnIndex::from_header(&table.header, self.path())?;
        let transactions = table
            .rows
            .iter()
            .map(|record| self.parse_row(record, &index))
            .collect::<LedgerResult<Vec<_>>>()?;

        debug!(path = %self.path().display(), rows = transactions.len(), "loaded ledger");
        Ok(transactions)
    }

    /// Append a transaction, then re-sort and rewrite the store
    pub fn add_entry(
        &self,
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: &str,
    ) -> LedgerResult<()> {
        self.add(Transaction::new(date, amount, category, description))
    }

    pub fn add(&self, transaction: Transaction) -> LedgerResult<()> {
        let mut transactions = self.load()?;
        info!(
            date = %transaction.date,
            amount = %transaction.amount,
            category = %transaction.category,
            "adding entry"
        );
        transactions.push(transaction);
        self.save(transactions)
    }

    /// All transactions with `start <= date <= end`, in store order
    ///
    /// An inverted range simply matches nothing.
    pub fn get_transactions(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> LedgerResult<Vec<Transaction>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect())
    }

    /// Remove every row whose date and description both match exactly
    ///
    /// Returns the number of rows removed. With no match the file is not
    /// touched at all.
    pub fn delete_entry(&self, date: NaiveDate, description: &str) -> LedgerResult<usize> {
        let mut transactions = self.load()?;
        let before = transactions.len();
        transactions.retain(|t| !t.matches_key(date, description));
        let removed = before - transactions.len();

        if removed == 0 {
            debug!(%date, description, "delete matched nothing");
            return Ok(0);
        }

        self.save(transactions)?;
        info!(%date, description, removed, "deleted entries");
        Ok(removed)
    }

    /// Apply `patch` to every row whose date and description both match exactly
    ///
    /// Returns the number of matching rows. An empty patch or no match leaves
    /// the file untouched.
    pub fn update_entry(
        &self,
        date: NaiveDate,
        description: &str,
        patch: &TransactionPatch,
    ) -> LedgerResult<usize> {
        let mut transactions = self.load()?;

        let mut matched = 0;
        for transaction in transactions
            .iter_mut()
            .filter(|t| t.matches_key(date, description))
        {
            transaction.apply(patch);
            matched += 1;
        }

        if matched == 0 {
            debug!(%date, description, "update matched nothing");
            return Ok(0);
        }
        if patch.is_empty() {
            return Ok(matched);
        }

        self.save(transactions)?;
        info!(%date, description, matched, "updated entries");
        Ok(matched)
    }

    /// Write the store, byte for byte, to `destination`
    ///
    /// Exporting onto the store's own file leaves it untouched.
    pub fn export_to(&self, destination: impl AsRef<Path>) -> LedgerResult<()> {
        let destination = destination.as_ref();
        self.initialize()?;

        let contents = fs::read(self.path()).map_err(|e| {
            LedgerError::Io(format!("Failed to read {}: {}", self.path().display(), e))
        })?;

        if is_same_file(self.path(), destination) {
            debug!(destination = %destination.display(), "export target is the store itself");
            return Ok(());
        }

        fs::write(destination, contents).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to export ledger to {}: {}",
                destination.display(),
                e
            ))
        })?;

        info!(destination = %destination.display(), "exported ledger");
        Ok(())
    }

    /// Earliest and latest date in the ledger
    pub fn date_range(&self) -> LedgerResult<Option<(NaiveDate, NaiveDate)>> {
        let transactions = self.load()?;
        let earliest = transactions.iter().map(|t| t.date).min();
        let latest = transactions.iter().map(|t| t.date).max();
        Ok(earliest.zip(latest))
    }

    pub fn len(&self) -> LedgerResult<usize> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.len()? == 0)
    }

    fn save(&self, mut transactions: Vec<Transaction>) -> LedgerResult<()> {
        // Stable sort: rows sharing a date keep their insertion order
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        let rows = transactions
            .iter()
            .map(|t| self.to_row(t))
            .collect::<LedgerResult<Vec<_>>>()?;

        write_csv_atomic(self.path(), &self.config.header(), rows)
    }

    fn to_row(&self, transaction: &Transaction) -> LedgerResult<[String; 4]> {
        let date = format_date(transaction.date, &self.config.date_format)?;
        Ok(self.config.columns.map(|column| match column {
            Column::Date => date.clone(),
            Column::Amount => transaction.amount.to_decimal_string(),
            Column::Category => transaction.category.to_string(),
            Column::Description => transaction.description.clone(),
        }))
    }

    fn parse_row(&self, record: &StringRecord, index: &ColumnIndex) -> LedgerResult<Transaction> {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let malformed = |what: &str, detail: String| {
            LedgerError::Storage(format!(
                "{} line {}: invalid {}: {}",
                self.path().display(),
                line,
                what,
                detail
            ))
        };
        let field = |i: usize| record.get(i).unwrap_or("");

        let date = parse_date_str(field(index.date), &self.config.date_format)
            .map_err(|e| malformed("date", e.to_string()))?;
        let amount =
            Money::parse(field(index.amount)).map_err(|e| malformed("amount", e.to_string()))?;
        if amount > Money::MAX_ENTRY {
            return Err(malformed(
                "amount",
                format!("{} exceeds {}", amount, Money::MAX_ENTRY),
            ));
        }
        let category = field(index.category)
            .parse::<Category>()
            .map_err(|e| malformed("category", e.to_string()))?;

        Ok(Transaction {
            date,
            amount,
            category,
            description: field(index.description).to_string(),
        })
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
