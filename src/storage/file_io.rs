//! CSV file I/O with atomic writes
//!
//! The ledger is always rewritten wholesale, so every write goes to a temp
//! file in the same directory and is renamed over the original.

use std::fs;
use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::error::LedgerError;

/// Header plus data rows of a CSV file
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub header: StringRecord,
    pub rows: Vec<StringRecord>,
}

/// Read a CSV file with a header row
///
/// A zero-length file yields an empty header and no rows.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<CsvTable, LedgerError> {
    let path = path.as_ref();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| LedgerError::Csv(format!("Failed to open {}: {}", path.display(), e)))?;

    let header = reader
        .headers()
        .map_err(|e| LedgerError::Csv(format!("Failed to read header of {}: {}", path.display(), e)))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| LedgerError::Csv(format!("Failed to parse {}: {}", path.display(), e)))?;
        rows.push(record);
    }

    Ok(CsvTable { header, rows })
}

/// Write a CSV file atomically (write to temp, then rename)
pub fn write_csv_atomic<P, I, R>(path: P, header: &[&str], rows: I) -> Result<(), LedgerError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let result = write_rows(&temp_path, header, rows).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| LedgerError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_rows<I, R>(temp_path: &Path, header: &[&str], rows: I) -> Result<(), LedgerError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_path(temp_path)?;

    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
