//! User settings for the ledger
//!
//! Holds the store file name, the date format used both in the store and at
//! the prompts, and the currency symbol used for display.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::storage::StoreConfig;

/// User settings for the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Date format (strftime) for the store and for user input
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Store file name inside the data directory
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_date_format() -> String {
    "%d-%m-%Y".to_string()
}

fn default_store_file() -> String {
    "finance_data.csv".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            store_file: default_store_file(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Build the store configuration, honouring an explicit path override
    pub fn store_config(&self, paths: &LedgerPaths, override_path: Option<PathBuf>) -> StoreConfig {
        let path = override_path.unwrap_or_else(|| paths.store_file(&self.store_file));
        StoreConfig::new(path).with_date_format(self.date_format.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%d-%m-%Y");
        assert_eq!(settings.store_file, "finance_data.csv");
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".to_string(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"store_file": "home.csv"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.store_file, "home.csv");
        assert_eq!(loaded.date_format, "%d-%m-%Y");
    }

    #[test]
    fn test_store_config_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        let default = settings.store_config(&paths, None);
        assert_eq!(default.path, temp_dir.path().join("data").join("finance_data.csv"));

        let custom = temp_dir.path().join("elsewhere.csv");
        let overridden = settings.store_config(&paths, Some(custom.clone()));
        assert_eq!(overridden.path, custom);
    }
}
