//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! tables and the holiday list from a YAML configuration directory.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{HolidayTable, HolidaysFile, StatutoryConfig};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML files from a tax-year directory and
/// exposes the statutory tables and the holiday lookup.
///
/// # Directory Structure
///
/// ```text
/// config/il2025/
/// ├── statutory.yaml   # tax brackets, insurance tables, rates, ceilings
/// └── holidays.yaml    # fixed holiday-date table
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/il2025").unwrap();
/// let passover = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap();
/// assert!(loader.holidays().contains(passover));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    statutory: StatutoryConfig,
    holidays: HolidayTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/il2025")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if either
    /// file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statutory_path = path.join("statutory.yaml");
        let statutory = Self::load_yaml::<StatutoryConfig>(&statutory_path)?;

        let holidays_path = path.join("holidays.yaml");
        let holidays_file = Self::load_yaml::<HolidaysFile>(&holidays_path)?;

        Ok(Self {
            statutory,
            holidays: HolidayTable::new(holidays_file.holidays),
        })
    }

    /// Builds a loader directly from its parts, bypassing the filesystem.
    ///
    /// Used by callers that embed or construct the tables themselves.
    pub fn from_parts(statutory: StatutoryConfig, holidays: HolidayTable) -> Self {
        Self {
            statutory,
            holidays,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the statutory tables.
    pub fn statutory(&self) -> &StatutoryConfig {
        &self.statutory
    }

    /// Returns the holiday lookup table.
    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }
}
