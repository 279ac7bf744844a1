//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the schedule
//! metadata and versioned rate tables from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::catalog::RateTableCatalog;
use super::types::{RateTable, ScheduleMetadata};

/// Loads and provides access to the payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// builds the versioned [`RateTableCatalog`] the engine resolves against.
///
/// # Directory Structure
///
/// ```text
/// config/ccnl_domestico/
/// ├── schedule.yaml        # Agreement metadata
/// └── tables/
///     ├── 2024-01-01.yaml  # Rate table in force during 2024
///     └── 2025-01-01.yaml  # Rate table in force from 2025
/// ```
///
/// # Example
///
/// ```no_run
/// use colf_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/ccnl_domestico").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
/// let rate = loader.hourly_rate("CS", date).unwrap();
/// println!("CS hourly rate: €{}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: ScheduleMetadata,
    catalog: RateTableCatalog,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - any required file is missing (`ConfigNotFound`)
    /// - any file contains invalid YAML (`ConfigParseError`)
    /// - any table fails validation (`InvalidRateTable`)
    /// - two tables have overlapping validity intervals (`RateTableConflict`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("schedule.yaml");
        let metadata = Self::load_yaml::<ScheduleMetadata>(&metadata_path)?;

        let tables_dir = path.join("tables");
        let tables = Self::load_tables(&tables_dir)?;

        let mut catalog = RateTableCatalog::new();
        for table in tables {
            catalog.publish(table)?;
        }

        Ok(Self { metadata, catalog })
    }

    /// Builds a loader from already-constructed parts, bypassing the
    /// filesystem. Intended for embedding and tests.
    pub fn from_parts(metadata: ScheduleMetadata, catalog: RateTableCatalog) -> Self {
        Self { metadata, catalog }
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

    /// Loads all rate table files from the tables directory.
    fn load_tables(tables_dir: &Path) -> EngineResult<Vec<RateTable>> {
        let tables_dir_str = tables_dir.display().to_string();

        let entries = fs::read_dir(tables_dir).map_err(|_| EngineError::ConfigNotFound {
            path: tables_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: tables_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                tables.push(Self::load_yaml::<RateTable>(&path)?);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate table files found)", tables_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the rate table catalog.
    pub fn catalog(&self) -> &RateTableCatalog {
        &self.catalog
    }

    /// Resolves the rate table in force on the given date.
    pub fn resolve(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.catalog.resolve(date)
    }

    /// Gets the hourly wage for a CCNL level on a given date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use colf_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/ccnl_domestico")?;
    /// let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    /// let rate = loader.hourly_rate("B", date)?;
    /// # Ok::<(), colf_engine::error::EngineError>(())
    /// ```
    pub fn hourly_rate(&self, level_code: &str, date: NaiveDate) -> EngineResult<Decimal> {
        self.resolve(date)?.hourly_rate(level_code)
    }
}
