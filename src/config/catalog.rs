//! Versioned rate table catalog.
//!
//! The catalog is the only shared mutable resource in the engine, and it is
//! append-only: new tables are published, old tables are never mutated or
//! removed. Readers can therefore share a catalog freely (e.g. behind an
//! `Arc`); publication takes `&mut self` and so is serialized by ownership.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

use super::types::RateTable;

/// An append-only collection of versioned rate tables.
///
/// # Example
///
/// ```no_run
/// use colf_engine::config::{ConfigLoader, RateTableCatalog};
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/ccnl_domestico")?;
/// let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
/// let table = loader.catalog().resolve(date)?;
/// println!("table in force: {}", table.version);
/// # Ok::<(), colf_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTableCatalog {
    /// Published tables, sorted by effective_from (oldest first).
    tables: Vec<RateTable>,
}

impl RateTableCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a new rate table.
    ///
    /// The table is validated and checked against every published table for
    /// validity-interval overlap before insertion, so a conflicting table
    /// never becomes visible to readers.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidRateTable`] when the table fails validation
    /// - [`EngineError::RateTableConflict`] when its interval overlaps a
    ///   published table
    pub fn publish(&mut self, table: RateTable) -> EngineResult<()> {
        table.validate()?;

        if let Some(existing) = self.tables.iter().find(|t| t.overlaps(&table)) {
            return Err(EngineError::RateTableConflict {
                version: table.version.clone(),
                existing: existing.version.clone(),
            });
        }

        let position = self
            .tables
            .partition_point(|t| t.effective_from <= table.effective_from);
        self.tables.insert(position, table);
        Ok(())
    }

    /// Resolves the rate table in force on the given date.
    ///
    /// Returns the latest table whose validity interval contains the date,
    /// or [`EngineError::RateTableNotFound`] when none does.
    pub fn resolve(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.tables
            .iter()
            .rev()
            .find(|t| t.in_force_on(date))
            .ok_or(EngineError::RateTableNotFound { date })
    }

    /// Returns all published tables, oldest first.
    pub fn tables(&self) -> &[RateTable] {
        &self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::default_table;

    fn table_for(from: &str, to: Option<&str>) -> RateTable {
        let mut table = default_table();
        table.version = from.to_string();
        table.effective_from = NaiveDate::parse_from_str(from, "%Y-%m-%d").unwrap();
        table.effective_to = to.map(|t| NaiveDate::parse_from_str(t, "%Y-%m-%d").unwrap());
        table
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_resolve_picks_containing_interval() {
        let mut catalog = RateTableCatalog::new();
        catalog
            .publish(table_for("2024-01-01", Some("2024-12-31")))
            .unwrap();
        catalog.publish(table_for("2025-01-01", None)).unwrap();

        assert_eq!(catalog.resolve(date("2024-06-15")).unwrap().version, "2024-01-01");
        assert_eq!(catalog.resolve(date("2025-06-15")).unwrap().version, "2025-01-01");
    }

    #[test]
    fn test_resolve_before_any_table_fails() {
        let mut catalog = RateTableCatalog::new();
        catalog.publish(table_for("2025-01-01", None)).unwrap();

        match catalog.resolve(date("2019-01-01")) {
            Err(EngineError::RateTableNotFound { date: d }) => {
                assert_eq!(d, date("2019-01-01"));
            }
            other => panic!("Expected RateTableNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_in_coverage_gap_fails() {
        let mut catalog = RateTableCatalog::new();
        catalog
            .publish(table_for("2023-01-01", Some("2023-12-31")))
            .unwrap();
        catalog.publish(table_for("2025-01-01", None)).unwrap();

        assert!(catalog.resolve(date("2024-06-01")).is_err());
    }

    #[test]
    fn test_publish_rejects_overlap() {
        let mut catalog = RateTableCatalog::new();
        catalog.publish(table_for("2025-01-01", None)).unwrap();

        let err = catalog.publish(table_for("2025-07-01", None)).unwrap_err();
        match err {
            EngineError::RateTableConflict { version, existing } => {
                assert_eq!(version, "2025-07-01");
                assert_eq!(existing, "2025-01-01");
            }
            other => panic!("Expected RateTableConflict, got {other:?}"),
        }
        // The conflicting table must not have become visible
        assert_eq!(catalog.tables().len(), 1);
    }

    #[test]
    fn test_publish_rejects_invalid_table() {
        let mut catalog = RateTableCatalog::new();
        let mut bad = table_for("2025-01-01", None);
        bad.levels.clear();

        assert!(catalog.publish(bad).is_err());
        assert!(catalog.tables().is_empty());
    }

    #[test]
    fn test_publish_out_of_order_keeps_tables_sorted() {
        let mut catalog = RateTableCatalog::new();
        catalog.publish(table_for("2025-01-01", None)).unwrap();
        catalog
            .publish(table_for("2023-01-01", Some("2023-12-31")))
            .unwrap();
        catalog
            .publish(table_for("2024-01-01", Some("2024-12-31")))
            .unwrap();

        let versions: Vec<&str> = catalog.tables().iter().map(|t| t.version.as_str()).collect();
        assert_eq!(versions, vec!["2023-01-01", "2024-01-01", "2025-01-01"]);
    }

    #[test]
    fn test_adjacent_intervals_do_not_conflict() {
        let mut catalog = RateTableCatalog::new();
        catalog
            .publish(table_for("2024-01-01", Some("2024-12-31")))
            .unwrap();
        catalog.publish(table_for("2025-01-01", None)).unwrap();
        assert_eq!(catalog.tables().len(), 2);
    }
}
