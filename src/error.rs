//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Period;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type. Variants carry the
/// context needed to reproduce a failure: employee id, period, and rate
/// table version where applicable.
///
/// # Example
///
/// ```
/// use colf_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::RateTableNotFound {
///     date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
/// };
/// assert_eq!(error.to_string(), "No rate table in force on 2019-01-01");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate table failed structural validation.
    #[error("Invalid rate table '{version}': {message}")]
    InvalidRateTable {
        /// The version of the offending table.
        version: String,
        /// A description of what made the table invalid.
        message: String,
    },

    /// No rate table's validity interval covers the requested date.
    #[error("No rate table in force on {date}")]
    RateTableNotFound {
        /// The date for which a table was requested.
        date: NaiveDate,
    },

    /// Two rate tables have overlapping validity intervals.
    #[error("Rate table '{version}' overlaps the validity interval of '{existing}'")]
    RateTableConflict {
        /// The version of the table being published.
        version: String,
        /// The version of the already-published table it overlaps.
        existing: String,
    },

    /// A CCNL level code was not found in the rate table.
    #[error("CCNL level not found: {code}")]
    LevelNotFound {
        /// The level code that was not found.
        code: String,
    },

    /// A timesheet entry contained invalid data.
    #[error("Invalid timesheet for employee '{employee_id}' in {period}: {message}")]
    InvalidTimesheet {
        /// The employee the entry belongs to.
        employee_id: String,
        /// The period the entry covers.
        period: Period,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// The contribution schedule has no regime covering the given hours.
    #[error(
        "Cannot resolve contribution regime for employee '{employee_id}' \
         ({weekly_hours} weekly hours, table '{version}'): {message}"
    )]
    ContributionThresholdUnresolved {
        /// The employee the computation is for.
        employee_id: String,
        /// The average weekly hours that failed to resolve.
        weekly_hours: String,
        /// The rate table version consulted.
        version: String,
        /// A description of the gap.
        message: String,
    },

    /// Composed payslip inputs violated an internal invariant.
    ///
    /// This should never occur if the upstream calculators are correct; its
    /// presence signals an engine defect, not a user error.
    #[error(
        "Inconsistent payslip for employee '{employee_id}' in {period} \
         (table '{version}'): {message}"
    )]
    PayslipInconsistent {
        /// The employee the payslip is for.
        employee_id: String,
        /// The period being composed.
        period: Period,
        /// The rate table version used.
        version: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// A month the contract was active in has no payslip.
    #[error("Missing payslip for employee '{employee_id}', month {month} of {year}")]
    IncompleteYear {
        /// The employee the certification is for.
        employee_id: String,
        /// The tax year being annualized.
        year: i32,
        /// The first missing month (1-12).
        month: u32,
    },

    /// A CU document status transition would move backwards.
    #[error("CU status cannot regress from {from} to {to}")]
    CuStatusRegression {
        /// The current status.
        from: String,
        /// The rejected target status.
        to: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_rate_table_not_found_displays_date() {
        let error = EngineError::RateTableNotFound {
            date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
        };
        assert_eq!(error.to_string(), "No rate table in force on 2019-01-01");
    }

    #[test]
    fn test_rate_table_conflict_displays_versions() {
        let error = EngineError::RateTableConflict {
            version: "2025-07-01".to_string(),
            existing: "2025-01-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Rate table '2025-07-01' overlaps the validity interval of '2025-01-01'"
        );
    }

    #[test]
    fn test_level_not_found_displays_code() {
        let error = EngineError::LevelNotFound {
            code: "ZZ".to_string(),
        };
        assert_eq!(error.to_string(), "CCNL level not found: ZZ");
    }

    #[test]
    fn test_invalid_timesheet_displays_employee_and_period() {
        let error = EngineError::InvalidTimesheet {
            employee_id: "emp_001".to_string(),
            period: Period::month(2025, 2).unwrap(),
            message: "negative regular hours".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid timesheet for employee 'emp_001' in 2025-02: negative regular hours"
        );
    }

    #[test]
    fn test_incomplete_year_displays_month() {
        let error = EngineError::IncompleteYear {
            employee_id: "emp_001".to_string(),
            year: 2024,
            month: 7,
        };
        assert_eq!(
            error.to_string(),
            "Missing payslip for employee 'emp_001', month 7 of 2024"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::RateTableNotFound {
                date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
