//! Employee contract model.
//!
//! Contracts are owned by the external employee registry; the engine reads
//! them and never writes them back.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Contractual data for one domestic employee.
///
/// # Example
///
/// ```
/// use colf_engine::models::EmployeeContract;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = EmployeeContract {
///     employee_id: "emp_001".to_string(),
///     level_code: "CS".to_string(),
///     weekly_hours: Decimal::from(40),
///     room_and_board: false,
///     start_date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
///     end_date: None,
/// };
/// assert!(contract.active_in_month(2025, 2));
/// assert!(!contract.active_in_month(2022, 12));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeContract {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The CCNL level code (e.g. "CS", "B", "BS").
    pub level_code: String,
    /// Contracted weekly hours.
    pub weekly_hours: Decimal,
    /// Whether the employee receives room-and-board ("vitto e alloggio").
    pub room_and_board: bool,
    /// The date employment started.
    pub start_date: NaiveDate,
    /// The date employment ended, if terminated.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl EmployeeContract {
    /// Returns true if the contract was active during any day of the given
    /// calendar month.
    pub fn active_in_month(&self, year: i32, month: u32) -> bool {
        let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return false;
        };
        let last_day = last_day_of_month(year, month);

        self.start_date <= last_day && self.end_date.is_none_or(|end| end >= first_day)
    }
}

/// Returns the last day of the given calendar month.
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
