//! Timesheet entry model.
//!
//! One entry records the worked time for one employee in one pay period.
//! Entries are immutable once a payslip has been finalized for the period;
//! corrections go through [`TimesheetEntry::superseded_by`], which produces
//! a new entry with a bumped revision, never an in-place edit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Period;

/// Worked-time records for one employee and one pay period.
///
/// # Example
///
/// ```
/// use colf_engine::models::{Period, TimesheetEntry};
/// use rust_decimal::Decimal;
///
/// let entry = TimesheetEntry {
///     employee_id: "emp_001".to_string(),
///     period: Period::month(2025, 2).unwrap(),
///     regular_hours: Decimal::from(160),
///     overtime_hours: Decimal::from(4),
///     holiday_hours: Decimal::ZERO,
///     absence_days: 1,
///     revision: 0,
/// };
/// assert_eq!(entry.total_hours(), Decimal::from(164));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    /// The employee the entry belongs to.
    pub employee_id: String,
    /// The pay period the entry covers.
    pub period: Period,
    /// Regular hours as reported by data entry.
    pub regular_hours: Decimal,
    /// Overtime hours as reported.
    pub overtime_hours: Decimal,
    /// Hours worked on public holidays.
    pub holiday_hours: Decimal,
    /// Full days of absence.
    pub absence_days: u32,
    /// Supersession counter; 0 for the original entry.
    #[serde(default)]
    pub revision: u32,
}

impl TimesheetEntry {
    /// Returns the sum of all reported hours.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours + self.holiday_hours
    }

    /// Creates a superseding entry with corrected figures.
    ///
    /// The new entry keeps the employee and period, and carries the next
    /// revision number so downstream stores can tell the two apart.
    pub fn superseded_by(
        &self,
        regular_hours: Decimal,
        overtime_hours: Decimal,
        holiday_hours: Decimal,
        absence_days: u32,
    ) -> TimesheetEntry {
        TimesheetEntry {
            employee_id: self.employee_id.clone(),
            period: self.period,
            regular_hours,
            overtime_hours,
            holiday_hours,
            absence_days,
            revision: self.revision + 1,
        }
    }
}
