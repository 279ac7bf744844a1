//! Timesheet aggregation into paid hours.
//!
//! This module normalizes a period's reported hours and absence days into
//! the paid-hour totals the pay calculators consume.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeContract, TimesheetEntry};

/// Paid hours for one employee-period, split by pay category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaidHours {
    /// Regular hours, after absence reduction and the contract cap.
    pub regular: Decimal,
    /// Overtime hours, including regular hours reclassified over the cap.
    pub overtime: Decimal,
    /// Hours worked on public holidays.
    pub holiday: Decimal,
}

impl PaidHours {
    /// Returns the sum of all paid hours.
    pub fn total(&self) -> Decimal {
        self.regular + self.overtime + self.holiday
    }
}

/// Aggregates a timesheet entry into paid hours.
///
/// Two normalizations apply, in order:
///
/// 1. Absence days reduce regular hours by `weekly_hours / 6` per day
///    (six-day-week convention), clamped at zero.
/// 2. Remaining regular hours are capped at `weekly_hours × weeks-in-period`;
///    the excess is reclassified as overtime. Reported hours are never
///    silently dropped — under-reporting pay is the failure mode this
///    guards against.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimesheet`] when any reported hour figure
/// or the contracted weekly hours are negative, or when the entry's period
/// carries an out-of-range month or quarter number.
///
/// # Example
///
/// ```
/// use colf_engine::calculation::aggregate_hours;
/// use colf_engine::models::{EmployeeContract, Period, TimesheetEntry};
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
/// let entry = TimesheetEntry {
///     employee_id: "emp_001".to_string(),
///     period: Period::quarter(2025, 1).unwrap(),
///     regular_hours: Decimal::from(480),
///     overtime_hours: Decimal::ZERO,
///     holiday_hours: Decimal::ZERO,
///     absence_days: 0,
///     revision: 0,
/// };
/// let hours = aggregate_hours(&entry, &contract).unwrap();
/// assert_eq!(hours.regular, Decimal::from(480));
/// ```
pub fn aggregate_hours(
    entry: &TimesheetEntry,
    contract: &EmployeeContract,
) -> EngineResult<PaidHours> {
    let invalid = |message: &str| EngineError::InvalidTimesheet {
        employee_id: entry.employee_id.clone(),
        period: entry.period,
        message: message.to_string(),
    };

    if !entry.period.is_valid() {
        return Err(invalid("month or quarter number out of range"));
    }
    if entry.regular_hours < Decimal::ZERO {
        return Err(invalid("negative regular hours"));
    }
    if entry.overtime_hours < Decimal::ZERO {
        return Err(invalid("negative overtime hours"));
    }
    if entry.holiday_hours < Decimal::ZERO {
        return Err(invalid("negative holiday hours"));
    }
    if contract.weekly_hours < Decimal::ZERO {
        return Err(invalid("negative contracted weekly hours"));
    }

    // Absence reduction: one sixth of the weekly schedule per missed day
    let per_day = contract.weekly_hours / Decimal::from(6);
    let reduction = per_day * Decimal::from(entry.absence_days);
    let mut regular = (entry.regular_hours - reduction).max(Decimal::ZERO);
    let mut overtime = entry.overtime_hours;

    // Cap at the contracted schedule; the excess is overtime, not an error
    let cap = contract.weekly_hours * entry.period.weeks();
    if regular > cap {
        overtime += regular - cap;
        regular = cap;
    }

    Ok(PaidHours {
        regular,
        overtime,
        holiday: entry.holiday_hours,
    })
}
