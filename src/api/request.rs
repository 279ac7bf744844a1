//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the payslip,
//! quarterly-contribution, and annual-CU endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Cents, EmployeeContract, PayslipResult, Period, TimesheetEntry};

/// Request body for the `/payslip` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The employee's contract.
    pub contract: ContractRequest,
    /// The period's timesheet entry.
    pub timesheet: TimesheetRequest,
    /// The date the rate table is resolved against.
    pub as_of_date: NaiveDate,
    /// Year-to-date gross already taxed before this period, in cents.
    #[serde(default)]
    pub ytd_gross: Cents,
}

/// Employee contract information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRequest {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The CCNL level code (e.g., "CS").
    pub level_code: String,
    /// Contracted hours per week.
    pub weekly_hours: Decimal,
    /// Whether the contract includes the room-and-board indemnity.
    #[serde(default)]
    pub room_and_board: bool,
    /// The date the employment started.
    pub start_date: NaiveDate,
    /// The date the employment ended, if terminated.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Timesheet information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// The period the entry covers.
    pub period: Period,
    /// Regular hours worked.
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Hours worked on public holidays.
    #[serde(default)]
    pub holiday_hours: Decimal,
    /// Unpaid absence days.
    #[serde(default)]
    pub absence_days: u32,
}

/// Request body for the `/contributions/quarterly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterlyRequest {
    /// The calendar year.
    pub year: i32,
    /// The quarter (1-4).
    pub quarter: u32,
    /// The finished payslips to summarize.
    pub payslips: Vec<PayslipResult>,
}

/// Request body for the `/cu/annual` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualCuRequest {
    /// The employee's contract.
    pub contract: ContractRequest,
    /// The tax year to certify.
    pub tax_year: i32,
    /// The year's monthly payslips.
    pub payslips: Vec<PayslipResult>,
}

impl From<ContractRequest> for EmployeeContract {
    fn from(req: ContractRequest) -> Self {
        EmployeeContract {
            employee_id: req.employee_id,
            level_code: req.level_code,
            weekly_hours: req.weekly_hours,
            room_and_board: req.room_and_board,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl TimesheetRequest {
    /// Builds the timesheet entry for the given employee.
    ///
    /// The entry's employee id comes from the contract, so a request cannot
    /// pair one employee's contract with another's hours.
    pub fn into_entry(self, employee_id: &str) -> TimesheetEntry {
        TimesheetEntry {
            employee_id: employee_id.to_string(),
            period: self.period,
            regular_hours: self.regular_hours,
            overtime_hours: self.overtime_hours,
            holiday_hours: self.holiday_hours,
            absence_days: self.absence_days,
            revision: 0,
        }
    }
}
