//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contract;
mod cu;
mod money;
mod payslip;
mod period;
mod quarterly;
mod timesheet;

pub use contract::EmployeeContract;
pub use cu::{CuDocument, CuStatus};
pub use money::{cents_from_euros, euros_from_cents, Cents};
pub use payslip::{Contribution, GrossPay, IrpefWithholding, PayslipResult};
pub use period::{Period, Quarter};
pub use quarterly::{ContributionLine, QuarterlyContributionSummary};
pub use timesheet::TimesheetEntry;
