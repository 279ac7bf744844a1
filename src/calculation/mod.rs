//! Payroll calculation pipeline.
//!
//! The pipeline runs in stages, each a pure function over its inputs:
//!
//! 1. [`aggregate_hours`] — timesheet entry into paid hours
//! 2. [`compute_gross`] — paid hours into a gross pay breakdown
//! 3. [`split_contribution`] — INPS split by regime
//! 4. [`irpef_withholding`] and [`tfr_accrual`] — cumulative withholding
//!    and severance accrual
//! 5. [`compose_payslip`] — the reconciled payslip
//!
//! [`summarize_quarter`] and [`annualize`] aggregate finished payslips into
//! the quarterly INPS summary and the annual CU.

mod annual_cu;
mod contribution;
mod gross_pay;
mod paid_hours;
mod payslip;
mod quarterly;
mod withholding;

pub use annual_cu::annualize;
pub use contribution::split_contribution;
pub use gross_pay::compute_gross;
pub use paid_hours::{aggregate_hours, PaidHours};
pub use payslip::compose_payslip;
pub use quarterly::summarize_quarter;
pub use withholding::{irpef_withholding, tfr_accrual};
