//! Payslip result models.
//!
//! [`PayslipResult`] is the derived output of one payslip computation. It is
//! referentially transparent: recomputing from the same contract, timesheet
//! and rate table version yields an identical value, so the struct carries
//! no timestamps or generated identifiers.

use serde::{Deserialize, Serialize};

use super::money::Cents;
use super::Period;

/// The gross pay breakdown for one employee-period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossPay {
    /// Base pay: hourly rate times regular hours.
    pub base: Cents,
    /// Overtime pay including the surcharge factor.
    pub overtime_premium: Cents,
    /// Holiday-work pay including the surcharge factor.
    pub holiday_premium: Cents,
    /// Room-and-board indemnity, zero when the contract flag is unset.
    pub room_and_board: Cents,
    /// Sum of all components.
    pub total: Cents,
}

impl GrossPay {
    /// An all-zero gross pay, for periods with no worked time.
    pub const ZERO: GrossPay = GrossPay {
        base: 0,
        overtime_premium: 0,
        holiday_premium: 0,
        room_and_board: 0,
        total: 0,
    };
}

/// The INPS contribution split for one employee-period.
///
/// The employer and employee shares always sum exactly to the total; one
/// share is assigned as the remainder of the other, so per-line rounding can
/// never introduce drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// The employer's share.
    pub employer: Cents,
    /// The employee's share, deducted from net pay.
    pub employee: Cents,
    /// The combined contribution.
    pub total: Cents,
}

impl Contribution {
    /// An all-zero contribution.
    pub const ZERO: Contribution = Contribution {
        employer: 0,
        employee: 0,
        total: 0,
    };
}

/// IRPEF withholding for one period, computed on the cumulative
/// year-to-date base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrpefWithholding {
    /// The amount withheld this period: cumulative tax minus the tax
    /// already accounted for in prior periods.
    pub period_amount: Cents,
    /// The cumulative year-to-date taxable base after this period.
    pub ytd_taxable: Cents,
    /// The cumulative year-to-date tax after this period.
    pub ytd_tax: Cents,
}

/// The complete, derived result of one payslip computation.
///
/// Invariant: `net = gross.total - contribution.employee - irpef`. TFR is
/// accrued, not paid, and does not reduce net pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipResult {
    /// The employee the payslip is for.
    pub employee_id: String,
    /// The pay period.
    pub period: Period,
    /// Gross pay breakdown.
    pub gross: GrossPay,
    /// INPS contribution split.
    pub contribution: Contribution,
    /// IRPEF withheld this period.
    pub irpef: Cents,
    /// TFR (severance) accrued this period.
    pub tfr_accrual: Cents,
    /// Net pay after employee contribution and IRPEF.
    pub net: Cents,
    /// The version of the rate table the computation used.
    pub table_version: String,
}
