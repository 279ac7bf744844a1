//! Payslip composition and consistency checks.

use crate::error::{EngineError, EngineResult};
use crate::models::{Cents, Contribution, GrossPay, IrpefWithholding, PayslipResult, Period};

/// Composes the final payslip from the already-computed components and
/// enforces the net-pay invariant.
///
/// `net = gross.total - contribution.employee - irpef`. TFR is accrued, not
/// paid, so it never reduces net pay.
///
/// # Errors
///
/// Returns [`EngineError::PayslipInconsistent`] when the components cannot
/// form a coherent payslip: a negative component, a contribution split that
/// does not sum to its total, or deductions exceeding gross pay.
pub fn compose_payslip(
    employee_id: &str,
    period: Period,
    gross: GrossPay,
    contribution: Contribution,
    irpef: IrpefWithholding,
    tfr_accrual: Cents,
    table_version: &str,
) -> EngineResult<PayslipResult> {
    let inconsistent = |message: String| EngineError::PayslipInconsistent {
        employee_id: employee_id.to_string(),
        period,
        version: table_version.to_string(),
        message,
    };

    let component_sum =
        gross.base + gross.overtime_premium + gross.holiday_premium + gross.room_and_board;
    if gross.total != component_sum {
        return Err(inconsistent(format!(
            "gross total {} does not match component sum {component_sum}",
            gross.total
        )));
    }
    if gross.base < 0 || gross.overtime_premium < 0 || gross.holiday_premium < 0
        || gross.room_and_board < 0
    {
        return Err(inconsistent("negative gross component".to_string()));
    }
    if contribution.employer + contribution.employee != contribution.total {
        return Err(inconsistent(format!(
            "contribution shares {} + {} do not sum to total {}",
            contribution.employer, contribution.employee, contribution.total
        )));
    }
    if contribution.employer < 0 || contribution.employee < 0 {
        return Err(inconsistent("negative contribution share".to_string()));
    }
    if irpef.period_amount < 0 || tfr_accrual < 0 {
        return Err(inconsistent("negative withholding or accrual".to_string()));
    }

    let deductions = contribution.employee + irpef.period_amount;
    if deductions > gross.total {
        return Err(inconsistent(format!(
            "deductions {deductions} exceed gross pay {}",
            gross.total
        )));
    }

    Ok(PayslipResult {
        employee_id: employee_id.to_string(),
        period,
        gross,
        contribution,
        irpef: irpef.period_amount,
        tfr_accrual,
        net: gross.total - deductions,
        table_version: table_version.to_string(),
    })
}
