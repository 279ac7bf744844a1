//! Annual Certificazione Unica (CU) composition.

use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{CuDocument, CuStatus, EmployeeContract, PayslipResult, Period};

/// Composes the annual CU for one employee from the year's monthly payslips.
///
/// Every month the contract was active in the tax year must have a payslip;
/// the certification then covers exactly those months, so partial-year
/// employment (mid-year start or termination) yields a partial CU rather
/// than an error. Totals are exact sums over the covered payslips.
///
/// When the same month appears more than once, the later entry supersedes
/// the earlier one.
///
/// # Errors
///
/// Returns [`EngineError::IncompleteYear`] naming the first missing month
/// when an active month has no payslip.
pub fn annualize(
    contract: &EmployeeContract,
    tax_year: i32,
    payslips: &[PayslipResult],
) -> EngineResult<CuDocument> {
    let mut by_month: BTreeMap<u32, &PayslipResult> = BTreeMap::new();
    for payslip in payslips {
        if payslip.employee_id != contract.employee_id {
            continue;
        }
        if let Period::Month { year, month } = payslip.period {
            if year == tax_year {
                by_month.insert(month, payslip);
            }
        }
    }

    for month in 1..=12 {
        if contract.active_in_month(tax_year, month) && !by_month.contains_key(&month) {
            return Err(EngineError::IncompleteYear {
                employee_id: contract.employee_id.clone(),
                year: tax_year,
                month,
            });
        }
    }

    let total_gross = by_month.values().map(|p| p.gross.total).sum();
    let total_irpef = by_month.values().map(|p| p.irpef).sum();
    let total_contributions = by_month.values().map(|p| p.contribution.total).sum();

    Ok(CuDocument {
        employee_id: contract.employee_id.clone(),
        tax_year,
        total_gross,
        total_irpef,
        total_contributions,
        months: by_month.into_keys().collect(),
        status: CuStatus::Draft,
    })
}
