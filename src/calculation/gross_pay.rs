//! Gross pay computation.

use rust_decimal::Decimal;

use crate::calculation::paid_hours::PaidHours;
use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{cents_from_euros, EmployeeContract, GrossPay, Period};

/// Computes gross pay for one employee-period.
///
/// Each pay component is priced in euros and rounded to whole cents
/// independently; the total is the exact sum of the rounded components,
/// so the payslip always reconciles line by line.
///
/// Components:
/// - base pay: regular hours at the level's hourly rate
/// - overtime premium: overtime hours at the rate times the overtime factor
/// - holiday premium: holiday hours at the rate times the holiday factor
/// - room and board: daily allowance for each working day actually attended,
///   when the contract includes it; a period with no paid hours at all pays
///   no allowance
///
/// # Errors
///
/// Returns [`EngineError::LevelNotFound`](crate::error::EngineError::LevelNotFound)
/// when the contract's level code is not priced by the rate table.
pub fn compute_gross(
    contract: &EmployeeContract,
    hours: &PaidHours,
    period: Period,
    absence_days: u32,
    table: &RateTable,
) -> EngineResult<GrossPay> {
    let rate = table.hourly_rate(&contract.level_code)?;

    let base = cents_from_euros(rate * hours.regular);
    let overtime_premium = cents_from_euros(rate * hours.overtime * table.factors.overtime);
    let holiday_premium = cents_from_euros(rate * hours.holiday * table.factors.holiday);

    // In-kind benefits presume presence: a workless period pays no allowance
    let room_and_board = if contract.room_and_board && hours.total() > Decimal::ZERO {
        let paid_days = period.working_days().saturating_sub(absence_days);
        cents_from_euros(table.allowances.room_and_board_daily * Decimal::from(paid_days))
    } else {
        0
    };

    let total = base + overtime_premium + holiday_premium + room_and_board;

    Ok(GrossPay {
        base,
        overtime_premium,
        holiday_premium,
        room_and_board,
        total,
    })
}
