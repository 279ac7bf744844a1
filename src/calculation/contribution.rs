//! INPS contribution computation.
//!
//! Domestic-employment contributions follow one of two regimes, selected by
//! the average weekly hours of the period:
//!
//! - at or above the weekly-hours threshold, a flat hourly band applies
//!   (a fixed euro amount per paid hour, with a fixed employee portion)
//! - below the threshold, percentage rates apply to gross pay
//!
//! In both regimes the employer and employee shares are derived so that they
//! sum exactly to the rounded total: one share is rounded, the other is the
//! remainder.

use rust_decimal::Decimal;

use crate::calculation::paid_hours::PaidHours;
use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{cents_from_euros, euros_from_cents, Cents, Contribution, Period};

/// Splits the period's INPS contribution between employer and employee.
///
/// # Errors
///
/// Returns [`EngineError::ContributionThresholdUnresolved`] when the average
/// weekly hours are negative, or when they reach the threshold but no hourly
/// band covers them.
pub fn split_contribution(
    employee_id: &str,
    gross_total: Cents,
    hours: &PaidHours,
    period: Period,
    table: &RateTable,
) -> EngineResult<Contribution> {
    let total_hours = hours.total();
    let weekly = total_hours / period.weeks();

    let unresolved = |message: &str| EngineError::ContributionThresholdUnresolved {
        employee_id: employee_id.to_string(),
        weekly_hours: weekly.normalize().to_string(),
        version: table.version.clone(),
        message: message.to_string(),
    };

    if weekly < Decimal::ZERO {
        return Err(unresolved("average weekly hours are negative"));
    }

    let schedule = &table.contributions;
    if weekly >= schedule.weekly_hours_threshold {
        // Hourly band regime: total and employee share priced per paid hour
        let band = schedule
            .band_for(weekly)
            .ok_or_else(|| unresolved("no hourly band covers the average weekly hours"))?;
        let total = cents_from_euros(band.total_per_hour * total_hours);
        let employee = cents_from_euros(band.employee_per_hour * total_hours);
        let employer = total - employee;
        Ok(Contribution {
            employer,
            employee,
            total,
        })
    } else {
        // Percentage regime: rates applied to gross pay
        let combined = schedule.combined_pct();
        let total =
            cents_from_euros(euros_from_cents(gross_total) * combined / Decimal::ONE_HUNDRED);
        let employer = if combined.is_zero() {
            0
        } else {
            cents_from_euros(euros_from_cents(total) * schedule.employer_pct / combined)
        };
        let employee = total - employer;
        Ok(Contribution {
            employer,
            employee,
            total,
        })
    }
}
