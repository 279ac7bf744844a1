//! The payroll engine facade.
//!
//! [`PayrollEngine`] ties the rate-table configuration to the calculation
//! pipeline and exposes the operations callers consume: single payslips,
//! batches, quarterly INPS summaries, and annual CU composition.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::calculation::{
    aggregate_hours, annualize, compose_payslip, compute_gross, irpef_withholding,
    split_contribution, summarize_quarter, tfr_accrual,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Cents, CuDocument, EmployeeContract, PayslipResult, Period, Quarter,
    QuarterlyContributionSummary, TimesheetEntry,
};

/// One unit of work for a batch run.
#[derive(Debug, Clone)]
pub struct PayslipBatchItem {
    /// The employee's contract.
    pub contract: EmployeeContract,
    /// The period's timesheet entry.
    pub entry: TimesheetEntry,
    /// Year-to-date gross already taxed before this period.
    pub ytd_gross: Cents,
}

/// A failed item from a batch run.
#[derive(Debug)]
pub struct BatchFailure {
    /// The employee whose computation failed.
    pub employee_id: String,
    /// The period the failed item covered.
    pub period: Period,
    /// The underlying error.
    pub error: EngineError,
}

/// The outcome of a batch run: successful payslips plus per-item failures.
///
/// A batch never fails fast; one bad timesheet does not block the rest of
/// the household's payroll.
#[derive(Debug, Default)]
pub struct PayslipBatchOutcome {
    /// Payslips that computed successfully, in input order.
    pub results: Vec<PayslipResult>,
    /// Items that failed, in input order.
    pub failures: Vec<BatchFailure>,
}

/// The payroll computation engine.
///
/// # Example
///
/// ```no_run
/// use colf_engine::config::ConfigLoader;
/// use colf_engine::engine::PayrollEngine;
///
/// let loader = ConfigLoader::load("config/ccnl_domestico").unwrap();
/// let engine = PayrollEngine::new(loader);
/// ```
#[derive(Debug, Clone)]
pub struct PayrollEngine {
    config: ConfigLoader,
}

impl PayrollEngine {
    /// Creates an engine over a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self { config }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Computes one payslip.
    ///
    /// The rate table in force on `as_of` prices the whole period;
    /// `ytd_gross` is the year-to-date gross already taxed in prior periods,
    /// owned by the caller.
    ///
    /// The result is fully derived: recomputing with the same inputs and the
    /// same rate table version yields an identical payslip.
    ///
    /// # Errors
    ///
    /// Propagates every pipeline error: no rate table in force, unknown
    /// level, invalid timesheet, unresolved contribution regime, or an
    /// inconsistent composition.
    pub fn compute_payslip(
        &self,
        contract: &EmployeeContract,
        entry: &TimesheetEntry,
        as_of: NaiveDate,
        ytd_gross: Cents,
    ) -> EngineResult<PayslipResult> {
        if entry.employee_id != contract.employee_id {
            return Err(EngineError::InvalidTimesheet {
                employee_id: entry.employee_id.clone(),
                period: entry.period,
                message: format!(
                    "timesheet does not belong to contract holder '{}'",
                    contract.employee_id
                ),
            });
        }

        let table = self.config.resolve(as_of)?;

        let hours = aggregate_hours(entry, contract)?;
        let gross = compute_gross(contract, &hours, entry.period, entry.absence_days, table)?;
        let contribution =
            split_contribution(&contract.employee_id, gross.total, &hours, entry.period, table)?;
        let irpef = irpef_withholding(gross.total, ytd_gross, table);
        let tfr = tfr_accrual(gross.total, table);

        compose_payslip(
            &contract.employee_id,
            entry.period,
            gross,
            contribution,
            irpef,
            tfr,
            &table.version,
        )
    }

    /// Computes a batch of payslips, collecting per-item failures instead of
    /// failing fast.
    pub fn compute_payslip_batch(
        &self,
        items: &[PayslipBatchItem],
        as_of: NaiveDate,
    ) -> PayslipBatchOutcome {
        let mut outcome = PayslipBatchOutcome::default();

        for item in items {
            match self.compute_payslip(&item.contract, &item.entry, as_of, item.ytd_gross) {
                Ok(payslip) => outcome.results.push(payslip),
                Err(error) => {
                    warn!(
                        employee_id = %item.entry.employee_id,
                        period = %item.entry.period,
                        %error,
                        "payslip computation failed"
                    );
                    outcome.failures.push(BatchFailure {
                        employee_id: item.entry.employee_id.clone(),
                        period: item.entry.period,
                        error,
                    });
                }
            }
        }

        info!(
            total = items.len(),
            succeeded = outcome.results.len(),
            failed = outcome.failures.len(),
            "payslip batch completed"
        );
        outcome
    }

    /// Summarizes a quarter's INPS contributions from finished payslips.
    pub fn compute_quarterly_contributions(
        &self,
        quarter: Quarter,
        payslips: &[PayslipResult],
    ) -> QuarterlyContributionSummary {
        summarize_quarter(quarter, payslips)
    }

    /// Composes the annual CU for one employee from the year's monthly
    /// payslips.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IncompleteYear`] when a month the contract was
    /// active in has no payslip.
    pub fn compute_annual_cu(
        &self,
        contract: &EmployeeContract,
        tax_year: i32,
        payslips: &[PayslipResult],
    ) -> EngineResult<CuDocument> {
        annualize(contract, tax_year, payslips)
    }
}
