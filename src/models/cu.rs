//! Certificazione Unica (CU) document model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::money::Cents;

/// Lifecycle status of a CU document.
///
/// The status is strictly monotonic: draft, then generated, then submitted.
/// No regression is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuStatus {
    /// Freshly composed, not yet handed to the renderer.
    Draft,
    /// Rendered into its final form.
    Generated,
    /// Submitted to the tax authority.
    Submitted,
}

impl fmt::Display for CuStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CuStatus::Draft => "draft",
            CuStatus::Generated => "generated",
            CuStatus::Submitted => "submitted",
        };
        f.write_str(name)
    }
}

/// Annual tax certification for one employee and one tax year.
///
/// # Example
///
/// ```
/// use colf_engine::models::{CuDocument, CuStatus};
///
/// let mut cu = CuDocument {
///     employee_id: "emp_001".to_string(),
///     tax_year: 2024,
///     total_gross: 1_440_000,
///     total_irpef: 288_000,
///     total_contributions: 144_000,
///     months: vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
///     status: CuStatus::Draft,
/// };
/// cu.advance_to(CuStatus::Generated).unwrap();
/// assert!(cu.advance_to(CuStatus::Draft).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuDocument {
    /// The employee the certification is for.
    pub employee_id: String,
    /// The tax year covered.
    pub tax_year: i32,
    /// Total gross income over the covered months.
    pub total_gross: Cents,
    /// Total IRPEF withheld over the covered months.
    pub total_irpef: Cents,
    /// Total INPS contributions (both shares) over the covered months.
    pub total_contributions: Cents,
    /// The months (1-12) the certification covers; partial-year employment
    /// yields fewer than twelve.
    pub months: Vec<u32>,
    /// Lifecycle status.
    pub status: CuStatus,
}

impl CuDocument {
    /// Advances the document status.
    ///
    /// Fails with [`EngineError::CuStatusRegression`] when the target status
    /// does not move strictly forward.
    pub fn advance_to(&mut self, next: CuStatus) -> EngineResult<()> {
        if next <= self.status {
            return Err(EngineError::CuStatusRegression {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}
