//! Quarterly INPS contribution summary models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Cents;
use super::Quarter;

/// One employee's contribution line within a quarterly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionLine {
    /// The employee the line is for.
    pub employee_id: String,
    /// Gross pay over the quarter's months.
    pub gross: Cents,
    /// Employer contribution share over the quarter.
    pub employer: Cents,
    /// Employee contribution share over the quarter.
    pub employee: Cents,
    /// Combined contribution over the quarter.
    pub total: Cents,
}

/// The quarterly INPS contribution summary across all employees.
///
/// Invariant: each total field equals the exact sum of the corresponding
/// field over `lines` — aggregation is a pure sum of already-rounded
/// monthly values, so no rounding drift can appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterlyContributionSummary {
    /// The quarter being summarized.
    pub quarter: Quarter,
    /// The INPS payment due date for the quarter.
    pub due_date: NaiveDate,
    /// Per-employee contribution lines, ordered by employee id.
    pub lines: Vec<ContributionLine>,
    /// Total gross pay across all lines.
    pub gross_total: Cents,
    /// Total employer share across all lines.
    pub employer_total: Cents,
    /// Total employee share across all lines.
    pub employee_total: Cents,
    /// Total combined contribution across all lines.
    pub total: Cents,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serialization_round_trip() {
        let summary = QuarterlyContributionSummary {
            quarter: Quarter::new(2025, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
            lines: vec![ContributionLine {
                employee_id: "emp_001".to_string(),
                gross: 564_000,
                employer: 42_276,
                employee: 14_100,
                total: 56_376,
            }],
            gross_total: 564_000,
            employer_total: 42_276,
            employee_total: 14_100,
            total: 56_376,
        };

        let json = serde_json::to_string(&summary).unwrap();
        let back: QuarterlyContributionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
