//! Quarterly INPS contribution aggregation.

use std::collections::BTreeMap;

use crate::models::{ContributionLine, PayslipResult, Quarter, QuarterlyContributionSummary};

/// Summarizes the quarter's contributions across employees.
///
/// Only payslips whose period falls inside the quarter are considered:
/// monthly payslips for the quarter's three months, or a quarterly payslip
/// for the quarter itself. All figures are exact sums of the payslips'
/// already-rounded cent amounts; no rounding happens here.
///
/// Lines are ordered by employee id, so the summary is deterministic
/// regardless of input order.
pub fn summarize_quarter(
    quarter: Quarter,
    payslips: &[PayslipResult],
) -> QuarterlyContributionSummary {
    let mut by_employee: BTreeMap<&str, ContributionLine> = BTreeMap::new();

    for payslip in payslips.iter().filter(|p| quarter.contains(&p.period)) {
        let line = by_employee
            .entry(payslip.employee_id.as_str())
            .or_insert_with(|| ContributionLine {
                employee_id: payslip.employee_id.clone(),
                gross: 0,
                employer: 0,
                employee: 0,
                total: 0,
            });
        line.gross += payslip.gross.total;
        line.employer += payslip.contribution.employer;
        line.employee += payslip.contribution.employee;
        line.total += payslip.contribution.total;
    }

    let lines: Vec<ContributionLine> = by_employee.into_values().collect();
    let gross_total = lines.iter().map(|l| l.gross).sum();
    let employer_total = lines.iter().map(|l| l.employer).sum();
    let employee_total = lines.iter().map(|l| l.employee).sum();
    let total = lines.iter().map(|l| l.total).sum();

    QuarterlyContributionSummary {
        due_date: quarter.due_date(),
        quarter,
        lines,
        gross_total,
        employer_total,
        employee_total,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cents, Contribution, GrossPay, Period};
    use chrono::NaiveDate;

    fn payslip(employee_id: &str, period: Period, gross: Cents, employer: Cents, employee: Cents) -> PayslipResult {
        PayslipResult {
            employee_id: employee_id.to_string(),
            period,
            gross: GrossPay {
                base: gross,
                overtime_premium: 0,
                holiday_premium: 0,
                room_and_board: 0,
                total: gross,
            },
            contribution: Contribution {
                employer,
                employee,
                total: employer + employee,
            },
            irpef: 0,
            tfr_accrual: 0,
            net: gross - employee,
            table_version: "2025-01-01".to_string(),
        }
    }

    #[test]
    fn test_monthly_payslips_grouped_per_employee() {
        let q = Quarter::new(2025, 1).unwrap();
        let payslips = vec![
            payslip("emp_002", Period::month(2025, 1).unwrap(), 100_000, 7_500, 2_500),
            payslip("emp_001", Period::month(2025, 1).unwrap(), 188_000, 14_092, 4_700),
            payslip("emp_001", Period::month(2025, 2).unwrap(), 188_000, 14_092, 4_700),
            payslip("emp_001", Period::month(2025, 3).unwrap(), 188_000, 14_092, 4_700),
        ];

        let summary = summarize_quarter(q, &payslips);
        assert_eq!(summary.lines.len(), 2);
        // Ordered by employee id
        assert_eq!(summary.lines[0].employee_id, "emp_001");
        assert_eq!(summary.lines[0].gross, 564_000);
        assert_eq!(summary.lines[0].employer, 42_276);
        assert_eq!(summary.lines[0].employee, 14_100);
        assert_eq!(summary.lines[1].employee_id, "emp_002");
    }

    #[test]
    fn test_totals_are_exact_sums_of_lines() {
        let q = Quarter::new(2025, 2).unwrap();
        let payslips = vec![
            payslip("emp_001", Period::month(2025, 4).unwrap(), 123_457, 9_259, 3_086),
            payslip("emp_002", Period::month(2025, 5).unwrap(), 98_765, 7_407, 2_469),
            payslip("emp_003", Period::month(2025, 6).unwrap(), 55_555, 4_167, 1_389),
        ];

        let summary = summarize_quarter(q, &payslips);
        assert_eq!(summary.gross_total, summary.lines.iter().map(|l| l.gross).sum::<Cents>());
        assert_eq!(summary.employer_total, 9_259 + 7_407 + 4_167);
        assert_eq!(summary.employee_total, 3_086 + 2_469 + 1_389);
        assert_eq!(summary.total, summary.employer_total + summary.employee_total);
    }

    #[test]
    fn test_payslips_outside_quarter_ignored() {
        let q = Quarter::new(2025, 1).unwrap();
        let payslips = vec![
            payslip("emp_001", Period::month(2025, 3).unwrap(), 100_000, 7_500, 2_500),
            payslip("emp_001", Period::month(2025, 4).unwrap(), 100_000, 7_500, 2_500),
            payslip("emp_001", Period::quarter(2025, 2).unwrap(), 300_000, 22_500, 7_500),
        ];

        let summary = summarize_quarter(q, &payslips);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.gross_total, 100_000);
    }

    #[test]
    fn test_quarterly_payslip_counts_toward_its_quarter() {
        let q = Quarter::new(2025, 3).unwrap();
        let payslips = vec![payslip(
            "emp_001",
            Period::quarter(2025, 3).unwrap(),
            564_000,
            42_276,
            14_100,
        )];

        let summary = summarize_quarter(q, &payslips);
        assert_eq!(summary.total, 56_376);
    }

    #[test]
    fn test_due_date_is_tenth_of_following_month() {
        let summary = summarize_quarter(Quarter::new(2025, 1).unwrap(), &[]);
        assert_eq!(summary.due_date, NaiveDate::from_ymd_opt(2025, 4, 10).unwrap());
        assert!(summary.lines.is_empty());
        assert_eq!(summary.total, 0);
    }
}
