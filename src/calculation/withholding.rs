//! IRPEF withholding and TFR accrual.
//!
//! IRPEF is progressive and computed on the cumulative year-to-date base:
//! the period's withholding is the tax on the new cumulative base minus the
//! tax on the base before this period. Summing period amounts over a year
//! therefore reproduces the annual tax exactly, regardless of how unevenly
//! earnings fall across months.

use rust_decimal::Decimal;

use crate::config::{IrpefBracket, RateTable};
use crate::models::{cents_from_euros, euros_from_cents, Cents, IrpefWithholding};

/// Computes this period's IRPEF withholding given the gross pay and the
/// year-to-date gross already taxed in prior periods.
///
/// The caller owns the year-to-date state; the returned value carries the
/// updated cumulative figures for it to persist.
pub fn irpef_withholding(
    gross_total: Cents,
    ytd_gross_prior: Cents,
    table: &RateTable,
) -> IrpefWithholding {
    let ytd_taxable = ytd_gross_prior + gross_total;
    let ytd_tax = cumulative_tax(ytd_taxable, &table.irpef_brackets);
    let prior_tax = cumulative_tax(ytd_gross_prior, &table.irpef_brackets);

    IrpefWithholding {
        period_amount: ytd_tax - prior_tax,
        ytd_taxable,
        ytd_tax,
    }
}

/// Computes the period's TFR (severance) accrual: gross divided by the
/// table's TFR divisor. Accrued, not paid; it never reduces net pay.
pub fn tfr_accrual(gross_total: Cents, table: &RateTable) -> Cents {
    cents_from_euros(euros_from_cents(gross_total) / table.tfr_divisor)
}

/// Marginal tax on a cumulative taxable base, rounded to cents once at
/// the end.
fn cumulative_tax(taxable: Cents, brackets: &[IrpefBracket]) -> Cents {
    let taxable = euros_from_cents(taxable.max(0));
    let mut tax = Decimal::ZERO;
    let mut lower = Decimal::ZERO;

    for bracket in brackets {
        let upper = match bracket.up_to {
            Some(ceiling) => ceiling.min(taxable),
            None => taxable,
        };
        if upper > lower {
            tax += (upper - lower) * bracket.rate / Decimal::ONE_HUNDRED;
        }
        match bracket.up_to {
            Some(ceiling) if taxable > ceiling => lower = ceiling,
            _ => break,
        }
    }

    cents_from_euros(tax)
}
