//! Rate table types for payroll computation.
//!
//! This module contains the strongly-typed rate table structures that are
//! deserialized from YAML configuration files. A [`RateTable`] bundles every
//! regulatory figure one pay period needs: CCNL level wages, the INPS
//! contribution schedule, IRPEF brackets, premium factors, allowances, and
//! the TFR coefficient.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

/// Metadata about the contract schedule ("schedario").
///
/// Contains identifying information about the collective agreement the
/// rate tables implement.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The agreement code (e.g. "CCNL-DOM").
    pub code: String,
    /// The human-readable name of the agreement.
    pub name: String,
    /// URL to the official agreement documentation.
    pub source_url: String,
}

/// Wage information for one CCNL level.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelRate {
    /// The hourly base rate in euros.
    pub hourly: Decimal,
    /// A description of the level.
    #[serde(default)]
    pub description: String,
}

/// One band of the flat hourly contribution regime.
///
/// Bands apply at or above the schedule's weekly-hours threshold; the band
/// with the greatest `min_weekly_hours` not exceeding the employee's average
/// weekly hours is selected.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyBand {
    /// Minimum average weekly hours for this band.
    pub min_weekly_hours: Decimal,
    /// Total contribution per paid hour, in euros.
    pub total_per_hour: Decimal,
    /// Employee share per paid hour, in euros.
    pub employee_per_hour: Decimal,
}

/// The INPS contribution schedule.
///
/// Below `weekly_hours_threshold` average weekly hours, contributions are a
/// percentage of gross pay; at or above it, the flat hourly bands apply.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionSchedule {
    /// Employer share, percent of gross, for the percentage regime.
    pub employer_pct: Decimal,
    /// Employee share, percent of gross, for the percentage regime.
    pub employee_pct: Decimal,
    /// Average weekly hours at which the hourly regime takes over.
    pub weekly_hours_threshold: Decimal,
    /// Flat hourly bands, sorted by `min_weekly_hours`.
    pub hourly_bands: Vec<HourlyBand>,
}

impl ContributionSchedule {
    /// Combined employer plus employee percentage.
    pub fn combined_pct(&self) -> Decimal {
        self.employer_pct + self.employee_pct
    }

    /// Selects the hourly band for the given average weekly hours, if any.
    pub fn band_for(&self, weekly_hours: Decimal) -> Option<&HourlyBand> {
        self.hourly_bands
            .iter()
            .rev()
            .find(|band| band.min_weekly_hours <= weekly_hours)
    }
}

/// One IRPEF bracket: a marginal rate up to an annual income ceiling.
#[derive(Debug, Clone, Deserialize)]
pub struct IrpefBracket {
    /// Upper bound of the bracket in annual euros; `None` for the top
    /// bracket.
    #[serde(default)]
    pub up_to: Option<Decimal>,
    /// Marginal rate, percent.
    pub rate: Decimal,
}

/// Surcharge factors for overtime and holiday work.
#[derive(Debug, Clone, Deserialize)]
pub struct PremiumFactors {
    /// Overtime surcharge multiplier (e.g. 1.25).
    pub overtime: Decimal,
    /// Holiday-work surcharge multiplier (e.g. 1.30).
    pub holiday: Decimal,
}

/// Fixed allowances.
#[derive(Debug, Clone, Deserialize)]
pub struct Allowances {
    /// Daily room-and-board indemnity ("vitto e alloggio") in euros.
    pub room_and_board_daily: Decimal,
}

/// A complete, versioned rate table.
///
/// Tables are immutable once published; regulatory updates are modeled as
/// new tables with later validity intervals, never as in-place edits.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// The table version (by convention its effective-from date).
    pub version: String,
    /// First day the table is in force (inclusive).
    pub effective_from: NaiveDate,
    /// Last day the table is in force (inclusive); `None` for open-ended.
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
    /// CCNL level code to wage mapping.
    pub levels: HashMap<String, LevelRate>,
    /// INPS contribution schedule.
    pub contributions: ContributionSchedule,
    /// IRPEF brackets, ordered by ascending ceiling.
    pub irpef_brackets: Vec<IrpefBracket>,
    /// Overtime and holiday surcharge factors.
    pub factors: PremiumFactors,
    /// Fixed allowances.
    pub allowances: Allowances,
    /// Divisor applied to gross pay for TFR accrual (13.5).
    pub tfr_divisor: Decimal,
}

impl RateTable {
    /// Returns true if the table is in force on the given date.
    pub fn in_force_on(&self, date: NaiveDate) -> bool {
        self.effective_from <= date && self.effective_to.is_none_or(|end| date <= end)
    }

    /// Returns true if the validity intervals of the two tables overlap.
    pub fn overlaps(&self, other: &RateTable) -> bool {
        let self_end = self.effective_to.unwrap_or(NaiveDate::MAX);
        let other_end = other.effective_to.unwrap_or(NaiveDate::MAX);
        self.effective_from <= other_end && other.effective_from <= self_end
    }

    /// Looks up the hourly wage for a CCNL level.
    pub fn hourly_rate(&self, level_code: &str) -> EngineResult<Decimal> {
        self.levels
            .get(level_code)
            .map(|level| level.hourly)
            .ok_or_else(|| EngineError::LevelNotFound {
                code: level_code.to_string(),
            })
    }

    /// Validates the structural invariants of the table.
    ///
    /// Called on publication; a table that fails here never enters the
    /// catalog.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidRateTable {
            version: self.version.clone(),
            message,
        };

        if let Some(end) = self.effective_to {
            if end < self.effective_from {
                return Err(invalid(format!(
                    "effective_to {} precedes effective_from {}",
                    end, self.effective_from
                )));
            }
        }

        if self.levels.is_empty() {
            return Err(invalid("no CCNL levels defined".to_string()));
        }
        for (code, level) in &self.levels {
            if level.hourly <= Decimal::ZERO {
                return Err(invalid(format!("non-positive hourly rate for level '{code}'")));
            }
        }

        let c = &self.contributions;
        if c.employer_pct < Decimal::ZERO
            || c.employee_pct < Decimal::ZERO
            || c.combined_pct() <= Decimal::ZERO
        {
            return Err(invalid("contribution percentages must be non-negative and sum above zero".to_string()));
        }
        if c.weekly_hours_threshold < Decimal::ZERO {
            return Err(invalid("negative weekly hours threshold".to_string()));
        }
        let mut prev_min: Option<Decimal> = None;
        for band in &c.hourly_bands {
            if band.employee_per_hour > band.total_per_hour || band.total_per_hour < Decimal::ZERO {
                return Err(invalid(
                    "hourly band employee share exceeds its total".to_string(),
                ));
            }
            if prev_min.is_some_and(|prev| band.min_weekly_hours <= prev) {
                return Err(invalid(
                    "hourly bands must be sorted by strictly increasing min_weekly_hours"
                        .to_string(),
                ));
            }
            prev_min = Some(band.min_weekly_hours);
        }

        if self.irpef_brackets.is_empty() {
            return Err(invalid("no IRPEF brackets defined".to_string()));
        }
        let mut prev_ceiling: Option<Decimal> = None;
        for (index, bracket) in self.irpef_brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE_HUNDRED {
                return Err(invalid(format!("IRPEF rate out of range in bracket {index}")));
            }
            match bracket.up_to {
                Some(ceiling) => {
                    if prev_ceiling.is_some_and(|prev| ceiling <= prev) {
                        return Err(invalid(
                            "IRPEF bracket ceilings must be strictly increasing".to_string(),
                        ));
                    }
                    prev_ceiling = Some(ceiling);
                }
                // Only the last bracket may be unbounded
                None => {
                    if index + 1 != self.irpef_brackets.len() {
                        return Err(invalid(
                            "only the last IRPEF bracket may be unbounded".to_string(),
                        ));
                    }
                }
            }
        }

        if self.factors.overtime < Decimal::ONE || self.factors.holiday < Decimal::ONE {
            return Err(invalid("premium factors must be at least 1".to_string()));
        }
        if self.allowances.room_and_board_daily < Decimal::ZERO {
            return Err(invalid("negative room-and-board allowance".to_string()));
        }
        if self.tfr_divisor <= Decimal::ZERO {
            return Err(invalid("TFR divisor must be positive".to_string()));
        }

        Ok(())
    }
}
