//! Pay period and quarter models.
//!
//! Payslips are computed per calendar month; INPS contribution summaries are
//! aggregated per calendar quarter. Both share the six-day-week conventions
//! of the CCNL Lavoro Domestico: a month counts 26 paid working days and
//! 52/12 weeks, a quarter 78 days and 13 weeks.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A pay period: one calendar month or one calendar quarter.
///
/// # Example
///
/// ```
/// use colf_engine::models::Period;
///
/// let feb = Period::month(2025, 2).unwrap();
/// assert_eq!(feb.to_string(), "2025-02");
/// assert_eq!(feb.year(), 2025);
///
/// let q1 = Period::quarter(2025, 1).unwrap();
/// assert_eq!(q1.to_string(), "2025-Q1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "PeriodRepr")]
pub enum Period {
    /// A calendar month.
    Month {
        /// The calendar year.
        year: i32,
        /// The month (1-12).
        month: u32,
    },
    /// A calendar quarter.
    Quarter {
        /// The calendar year.
        year: i32,
        /// The quarter (1-4).
        quarter: u32,
    },
}

/// Wire shape of [`Period`], range-checked on the way in so an out-of-range
/// month or quarter never enters the pipeline through deserialization.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum PeriodRepr {
    Month { year: i32, month: u32 },
    Quarter { year: i32, quarter: u32 },
}

impl TryFrom<PeriodRepr> for Period {
    type Error = String;

    fn try_from(repr: PeriodRepr) -> Result<Self, Self::Error> {
        match repr {
            PeriodRepr::Month { year, month } => {
                Period::month(year, month).ok_or_else(|| format!("month out of range: {month}"))
            }
            PeriodRepr::Quarter { year, quarter } => Period::quarter(year, quarter)
                .ok_or_else(|| format!("quarter out of range: {quarter}")),
        }
    }
}

impl Period {
    /// Creates a monthly period, or `None` if the month is out of range.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Period::Month { year, month })
    }

    /// Creates a quarterly period, or `None` if the quarter is out of range.
    pub fn quarter(year: i32, quarter: u32) -> Option<Self> {
        (1..=4)
            .contains(&quarter)
            .then_some(Period::Quarter { year, quarter })
    }

    /// Returns the calendar year of the period.
    pub fn year(&self) -> i32 {
        match *self {
            Period::Month { year, .. } | Period::Quarter { year, .. } => year,
        }
    }

    /// Returns the number of weeks in the period.
    ///
    /// Monthly periods use the 52-week-year convention (52/12 weeks);
    /// quarterly periods are exactly 13 weeks.
    pub fn weeks(&self) -> Decimal {
        match self {
            Period::Month { .. } => Decimal::from(13) / Decimal::from(3),
            Period::Quarter { .. } => Decimal::from(13),
        }
    }

    /// Returns the number of paid working days in the period under the
    /// six-day-week convention: 26 for a month, 78 for a quarter.
    pub fn working_days(&self) -> u32 {
        match self {
            Period::Month { .. } => 26,
            Period::Quarter { .. } => 78,
        }
    }

    /// Returns true when the month (1-12) or quarter (1-4) number is in
    /// range. Periods built through [`Period::month`], [`Period::quarter`],
    /// or deserialization always are; this guards values built directly as
    /// enum literals.
    pub fn is_valid(&self) -> bool {
        match *self {
            Period::Month { month, .. } => (1..=12).contains(&month),
            Period::Quarter { quarter, .. } => (1..=4).contains(&quarter),
        }
    }

    /// Returns the months (1-12) the period covers.
    pub fn months(&self) -> Vec<u32> {
        match *self {
            Period::Month { month, .. } => vec![month],
            Period::Quarter { quarter, .. } => {
                let first = (quarter - 1) * 3 + 1;
                vec![first, first + 1, first + 2]
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Period::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Period::Quarter { year, quarter } => write!(f, "{:04}-Q{}", year, quarter),
        }
    }
}

/// Identifies one calendar quarter for contribution aggregation.
///
/// # Example
///
/// ```
/// use colf_engine::models::{Period, Quarter};
///
/// let q1 = Quarter::new(2025, 1).unwrap();
/// assert_eq!(q1.months(), [1, 2, 3]);
/// assert!(q1.contains(&Period::month(2025, 2).unwrap()));
/// assert!(!q1.contains(&Period::month(2025, 4).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "QuarterRepr")]
pub struct Quarter {
    year: i32,
    quarter: u32,
}

/// Wire shape of [`Quarter`], range-checked on the way in.
#[derive(Deserialize)]
struct QuarterRepr {
    year: i32,
    quarter: u32,
}

impl TryFrom<QuarterRepr> for Quarter {
    type Error = String;

    fn try_from(repr: QuarterRepr) -> Result<Self, Self::Error> {
        Quarter::new(repr.year, repr.quarter)
            .ok_or_else(|| format!("quarter out of range: {}", repr.quarter))
    }
}

impl Quarter {
    /// Creates a quarter id, or `None` if the quarter is out of range.
    ///
    /// This is the only way to build a `Quarter`; the fields are private, so
    /// every value in circulation satisfies `1 <= quarter <= 4`.
    pub fn new(year: i32, quarter: u32) -> Option<Self> {
        (1..=4).contains(&quarter).then_some(Quarter { year, quarter })
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the quarter number (1-4).
    pub fn quarter(&self) -> u32 {
        self.quarter
    }

    /// Returns the three months (1-12) of the quarter.
    pub fn months(&self) -> [u32; 3] {
        let first = (self.quarter - 1) * 3 + 1;
        [first, first + 1, first + 2]
    }

    /// Returns true if the given pay period falls inside this quarter.
    pub fn contains(&self, period: &Period) -> bool {
        match *period {
            Period::Month { year, month } => {
                year == self.year && self.months().contains(&month)
            }
            Period::Quarter { year, quarter } => year == self.year && quarter == self.quarter,
        }
    }

    /// Returns the INPS payment due date: the 10th of the month following
    /// the end of the quarter.
    pub fn due_date(&self) -> NaiveDate {
        let (year, month) = if self.quarter == 4 {
            (self.year + 1, 1)
        } else {
            (self.year, self.quarter * 3 + 1)
        };
        // month is always 1, 4, 7 or 10, so the 10th always exists
        NaiveDate::from_ymd_opt(year, month, 10).unwrap_or_default()
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-Q{}", self.year, self.quarter)
    }
}
