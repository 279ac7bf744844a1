//! Versioned regulatory rate tables.
//!
//! This module owns the rate-table side of the engine: strongly-typed table
//! structures ([`types`]), the append-only versioned catalog ([`catalog`]),
//! and YAML loading ([`loader`]).

mod catalog;
mod loader;
mod types;

pub use catalog::RateTableCatalog;
pub use loader::ConfigLoader;
pub use types::{
    Allowances, ContributionSchedule, HourlyBand, IrpefBracket, LevelRate, PremiumFactors,
    RateTable, ScheduleMetadata,
};

/// Shared builders for unit tests across the crate.
#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::str::FromStr;

    use super::types::{
        Allowances, ContributionSchedule, HourlyBand, IrpefBracket, LevelRate, PremiumFactors,
        RateTable,
    };

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Builds the 2025 default rate table in code, mirroring
    /// `config/ccnl_domestico/tables/2025-01-01.yaml`.
    pub(crate) fn default_table() -> RateTable {
        let mut levels = HashMap::new();
        levels.insert(
            "CS".to_string(),
            LevelRate {
                hourly: dec("11.75"),
                description: "Badante per persone non autosufficienti".to_string(),
            },
        );
        levels.insert(
            "B".to_string(),
            LevelRate {
                hourly: dec("9.50"),
                description: "Colf con esperienza".to_string(),
            },
        );
        levels.insert(
            "BS".to_string(),
            LevelRate {
                hourly: dec("10.33"),
                description: "Baby sitter".to_string(),
            },
        );

        RateTable {
            version: "2025-01-01".to_string(),
            effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            effective_to: None,
            levels,
            contributions: ContributionSchedule {
                employer_pct: dec("7.5"),
                employee_pct: dec("2.5"),
                weekly_hours_threshold: dec("24"),
                hourly_bands: vec![HourlyBand {
                    min_weekly_hours: dec("24"),
                    total_per_hour: dec("1.1745"),
                    employee_per_hour: dec("0.29375"),
                }],
            },
            irpef_brackets: vec![
                IrpefBracket {
                    up_to: Some(dec("28000")),
                    rate: dec("23"),
                },
                IrpefBracket {
                    up_to: Some(dec("50000")),
                    rate: dec("35"),
                },
                IrpefBracket {
                    up_to: None,
                    rate: dec("43"),
                },
            ],
            factors: PremiumFactors {
                overtime: dec("1.25"),
                holiday: dec("1.30"),
            },
            allowances: Allowances {
                room_and_board_daily: dec("5.61"),
            },
            tfr_divisor: dec("13.5"),
        }
    }
}
