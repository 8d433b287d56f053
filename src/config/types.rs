//! Configuration types for the salary calculation.
//!
//! This module contains the strongly-typed rate tables: per-month norms, the
//! percentage factors applied by the pipeline, and the quarter payout table.

use std::collections::HashSet;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Month;

use super::standard;

static STANDARD: LazyLock<PayrollConfig> = LazyLock::new(|| PayrollConfig {
    factors: standard::factors(),
    months: standard::month_norms(),
});

/// Percentage factors and hour multipliers used by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factors {
    /// Paid night hours per night shift.
    pub night_hours_per_shift: Decimal,
    /// Paid night hours per evening shift.
    pub evening_hours_per_shift: Decimal,
    /// Surcharge on night hours, in percent.
    pub night_pay_percent: Decimal,
    /// Underground/hazard surcharge on pro-rated base pay, in percent.
    pub hazard_percent: Decimal,
    /// Monthly bonus, in percent.
    pub bonus_percent: Decimal,
    /// High-temperature surcharge, in percent.
    pub temperature_percent: Decimal,
    /// Hours credited per high-temperature shift.
    pub temperature_hours_per_day: Decimal,
    /// District coefficient, in percent.
    pub district_percent: Decimal,
    /// Northern allowance, in percent.
    pub north_percent: Decimal,
    /// Income tax rate, in percent.
    pub income_tax_percent: Decimal,
}

/// Norms and payout month for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthNorm {
    /// The month these norms apply to.
    pub month: Month,
    /// Day norm used to pro-rate base salary by shifts worked.
    pub days: u32,
    /// Hour norm used to derive the hourly rate.
    pub hours: u32,
    /// When the overtime differential of this month is paid out.
    pub quarter_payout: String,
}

/// Layout of a payroll YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfigFile {
    /// Percentage factors.
    pub factors: Factors,
    /// Per-month norms.
    pub months: Vec<MonthNorm>,
}

/// The complete set of rate tables used by a calculation.
///
/// # Example
///
/// ```
/// use salary_engine::config::PayrollConfig;
/// use salary_engine::models::Month;
///
/// let config = PayrollConfig::standard();
/// let february = config.month_norm(Month::February).unwrap();
/// assert_eq!(february.days, 28);
/// assert_eq!(february.quarter_payout, "апреле текущего года");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    factors: Factors,
    months: Vec<MonthNorm>,
}

impl PayrollConfig {
    /// Creates a configuration, rejecting duplicate months and zero norms.
    ///
    /// Months may be missing; a calculation for such a month fails.
    pub fn new(factors: Factors, months: Vec<MonthNorm>) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        for norm in &months {
            if !seen.insert(norm.month) {
                return Err(EngineError::InvalidConfig {
                    message: format!("month '{}' is listed more than once", norm.month),
                });
            }
            if norm.days == 0 || norm.hours == 0 {
                return Err(EngineError::InvalidConfig {
                    message: format!("month '{}' has a zero day or hour norm", norm.month),
                });
            }
        }

        let mut months = months;
        months.sort_by_key(|norm| norm.month);
        Ok(Self { factors, months })
    }

    /// Returns the compiled-in standard tables.
    pub fn standard() -> &'static PayrollConfig {
        &STANDARD
    }

    /// Returns the percentage factors.
    pub fn factors(&self) -> &Factors {
        &self.factors
    }

    /// Returns the norms of every configured month.
    pub fn months(&self) -> &[MonthNorm] {
        &self.months
    }

    /// Returns the norms for a month, if configured.
    pub fn month_norm(&self, month: Month) -> Option<&MonthNorm> {
        self.months.iter().find(|norm| norm.month == month)
    }
}

impl TryFrom<PayrollConfigFile> for PayrollConfig {
    type Error = EngineError;

    fn try_from(file: PayrollConfigFile) -> EngineResult<Self> {
        Self::new(file.factors, file.months)
    }
}
