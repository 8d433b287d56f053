//! Compiled-in standard rate tables.
//!
//! `config/payroll.yaml` carries the same values.

use rust_decimal::Decimal;

use crate::models::Month;

use super::types::{Factors, MonthNorm};

const Q1_PAYOUT: &str = "апреле текущего года";
const Q2_PAYOUT: &str = "июле текущего года";
const Q3_PAYOUT: &str = "октябре текущего года";
const Q4_PAYOUT: &str = "январе следующего года";

// (month, calendar days, 40-hour week hour norm, payout)
const MONTH_TABLE: [(Month, u32, u32, &str); 12] = [
    (Month::January, 31, 136, Q1_PAYOUT),
    (Month::February, 28, 160, Q1_PAYOUT),
    (Month::March, 31, 167, Q1_PAYOUT),
    (Month::April, 30, 175, Q2_PAYOUT),
    (Month::May, 31, 144, Q2_PAYOUT),
    (Month::June, 30, 151, Q2_PAYOUT),
    (Month::July, 31, 184, Q3_PAYOUT),
    (Month::August, 31, 168, Q3_PAYOUT),
    (Month::September, 30, 176, Q3_PAYOUT),
    (Month::October, 31, 184, Q4_PAYOUT),
    (Month::November, 30, 151, Q4_PAYOUT),
    (Month::December, 31, 176, Q4_PAYOUT),
];

pub(super) fn factors() -> Factors {
    Factors {
        night_hours_per_shift: Decimal::from(6),
        evening_hours_per_shift: Decimal::new(13, 1),
        night_pay_percent: Decimal::from(20),
        hazard_percent: Decimal::from(4),
        bonus_percent: Decimal::from(40),
        temperature_percent: Decimal::from(10),
        temperature_hours_per_day: Decimal::from(5),
        district_percent: Decimal::from(30),
        north_percent: Decimal::from(50),
        income_tax_percent: Decimal::from(13),
    }
}

pub(super) fn month_norms() -> Vec<MonthNorm> {
    MONTH_TABLE
        .iter()
        .map(|&(month, days, hours, payout)| MonthNorm {
            month,
            days,
            hours,
            quarter_payout: payout.to_string(),
        })
        .collect()
}
