//! Night and evening shift surcharge.
//!
//! Each night shift credits a fixed number of night hours, each evening shift
//! a smaller number. The credited hours are paid at the hourly rate and the
//! night pay percentage is applied to the total.

use rust_decimal::Decimal;

use crate::config::Factors;
use crate::models::AuditStep;

use super::{StepResult, percent_of, round_currency};

/// Calculates the night shift surcharge.
///
/// The night part is rounded to kopecks on its own before the evening part is
/// added; the evening part is carried at full precision. The surcharge is
/// `(night + evening) × night_pay_percent / 100`, rounded.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_night_shift_pay;
/// use salary_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let factors = PayrollConfig::standard().factors();
/// let hourly = Decimal::from_str("370.625").unwrap();
/// let result = calculate_night_shift_pay(hourly, 1, 0, factors, 1);
/// assert_eq!(result.amount, Decimal::from_str("444.75").unwrap());
/// ```
pub fn calculate_night_shift_pay(
    hourly_rate: Decimal,
    night_shifts: u32,
    evening_shifts: u32,
    factors: &Factors,
    step_number: u32,
) -> StepResult {
    let night_hours = Decimal::from(night_shifts) * factors.night_hours_per_shift;
    let evening_hours = Decimal::from(evening_shifts) * factors.evening_hours_per_shift;

    let night_payment = if night_shifts > 0 {
        round_currency(hourly_rate * night_hours)
    } else {
        Decimal::ZERO
    };
    let evening_payment = if evening_shifts > 0 {
        hourly_rate * evening_hours
    } else {
        Decimal::ZERO
    };

    let amount = round_currency(percent_of(
        night_payment + evening_payment,
        factors.night_pay_percent,
    ));

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_shift_pay".to_string(),
        rule_name: "Night Shift Pay".to_string(),
        input: serde_json::json!({
            "hourly_rate": hourly_rate.to_string(),
            "night_shifts": night_shifts,
            "evening_shifts": evening_shifts,
            "night_hours": night_hours.to_string(),
            "evening_hours": evening_hours.to_string(),
            "night_pay_percent": factors.night_pay_percent.to_string()
        }),
        output: serde_json::json!({
            "night_payment": night_payment.to_string(),
            "evening_payment": evening_payment.to_string(),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "({} + {}) × {} / 100 = {}",
            night_payment, evening_payment, factors.night_pay_percent, amount
        ),
    };

    StepResult { amount, audit_step }
}
