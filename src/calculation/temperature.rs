//! High-temperature work surcharge.
//!
//! Every day worked in high temperatures credits a fixed number of hours, paid
//! at the hourly rate; the surcharge is a percentage of that payment.

use rust_decimal::Decimal;

use crate::config::Factors;
use crate::models::AuditStep;

use super::{StepResult, percent_of, round_currency};

/// Calculates the temperature surcharge.
///
/// `hours = temperature_days × temperature_hours_per_day`, the hour payment is
/// rounded, then `payment × temperature_percent / 100` is rounded again.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_temperature_pay;
/// use salary_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 2 days × 5 h × 370.625 = 3706.25; 10% = 370.625
/// let hourly = Decimal::from_str("370.625").unwrap();
/// let result = calculate_temperature_pay(hourly, 2, PayrollConfig::standard().factors(), 5);
/// assert_eq!(result.amount, Decimal::from_str("370.63").unwrap());
/// ```
pub fn calculate_temperature_pay(
    hourly_rate: Decimal,
    temperature_days: u32,
    factors: &Factors,
    step_number: u32,
) -> StepResult {
    let hours = Decimal::from(temperature_days) * factors.temperature_hours_per_day;
    let hour_payment = round_currency(hours * hourly_rate);
    let amount = round_currency(percent_of(hour_payment, factors.temperature_percent));

    let audit_step = AuditStep {
        step_number,
        rule_id: "temperature_pay".to_string(),
        rule_name: "Temperature Pay".to_string(),
        input: serde_json::json!({
            "hourly_rate": hourly_rate.to_string(),
            "temperature_days": temperature_days,
            "hours": hours.to_string(),
            "temperature_percent": factors.temperature_percent.to_string()
        }),
        output: serde_json::json!({
            "hour_payment": hour_payment.to_string(),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} h × {} = {}; × {} / 100 = {}",
            hours, hourly_rate, hour_payment, factors.temperature_percent, amount
        ),
    };

    StepResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_temperature_pay() {
        // 50000 / 136 × 20 h = 7352.94; × 10% = 735.294
        let hourly = dec("50000") / Decimal::from(136);
        let result = calculate_temperature_pay(hourly, 4, PayrollConfig::standard().factors(), 5);
        assert_eq!(result.amount, dec("735.29"));
        assert_eq!(
            result.audit_step.output["hour_payment"].as_str().unwrap(),
            "7352.94"
        );
    }

    #[test]
    fn test_no_temperature_days() {
        let result =
            calculate_temperature_pay(dec("370.625"), 0, PayrollConfig::standard().factors(), 5);
        assert_eq!(result.amount.to_string(), "0.00");
    }
}
