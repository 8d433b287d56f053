//! Hazard (underground work) surcharge.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::{StepResult, percent_of, round_currency};

/// Calculates the hazard surcharge as a fixed percentage of the pro-rated
/// base salary.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_hazard_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base = Decimal::from_str("48710.71").unwrap();
/// let result = calculate_hazard_pay(base, Decimal::from(4), 3);
/// assert_eq!(result.amount, Decimal::from_str("1948.43").unwrap());
/// ```
pub fn calculate_hazard_pay(
    base_salary_amount: Decimal,
    hazard_percent: Decimal,
    step_number: u32,
) -> StepResult {
    let amount = round_currency(percent_of(base_salary_amount, hazard_percent));

    let audit_step = AuditStep {
        step_number,
        rule_id: "hazard_pay".to_string(),
        rule_name: "Hazard Pay".to_string(),
        input: serde_json::json!({
            "base_salary_amount": base_salary_amount.to_string(),
            "hazard_percent": hazard_percent.to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} × {} / 100 = {}",
            base_salary_amount, hazard_percent, amount
        ),
    };

    StepResult { amount, audit_step }
}
