//! Monthly production bonus.
//!
//! The bonus is a percentage of the pro-rated base salary together with the
//! hazard and night shift surcharges. Temperature pay is not part of the bonus
//! base.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::{StepResult, percent_of, round_currency};

/// Calculates the bonus:
/// `(base_salary_amount + hazard_pay + night_shift_pay) × bonus_percent / 100`,
/// rounded.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_bonus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
/// let result = calculate_bonus(dec("48710.71"), dec("1948.43"), dec("444.75"), dec("40"), 4);
/// assert_eq!(result.amount, dec("20441.56"));
/// ```
pub fn calculate_bonus(
    base_salary_amount: Decimal,
    hazard_pay: Decimal,
    night_shift_pay: Decimal,
    bonus_percent: Decimal,
    step_number: u32,
) -> StepResult {
    let bonus_base = base_salary_amount + hazard_pay + night_shift_pay;
    let amount = round_currency(percent_of(bonus_base, bonus_percent));

    let audit_step = AuditStep {
        step_number,
        rule_id: "bonus".to_string(),
        rule_name: "Monthly Bonus".to_string(),
        input: serde_json::json!({
            "base_salary_amount": base_salary_amount.to_string(),
            "hazard_pay": hazard_pay.to_string(),
            "night_shift_pay": night_shift_pay.to_string(),
            "bonus_percent": bonus_percent.to_string()
        }),
        output: serde_json::json!({
            "bonus_base": bonus_base.to_string(),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "({} + {} + {}) × {} / 100 = {}",
            base_salary_amount, hazard_pay, night_shift_pay, bonus_percent, amount
        ),
    };

    StepResult { amount, audit_step }
}
