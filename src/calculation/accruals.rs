//! Base total and total accruals.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::{StepResult, round_currency};

/// The pay components that make up the base total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccrualComponents {
    /// Pro-rated base salary.
    pub base_salary_amount: Decimal,
    /// Night and evening shift surcharge.
    pub night_shift_pay: Decimal,
    /// Hazard surcharge.
    pub hazard_pay: Decimal,
    /// Monthly bonus.
    pub bonus: Decimal,
    /// High-temperature surcharge.
    pub temperature_pay: Decimal,
}

impl AccrualComponents {
    fn sum(&self) -> Decimal {
        self.base_salary_amount
            + self.bonus
            + self.hazard_pay
            + self.night_shift_pay
            + self.temperature_pay
    }
}

/// Sums the pay components into the base total the regional allowances are
/// calculated on.
pub fn calculate_base_total(components: &AccrualComponents, step_number: u32) -> StepResult {
    let amount = round_currency(components.sum());

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_total".to_string(),
        rule_name: "Base Total".to_string(),
        input: serde_json::json!({
            "base_salary_amount": components.base_salary_amount.to_string(),
            "bonus": components.bonus.to_string(),
            "hazard_pay": components.hazard_pay.to_string(),
            "night_shift_pay": components.night_shift_pay.to_string(),
            "temperature_pay": components.temperature_pay.to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} + {} + {} + {} + {} = {}",
            components.base_salary_amount,
            components.bonus,
            components.hazard_pay,
            components.night_shift_pay,
            components.temperature_pay,
            amount
        ),
    };

    StepResult { amount, audit_step }
}

/// Adds the regional allowances to the pay components.
///
/// Every input is already in whole kopecks, so the sum is not rounded again.
pub fn calculate_total_accruals(
    components: &AccrualComponents,
    district_allowance: Decimal,
    north_allowance: Decimal,
    step_number: u32,
) -> StepResult {
    let amount = components.sum() + district_allowance + north_allowance;

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_accruals".to_string(),
        rule_name: "Total Accruals".to_string(),
        input: serde_json::json!({
            "components": components.sum().to_string(),
            "district_allowance": district_allowance.to_string(),
            "north_allowance": north_allowance.to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} + {} + {} = {}",
            components.sum(),
            district_allowance,
            north_allowance,
            amount
        ),
    };

    StepResult { amount, audit_step }
}
