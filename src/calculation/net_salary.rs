//! Net salary paid out after withholdings.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::StepResult;

/// Calculates the final answer: `total_accruals − income_tax − alimony`.
///
/// All three inputs are already rounded, so the result is exact.
pub fn calculate_net_salary(
    total_accruals: Decimal,
    income_tax: Decimal,
    alimony: Decimal,
    step_number: u32,
) -> StepResult {
    let amount = total_accruals - income_tax - alimony;

    let audit_step = AuditStep {
        step_number,
        rule_id: "final_answer".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "total_accruals": total_accruals.to_string(),
            "income_tax": income_tax.to_string(),
            "alimony": alimony.to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} − {} − {} = {}",
            total_accruals, income_tax, alimony, amount
        ),
    };

    StepResult { amount, audit_step }
}
