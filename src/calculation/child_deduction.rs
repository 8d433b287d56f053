//! Standard tax deduction for dependent children.
//!
//! The first child is worth 1400, the second 2800, the third and every further
//! child 6000. The deduction reduces income tax, so the value reported here is
//! the deduction sum multiplied by the income tax rate.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::{StepResult, percent_of, round_currency};

/// Deduction for the first child.
pub const FIRST_CHILD_DEDUCTION: Decimal = Decimal::from_parts(1400, 0, 0, false, 0);
/// Deduction for the second child.
pub const SECOND_CHILD_DEDUCTION: Decimal = Decimal::from_parts(2800, 0, 0, false, 0);
/// Deduction for the third and every further child.
pub const FURTHER_CHILD_DEDUCTION: Decimal = Decimal::from_parts(6000, 0, 0, false, 0);

/// Returns the monthly deduction for the child with the given ordinal.
pub fn deduction_for_child(ordinal: u32) -> Decimal {
    match ordinal {
        0 => Decimal::ZERO,
        1 => FIRST_CHILD_DEDUCTION,
        2 => SECOND_CHILD_DEDUCTION,
        _ => FURTHER_CHILD_DEDUCTION,
    }
}

/// Calculates the tax value of the child deduction.
///
/// An empty list yields `0.00`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_child_deduction;
/// use rust_decimal::Decimal;
///
/// let result = calculate_child_deduction(&[1, 2], Decimal::from(13), 10);
/// assert_eq!(result.amount.to_string(), "546.00");
/// ```
pub fn calculate_child_deduction(
    children: &[u32],
    income_tax_percent: Decimal,
    step_number: u32,
) -> StepResult {
    let deduction_sum: Decimal = children.iter().map(|&c| deduction_for_child(c)).sum();
    let amount = round_currency(percent_of(deduction_sum, income_tax_percent));

    let audit_step = AuditStep {
        step_number,
        rule_id: "child_deduction".to_string(),
        rule_name: "Child Tax Deduction".to_string(),
        input: serde_json::json!({
            "children": children,
            "income_tax_percent": income_tax_percent.to_string()
        }),
        output: serde_json::json!({
            "deduction_sum": deduction_sum.to_string(),
            "amount": amount.to_string()
        }),
        reasoning: if children.is_empty() {
            "No dependent children, no deduction".to_string()
        } else {
            format!(
                "{} × {} / 100 = {}",
                deduction_sum, income_tax_percent, amount
            )
        },
    };

    StepResult { amount, audit_step }
}
