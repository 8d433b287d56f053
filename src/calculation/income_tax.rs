//! Personal income tax withheld from total accruals.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::AuditStep;

use super::{StepResult, percent_of, round_currency};

/// Calculates income tax: `round(total_accruals × percent / 100) − child_deduction`.
///
/// Without a child deduction the rounded tax is returned as is.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_income_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
/// let result = calculate_income_tax(dec("128781.82"), dec("546.00"), dec("13"), 11);
/// assert_eq!(result.amount, dec("16195.64"));
/// ```
pub fn calculate_income_tax(
    total_accruals: Decimal,
    child_deduction: Decimal,
    income_tax_percent: Decimal,
    step_number: u32,
) -> StepResult {
    let gross_tax = round_currency(percent_of(total_accruals, income_tax_percent));

    let (amount, reasoning) = if child_deduction.is_zero() {
        debug!(gross_tax = %gross_tax, "Income tax without child deduction");
        (
            gross_tax,
            format!(
                "{} × {} / 100 = {} (no child deduction)",
                total_accruals, income_tax_percent, gross_tax
            ),
        )
    } else {
        let amount = gross_tax - child_deduction;
        debug!(
            gross_tax = %gross_tax,
            child_deduction = %child_deduction,
            amount = %amount,
            "Income tax reduced by child deduction"
        );
        (
            amount,
            format!(
                "{} × {} / 100 = {}; − {} = {}",
                total_accruals, income_tax_percent, gross_tax, child_deduction, amount
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax".to_string(),
        input: serde_json::json!({
            "total_accruals": total_accruals.to_string(),
            "child_deduction": child_deduction.to_string(),
            "income_tax_percent": income_tax_percent.to_string()
        }),
        output: serde_json::json!({
            "gross_tax": gross_tax.to_string(),
            "amount": amount.to_string()
        }),
        reasoning,
    };

    StepResult { amount, audit_step }
}
