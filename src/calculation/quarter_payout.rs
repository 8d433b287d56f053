//! Quarter-end settlement of the overtime differential.
//!
//! Shift workers are paid for the month's shifts against the day norm; the
//! difference to the nominal salary is settled at the end of the quarter.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::models::{AuditStep, Month};

use super::{StepResult, round_currency};

/// Returned by [`quarter_payout_month`] for a month without a table entry.
pub const UNKNOWN_PAYOUT_MONTH: &str = "неизвестный месяц";

/// Calculates `round(base_salary_amount − base_salary)`.
///
/// Negative when fewer shifts than the day norm were worked.
pub fn calculate_overtime_differential(
    base_salary_amount: Decimal,
    base_salary: Decimal,
    step_number: u32,
) -> StepResult {
    let amount = round_currency(base_salary_amount - base_salary);

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_differential".to_string(),
        rule_name: "Overtime Differential".to_string(),
        input: serde_json::json!({
            "base_salary_amount": base_salary_amount.to_string(),
            "base_salary": base_salary.to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!("{} − {} = {}", base_salary_amount, base_salary, amount),
    };

    StepResult { amount, audit_step }
}

/// Looks up when the overtime differential for `month` is paid out.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::quarter_payout_month;
/// use salary_engine::config::PayrollConfig;
/// use salary_engine::models::Month;
///
/// let payout = quarter_payout_month(PayrollConfig::standard(), Month::February);
/// assert_eq!(payout, "апреле текущего года");
/// ```
pub fn quarter_payout_month(config: &PayrollConfig, month: Month) -> &str {
    config
        .month_norm(month)
        .map(|norm| norm.quarter_payout.as_str())
        .unwrap_or(UNKNOWN_PAYOUT_MONTH)
}
