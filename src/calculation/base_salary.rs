//! Pro-rated base salary and hourly rate.
//!
//! The nominal monthly salary is paid in proportion to shifts worked against
//! the month's day norm. Night and temperature surcharges are based on the
//! hourly rate derived from the month's hour norm.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::{StepResult, round_currency};

/// Returns `base_salary / norm_hours`, unrounded.
///
/// Fails with `CalculationError` for a zero hour norm.
pub fn hourly_rate(base_salary: Decimal, norm_hours: u32) -> EngineResult<Decimal> {
    base_salary
        .checked_div(Decimal::from(norm_hours))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("cannot derive an hourly rate from an hour norm of {norm_hours}"),
        })
}

/// Calculates the base salary earned for the shifts worked.
///
/// `base_salary × total_shifts / norm_days`, rounded to kopecks.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_base_salary_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_base_salary_amount(Decimal::from(59300), 23, 28, 1).unwrap();
/// assert_eq!(result.amount, Decimal::from_str("48710.71").unwrap());
/// ```
pub fn calculate_base_salary_amount(
    base_salary: Decimal,
    total_shifts: u32,
    norm_days: u32,
    step_number: u32,
) -> EngineResult<StepResult> {
    let earned = (base_salary * Decimal::from(total_shifts))
        .checked_div(Decimal::from(norm_days))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("cannot pro-rate salary over a day norm of {norm_days}"),
        })?;
    let amount = round_currency(earned);

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_salary_amount".to_string(),
        rule_name: "Base Salary For Shifts Worked".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "total_shifts": total_shifts,
            "norm_days": norm_days
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!("{} × {} / {} = {}", base_salary, total_shifts, norm_days, amount),
    };

    Ok(StepResult { amount, audit_step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_pro_rates_by_day_norm() {
        let result = calculate_base_salary_amount(dec("59300"), 23, 28, 1).unwrap();
        assert_eq!(result.amount, dec("48710.71"));
        assert_eq!(result.audit_step.rule_id, "base_salary_amount");
        assert_eq!(result.audit_step.output["amount"].as_str().unwrap(), "48710.71");
        assert!(result.audit_step.reasoning.contains("59300 × 23 / 28"));
    }

    #[test]
    fn test_full_month_returns_nominal_salary() {
        let result = calculate_base_salary_amount(dec("50000"), 31, 31, 1).unwrap();
        assert_eq!(result.amount.to_string(), "50000.00");
    }

    #[test]
    fn test_zero_shifts_earn_nothing() {
        let result = calculate_base_salary_amount(dec("50000"), 0, 30, 1).unwrap();
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_zero_day_norm_is_an_error() {
        let result = calculate_base_salary_amount(dec("50000"), 10, 0, 1);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_hourly_rate() {
        assert_eq!(hourly_rate(dec("59300"), 160).unwrap(), dec("370.625"));
        assert!(hourly_rate(dec("59300"), 0).is_err());
    }

    #[test]
    fn test_audit_step_has_correct_step_number() {
        let result = calculate_base_salary_amount(dec("59300"), 23, 28, 7).unwrap();
        assert_eq!(result.audit_step.step_number, 7);
    }
}
