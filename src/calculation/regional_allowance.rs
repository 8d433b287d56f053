//! District coefficient and northern allowance.
//!
//! Both are percentages of the base total and are calculated independently of
//! each other.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::{StepResult, percent_of, round_currency};

/// Which regional surcharge to calculate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionalAllowance {
    /// District coefficient.
    District,
    /// Northern allowance.
    North,
}

impl RegionalAllowance {
    /// Identifier used in the audit trail.
    pub fn rule_id(&self) -> &'static str {
        match self {
            RegionalAllowance::District => "district_allowance",
            RegionalAllowance::North => "north_allowance",
        }
    }

    fn rule_name(&self) -> &'static str {
        match self {
            RegionalAllowance::District => "District Allowance",
            RegionalAllowance::North => "North Allowance",
        }
    }
}

/// Calculates a regional surcharge: `base_total × percent / 100`, rounded.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{RegionalAllowance, calculate_regional_allowance};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base_total = Decimal::from_str("71545.45").unwrap();
/// let result = calculate_regional_allowance(
///     RegionalAllowance::North,
///     base_total,
///     Decimal::from(50),
///     8,
/// );
/// assert_eq!(result.amount, Decimal::from_str("35772.73").unwrap());
/// ```
pub fn calculate_regional_allowance(
    kind: RegionalAllowance,
    base_total: Decimal,
    percent: Decimal,
    step_number: u32,
) -> StepResult {
    let amount = round_currency(percent_of(base_total, percent));

    let audit_step = AuditStep {
        step_number,
        rule_id: kind.rule_id().to_string(),
        rule_name: kind.rule_name().to_string(),
        input: serde_json::json!({
            "base_total": base_total.to_string(),
            "percent": percent.to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!("{} × {} / 100 = {}", base_total, percent, amount),
    };

    StepResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_district_allowance() {
        // 71545.45 × 30% = 21463.635
        let result =
            calculate_regional_allowance(RegionalAllowance::District, dec("71545.45"), dec("30"), 7);
        assert_eq!(result.amount, dec("21463.64"));
        assert_eq!(result.audit_step.rule_id, "district_allowance");
    }

    #[test]
    fn test_north_allowance_rounds_half_up() {
        // 71545.45 × 50% = 35772.725
        let result =
            calculate_regional_allowance(RegionalAllowance::North, dec("71545.45"), dec("50"), 8);
        assert_eq!(result.amount, dec("35772.73"));
        // 0.05 × 50% = 0.025
        let result = calculate_regional_allowance(RegionalAllowance::North, dec("0.05"), dec("50"), 8);
        assert_eq!(result.amount, dec("0.03"));
    }
}
