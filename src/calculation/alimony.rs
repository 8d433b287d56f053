//! Alimony withholding.
//!
//! Each obligation is given as a percentage code that maps to a fraction of
//! the net (after-tax) accruals. Fractions of all listed obligations are added
//! up, so a repeated code is withheld twice.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::AuditStep;

use super::{StepResult, round_currency};

/// Maps an alimony percentage code to the fraction of net pay it withholds.
///
/// Returns `None` for a code outside the allowed set.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::alimony_fraction;
/// use rust_decimal::Decimal;
///
/// assert_eq!(alimony_fraction(25), Some(Decimal::from(1) / Decimal::from(4)));
/// assert_eq!(alimony_fraction(50), None);
/// ```
pub fn alimony_fraction(rate: u32) -> Option<Decimal> {
    let (numerator, denominator) = match rate {
        0 => return Some(Decimal::ZERO),
        16 => (1, 6),
        25 => (1, 4),
        33 => (1, 3),
        70 => (7, 10),
        _ => return None,
    };
    Some(Decimal::from(numerator) / Decimal::from(denominator))
}

/// Calculates alimony: `round((total_accruals − income_tax) × Σ fractions)`.
///
/// An empty list, or a list holding only `0`, withholds nothing. Codes outside
/// the allowed set contribute nothing; the input record never stores them.
pub fn calculate_alimony(
    total_accruals: Decimal,
    income_tax: Decimal,
    alimony_rates: &[u32],
    step_number: u32,
) -> StepResult {
    let net = total_accruals - income_tax;
    let has_obligation = alimony_rates.iter().any(|&rate| rate != 0);

    let (fraction, amount, reasoning) = if has_obligation {
        let fraction: Decimal = alimony_rates
            .iter()
            .filter_map(|&rate| alimony_fraction(rate))
            .sum();
        let amount = round_currency(net * fraction);
        debug!(net = %net, fraction = %fraction, amount = %amount, "Alimony withheld");
        let reasoning = format!("{} × {} = {}", net, fraction.round_dp(6), amount);
        (fraction, amount, reasoning)
    } else {
        debug!("No alimony obligations");
        let amount = round_currency(Decimal::ZERO);
        (Decimal::ZERO, amount, "No alimony obligations".to_string())
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "alimony".to_string(),
        rule_name: "Alimony".to_string(),
        input: serde_json::json!({
            "total_accruals": total_accruals.to_string(),
            "income_tax": income_tax.to_string(),
            "alimony_rates": alimony_rates
        }),
        output: serde_json::json!({
            "net": net.to_string(),
            "fraction": fraction.to_string(),
            "amount": amount.to_string()
        }),
        reasoning,
    };

    StepResult { amount, audit_step }
}
