//! Calculation result models for the Salary Engine.
//!
//! This module contains the [`CalculationResult`] type and the structures it
//! is made of: the headline figures shown to every user, the full breakdown of
//! accruals and withholdings, and the audit trace of each evaluated step.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SalaryInput;

/// A single step in the audit trace recording one computation.
///
/// Each step captures the input, output, and arithmetic of a pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, in evaluation order.
    pub step_number: u32,
    /// The unique identifier of the computation.
    pub rule_id: String,
    /// The human-readable name of the computation.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// The arithmetic that produced the output.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The evaluated steps, dependencies first.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The three figures reported at the end of every calculation.
///
/// # Example
///
/// ```
/// use salary_engine::models::HeadlineResult;
/// use rust_decimal::Decimal;
///
/// let headline = HeadlineResult {
///     final_answer: Decimal::new(4691091, 2),
///     overtime_differential: Decimal::new(-1058929, 2),
///     quarter_payout_month: "апреле текущего года".to_string(),
/// };
/// assert!(headline.overtime_differential.is_sign_negative());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineResult {
    /// Net amount to be paid for the month.
    pub final_answer: Decimal,
    /// Pro-rated base pay minus nominal salary, paid at quarter end.
    pub overtime_differential: Decimal,
    /// When the overtime differential is paid out.
    pub quarter_payout_month: String,
}

/// Every amount computed by the pipeline, rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Base salary pro-rated by shifts worked.
    pub base_salary_amount: Decimal,
    /// Night and evening shift surcharge.
    pub night_shift_pay: Decimal,
    /// Underground/hazard surcharge.
    pub hazard_pay: Decimal,
    /// Monthly bonus.
    pub bonus: Decimal,
    /// High-temperature surcharge.
    pub temperature_pay: Decimal,
    /// Base pay plus surcharges, before regional allowances.
    pub base_total: Decimal,
    /// District coefficient allowance.
    pub district_allowance: Decimal,
    /// Northern allowance.
    pub north_allowance: Decimal,
    /// Sum of all accruals.
    pub total_accruals: Decimal,
    /// Tax credit for dependent children.
    pub child_deduction: Decimal,
    /// Income tax withheld.
    pub income_tax: Decimal,
    /// Alimony withheld.
    pub alimony: Decimal,
    /// Net amount to be paid.
    pub final_answer: Decimal,
    /// Pro-rated base pay minus nominal salary.
    pub overtime_differential: Decimal,
}

impl SalaryBreakdown {
    /// Returns the total withheld from the accruals.
    pub fn total_withheld(&self) -> Decimal {
        self.income_tax + self.alimony
    }
}

/// The complete result of a salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The validated input the calculation ran on.
    pub input: SalaryInput,
    /// The headline figures.
    pub headline: HeadlineResult,
    /// All computed amounts.
    pub breakdown: SalaryBreakdown,
    /// Complete audit trace of the pipeline.
    pub audit_trace: AuditTrace,
}
