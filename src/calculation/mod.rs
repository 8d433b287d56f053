//! Calculation logic for the Salary Engine.
//!
//! Each pipeline step lives in its own module as a pure function that takes
//! already-rounded upstream amounts and returns a [`StepResult`]: the rounded
//! amount plus an [`AuditStep`] describing how it was obtained.
//! [`CalculationEngine`] wires the steps together and memoizes their results.

mod accruals;
mod alimony;
mod base_salary;
mod bonus;
mod child_deduction;
mod engine;
mod hazard_pay;
mod income_tax;
mod net_salary;
mod night_shift;
mod quarter_payout;
mod regional_allowance;
mod rounding;
mod temperature;

use rust_decimal::Decimal;

use crate::models::AuditStep;

pub use accruals::{AccrualComponents, calculate_base_total, calculate_total_accruals};
pub use alimony::{alimony_fraction, calculate_alimony};
pub use base_salary::{calculate_base_salary_amount, hourly_rate};
pub use bonus::calculate_bonus;
pub use child_deduction::{
    FIRST_CHILD_DEDUCTION, FURTHER_CHILD_DEDUCTION, SECOND_CHILD_DEDUCTION,
    calculate_child_deduction, deduction_for_child,
};
pub use engine::CalculationEngine;
pub use hazard_pay::calculate_hazard_pay;
pub use income_tax::calculate_income_tax;
pub use net_salary::calculate_net_salary;
pub use night_shift::calculate_night_shift_pay;
pub use quarter_payout::{
    UNKNOWN_PAYOUT_MONTH, calculate_overtime_differential, quarter_payout_month,
};
pub use regional_allowance::{RegionalAllowance, calculate_regional_allowance};
pub use rounding::{CURRENCY_SCALE, round_currency};
pub use temperature::calculate_temperature_pay;

pub(crate) use rounding::percent_of;

/// The outcome of one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// The rounded amount.
    pub amount: Decimal,
    /// The audit step recording the computation.
    pub audit_step: AuditStep,
}
