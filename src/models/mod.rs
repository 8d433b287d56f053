//! Core data models for the Salary Engine.
//!
//! This module contains the input record, the month type and the result
//! structures produced by a calculation.

mod calculation_result;
mod month;
mod salary_input;

pub use calculation_result::{
    AuditStep, AuditTrace, CalculationResult, HeadlineResult, SalaryBreakdown,
};
pub use month::Month;
pub use salary_input::{
    ALLOWED_ALIMONY_RATES, InputField, MAX_CHILD_NUMBER, MAX_DAYS_IN_MONTH, SalaryInput,
};
