//! Request types for the Salary Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::{InputField, SalaryInput};

/// Request body for the `/calculate` endpoint.
///
/// Every field carries the raw text a user would type. The values are run
/// through the [`SalaryInput`] setters in collection order, so the first
/// rejected field is the one reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Monthly nominal salary, whole roubles.
    pub base_salary: String,
    /// Month name in Russian, e.g. `февраль`.
    pub month: String,
    /// Total shifts worked.
    pub total_shifts: String,
    /// Night shifts among them.
    pub night_shifts: String,
    /// Evening shifts among them.
    pub evening_shifts: String,
    /// Days worked at high temperature.
    pub temperature_days: String,
    /// Child numbers eligible for the deduction, e.g. `1,2`.
    #[serde(default = "no_entries")]
    pub children: String,
    /// Alimony percentages, e.g. `25,33`.
    #[serde(default = "no_entries")]
    pub alimony: String,
}

fn no_entries() -> String {
    "0".to_string()
}

impl CalculationRequest {
    fn value(&self, field: InputField) -> &str {
        match field {
            InputField::BaseSalary => &self.base_salary,
            InputField::Month => &self.month,
            InputField::TotalShifts => &self.total_shifts,
            InputField::NightShifts => &self.night_shifts,
            InputField::EveningShifts => &self.evening_shifts,
            InputField::TemperatureDays => &self.temperature_days,
            InputField::Children => &self.children,
            InputField::Alimony => &self.alimony,
        }
    }

    /// Builds a validated input record.
    ///
    /// Stops at the first value a setter rejects.
    pub fn to_input(&self) -> Result<SalaryInput, ValidationError> {
        let mut input = SalaryInput::new();
        for field in InputField::ORDER {
            input.set(field, self.value(field))?;
        }
        Ok(input)
    }
}
