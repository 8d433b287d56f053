//! The validated input record of a salary calculation.
//!
//! A [`SalaryInput`] is filled one field at a time, in the order listed by
//! [`InputField::ORDER`]. Every setter validates the raw string against the
//! record's current state and either stores the parsed value or returns a
//! [`ValidationError`] leaving the record untouched.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationErrorKind};

use super::Month;

/// Upper bound for every shift and day count.
pub const MAX_DAYS_IN_MONTH: u32 = 31;

/// Highest child number accepted for the tax deduction.
pub const MAX_CHILD_NUMBER: u32 = 10;

/// Alimony percentages a worker can be ordered to pay. 0 means none.
pub const ALLOWED_ALIMONY_RATES: [u32; 5] = [0, 16, 25, 33, 70];

const MIN_ALIMONY_RATE: u32 = 16;
const MAX_ALIMONY_RATE: u32 = 70;

// Keeps every downstream product well inside Decimal's range.
const MAX_BASE_SALARY_DIGITS: usize = 15;

/// Identifies one of the eight input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Monthly nominal salary.
    BaseSalary,
    /// Calculation month.
    Month,
    /// Total worked or planned shifts.
    TotalShifts,
    /// Shifts worked at night.
    NightShifts,
    /// Shifts worked in the evening.
    EveningShifts,
    /// Shifts worked at high temperature.
    TemperatureDays,
    /// Child numbers eligible for the tax deduction.
    Children,
    /// Alimony percentages.
    Alimony,
}

impl InputField {
    /// The order in which a caller must collect the fields.
    pub const ORDER: [InputField; 8] = [
        InputField::BaseSalary,
        InputField::Month,
        InputField::TotalShifts,
        InputField::NightShifts,
        InputField::EveningShifts,
        InputField::TemperatureDays,
        InputField::Children,
        InputField::Alimony,
    ];

    /// Returns the snake_case name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            InputField::BaseSalary => "base_salary",
            InputField::Month => "month",
            InputField::TotalShifts => "total_shifts",
            InputField::NightShifts => "night_shifts",
            InputField::EveningShifts => "evening_shifts",
            InputField::TemperatureDays => "temperature_days",
            InputField::Children => "children",
            InputField::Alimony => "alimony",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The eight inputs of a salary calculation.
///
/// # Example
///
/// ```
/// use salary_engine::models::{Month, SalaryInput};
///
/// let mut input = SalaryInput::new();
/// input.set_base_salary("59300").unwrap();
/// input.set_month("февраль").unwrap();
/// input.set_total_shifts("23").unwrap();
/// input.set_night_shifts("1").unwrap();
/// input.set_evening_shifts("0").unwrap();
/// input.set_temperature_days("0").unwrap();
/// input.set_children("2,1").unwrap();
/// input.set_alimony_rates("33,25").unwrap();
///
/// assert_eq!(input.month(), Some(Month::February));
/// assert_eq!(input.children_canonical().as_deref(), Some("1,2"));
/// assert_eq!(input.alimony_canonical().as_deref(), Some("25,33"));
/// assert!(input.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SalaryInput {
    base_salary: Option<Decimal>,
    month: Option<Month>,
    total_shifts: Option<u32>,
    night_shifts: Option<u32>,
    evening_shifts: Option<u32>,
    temperature_days: Option<u32>,
    children: Option<Vec<u32>>,
    alimony_rates: Option<Vec<u32>>,
}

impl SalaryInput {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field by its identifier, using the field's own setter.
    pub fn set(&mut self, field: InputField, value: &str) -> Result<(), ValidationError> {
        match field {
            InputField::BaseSalary => self.set_base_salary(value),
            InputField::Month => self.set_month(value),
            InputField::TotalShifts => self.set_total_shifts(value),
            InputField::NightShifts => self.set_night_shifts(value),
            InputField::EveningShifts => self.set_evening_shifts(value),
            InputField::TemperatureDays => self.set_temperature_days(value),
            InputField::Children => self.set_children(value),
            InputField::Alimony => self.set_alimony_rates(value),
        }
    }

    /// Sets the monthly nominal salary from a string of digits.
    pub fn set_base_salary(&mut self, value: &str) -> Result<(), ValidationError> {
        let digits = parse_digits(InputField::BaseSalary, value)?;
        if digits.len() > MAX_BASE_SALARY_DIGITS {
            return Err(ValidationError::new(
                InputField::BaseSalary,
                ValidationErrorKind::RangeExceeded,
                format!("Value must have at most {MAX_BASE_SALARY_DIGITS} digits."),
            ));
        }

        let salary = Decimal::from_str(digits).map_err(|_| {
            ValidationError::new(
                InputField::BaseSalary,
                ValidationErrorKind::NotANumber,
                "Value must be a whole number.",
            )
        })?;
        self.base_salary = Some(salary);
        Ok(())
    }

    /// Sets the calculation month from its Russian name.
    pub fn set_month(&mut self, value: &str) -> Result<(), ValidationError> {
        self.month = Some(value.parse()?);
        Ok(())
    }

    /// Sets the total number of worked or planned shifts.
    ///
    /// When night, evening or temperature counts are already stored, the new
    /// total must still cover them.
    pub fn set_total_shifts(&mut self, value: &str) -> Result<(), ValidationError> {
        let total = parse_day_count(InputField::TotalShifts, value)?;

        let night_and_evening =
            self.night_shifts.unwrap_or(0) + self.evening_shifts.unwrap_or(0);
        if night_and_evening > total {
            return Err(ValidationError::new(
                InputField::TotalShifts,
                ValidationErrorKind::CrossFieldConstraintViolated,
                format!(
                    "Total shifts ({total}) cannot be less than the night and evening shifts already entered ({night_and_evening})."
                ),
            ));
        }
        if let Some(temperature) = self.temperature_days.filter(|days| *days > total) {
            return Err(ValidationError::new(
                InputField::TotalShifts,
                ValidationErrorKind::CrossFieldConstraintViolated,
                format!(
                    "Total shifts ({total}) cannot be less than the temperature days already entered ({temperature})."
                ),
            ));
        }

        self.total_shifts = Some(total);
        Ok(())
    }

    /// Sets the number of night shifts. Requires the total to be set.
    pub fn set_night_shifts(&mut self, value: &str) -> Result<(), ValidationError> {
        let night = parse_day_count(InputField::NightShifts, value)?;
        let total = self.require_total(InputField::NightShifts)?;

        if night > total {
            return Err(ValidationError::new(
                InputField::NightShifts,
                ValidationErrorKind::CrossFieldConstraintViolated,
                format!("Night shifts ({night}) cannot exceed total shifts ({total})."),
            ));
        }
        if let Some(evening) = self.evening_shifts.filter(|evening| night + evening > total) {
            return Err(ValidationError::new(
                InputField::NightShifts,
                ValidationErrorKind::CrossFieldConstraintViolated,
                format!(
                    "Night ({night}) and evening ({evening}) shifts together cannot exceed total shifts ({total})."
                ),
            ));
        }

        self.night_shifts = Some(night);
        Ok(())
    }

    /// Sets the number of evening shifts. Requires the total and night counts.
    pub fn set_evening_shifts(&mut self, value: &str) -> Result<(), ValidationError> {
        let evening = parse_day_count(InputField::EveningShifts, value)?;
        let total = self.require_total(InputField::EveningShifts)?;
        let night = self.night_shifts.ok_or_else(|| {
            ValidationError::new(
                InputField::EveningShifts,
                ValidationErrorKind::CrossFieldConstraintViolated,
                "Enter the number of night shifts first.",
            )
        })?;

        if night + evening > total {
            return Err(ValidationError::new(
                InputField::EveningShifts,
                ValidationErrorKind::CrossFieldConstraintViolated,
                format!(
                    "Night ({night}) and evening ({evening}) shifts together cannot exceed total shifts ({total})."
                ),
            ));
        }

        self.evening_shifts = Some(evening);
        Ok(())
    }

    /// Sets the number of shifts worked at high temperature.
    pub fn set_temperature_days(&mut self, value: &str) -> Result<(), ValidationError> {
        let temperature = parse_day_count(InputField::TemperatureDays, value)?;
        let total = self.require_total(InputField::TemperatureDays)?;

        if temperature > total {
            return Err(ValidationError::new(
                InputField::TemperatureDays,
                ValidationErrorKind::CrossFieldConstraintViolated,
                format!(
                    "Temperature days ({temperature}) cannot exceed total shifts ({total})."
                ),
            ));
        }

        self.temperature_days = Some(temperature);
        Ok(())
    }

    /// Sets the child numbers eligible for the tax deduction.
    ///
    /// Accepts a list separated by commas or periods, e.g. `"1,2"` or `"3.2"`.
    /// The numbers must form a contiguous run without repeats. A lone `"0"`
    /// means no deduction and stores an empty list.
    pub fn set_children(&mut self, value: &str) -> Result<(), ValidationError> {
        let numbers = parse_list(InputField::Children, value)?;
        if numbers == [0] {
            self.children = Some(Vec::new());
            return Ok(());
        }

        let mut children: Vec<u32> = Vec::with_capacity(numbers.len());
        for number in numbers {
            if number == 0 || number > MAX_CHILD_NUMBER {
                return Err(ValidationError::new(
                    InputField::Children,
                    ValidationErrorKind::RangeExceeded,
                    format!(
                        "Child number {number} is out of range: expected 1 to {MAX_CHILD_NUMBER}."
                    ),
                ));
            }
            if children.contains(&number) {
                return Err(ValidationError::new(
                    InputField::Children,
                    ValidationErrorKind::DuplicateValue,
                    format!("Child number {number} is listed more than once."),
                ));
            }
            children.push(number);
        }

        children.sort_unstable();
        if let Some(pair) = children.windows(2).find(|pair| pair[1] != pair[0] + 1) {
            return Err(ValidationError::new(
                InputField::Children,
                ValidationErrorKind::SequenceGapDetected,
                format!(
                    "Child numbers must follow each other without gaps: gap between {} and {}.",
                    pair[0], pair[1]
                ),
            ));
        }

        self.children = Some(children);
        Ok(())
    }

    /// Sets the alimony percentages, one per obligation.
    ///
    /// Each value must be one of [`ALLOWED_ALIMONY_RATES`].
    pub fn set_alimony_rates(&mut self, value: &str) -> Result<(), ValidationError> {
        let mut rates = parse_list(InputField::Alimony, value)?;

        for &rate in &rates {
            if ALLOWED_ALIMONY_RATES.contains(&rate) {
                continue;
            }
            let error = if (MIN_ALIMONY_RATE..=MAX_ALIMONY_RATE).contains(&rate) {
                ValidationError::new(
                    InputField::Alimony,
                    ValidationErrorKind::UnrecognizedEnumValue,
                    format!("{rate}% is not an allowed alimony rate: use 0, 16, 25, 33 or 70."),
                )
            } else {
                ValidationError::new(
                    InputField::Alimony,
                    ValidationErrorKind::RangeExceeded,
                    format!(
                        "Alimony rate {rate}% is out of range: expected 0 or {MIN_ALIMONY_RATE} to {MAX_ALIMONY_RATE}."
                    ),
                )
            };
            return Err(error);
        }

        rates.sort_unstable();
        self.alimony_rates = Some(rates);
        Ok(())
    }

    /// Returns the monthly nominal salary.
    pub fn base_salary(&self) -> Option<Decimal> {
        self.base_salary
    }

    /// Returns the calculation month.
    pub fn month(&self) -> Option<Month> {
        self.month
    }

    /// Returns the total number of shifts.
    pub fn total_shifts(&self) -> Option<u32> {
        self.total_shifts
    }

    /// Returns the number of night shifts.
    pub fn night_shifts(&self) -> Option<u32> {
        self.night_shifts
    }

    /// Returns the number of evening shifts.
    pub fn evening_shifts(&self) -> Option<u32> {
        self.evening_shifts
    }

    /// Returns the number of shifts worked at high temperature.
    pub fn temperature_days(&self) -> Option<u32> {
        self.temperature_days
    }

    /// Returns the sorted child numbers.
    pub fn children(&self) -> Option<&[u32]> {
        self.children.as_deref()
    }

    /// Returns the sorted alimony percentages.
    pub fn alimony_rates(&self) -> Option<&[u32]> {
        self.alimony_rates.as_deref()
    }

    /// Returns the canonical comma-joined child list, `"0"` for none.
    pub fn children_canonical(&self) -> Option<String> {
        self.children.as_deref().map(join_canonical)
    }

    /// Returns the canonical comma-joined alimony list.
    pub fn alimony_canonical(&self) -> Option<String> {
        self.alimony_rates.as_deref().map(join_canonical)
    }

    /// Returns true once all eight fields are set.
    pub fn is_complete(&self) -> bool {
        self.base_salary.is_some()
            && self.month.is_some()
            && self.total_shifts.is_some()
            && self.night_shifts.is_some()
            && self.evening_shifts.is_some()
            && self.temperature_days.is_some()
            && self.children.is_some()
            && self.alimony_rates.is_some()
    }

    fn require_total(&self, field: InputField) -> Result<u32, ValidationError> {
        self.total_shifts.ok_or_else(|| {
            ValidationError::new(
                field,
                ValidationErrorKind::CrossFieldConstraintViolated,
                "Enter the total number of shifts first.",
            )
        })
    }
}

fn join_canonical(values: &[u32]) -> String {
    if values.is_empty() {
        return "0".to_string();
    }
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Trims the value and checks that it is a non-empty run of ASCII digits.
fn parse_digits(field: InputField, value: &str) -> Result<&str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::EmptyValue,
            "Value must not be empty.",
        ));
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::NotANumber,
            "Value must be a whole number.",
        ));
    }
    Ok(value)
}

fn parse_day_count(field: InputField, value: &str) -> Result<u32, ValidationError> {
    let digits = parse_digits(field, value)?;
    match digits.parse::<u32>() {
        Ok(count) if count <= MAX_DAYS_IN_MONTH => Ok(count),
        _ => Err(ValidationError::new(
            field,
            ValidationErrorKind::RangeExceeded,
            format!("Value must not exceed {MAX_DAYS_IN_MONTH}."),
        )),
    }
}

fn parse_list(field: InputField, value: &str) -> Result<Vec<u32>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::EmptyValue,
            "Value must not be empty.",
        ));
    }

    value
        .split([',', '.'])
        .map(|part| {
            let part = part.trim();
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ValidationError::new(
                    field,
                    ValidationErrorKind::NotANumber,
                    format!("Invalid entry '{part}': expected a whole number."),
                ));
            }
            part.parse::<u32>().map_err(|_| {
                ValidationError::new(
                    field,
                    ValidationErrorKind::RangeExceeded,
                    format!("Entry '{part}' is too large."),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_shifts(total: &str, night: &str, evening: &str) -> SalaryInput {
        let mut input = SalaryInput::new();
        input.set_total_shifts(total).unwrap();
        input.set_night_shifts(night).unwrap();
        input.set_evening_shifts(evening).unwrap();
        input
    }

    #[test]
    fn test_base_salary_accepts_digits_and_trims() {
        let mut input = SalaryInput::new();
        input.set_base_salary(" 59300 ").unwrap();
        assert_eq!(input.base_salary(), Some(Decimal::from(59300)));
    }

    #[test]
    fn test_base_salary_rejects_empty_and_non_digits() {
        let mut input = SalaryInput::new();
        assert_eq!(
            input.set_base_salary("").unwrap_err().kind,
            ValidationErrorKind::EmptyValue
        );
        assert_eq!(
            input.set_base_salary("-100").unwrap_err().kind,
            ValidationErrorKind::NotANumber
        );
        assert_eq!(
            input.set_base_salary("100.50").unwrap_err().kind,
            ValidationErrorKind::NotANumber
        );
        assert!(input.base_salary().is_none());
    }

    #[test]
    fn test_base_salary_rejects_absurd_length() {
        let mut input = SalaryInput::new();
        let error = input.set_base_salary("1234567890123456").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::RangeExceeded);
    }

    #[test]
    fn test_failed_setter_keeps_previous_value() {
        let mut input = SalaryInput::new();
        input.set_base_salary("50000").unwrap();
        assert!(input.set_base_salary("abc").is_err());
        assert_eq!(input.base_salary(), Some(Decimal::from(50000)));
    }

    #[test]
    fn test_month_is_normalized() {
        let mut input = SalaryInput::new();
        input.set_month(" ЯНВАРЬ ").unwrap();
        assert_eq!(input.month(), Some(Month::January));
    }

    #[test]
    fn test_total_shifts_range() {
        let mut input = SalaryInput::new();
        input.set_total_shifts("31").unwrap();
        assert_eq!(
            input.set_total_shifts("32").unwrap_err().kind,
            ValidationErrorKind::RangeExceeded
        );
        assert_eq!(
            input.set_total_shifts("99999999999").unwrap_err().kind,
            ValidationErrorKind::RangeExceeded
        );
        assert_eq!(input.total_shifts(), Some(31));
    }

    #[test]
    fn test_night_shifts_require_total() {
        let mut input = SalaryInput::new();
        let error = input.set_night_shifts("2").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::CrossFieldConstraintViolated);
        assert_eq!(error.field, InputField::NightShifts);
    }

    #[test]
    fn test_night_shifts_cannot_exceed_total() {
        let mut input = SalaryInput::new();
        input.set_total_shifts("10").unwrap();
        input.set_night_shifts("10").unwrap();
        let error = input.set_night_shifts("11").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::CrossFieldConstraintViolated);
        assert_eq!(input.night_shifts(), Some(10));
    }

    #[test]
    fn test_evening_shifts_require_night_shifts() {
        let mut input = SalaryInput::new();
        input.set_total_shifts("10").unwrap();
        let error = input.set_evening_shifts("1").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::CrossFieldConstraintViolated);
    }

    #[test]
    fn test_night_plus_evening_cannot_exceed_total() {
        let mut input = with_shifts("10", "6", "4");
        let error = input.set_evening_shifts("5").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::CrossFieldConstraintViolated);
        assert!(error.message.contains("(6)"));
        assert_eq!(input.evening_shifts(), Some(4));
    }

    #[test]
    fn test_resetting_night_checks_stored_evening() {
        let mut input = with_shifts("10", "6", "4");
        let error = input.set_night_shifts("7").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::CrossFieldConstraintViolated);
        assert_eq!(input.night_shifts(), Some(6));
    }

    #[test]
    fn test_resetting_total_below_dependents_is_rejected() {
        let mut input = with_shifts("10", "6", "4");
        let error = input.set_total_shifts("9").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::CrossFieldConstraintViolated);
        assert_eq!(input.total_shifts(), Some(10));

        let mut input = SalaryInput::new();
        input.set_total_shifts("10").unwrap();
        input.set_temperature_days("8").unwrap();
        assert!(input.set_total_shifts("7").is_err());
        input.set_total_shifts("8").unwrap();
    }

    #[test]
    fn test_temperature_days_cannot_exceed_total() {
        let mut input = SalaryInput::new();
        assert!(input.set_temperature_days("1").is_err());
        input.set_total_shifts("5").unwrap();
        input.set_temperature_days("5").unwrap();
        let error = input.set_temperature_days("6").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::CrossFieldConstraintViolated);
        assert_eq!(
            input.set_temperature_days("40").unwrap_err().kind,
            ValidationErrorKind::RangeExceeded
        );
    }

    #[test]
    fn test_children_are_sorted_and_canonical() {
        let mut input = SalaryInput::new();
        input.set_children("3,2,1").unwrap();
        assert_eq!(input.children(), Some(&[1, 2, 3][..]));
        assert_eq!(input.children_canonical().as_deref(), Some("1,2,3"));

        let mut other = SalaryInput::new();
        other.set_children("1,2,3").unwrap();
        assert_eq!(input, other);
    }

    #[test]
    fn test_children_accept_period_separator_and_spaces() {
        let mut input = SalaryInput::new();
        input.set_children(" 2 . 3 ").unwrap();
        assert_eq!(input.children_canonical().as_deref(), Some("2,3"));
    }

    #[test]
    fn test_children_run_may_start_after_first_child() {
        let mut input = SalaryInput::new();
        input.set_children("4,5,6").unwrap();
        assert_eq!(input.children(), Some(&[4, 5, 6][..]));
    }

    #[test]
    fn test_children_reject_gap() {
        let mut input = SalaryInput::new();
        let error = input.set_children("1,3").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::SequenceGapDetected);
        assert!(input.children().is_none());
    }

    #[test]
    fn test_children_reject_duplicate() {
        let mut input = SalaryInput::new();
        let error = input.set_children("2,2").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::DuplicateValue);
    }

    #[test]
    fn test_children_reject_out_of_range_and_garbage() {
        let mut input = SalaryInput::new();
        assert_eq!(
            input.set_children("11").unwrap_err().kind,
            ValidationErrorKind::RangeExceeded
        );
        assert_eq!(
            input.set_children("0,1").unwrap_err().kind,
            ValidationErrorKind::RangeExceeded
        );
        assert_eq!(
            input.set_children("1,a").unwrap_err().kind,
            ValidationErrorKind::NotANumber
        );
        assert_eq!(
            input.set_children("1,,2").unwrap_err().kind,
            ValidationErrorKind::NotANumber
        );
        assert_eq!(
            input.set_children(" ").unwrap_err().kind,
            ValidationErrorKind::EmptyValue
        );
    }

    #[test]
    fn test_single_zero_means_no_children() {
        let mut input = SalaryInput::new();
        input.set_children("0").unwrap();
        assert_eq!(input.children(), Some(&[] as &[u32]));
        assert_eq!(input.children_canonical().as_deref(), Some("0"));
    }

    #[test]
    fn test_alimony_accepts_allowed_rates_sorted() {
        let mut input = SalaryInput::new();
        input.set_alimony_rates("0").unwrap();
        assert_eq!(input.alimony_rates(), Some(&[0][..]));
        input.set_alimony_rates("33.25").unwrap();
        assert_eq!(input.alimony_canonical().as_deref(), Some("25,33"));
        input.set_alimony_rates("25,25,0").unwrap();
        assert_eq!(input.alimony_rates(), Some(&[0, 25, 25][..]));
    }

    #[test]
    fn test_alimony_rejects_unlisted_rate_inside_range() {
        let mut input = SalaryInput::new();
        let error = input.set_alimony_rates("20").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::UnrecognizedEnumValue);
        let error = input.set_alimony_rates("25,50").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::UnrecognizedEnumValue);
        assert!(error.message.contains("50%"));
    }

    #[test]
    fn test_alimony_rejects_out_of_range_with_distinct_message() {
        let mut input = SalaryInput::new();
        let too_high = input.set_alimony_rates("80").unwrap_err();
        let too_low = input.set_alimony_rates("10").unwrap_err();
        let unlisted = input.set_alimony_rates("20").unwrap_err();
        assert_eq!(too_high.kind, ValidationErrorKind::RangeExceeded);
        assert_eq!(too_low.kind, ValidationErrorKind::RangeExceeded);
        assert_ne!(too_high.message, unlisted.message);
        assert!(input.alimony_rates().is_none());
    }

    #[test]
    fn test_set_dispatches_by_field() {
        let mut input = SalaryInput::new();
        let values = ["59300", "февраль", "23", "1", "0", "0", "1,2", "25,33"];
        for (field, value) in InputField::ORDER.into_iter().zip(values) {
            input.set(field, value).unwrap();
        }
        assert!(input.is_complete());
        assert_eq!(input.total_shifts(), Some(23));
    }

    #[test]
    fn test_input_field_names() {
        assert_eq!(InputField::TemperatureDays.to_string(), "temperature_days");
        assert_eq!(
            serde_json::to_string(&InputField::BaseSalary).unwrap(),
            "\"base_salary\""
        );
    }
}
