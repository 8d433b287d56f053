//! Calendar month of a calculation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationErrorKind};

use super::InputField;

/// A calendar month, named by its lowercase Russian name.
///
/// Parsing ignores surrounding whitespace and letter case.
///
/// # Example
///
/// ```
/// use salary_engine::models::Month;
///
/// let month: Month = "  Февраль ".parse().unwrap();
/// assert_eq!(month, Month::February);
/// assert_eq!(month.name(), "февраль");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    /// Январь.
    #[serde(rename = "январь")]
    January,
    /// Февраль.
    #[serde(rename = "февраль")]
    February,
    /// Март.
    #[serde(rename = "март")]
    March,
    /// Апрель.
    #[serde(rename = "апрель")]
    April,
    /// Май.
    #[serde(rename = "май")]
    May,
    /// Июнь.
    #[serde(rename = "июнь")]
    June,
    /// Июль.
    #[serde(rename = "июль")]
    July,
    /// Август.
    #[serde(rename = "август")]
    August,
    /// Сентябрь.
    #[serde(rename = "сентябрь")]
    September,
    /// Октябрь.
    #[serde(rename = "октябрь")]
    October,
    /// Ноябрь.
    #[serde(rename = "ноябрь")]
    November,
    /// Декабрь.
    #[serde(rename = "декабрь")]
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the normalized (lowercase) month name.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "январь",
            Month::February => "февраль",
            Month::March => "март",
            Month::April => "апрель",
            Month::May => "май",
            Month::June => "июнь",
            Month::July => "июль",
            Month::August => "август",
            Month::September => "сентябрь",
            Month::October => "октябрь",
            Month::November => "ноябрь",
            Month::December => "декабрь",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::new(
                InputField::Month,
                ValidationErrorKind::EmptyValue,
                "Value must not be empty.",
            ));
        }

        Month::ALL
            .into_iter()
            .find(|month| month.name() == normalized)
            .ok_or_else(|| {
                ValidationError::new(
                    InputField::Month,
                    ValidationErrorKind::UnrecognizedEnumValue,
                    format!("'{}' is not a month of the year.", value.trim()),
                )
            })
    }
}
