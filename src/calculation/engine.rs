//! The memoizing calculation pipeline.
//!
//! [`CalculationEngine`] evaluates one [`SalaryInput`] against one
//! [`PayrollConfig`]. Every named amount is computed at most once per engine:
//! an accessor returns the cached value when present, otherwise it evaluates
//! its dependencies, runs its step and records the result together with an
//! [`AuditStep`]. Steps are therefore numbered in evaluation order, with
//! dependencies ahead of the amounts built from them.
//!
//! # Example
//!
//! ```
//! use salary_engine::calculation::CalculationEngine;
//! use salary_engine::models::SalaryInput;
//!
//! let mut input = SalaryInput::new();
//! input.set_base_salary("50000").unwrap();
//! input.set_month("январь").unwrap();
//! input.set_total_shifts("31").unwrap();
//! input.set_night_shifts("0").unwrap();
//! input.set_evening_shifts("0").unwrap();
//! input.set_temperature_days("0").unwrap();
//! input.set_children("0").unwrap();
//! input.set_alimony_rates("0").unwrap();
//!
//! let mut engine = CalculationEngine::new(&input);
//! let headline = engine.headline().unwrap();
//! assert_eq!(headline.overtime_differential.to_string(), "0.00");
//! assert_eq!(headline.quarter_payout_month, "апреле текущего года");
//! ```

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{MonthNorm, PayrollConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, HeadlineResult, InputField, Month, SalaryBreakdown, SalaryInput};

use super::{
    AccrualComponents, RegionalAllowance, StepResult, calculate_alimony,
    calculate_base_salary_amount, calculate_base_total, calculate_bonus,
    calculate_child_deduction, calculate_hazard_pay, calculate_income_tax, calculate_net_salary,
    calculate_night_shift_pay, calculate_overtime_differential, calculate_regional_allowance,
    calculate_temperature_pay, calculate_total_accruals, hourly_rate, quarter_payout_month,
};

const BASE_SALARY_AMOUNT: &str = "base_salary_amount";
const NIGHT_SHIFT_PAY: &str = "night_shift_pay";
const HAZARD_PAY: &str = "hazard_pay";
const BONUS: &str = "bonus";
const TEMPERATURE_PAY: &str = "temperature_pay";
const BASE_TOTAL: &str = "base_total";
const DISTRICT_ALLOWANCE: &str = "district_allowance";
const NORTH_ALLOWANCE: &str = "north_allowance";
const TOTAL_ACCRUALS: &str = "total_accruals";
const CHILD_DEDUCTION: &str = "child_deduction";
const INCOME_TAX: &str = "income_tax";
const ALIMONY: &str = "alimony";
const FINAL_ANSWER: &str = "final_answer";
const OVERTIME_DIFFERENTIAL: &str = "overtime_differential";

fn require<T>(value: Option<T>, field: InputField) -> EngineResult<T> {
    value.ok_or(EngineError::MissingInput { field })
}

/// Memoized salary pipeline over one input record.
///
/// The cache is never invalidated; build a new engine for a changed record.
#[derive(Debug)]
pub struct CalculationEngine<'a> {
    input: &'a SalaryInput,
    config: &'a PayrollConfig,
    cache: HashMap<&'static str, Decimal>,
    audit_steps: Vec<AuditStep>,
}

impl<'a> CalculationEngine<'a> {
    /// Creates an engine that uses the standard rate tables.
    pub fn new(input: &'a SalaryInput) -> Self {
        Self::with_config(input, PayrollConfig::standard())
    }

    /// Creates an engine that uses the given rate tables.
    pub fn with_config(input: &'a SalaryInput, config: &'a PayrollConfig) -> Self {
        Self {
            input,
            config,
            cache: HashMap::new(),
            audit_steps: Vec::new(),
        }
    }

    /// Returns the net amount to be paid.
    pub fn answer(&mut self) -> EngineResult<Decimal> {
        self.final_answer()
    }

    /// Returns the three figures shown at the end of a calculation.
    pub fn headline(&mut self) -> EngineResult<HeadlineResult> {
        Ok(HeadlineResult {
            final_answer: self.final_answer()?,
            overtime_differential: self.overtime_differential()?,
            quarter_payout_month: self.quarter_payout_month()?.to_string(),
        })
    }

    /// Evaluates every step and returns all amounts.
    pub fn breakdown(&mut self) -> EngineResult<SalaryBreakdown> {
        Ok(SalaryBreakdown {
            base_salary_amount: self.base_salary_amount()?,
            night_shift_pay: self.night_shift_pay()?,
            hazard_pay: self.hazard_pay()?,
            bonus: self.bonus()?,
            temperature_pay: self.temperature_pay()?,
            base_total: self.base_total()?,
            district_allowance: self.district_allowance()?,
            north_allowance: self.north_allowance()?,
            total_accruals: self.total_accruals()?,
            child_deduction: self.child_deduction()?,
            income_tax: self.income_tax()?,
            alimony: self.alimony()?,
            final_answer: self.final_answer()?,
            overtime_differential: self.overtime_differential()?,
        })
    }

    /// The audit steps recorded so far, in evaluation order.
    pub fn audit_trace(&self) -> &[AuditStep] {
        &self.audit_steps
    }

    /// Consumes the engine and returns its audit steps.
    pub fn into_audit_steps(self) -> Vec<AuditStep> {
        self.audit_steps
    }

    /// Base salary pro-rated by shifts worked against the month's day norm.
    pub fn base_salary_amount(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(BASE_SALARY_AMOUNT) {
            return Ok(amount);
        }
        let input = self.input;
        let base_salary = require(input.base_salary(), InputField::BaseSalary)?;
        let norm = self.month_norm()?;
        let total_shifts = require(input.total_shifts(), InputField::TotalShifts)?;

        let result = calculate_base_salary_amount(
            base_salary,
            total_shifts,
            norm.days,
            self.next_step_number(),
        )?;
        Ok(self.store(BASE_SALARY_AMOUNT, result))
    }

    /// Night and evening shift surcharge.
    pub fn night_shift_pay(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(NIGHT_SHIFT_PAY) {
            return Ok(amount);
        }
        let input = self.input;
        let hourly = self.hourly_rate()?;
        let night_shifts = require(input.night_shifts(), InputField::NightShifts)?;
        let evening_shifts = require(input.evening_shifts(), InputField::EveningShifts)?;

        let config = self.config;
        let result = calculate_night_shift_pay(
            hourly,
            night_shifts,
            evening_shifts,
            config.factors(),
            self.next_step_number(),
        );
        Ok(self.store(NIGHT_SHIFT_PAY, result))
    }

    /// Hazard surcharge on the pro-rated base salary.
    pub fn hazard_pay(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(HAZARD_PAY) {
            return Ok(amount);
        }
        let base_salary_amount = self.base_salary_amount()?;

        let config = self.config;
        let result = calculate_hazard_pay(
            base_salary_amount,
            config.factors().hazard_percent,
            self.next_step_number(),
        );
        Ok(self.store(HAZARD_PAY, result))
    }

    /// Monthly bonus.
    pub fn bonus(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(BONUS) {
            return Ok(amount);
        }
        let base_salary_amount = self.base_salary_amount()?;
        let hazard_pay = self.hazard_pay()?;
        let night_shift_pay = self.night_shift_pay()?;

        let config = self.config;
        let result = calculate_bonus(
            base_salary_amount,
            hazard_pay,
            night_shift_pay,
            config.factors().bonus_percent,
            self.next_step_number(),
        );
        Ok(self.store(BONUS, result))
    }

    /// High-temperature surcharge.
    pub fn temperature_pay(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(TEMPERATURE_PAY) {
            return Ok(amount);
        }
        let input = self.input;
        let hourly = self.hourly_rate()?;
        let temperature_days = require(input.temperature_days(), InputField::TemperatureDays)?;

        let config = self.config;
        let result = calculate_temperature_pay(
            hourly,
            temperature_days,
            config.factors(),
            self.next_step_number(),
        );
        Ok(self.store(TEMPERATURE_PAY, result))
    }

    /// Base pay plus surcharges, the base of the regional allowances.
    pub fn base_total(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(BASE_TOTAL) {
            return Ok(amount);
        }
        let components = self.accrual_components()?;

        let result = calculate_base_total(&components, self.next_step_number());
        Ok(self.store(BASE_TOTAL, result))
    }

    /// District coefficient allowance.
    pub fn district_allowance(&mut self) -> EngineResult<Decimal> {
        self.regional_allowance(RegionalAllowance::District, DISTRICT_ALLOWANCE)
    }

    /// Northern allowance.
    pub fn north_allowance(&mut self) -> EngineResult<Decimal> {
        self.regional_allowance(RegionalAllowance::North, NORTH_ALLOWANCE)
    }

    /// Sum of all accruals.
    pub fn total_accruals(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(TOTAL_ACCRUALS) {
            return Ok(amount);
        }
        let components = self.accrual_components()?;
        let district_allowance = self.district_allowance()?;
        let north_allowance = self.north_allowance()?;

        let result = calculate_total_accruals(
            &components,
            district_allowance,
            north_allowance,
            self.next_step_number(),
        );
        Ok(self.store(TOTAL_ACCRUALS, result))
    }

    /// Tax value of the child deduction; zero when no children are listed.
    pub fn child_deduction(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(CHILD_DEDUCTION) {
            return Ok(amount);
        }
        let input = self.input;
        let children = input.children().unwrap_or_default();

        let config = self.config;
        let result = calculate_child_deduction(
            children,
            config.factors().income_tax_percent,
            self.next_step_number(),
        );
        Ok(self.store(CHILD_DEDUCTION, result))
    }

    /// Income tax less the child deduction.
    pub fn income_tax(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(INCOME_TAX) {
            return Ok(amount);
        }
        let total_accruals = self.total_accruals()?;
        let child_deduction = self.child_deduction()?;

        let config = self.config;
        let result = calculate_income_tax(
            total_accruals,
            child_deduction,
            config.factors().income_tax_percent,
            self.next_step_number(),
        );
        Ok(self.store(INCOME_TAX, result))
    }

    /// Alimony withheld from the after-tax accruals.
    pub fn alimony(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(ALIMONY) {
            return Ok(amount);
        }
        let input = self.input;
        let total_accruals = self.total_accruals()?;
        let income_tax = self.income_tax()?;
        let rates = input.alimony_rates().unwrap_or_default();

        let result = calculate_alimony(total_accruals, income_tax, rates, self.next_step_number());
        Ok(self.store(ALIMONY, result))
    }

    /// Net amount to be paid.
    pub fn final_answer(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(FINAL_ANSWER) {
            return Ok(amount);
        }
        let total_accruals = self.total_accruals()?;
        let income_tax = self.income_tax()?;
        let alimony = self.alimony()?;

        let result =
            calculate_net_salary(total_accruals, income_tax, alimony, self.next_step_number());
        Ok(self.store(FINAL_ANSWER, result))
    }

    /// Pro-rated base pay minus nominal salary.
    pub fn overtime_differential(&mut self) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(OVERTIME_DIFFERENTIAL) {
            return Ok(amount);
        }
        let input = self.input;
        let base_salary_amount = self.base_salary_amount()?;
        let base_salary = require(input.base_salary(), InputField::BaseSalary)?;

        let result = calculate_overtime_differential(
            base_salary_amount,
            base_salary,
            self.next_step_number(),
        );
        Ok(self.store(OVERTIME_DIFFERENTIAL, result))
    }

    /// When the overtime differential is paid out.
    pub fn quarter_payout_month(&self) -> EngineResult<&'a str> {
        let month = require(self.input.month(), InputField::Month)?;
        Ok(quarter_payout_month(self.config, month))
    }

    fn regional_allowance(
        &mut self,
        kind: RegionalAllowance,
        key: &'static str,
    ) -> EngineResult<Decimal> {
        if let Some(amount) = self.cached(key) {
            return Ok(amount);
        }
        let base_total = self.base_total()?;

        let factors = self.config.factors();
        let percent = match kind {
            RegionalAllowance::District => factors.district_percent,
            RegionalAllowance::North => factors.north_percent,
        };
        let result =
            calculate_regional_allowance(kind, base_total, percent, self.next_step_number());
        Ok(self.store(key, result))
    }

    fn accrual_components(&mut self) -> EngineResult<AccrualComponents> {
        Ok(AccrualComponents {
            base_salary_amount: self.base_salary_amount()?,
            night_shift_pay: self.night_shift_pay()?,
            hazard_pay: self.hazard_pay()?,
            bonus: self.bonus()?,
            temperature_pay: self.temperature_pay()?,
        })
    }

    fn month_norm(&self) -> EngineResult<&'a MonthNorm> {
        let month: Month = require(self.input.month(), InputField::Month)?;
        let config = self.config;
        config
            .month_norm(month)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("no norms configured for month '{}'", month),
            })
    }

    fn hourly_rate(&self) -> EngineResult<Decimal> {
        let base_salary = require(self.input.base_salary(), InputField::BaseSalary)?;
        let norm = self.month_norm()?;
        hourly_rate(base_salary, norm.hours)
    }

    fn cached(&self, key: &str) -> Option<Decimal> {
        self.cache.get(key).copied()
    }

    fn next_step_number(&self) -> u32 {
        self.audit_steps.len() as u32 + 1
    }

    fn store(&mut self, key: &'static str, result: StepResult) -> Decimal {
        let StepResult { amount, audit_step } = result;
        debug!(
            step = key,
            step_number = audit_step.step_number,
            amount = %amount,
            reasoning = %audit_step.reasoning,
            "Computed pipeline step"
        );
        self.cache.insert(key, amount);
        self.audit_steps.push(audit_step);
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(values: [&str; 8]) -> SalaryInput {
        let mut input = SalaryInput::new();
        for (field, value) in InputField::ORDER.into_iter().zip(values) {
            input.set(field, value).unwrap();
        }
        input
    }

    fn february_input() -> SalaryInput {
        input(["59300", "февраль", "23", "1", "0", "0", "1,2", "25,33"])
    }

    #[test]
    fn test_february_breakdown() {
        let input = february_input();
        let mut engine = CalculationEngine::new(&input);
        let breakdown = engine.breakdown().unwrap();

        assert_eq!(breakdown.base_salary_amount, dec("48710.71"));
        assert_eq!(breakdown.night_shift_pay, dec("444.75"));
        assert_eq!(breakdown.hazard_pay, dec("1948.43"));
        assert_eq!(breakdown.bonus, dec("20441.56"));
        assert_eq!(breakdown.temperature_pay.to_string(), "0.00");
        assert_eq!(breakdown.base_total, dec("71545.45"));
        assert_eq!(breakdown.district_allowance, dec("21463.64"));
        assert_eq!(breakdown.north_allowance, dec("35772.73"));
        assert_eq!(breakdown.total_accruals, dec("128781.82"));
        assert_eq!(breakdown.child_deduction, dec("546.00"));
        assert_eq!(breakdown.income_tax, dec("16195.64"));
        assert_eq!(breakdown.alimony, dec("65675.27"));
        assert_eq!(breakdown.final_answer, dec("46910.91"));
        assert_eq!(breakdown.overtime_differential, dec("-10589.29"));
    }

    #[test]
    fn test_february_headline() {
        let input = february_input();
        let mut engine = CalculationEngine::new(&input);
        let headline = engine.headline().unwrap();

        assert_eq!(headline.final_answer.to_string(), "46910.91");
        assert_eq!(headline.overtime_differential.to_string(), "-10589.29");
        assert_eq!(headline.quarter_payout_month, "апреле текущего года");
    }

    #[test]
    fn test_without_children_or_alimony() {
        let input = input(["59300", "февраль", "23", "1", "0", "0", "0", "0"]);
        let mut engine = CalculationEngine::new(&input);

        assert_eq!(engine.child_deduction().unwrap().to_string(), "0.00");
        assert_eq!(engine.income_tax().unwrap(), dec("16741.64"));
        assert_eq!(engine.alimony().unwrap().to_string(), "0.00");
        assert_eq!(engine.answer().unwrap(), dec("112040.18"));
    }

    #[test]
    fn test_full_month_with_all_surcharges() {
        let input = input(["50000", "январь", "31", "10", "5", "4", "1,2,3,4", "16"]);
        let mut engine = CalculationEngine::new(&input);
        let breakdown = engine.breakdown().unwrap();

        assert_eq!(breakdown.base_salary_amount.to_string(), "50000.00");
        assert_eq!(breakdown.night_shift_pay, dec("4889.71"));
        assert_eq!(breakdown.hazard_pay, dec("2000.00"));
        assert_eq!(breakdown.bonus, dec("22755.88"));
        assert_eq!(breakdown.temperature_pay, dec("735.29"));
        assert_eq!(breakdown.base_total, dec("80380.88"));
        assert_eq!(breakdown.district_allowance, dec("24114.26"));
        assert_eq!(breakdown.north_allowance, dec("40190.44"));
        assert_eq!(breakdown.total_accruals, dec("144685.58"));
        assert_eq!(breakdown.child_deduction, dec("2106.00"));
        assert_eq!(breakdown.income_tax, dec("16703.13"));
        assert_eq!(breakdown.alimony, dec("21330.41"));
        assert_eq!(breakdown.final_answer, dec("106652.04"));
        assert_eq!(breakdown.overtime_differential.to_string(), "0.00");
    }

    #[test]
    fn test_each_step_is_computed_once() {
        let input = february_input();
        let mut engine = CalculationEngine::new(&input);

        let first = engine.answer().unwrap();
        let steps_after_first = engine.audit_trace().len();
        let second = engine.answer().unwrap();
        engine.breakdown().unwrap();

        assert_eq!(first, second);
        // Only the overtime differential was left to evaluate.
        assert_eq!(steps_after_first, 13);
        assert_eq!(engine.audit_trace().len(), 14);
    }

    #[test]
    fn test_audit_steps_in_dependency_order() {
        let input = february_input();
        let mut engine = CalculationEngine::new(&input);
        engine.answer().unwrap();

        let steps = engine.into_audit_steps();
        let ids: Vec<&str> = steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "base_salary_amount",
                "night_shift_pay",
                "hazard_pay",
                "bonus",
                "temperature_pay",
                "base_total",
                "district_allowance",
                "north_allowance",
                "total_accruals",
                "child_deduction",
                "income_tax",
                "alimony",
                "final_answer",
            ]
        );
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, index as u32 + 1);
        }
    }

    #[test]
    fn test_single_accessor_evaluates_only_its_dependencies() {
        let input = february_input();
        let mut engine = CalculationEngine::new(&input);

        assert_eq!(engine.hazard_pay().unwrap(), dec("1948.43"));
        let ids: Vec<&str> = engine
            .audit_trace()
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(ids, vec!["base_salary_amount", "hazard_pay"]);
    }

    #[test]
    fn test_missing_input_is_reported() {
        let input = SalaryInput::new();
        let mut engine = CalculationEngine::new(&input);
        match engine.answer() {
            Err(EngineError::MissingInput { field }) => assert_eq!(field, InputField::BaseSalary),
            other => panic!("Expected MissingInput, got {:?}", other),
        }

        let mut partial = SalaryInput::new();
        partial.set_base_salary("59300").unwrap();
        partial.set_month("март").unwrap();
        partial.set_total_shifts("20").unwrap();
        let mut engine = CalculationEngine::new(&partial);
        assert!(engine.base_salary_amount().is_ok());
        match engine.night_shift_pay() {
            Err(EngineError::MissingInput { field }) => assert_eq!(field, InputField::NightShifts),
            other => panic!("Expected MissingInput, got {:?}", other),
        }
    }

    #[test]
    fn test_unset_children_and_alimony_withhold_nothing() {
        let mut input = SalaryInput::new();
        for (field, value) in InputField::ORDER
            .into_iter()
            .zip(["59300", "февраль", "23", "1", "0", "0"])
        {
            input.set(field, value).unwrap();
        }
        let mut engine = CalculationEngine::new(&input);
        assert_eq!(engine.child_deduction().unwrap().to_string(), "0.00");
        assert_eq!(engine.alimony().unwrap().to_string(), "0.00");
        assert_eq!(engine.answer().unwrap(), dec("112040.18"));
    }

    #[test]
    fn test_month_missing_from_custom_config() {
        let standard = PayrollConfig::standard();
        let months = standard
            .months()
            .iter()
            .filter(|norm| norm.month != Month::February)
            .cloned()
            .collect();
        let config = PayrollConfig::new(standard.factors().clone(), months).unwrap();

        let input = february_input();
        let mut engine = CalculationEngine::with_config(&input, &config);
        assert!(matches!(
            engine.answer(),
            Err(EngineError::CalculationError { .. })
        ));
        assert_eq!(engine.quarter_payout_month().unwrap(), "неизвестный месяц");
    }

    #[test]
    fn test_custom_factors_are_used() {
        let standard = PayrollConfig::standard();
        let mut factors = standard.factors().clone();
        factors.income_tax_percent = Decimal::ZERO;
        let config = PayrollConfig::new(factors, standard.months().to_vec()).unwrap();

        let input = input(["59300", "февраль", "23", "1", "0", "0", "0", "0"]);
        let mut engine = CalculationEngine::with_config(&input, &config);
        assert_eq!(engine.income_tax().unwrap().to_string(), "0.00");
        assert_eq!(engine.answer().unwrap(), dec("128781.82"));
    }
}
