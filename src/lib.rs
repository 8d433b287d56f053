//! Net salary calculation for shift workers.
//!
//! This crate validates the eight inputs of a monthly payroll calculation
//! ([`models::SalaryInput`]) and evaluates the accrual and withholding pipeline
//! over them ([`calculation::CalculationEngine`]), with every amount rounded
//! half-up to kopecks and every step recorded in an audit trail. The [`api`]
//! module exposes the calculation over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
