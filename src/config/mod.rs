//! Rate tables for the Salary Engine.
//!
//! The standard tables are compiled in and available through
//! [`PayrollConfig::standard`]. A YAML file with the same layout can replace
//! them, e.g. to switch the quarter payout table.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Income tax: {}%", loader.config().factors().income_tax_percent);
//! ```

mod loader;
mod standard;
mod types;

pub use loader::ConfigLoader;
pub use types::{Factors, MonthNorm, PayrollConfig, PayrollConfigFile};
