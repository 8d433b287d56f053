//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll rate
//! tables from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, PayrollConfigFile};

/// Loads and provides access to payroll rate tables.
///
/// # File Layout
///
/// ```text
/// factors:
///   night_hours_per_shift: "6"
///   ...
/// months:
///   - month: январь
///     days: 31
///     hours: 136
///     quarter_payout: апреле текущего года
///   ...
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
/// use salary_engine::models::Month;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
/// let norm = loader.config().month_norm(Month::March).unwrap();
/// println!("March hour norm: {}", norm.hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A month is listed twice or has a zero norm (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let file = Self::load_yaml::<PayrollConfigFile>(path)?;
        let config = PayrollConfig::try_from(file)?;

        info!(
            path = %path.display(),
            months = config.months().len(),
            "Loaded payroll configuration"
        );
        Ok(Self { config })
    }

    /// Returns a loader holding the compiled-in standard tables.
    pub fn standard() -> Self {
        Self {
            config: PayrollConfig::standard().clone(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rate tables.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;
    use rust_decimal::Decimal;
    use std::io::Write;

    fn write_temp_yaml(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "salary_engine_{}_{}.yaml",
            name,
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const FACTORS_YAML: &str = r#"
factors:
  night_hours_per_shift: "6"
  evening_hours_per_shift: "1.3"
  night_pay_percent: "20"
  hazard_percent: "4"
  bonus_percent: "40"
  temperature_percent: "10"
  temperature_hours_per_day: "5"
  district_percent: "30"
  north_percent: "50"
  income_tax_percent: "13"
"#;

    #[test]
    fn test_load_shipped_config_matches_standard() {
        let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
        assert_eq!(loader.config(), PayrollConfig::standard());
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = ConfigLoader::load("/nonexistent/payroll.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("nonexistent"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let path = write_temp_yaml("invalid", "factors: [unclosed");
        let result = ConfigLoader::load(&path);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_custom_table() {
        let content = format!(
            "{FACTORS_YAML}months:\n  - month: март\n    days: 21\n    hours: 167\n    quarter_payout: через три месяца\n"
        );
        let path = write_temp_yaml("custom", &content);
        let loader = ConfigLoader::load(&path).unwrap();

        let config = loader.config();
        let norm = config.month_norm(Month::March).unwrap();
        assert_eq!(norm.days, 21);
        assert_eq!(norm.quarter_payout, "через три месяца");
        assert_eq!(config.factors().evening_hours_per_shift, Decimal::new(13, 1));
        assert!(config.month_norm(Month::April).is_none());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_duplicate_month_returns_invalid_config() {
        let content = format!(
            "{FACTORS_YAML}months:\n  - month: май\n    days: 31\n    hours: 144\n    quarter_payout: x\n  - month: май\n    days: 31\n    hours: 144\n    quarter_payout: x\n"
        );
        let path = write_temp_yaml("duplicate", &content);
        let result = ConfigLoader::load(&path);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_standard_loader() {
        let loader = ConfigLoader::standard();
        assert_eq!(loader.config().month_norm(Month::February).unwrap().hours, 160);
    }
}
