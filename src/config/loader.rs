//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a company
//! configuration from a YAML file and validating it.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::CompanyConfiguration;

/// Loads and validates a company configuration.
///
/// Missing sections fall back to their defaults, so a file only needs the
/// company name and the values that differ from the baseline:
///
/// ```text
/// company_name: Acme Construction
/// base_salary_structure:
///   default_monthly_salary: 20000
/// overtime_rules:
///   ot3_0:
///     enabled: false
///     rate: 0
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/company.yaml").unwrap();
/// println!("Loaded company: {}", loader.config().company_name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CompanyConfiguration,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read
    /// - [`EngineError::ConfigParseError`] if the YAML is malformed
    /// - [`EngineError::InvalidConfiguration`] if a value breaks an invariant
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&path_str, &content)
    }

    /// Parses and validates configuration from YAML text.
    ///
    /// `source` names the text in error messages.
    pub fn from_yaml_str(source: &str, content: &str) -> EngineResult<Self> {
        let config: CompanyConfiguration =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &CompanyConfiguration {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> CompanyConfiguration {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/company.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_sample_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config.company_name, "Port Louis Builders Ltd");
        assert_eq!(config.employee_count, 42);
        assert_eq!(config.base_salary_structure.currency_symbol, "Rs");
        assert!(config.features.mauritius_compliance);
    }

    #[test]
    fn test_sample_configuration_tier_rates() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rules = &loader.config().overtime_rules;

        assert_eq!(rules.ot1_5.rate, dec("127.72"));
        assert_eq!(rules.ot2_0.rate, dec("170.29"));
        assert!(!rules.ot1_0.enabled);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/company.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("company.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let loader = ConfigLoader::from_yaml_str("inline", "company_name: Minimal Ltd\n").unwrap();
        let config = loader.config();

        assert_eq!(config.company_name, "Minimal Ltd");
        assert_eq!(config.working_schedule.lunch_break_minutes, 30);
        assert_eq!(config.working_schedule.dinner_break_minutes, 30);
        assert_eq!(config.working_schedule.tea_break_minutes, 15);
        assert!(config.attendance_settings.break_deduction_rules.is_none());
        assert!(config.mauritius_settings.is_none());
    }

    #[test]
    fn test_partial_schedule_keeps_default_breaks() {
        let yaml = "company_name: Partial Ltd\nworking_schedule:\n  standard_hours_per_day: 9\n";
        let config = ConfigLoader::from_yaml_str("inline", yaml)
            .unwrap()
            .into_config();

        assert_eq!(config.working_schedule.standard_hours_per_day, dec("9"));
        assert_eq!(config.working_schedule.lunch_break_minutes, 30);
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("inline", "company_name: [unclosed");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "inline"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_values_rejected_at_load() {
        let yaml = "company_name: Broken Ltd\nbase_salary_structure:\n  working_days_per_month: 0\n";
        let result = ConfigLoader::from_yaml_str("inline", yaml);

        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }
}
