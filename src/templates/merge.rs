//! Merging a template over the baseline configuration.

use serde_json::{Map, Value};

use crate::config::{CompanyConfiguration, default_company_configuration};
use crate::error::{EngineError, EngineResult};

use super::IndustryTemplate;

/// Sections a template may set. Anything else in a template is ignored.
pub const MERGED_SECTIONS: [&str; 11] = [
    "working_schedule",
    "base_salary_structure",
    "overtime_rules",
    "meal_allowance",
    "transport_allowance",
    "leave_management",
    "attendance_settings",
    "features",
    "localization",
    "custom_fields",
    "workflows",
];

fn merge_section(base: &mut Value, fragment: &Value) {
    match (base, fragment) {
        (Value::Object(base), Value::Object(fragment)) => {
            for (key, value) in fragment {
                base.insert(key.clone(), value.clone());
            }
        }
        (base, fragment) => *base = fragment.clone(),
    }
}

fn merge_error(template: &IndustryTemplate, error: serde_json::Error) -> EngineError {
    EngineError::ConfigParseError {
        path: format!("templates/{}.yaml", template.id),
        message: error.to_string(),
    }
}

/// Builds a complete configuration for a new company from a template.
///
/// The baseline configuration supplies identity (a fresh id, timestamps,
/// `created_by`) and every default. Each section listed in
/// [`MERGED_SECTIONS`] is then merged key by key with the template's
/// fragment, template values winning. Nested values are replaced whole,
/// not merged further.
///
/// # Errors
///
/// - [`EngineError::ConfigParseError`] if the merged sections do not form
///   a valid configuration document
/// - [`EngineError::InvalidConfiguration`] if the merged configuration
///   fails validation
///
/// # Example
///
/// ```
/// use payroll_engine::templates::{create_company_config_from_template, find_template};
/// use rust_decimal::Decimal;
///
/// let template = find_template("construction").unwrap();
/// let config = create_company_config_from_template("Port Louis Builders", 42, &template).unwrap();
///
/// assert_eq!(config.company_name, "Port Louis Builders");
/// assert_eq!(config.meal_allowance.amount, Decimal::new(150, 0));
/// ```
pub fn create_company_config_from_template(
    company_name: &str,
    employee_count: u32,
    template: &IndustryTemplate,
) -> EngineResult<CompanyConfiguration> {
    let baseline = default_company_configuration(company_name, employee_count);
    let mut document =
        serde_json::to_value(&baseline).map_err(|e| merge_error(template, e))?;

    let empty = Map::new();
    let fragment = template.configuration.as_object().unwrap_or(&empty);

    if let Value::Object(sections) = &mut document {
        for section in MERGED_SECTIONS {
            if let (Some(base), Some(overlay)) = (sections.get_mut(section), fragment.get(section))
            {
                merge_section(base, overlay);
            }
        }
    }

    let mut config: CompanyConfiguration =
        serde_json::from_value(document).map_err(|e| merge_error(template, e))?;

    // Identity always comes from the baseline.
    config.id = baseline.id;
    config.company_name = baseline.company_name;
    config.employee_count = baseline.employee_count;
    config.created_at = baseline.created_at;
    config.updated_at = baseline.updated_at;
    config.created_by = baseline.created_by;

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OvertimeTier, SYSTEM_CREATOR};
    use crate::templates::{Industry, find_template, industry_templates};
    use chrono::Weekday;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn custom_template(configuration: Value) -> IndustryTemplate {
        IndustryTemplate {
            id: "custom".to_string(),
            name: "Custom".to_string(),
            industry: Industry::General,
            description: "Test preset".to_string(),
            configuration,
        }
    }

    #[test]
    fn test_every_builtin_template_merges() {
        for template in industry_templates().unwrap() {
            let config = create_company_config_from_template("Acme", 7, &template);
            assert!(config.is_ok(), "template {} failed: {:?}", template.id, config);
        }
    }

    #[test]
    fn test_template_values_win_and_untouched_keys_survive() {
        let template = find_template("construction").unwrap();
        let config = create_company_config_from_template("Acme", 7, &template).unwrap();

        assert_eq!(config.meal_allowance.amount, dec("150"));
        assert!(config.transport_allowance.enabled);
        assert_eq!(config.transport_allowance.amount, dec("75"));
        assert_eq!(config.overtime_rules.tier(OvertimeTier::TimeAndHalf).rate, dec("130"));
        // Not set by the template
        assert_eq!(config.overtime_rules.tier(OvertimeTier::Single).rate, dec("85"));
        assert_eq!(config.attendance_settings.grace_period_minutes, 15);
        assert_eq!(config.working_schedule.tea_break_minutes, 15);
        assert!(config.leave_management.leave_types.len() >= 3);
    }

    #[test]
    fn test_section_keys_merge_shallowly() {
        let template = find_template("services").unwrap();
        let config = create_company_config_from_template("Acme", 7, &template).unwrap();

        assert_eq!(
            config.working_schedule.working_days,
            vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
        );
        assert_eq!(config.working_schedule.dinner_break_minutes, 0);
        assert_eq!(config.working_schedule.lunch_break_minutes, 30);
        assert_eq!(config.base_salary_structure.working_days_per_month, dec("22"));
        assert_eq!(config.base_salary_structure.default_monthly_salary, dec("17710"));
        assert!(!config.overtime_rules.ot3_0.enabled);
    }

    #[test]
    fn test_identity_is_never_taken_from_template() {
        let template = custom_template(serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "company_name": "Hijacked",
            "employee_count": 9999,
            "created_by": "template",
            "meal_allowance": { "amount": 80 }
        }));

        let config = create_company_config_from_template("Acme", 7, &template).unwrap();

        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.employee_count, 7);
        assert_eq!(config.created_by, SYSTEM_CREATOR);
        assert!(!config.id.is_nil());
        assert_eq!(config.meal_allowance.amount, dec("80"));
    }

    #[test]
    fn test_mauritius_settings_not_merged() {
        let template = custom_template(serde_json::json!({
            "features": { "mauritius_compliance": true },
            "mauritius_settings": null
        }));

        let config = create_company_config_from_template("Acme", 7, &template).unwrap();

        assert!(config.features.mauritius_compliance);
        assert!(config.mauritius_settings.is_some());
    }

    #[test]
    fn test_fresh_identity_per_merge() {
        let template = find_template("retail").unwrap();
        let first = create_company_config_from_template("Acme", 7, &template).unwrap();
        let second = create_company_config_from_template("Acme", 7, &template).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.overtime_rules, second.overtime_rules);
    }

    #[test]
    fn test_invalid_merged_configuration_rejected() {
        let template = custom_template(serde_json::json!({
            "base_salary_structure": { "working_days_per_month": 0 }
        }));

        let result = create_company_config_from_template("Acme", 7, &template);

        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_malformed_fragment_rejected() {
        let template = custom_template(serde_json::json!({
            "meal_allowance": { "amount": "lots" }
        }));

        let result = create_company_config_from_template("Acme", 7, &template);

        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_non_object_fragment_leaves_baseline() {
        let template = custom_template(Value::Null);

        let config = create_company_config_from_template("Acme", 7, &template).unwrap();

        assert_eq!(config.meal_allowance.amount, dec("100"));
    }
}
