//! Baseline and fallback configurations.

use chrono::Utc;
use uuid::Uuid;

use super::types::{
    AttendanceSettings, BaseSalaryStructure, CompanyConfiguration, Features, LeaveManagement,
    Localization, MauritiusSettings, MealAllowance, OvertimeRules, TransportAllowance,
    WorkingSchedule, Workflows,
};

/// Name recorded in `created_by` for configurations built by the engine.
pub const SYSTEM_CREATOR: &str = "system";

/// Builds the generic baseline configuration for a new company.
///
/// Every section carries its generic defaults; identity fields are freshly
/// generated. Industry templates are merged over this value.
///
/// # Example
///
/// ```
/// use payroll_engine::config::default_company_configuration;
///
/// let config = default_company_configuration("Acme Ltd", 12);
/// assert_eq!(config.company_name, "Acme Ltd");
/// assert_eq!(config.employee_count, 12);
/// assert!(config.validate().is_ok());
/// ```
pub fn default_company_configuration(
    company_name: &str,
    employee_count: u32,
) -> CompanyConfiguration {
    let now = Utc::now();
    CompanyConfiguration {
        id: Uuid::new_v4(),
        company_name: company_name.to_string(),
        employee_count,
        created_at: now,
        updated_at: now,
        created_by: SYSTEM_CREATOR.to_string(),
        working_schedule: WorkingSchedule::default(),
        base_salary_structure: BaseSalaryStructure::default(),
        overtime_rules: OvertimeRules::default(),
        meal_allowance: MealAllowance::default(),
        transport_allowance: TransportAllowance::default(),
        leave_management: LeaveManagement::default(),
        attendance_settings: AttendanceSettings::default(),
        features: Features::default(),
        mauritius_settings: Some(MauritiusSettings::default()),
        localization: Localization::default(),
        custom_fields: Vec::new(),
        workflows: Workflows::default(),
    }
}

/// Builds the configuration used when no company configuration was ever set.
///
/// It is the baseline with Mauritius compliance switched on, so statutory
/// contributions are levied at the standard rates.
pub fn fallback_configuration() -> CompanyConfiguration {
    let mut config = default_company_configuration("Default Company", 0);
    config.features.mauritius_compliance = true;
    config
}
