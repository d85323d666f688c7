//! Company configuration for the payroll engine.
//!
//! This module provides the [`CompanyConfiguration`] data model that
//! parameterizes every calculation, its baseline and fallback values,
//! validation, and a YAML loader.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/company.yaml").unwrap();
//! println!("Loaded company: {}", config.config().company_name);
//! ```

mod defaults;
mod loader;
mod types;
mod validation;

pub use defaults::{SYSTEM_CREATOR, default_company_configuration, fallback_configuration};
pub use loader::ConfigLoader;
pub use types::{
    AttendanceSettings, BaseSalaryStructure, BreakDeductionRules, CompanyConfiguration,
    ContributionRate, ContributionRates, CustomField, CustomFieldType, Features, LeaveManagement,
    LeaveType, Localization, MauritiusSettings, MealAllowance, OvertimeLimits, OvertimeRules,
    OvertimeTier, OvertimeTierRule, OvertimeTrigger, TransportAllowance, UnpaidLeaveCalculation,
    WorkingSchedule, Workflows,
};
