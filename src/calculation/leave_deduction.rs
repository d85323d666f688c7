//! Unpaid leave deduction.
//!
//! This module converts unpaid leave, in days or hours, into the amount
//! deducted from an employee's salary.

use rust_decimal::Decimal;

use crate::config::CompanyConfiguration;
use crate::error::EngineResult;
use crate::models::Employee;

use super::round_money;

/// Calculates the salary deduction for unpaid leave.
///
/// The base is the employee's monthly salary, plus `meal_allowance.amount *
/// divisor_days` when `include_allowances` is set and the meal allowance is
/// enabled. The daily rate is the base over `divisor_days`.
///
/// When both `days` and `hours` are supplied, hours take priority. Zero or
/// negative quantities deduct nothing. `include_overtime` does not change
/// the result.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidConfiguration`] if `config`
/// fails validation.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_unpaid_leave_deduction;
/// use payroll_engine::config::default_company_configuration;
/// use payroll_engine::models::{Employee, EmploymentType};
/// use rust_decimal::Decimal;
///
/// let config = default_company_configuration("Acme", 10);
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Anjali Ramdin".to_string(),
///     employment_type: EmploymentType::FullTime,
///     monthly_salary: None,
///     weekday_off: None,
/// };
///
/// let deduction =
///     calculate_unpaid_leave_deduction(&employee, Some(Decimal::new(2, 0)), None, &config).unwrap();
/// assert_eq!(deduction, Decimal::new(136231, 2));
/// ```
pub fn calculate_unpaid_leave_deduction(
    employee: &Employee,
    days: Option<Decimal>,
    hours: Option<Decimal>,
    config: &CompanyConfiguration,
) -> EngineResult<Decimal> {
    config.validate()?;
    Ok(unpaid_leave_amount(employee, days, hours, config))
}

/// Leave deduction against a configuration that has already been validated.
pub(crate) fn unpaid_leave_amount(
    employee: &Employee,
    days: Option<Decimal>,
    hours: Option<Decimal>,
    config: &CompanyConfiguration,
) -> Decimal {
    let leave = &config.leave_management.unpaid_leave_calculation;
    let meal = &config.meal_allowance;

    let mut base_salary =
        employee.monthly_salary_or(config.base_salary_structure.default_monthly_salary);
    if leave.include_allowances && meal.enabled {
        base_salary += meal.amount * leave.divisor_days;
    }

    let daily_rate = base_salary / leave.divisor_days;

    match (hours, days) {
        (Some(hours), _) if hours > Decimal::ZERO => {
            let hourly_rate = daily_rate / config.base_salary_structure.standard_working_hours;
            round_money(hourly_rate * hours)
        }
        (_, Some(days)) if days > Decimal::ZERO => round_money(daily_rate * days),
        _ => Decimal::ZERO,
    }
}
