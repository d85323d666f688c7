//! Base rate derivation.
//!
//! This module turns a monthly salary into the daily and hourly rates every
//! shift is priced from, and owns the engine's money rounding rule.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::CompanyConfiguration;
use crate::models::{AuditStep, Employee};

/// Rounds a monetary amount to cents, halves away from zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(10005, 3)), Decimal::new(1001, 2)); // 10.005 -> 10.01
/// assert_eq!(round_money(Decimal::new(-10005, 3)), Decimal::new(-1001, 2));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The rates derived for one employee.
#[derive(Debug, Clone)]
pub(crate) struct BaseRateResult {
    /// The monthly salary the rates were derived from.
    pub monthly_salary: Decimal,
    /// Monthly salary divided by working days per month (unrounded).
    pub daily_rate: Decimal,
    /// Daily rate divided by standard working hours (unrounded).
    pub hourly_rate: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives an employee's daily and hourly rate.
///
/// The monthly salary is the employee override when present, otherwise the
/// company's `default_monthly_salary`. Rates are carried unrounded so that
/// rounding happens once, on the final amounts.
///
/// Callers validate the configuration first, so both divisors are non-zero.
pub(crate) fn derive_base_rate(
    employee: &Employee,
    config: &CompanyConfiguration,
    step_number: u32,
) -> BaseRateResult {
    let salary = &config.base_salary_structure;
    let monthly_salary = employee.monthly_salary_or(salary.default_monthly_salary);
    let source = if employee.monthly_salary.is_some() {
        "employee_override"
    } else {
        "company_default"
    };

    let daily_rate = monthly_salary / salary.working_days_per_month;
    let hourly_rate = daily_rate / salary.standard_working_hours;

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_rate_derivation".to_string(),
        rule_name: "Base Rate Derivation".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.to_string(),
            "source": source,
            "working_days_per_month": salary.working_days_per_month.to_string(),
            "standard_working_hours": salary.standard_working_hours.to_string()
        }),
        output: serde_json::json!({
            "daily_rate": round_money(daily_rate).to_string(),
            "hourly_rate": round_money(hourly_rate).to_string()
        }),
        reasoning: format!(
            "{} / {} days = {} per day; / {} hours = {} per hour",
            monthly_salary,
            salary.working_days_per_month,
            round_money(daily_rate),
            salary.standard_working_hours,
            round_money(hourly_rate)
        ),
    };

    BaseRateResult {
        monthly_salary,
        daily_rate,
        hourly_rate,
        audit_step,
    }
}
