//! Shift pay calculation.
//!
//! This module ties the individual rules together: it classifies the work
//! date, derives the hourly rate, deducts unpaid breaks, selects regular and
//! overtime rates, applies the compliance cap and rounds the amounts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CompanyConfiguration;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Employee, HolidayCalendar, ShiftPunch};

use super::{
    DayType, apply_overtime_cap, calculate_break_deduction, calculate_meal_allowance,
    classify_day, derive_base_rate, round_money, select_rates,
};

/// The pay breakdown for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPayResult {
    /// The work date.
    pub date: NaiveDate,
    /// How the work date was classified.
    pub day_type: DayType,
    /// Clocked hours before break deductions.
    pub total_hours: Decimal,
    /// Unpaid break hours deducted.
    pub break_hours: Decimal,
    /// Hours paid at the regular rate.
    pub regular_hours: Decimal,
    /// Hours paid at overtime tiers (after any compliance cap).
    pub overtime_hours: Decimal,
    /// The employee's regular hourly rate, rounded to cents.
    pub hourly_rate: Decimal,
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Meal allowance for the shift.
    pub meal_allowance: Decimal,
    /// Regular pay plus overtime pay plus meal allowance.
    pub total_pay: Decimal,
    /// Payslip label describing which rates applied.
    pub ot_rate: String,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the pay for one shift.
///
/// # Arguments
///
/// * `employee` - The employee (salary override and weekday off)
/// * `punch` - The clock-in/clock-out pair on the work date
/// * `calendar` - Public holidays
/// * `config` - The company configuration, validated before use
///
/// # Errors
///
/// - [`EngineError::InvalidConfiguration`] if `config` fails validation
/// - [`EngineError::InvalidShift`] when clock-out is not after clock-in
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_shift_pay;
/// use payroll_engine::config::default_company_configuration;
/// use payroll_engine::models::{Employee, EmploymentType, HolidayCalendar, ShiftPunch};
/// use chrono::NaiveDate;
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
/// // Monday 08:00-16:00: 7.5 paid hours at 17710 / 26 / 8
/// let punch = ShiftPunch::parse(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), "08:00", "16:00").unwrap();
/// let result = calculate_shift_pay(&employee, &punch, &HolidayCalendar::new(), &config).unwrap();
///
/// assert_eq!(result.regular_hours, Decimal::new(75, 1));
/// assert_eq!(result.regular_pay, Decimal::new(63858, 2));
/// assert_eq!(result.total_pay, Decimal::new(63858, 2));
/// ```
pub fn calculate_shift_pay(
    employee: &Employee,
    punch: &ShiftPunch,
    calendar: &HolidayCalendar,
    config: &CompanyConfiguration,
) -> EngineResult<ShiftPayResult> {
    config.validate()?;
    price_shift(employee, punch, calendar, config)
}

/// Prices a shift against a configuration that has already been validated.
pub(crate) fn price_shift(
    employee: &Employee,
    punch: &ShiftPunch,
    calendar: &HolidayCalendar,
    config: &CompanyConfiguration,
) -> EngineResult<ShiftPayResult> {
    let total_hours = punch.total_hours();
    if total_hours <= Decimal::ZERO {
        return Err(EngineError::InvalidShift {
            date: punch.date,
            message: format!(
                "clock-out {} must be after clock-in {}",
                punch.clock_out.format("%H:%M"),
                punch.clock_in.format("%H:%M")
            ),
        });
    }

    let mut audit_steps = Vec::new();
    let mut step_number: u32 = 1;

    let classification = classify_day(employee, punch.date, calendar, step_number);
    let day_type = classification.day_type;
    audit_steps.push(classification.audit_step);
    step_number += 1;

    let base_rate = derive_base_rate(employee, config, step_number);
    let hourly_rate = base_rate.hourly_rate;
    audit_steps.push(base_rate.audit_step);
    step_number += 1;

    let meal = calculate_meal_allowance(total_hours, config, step_number);
    audit_steps.push(meal.audit_step);
    step_number += 1;

    let breaks = calculate_break_deduction(total_hours, day_type, config, step_number);
    audit_steps.push(breaks.audit_step.clone());
    step_number += 1;

    let selection = select_rates(total_hours, day_type, &breaks, hourly_rate, config, step_number);
    audit_steps.push(selection.audit_step.clone());
    step_number += 1;

    let mut overtime_hours = selection.overtime_hours();
    let mut overtime_amount = selection.overtime_amount();
    let mut ot_rate = selection.ot_rate.clone();

    if let Some(cap) = apply_overtime_cap(overtime_hours, overtime_amount, config, step_number) {
        overtime_hours = cap.overtime_hours;
        overtime_amount = cap.overtime_amount;
        ot_rate = format!("{} ({})", ot_rate, cap.note);
        audit_steps.push(cap.audit_step);
    }

    let regular_pay = round_money(selection.regular_hours * hourly_rate);
    let overtime_pay = round_money(overtime_amount);
    let total_pay = round_money(regular_pay + overtime_pay + meal.amount);

    Ok(ShiftPayResult {
        date: punch.date,
        day_type,
        total_hours,
        break_hours: breaks.deducted_hours,
        regular_hours: selection.regular_hours,
        overtime_hours,
        hourly_rate: round_money(hourly_rate),
        regular_pay,
        overtime_pay,
        meal_allowance: meal.amount,
        total_pay,
        ot_rate,
        audit_steps,
    })
}
