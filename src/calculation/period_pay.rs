//! Pay period summary.
//!
//! Sums the shift results of a pay period and adds the transport allowance,
//! which is paid per distinct worked date (or once per period).

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CompanyConfiguration;
use crate::error::EngineResult;
use crate::models::{Employee, HolidayCalendar, ShiftPunch};

use super::shift_pay::price_shift;
use super::{ShiftPayResult, round_money};

/// Totals for a set of shifts worked by one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPaySummary {
    /// The employee the summary was calculated for.
    pub employee_id: String,
    /// One result per punch, in input order.
    pub shifts: Vec<ShiftPayResult>,
    /// Distinct dates with at least one shift.
    pub days_worked: u32,
    /// Sum of regular hours.
    pub regular_hours: Decimal,
    /// Sum of overtime hours.
    pub overtime_hours: Decimal,
    /// Sum of regular pay.
    pub regular_pay: Decimal,
    /// Sum of overtime pay.
    pub overtime_pay: Decimal,
    /// Sum of meal allowances.
    pub meal_allowance: Decimal,
    /// Transport allowance for the period.
    pub transport_allowance: Decimal,
    /// Everything above added together.
    pub gross_pay: Decimal,
}

/// Calculates every shift in a pay period and totals the result.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidConfiguration`] if `config`
/// fails validation, otherwise fails on the first punch that
/// [`super::calculate_shift_pay`] rejects.
pub fn calculate_period_pay(
    employee: &Employee,
    punches: &[ShiftPunch],
    calendar: &HolidayCalendar,
    config: &CompanyConfiguration,
) -> EngineResult<PeriodPaySummary> {
    config.validate()?;
    total_period(employee, punches, calendar, config)
}

/// Totals a pay period against a configuration that has already been validated.
pub(crate) fn total_period(
    employee: &Employee,
    punches: &[ShiftPunch],
    calendar: &HolidayCalendar,
    config: &CompanyConfiguration,
) -> EngineResult<PeriodPaySummary> {
    let shifts = punches
        .iter()
        .map(|punch| price_shift(employee, punch, calendar, config))
        .collect::<EngineResult<Vec<_>>>()?;

    let days_worked = shifts
        .iter()
        .map(|shift| shift.date)
        .collect::<BTreeSet<_>>()
        .len() as u32;

    let regular_hours: Decimal = shifts.iter().map(|s| s.regular_hours).sum();
    let overtime_hours: Decimal = shifts.iter().map(|s| s.overtime_hours).sum();
    let regular_pay: Decimal = shifts.iter().map(|s| s.regular_pay).sum();
    let overtime_pay: Decimal = shifts.iter().map(|s| s.overtime_pay).sum();
    let meal_allowance: Decimal = shifts.iter().map(|s| s.meal_allowance).sum();

    let transport = &config.transport_allowance;
    let transport_allowance = match (transport.enabled, days_worked) {
        (false, _) | (_, 0) => Decimal::ZERO,
        (true, days) if transport.per_working_day => {
            round_money(transport.amount * Decimal::from(days))
        }
        (true, _) => round_money(transport.amount),
    };

    let gross_pay =
        round_money(regular_pay + overtime_pay + meal_allowance + transport_allowance);

    Ok(PeriodPaySummary {
        employee_id: employee.id.clone(),
        shifts,
        days_worked,
        regular_hours,
        overtime_hours,
        regular_pay,
        overtime_pay,
        meal_allowance,
        transport_allowance,
        gross_pay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_company_configuration;
    use crate::error::EngineError;
    use crate::models::EmploymentType;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Anjali Ramdin".to_string(),
            employment_type: EmploymentType::FullTime,
            monthly_salary: Some(dec("20800")),
            weekday_off: None,
        }
    }

    fn punch(date: &str, clock_in: &str, clock_out: &str) -> ShiftPunch {
        ShiftPunch::parse(make_date(date), clock_in, clock_out).unwrap()
    }

    #[test]
    fn test_sums_shifts() {
        let config = default_company_configuration("Acme", 10);
        // 20800 / 26 / 8 = 100 per hour
        let punches = vec![
            punch("2025-03-03", "08:00", "16:00"),
            punch("2025-03-04", "08:00", "16:00"),
        ];

        let summary = calculate_period_pay(
            &create_test_employee(),
            &punches,
            &HolidayCalendar::new(),
            &config,
        )
        .unwrap();

        assert_eq!(summary.shifts.len(), 2);
        assert_eq!(summary.days_worked, 2);
        assert_eq!(summary.regular_hours, dec("15"));
        assert_eq!(summary.regular_pay, dec("1500.00"));
        assert_eq!(summary.transport_allowance, Decimal::ZERO);
        assert_eq!(summary.gross_pay, dec("1500.00"));
    }

    #[test]
    fn test_transport_allowance_per_distinct_date() {
        let mut config = default_company_configuration("Acme", 10);
        config.transport_allowance.enabled = true;
        config.transport_allowance.amount = dec("50");

        // Split shift on the same date counts once
        let punches = vec![
            punch("2025-03-03", "06:00", "09:00"),
            punch("2025-03-03", "17:00", "20:00"),
            punch("2025-03-04", "08:00", "16:00"),
        ];

        let summary = calculate_period_pay(
            &create_test_employee(),
            &punches,
            &HolidayCalendar::new(),
            &config,
        )
        .unwrap();

        assert_eq!(summary.days_worked, 2);
        assert_eq!(summary.transport_allowance, dec("100.00"));
    }

    #[test]
    fn test_transport_allowance_once_per_period() {
        let mut config = default_company_configuration("Acme", 10);
        config.transport_allowance.enabled = true;
        config.transport_allowance.amount = dec("300");
        config.transport_allowance.per_working_day = false;

        let punches = vec![
            punch("2025-03-03", "08:00", "16:00"),
            punch("2025-03-04", "08:00", "16:00"),
            punch("2025-03-05", "08:00", "16:00"),
        ];

        let summary = calculate_period_pay(
            &create_test_employee(),
            &punches,
            &HolidayCalendar::new(),
            &config,
        )
        .unwrap();

        assert_eq!(summary.transport_allowance, dec("300.00"));
        assert_eq!(summary.gross_pay, dec("2550.00"));
    }

    #[test]
    fn test_empty_period() {
        let mut config = default_company_configuration("Acme", 10);
        config.transport_allowance.enabled = true;
        config.transport_allowance.amount = dec("300");
        config.transport_allowance.per_working_day = false;

        let summary =
            calculate_period_pay(&create_test_employee(), &[], &HolidayCalendar::new(), &config)
                .unwrap();

        assert_eq!(summary.days_worked, 0);
        assert_eq!(summary.transport_allowance, Decimal::ZERO);
        assert_eq!(summary.gross_pay, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_configuration_fails_before_any_shift() {
        let mut config = default_company_configuration("Acme", 10);
        config.base_salary_structure.working_days_per_month = Decimal::ZERO;

        let result = calculate_period_pay(
            &create_test_employee(),
            &[punch("2025-03-03", "08:00", "16:00")],
            &HolidayCalendar::new(),
            &config,
        );

        match result {
            Err(EngineError::InvalidConfiguration { field, .. }) => {
                assert_eq!(field, "base_salary_structure.working_days_per_month")
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_punch_fails_period() {
        let config = default_company_configuration("Acme", 10);
        let punches = vec![
            punch("2025-03-03", "08:00", "16:00"),
            punch("2025-03-04", "16:00", "08:00"),
        ];

        let result = calculate_period_pay(
            &create_test_employee(),
            &punches,
            &HolidayCalendar::new(),
            &config,
        );

        assert!(matches!(result, Err(EngineError::InvalidShift { .. })));
    }
}
