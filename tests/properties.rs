//! Property tests for the payroll engine.

use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    PayrollCalculator, calculate_shift_pay, calculate_statutory_contributions, round_money,
};
use payroll_engine::config::{OvertimeTier, default_company_configuration};
use payroll_engine::models::{Employee, EmploymentType, Holiday, HolidayCalendar, ShiftPunch};
use payroll_engine::templates::{create_company_config_from_template, industry_templates};

fn employee(part_time: bool, salary: Option<u32>) -> Employee {
    Employee {
        id: "emp_prop".to_string(),
        name: "Property Test".to_string(),
        employment_type: if part_time {
            EmploymentType::PartTime
        } else {
            EmploymentType::FullTime
        },
        monthly_salary: salary.map(Decimal::from),
        weekday_off: Some(chrono::Weekday::Wed),
    }
}

fn punch(day_offset: u32, start_minute: u32, length_minutes: u32) -> ShiftPunch {
    // 2025-03-01 is a Saturday; offsets cover every weekday
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap() + Duration::days(day_offset as i64);
    let clock_in = NaiveTime::from_hms_opt(0, 0, 0).unwrap() + Duration::minutes(start_minute as i64);
    let clock_out = clock_in + Duration::minutes(length_minutes as i64);
    ShiftPunch {
        date,
        clock_in,
        clock_out,
    }
}

fn calendar() -> HolidayCalendar {
    HolidayCalendar::from(vec![Holiday {
        date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
        name: "Independence Day".to_string(),
    }])
}

proptest! {
    #[test]
    fn paid_hours_never_exceed_clocked_hours(
        day in 0u32..14,
        start in 0u32..360,
        length in 1u32..1080,
        part_time in any::<bool>(),
    ) {
        let config = default_company_configuration("Acme", 10);
        let result = calculate_shift_pay(
            &employee(part_time, None),
            &punch(day, start, length),
            &calendar(),
            &config,
        ).unwrap();

        prop_assert!(result.regular_hours >= Decimal::ZERO);
        prop_assert!(result.overtime_hours >= Decimal::ZERO);
        prop_assert!(result.regular_hours + result.overtime_hours <= result.total_hours);
    }

    #[test]
    fn total_pay_is_rounded_sum_of_parts(
        day in 0u32..14,
        start in 0u32..360,
        length in 1u32..1080,
        salary in 5000u32..90000,
    ) {
        let config = default_company_configuration("Acme", 10);
        let result = calculate_shift_pay(
            &employee(false, Some(salary)),
            &punch(day, start, length),
            &calendar(),
            &config,
        ).unwrap();

        prop_assert_eq!(
            result.total_pay,
            round_money(result.regular_pay + result.overtime_pay + result.meal_allowance)
        );
    }

    #[test]
    fn all_tiers_disabled_pays_flat_rate(
        day in 0u32..14,
        start in 0u32..360,
        length in 1u32..1080,
        part_time in any::<bool>(),
    ) {
        let mut config = default_company_configuration("Acme", 10);
        for tier in OvertimeTier::ALL {
            config.overtime_rules.tier_mut(tier).enabled = false;
        }
        let result = calculate_shift_pay(
            &employee(part_time, Some(20800)),
            &punch(day, start, length),
            &calendar(),
            &config,
        ).unwrap();

        prop_assert_eq!(result.overtime_pay, Decimal::ZERO);
        prop_assert_eq!(result.overtime_hours, Decimal::ZERO);
        // 20800 / 26 / 8 = 100 per hour
        prop_assert_eq!(result.regular_pay, round_money(result.regular_hours * Decimal::ONE_HUNDRED));
    }

    #[test]
    fn recalculation_is_idempotent(
        day in 0u32..14,
        start in 0u32..360,
        length in 1u32..1080,
    ) {
        let calculator = PayrollCalculator::new(default_company_configuration("Acme", 10)).unwrap();
        let shift = punch(day, start, length);
        let employee = employee(true, None);

        let first = calculator.calculate_shift_pay(&employee, &shift, &calendar()).unwrap();
        let second = calculator.calculate_shift_pay(&employee, &shift, &calendar()).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn contributions_noop_without_compliance(cents in 0i64..100_000_000) {
        let config = default_company_configuration("Acme", 10);
        let gross = Decimal::new(cents, 2);

        let result = calculate_statutory_contributions(gross, &config);

        prop_assert_eq!(result.net_salary, gross);
        prop_assert_eq!(result.employee.total, Decimal::ZERO);
        prop_assert_eq!(result.employer.total, Decimal::ZERO);
    }

    #[test]
    fn template_merge_preserves_identity(
        name in "[A-Za-z][A-Za-z ]{0,30}",
        count in 0u32..100_000,
        index in 0usize..6,
    ) {
        let templates = industry_templates().unwrap();
        let template = &templates[index % templates.len()];

        let config = create_company_config_from_template(&name, count, template).unwrap();

        prop_assert_eq!(config.company_name, name);
        prop_assert_eq!(config.employee_count, count);
        prop_assert!(!config.id.is_nil());
    }
}
