//! Day classification.
//!
//! This module decides which pay rules a work date falls under: a public
//! holiday, a part-time employee's weekday off, a Sunday, or a regular day.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, Employee, HolidayCalendar};

/// Represents the type of day for rate selection.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::DayType;
///
/// assert!(DayType::Sunday.is_premium());
/// assert!(!DayType::Regular.is_premium());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// A regular working day.
    Regular,
    /// A Sunday that is not a public holiday.
    Sunday,
    /// A part-time employee's designated day off that is not a public holiday.
    WeekdayOff,
    /// A date present in the holiday calendar.
    PublicHoliday,
}

impl DayType {
    /// Returns true for days paid under the premium (overtime tier) rules.
    pub fn is_premium(&self) -> bool {
        !matches!(self, DayType::Regular)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Regular => write!(f, "Regular"),
            DayType::Sunday => write!(f, "Sunday"),
            DayType::WeekdayOff => write!(f, "Weekday Off"),
            DayType::PublicHoliday => write!(f, "Public Holiday"),
        }
    }
}

/// The result of classifying a work date.
#[derive(Debug, Clone)]
pub struct DayClassification {
    /// The classified day type.
    pub day_type: DayType,
    /// The holiday name when the date is a public holiday.
    pub holiday_name: Option<String>,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Classifies a work date for an employee.
///
/// Precedence is public holiday, then the employee's weekday off, then
/// Sunday. Employees without a `weekday_off` never classify as
/// [`DayType::WeekdayOff`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{classify_day, DayType};
/// use payroll_engine::models::{Employee, EmploymentType, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Anjali Ramdin".to_string(),
///     employment_type: EmploymentType::FullTime,
///     monthly_salary: None,
///     weekday_off: None,
/// };
///
/// // 2025-03-09 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
/// let result = classify_day(&employee, sunday, &HolidayCalendar::new(), 1);
/// assert_eq!(result.day_type, DayType::Sunday);
/// ```
pub fn classify_day(
    employee: &Employee,
    date: NaiveDate,
    calendar: &HolidayCalendar,
    step_number: u32,
) -> DayClassification {
    let weekday = date.weekday();
    let holiday = calendar.get(date);

    let (day_type, reasoning) = if let Some(holiday) = holiday {
        (
            DayType::PublicHoliday,
            format!("{} is a public holiday ({})", date, holiday.name),
        )
    } else if employee.is_weekday_off(weekday) {
        (
            DayType::WeekdayOff,
            format!("{} is the part-time weekday off ({})", date, weekday),
        )
    } else if weekday == Weekday::Sun {
        (DayType::Sunday, format!("{} is a Sunday", date))
    } else {
        (
            DayType::Regular,
            format!("{} is a regular working day ({})", date, weekday),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "day_classification".to_string(),
        rule_name: "Day Classification".to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
            "weekday": weekday.to_string(),
            "weekday_off": employee.weekday_off.map(|d| d.to_string())
        }),
        output: serde_json::json!({
            "day_type": day_type,
            "holiday": holiday.map(|h| h.name.clone())
        }),
        reasoning,
    };

    DayClassification {
        day_type,
        holiday_name: holiday.map(|h| h.name.clone()),
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmploymentType, Holiday};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_employee(
        employment_type: EmploymentType,
        weekday_off: Option<Weekday>,
    ) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Anjali Ramdin".to_string(),
            employment_type,
            monthly_salary: None,
            weekday_off,
        }
    }

    fn calendar_with(date_str: &str, name: &str) -> HolidayCalendar {
        HolidayCalendar::from(vec![Holiday {
            date: make_date(date_str),
            name: name.to_string(),
        }])
    }

    #[test]
    fn test_monday_is_regular() {
        // 2025-03-03 is a Monday
        let employee = create_test_employee(EmploymentType::FullTime, None);
        let result = classify_day(&employee, make_date("2025-03-03"), &HolidayCalendar::new(), 1);

        assert_eq!(result.day_type, DayType::Regular);
        assert!(result.holiday_name.is_none());
    }

    #[test]
    fn test_saturday_is_regular() {
        // 2025-03-08 is a Saturday
        let employee = create_test_employee(EmploymentType::FullTime, None);
        let result = classify_day(&employee, make_date("2025-03-08"), &HolidayCalendar::new(), 1);

        assert_eq!(result.day_type, DayType::Regular);
    }

    #[test]
    fn test_sunday_is_sunday() {
        let employee = create_test_employee(EmploymentType::FullTime, None);
        let result = classify_day(&employee, make_date("2025-03-09"), &HolidayCalendar::new(), 1);

        assert_eq!(result.day_type, DayType::Sunday);
        assert_eq!(result.audit_step.rule_id, "day_classification");
    }

    #[test]
    fn test_holiday_on_weekday() {
        // 2025-03-12 (Wednesday) is Independence Day in Mauritius
        let employee = create_test_employee(EmploymentType::FullTime, None);
        let calendar = calendar_with("2025-03-12", "Independence Day");
        let result = classify_day(&employee, make_date("2025-03-12"), &calendar, 1);

        assert_eq!(result.day_type, DayType::PublicHoliday);
        assert_eq!(result.holiday_name.as_deref(), Some("Independence Day"));
        assert!(result.audit_step.reasoning.contains("Independence Day"));
    }

    #[test]
    fn test_holiday_on_sunday_is_holiday() {
        let employee = create_test_employee(EmploymentType::FullTime, None);
        let calendar = calendar_with("2025-03-09", "Festival");
        let result = classify_day(&employee, make_date("2025-03-09"), &calendar, 1);

        assert_eq!(result.day_type, DayType::PublicHoliday);
    }

    #[test]
    fn test_part_time_weekday_off() {
        // 2025-03-05 is a Wednesday
        let employee = create_test_employee(EmploymentType::PartTime, Some(Weekday::Wed));
        let result = classify_day(&employee, make_date("2025-03-05"), &HolidayCalendar::new(), 1);

        assert_eq!(result.day_type, DayType::WeekdayOff);
    }

    #[test]
    fn test_holiday_beats_weekday_off() {
        let employee = create_test_employee(EmploymentType::PartTime, Some(Weekday::Wed));
        let calendar = calendar_with("2025-03-12", "Independence Day");
        let result = classify_day(&employee, make_date("2025-03-12"), &calendar, 1);

        assert_eq!(result.day_type, DayType::PublicHoliday);
    }

    #[test]
    fn test_full_time_weekday_off_is_ignored() {
        let employee = create_test_employee(EmploymentType::FullTime, Some(Weekday::Wed));
        let result = classify_day(&employee, make_date("2025-03-05"), &HolidayCalendar::new(), 1);

        assert_eq!(result.day_type, DayType::Regular);
    }

    #[test]
    fn test_day_type_serialization() {
        assert_eq!(
            serde_json::to_string(&DayType::PublicHoliday).unwrap(),
            "\"public_holiday\""
        );
        assert_eq!(
            serde_json::to_string(&DayType::WeekdayOff).unwrap(),
            "\"weekday_off\""
        );
    }
}
