//! Free-function wrappers over the process-wide calculator.
//!
//! These keep the signatures older call sites were written against. Each
//! one delegates to [`registry::global()`](crate::registry::global), so
//! results follow whichever configuration was last initialized there (or
//! the fallback configuration if none was).

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::{ShiftPayResult, StatutoryContributions};
use crate::config::OvertimeTier;
use crate::error::EngineResult;
use crate::models::{Employee, Holiday, HolidayCalendar};
use crate::registry;

/// Calculates one shift's pay against the active configuration.
///
/// # Errors
///
/// See [`PayrollCalculator::calculate_daily_pay`](crate::calculation::PayrollCalculator::calculate_daily_pay).
pub fn calculate_daily_pay(
    employee: &Employee,
    date: NaiveDate,
    clock_in: &str,
    clock_out: &str,
    holidays: &[Holiday],
) -> EngineResult<ShiftPayResult> {
    let calendar = HolidayCalendar::from(holidays);
    registry::global()
        .current()
        .calculate_daily_pay(employee, date, clock_in, clock_out, &calendar)
}

/// Calculates an unpaid leave deduction against the active configuration.
pub fn calculate_unpaid_leave_deduction(
    employee: &Employee,
    days: Option<Decimal>,
    hours: Option<Decimal>,
) -> Decimal {
    registry::global()
        .current()
        .calculate_unpaid_leave_deduction(employee, days, hours)
}

/// Splits a gross salary against the active configuration.
pub fn calculate_statutory_contributions(gross_salary: Decimal) -> StatutoryContributions {
    registry::global()
        .current()
        .calculate_statutory_contributions(gross_salary)
}

/// Payslip labels for the active configuration's enabled overtime tiers.
pub fn overtime_rate_labels() -> Vec<(OvertimeTier, String)> {
    registry::global().current().overtime_rate_labels()
}
