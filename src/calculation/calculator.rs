//! The payroll calculator bound to one company configuration.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{CompanyConfiguration, OvertimeTier};
use crate::error::EngineResult;
use crate::models::{Employee, HolidayCalendar, ShiftPunch};

use super::leave_deduction::unpaid_leave_amount;
use super::period_pay::total_period;
use super::rate_selection::rate_label;
use super::shift_pay::price_shift;
use super::{
    PeriodPaySummary, ShiftPayResult, StatutoryContributions, calculate_statutory_contributions,
};

/// Computes pay against a single, immutable company configuration.
///
/// The calculator holds nothing but a shared reference to its
/// configuration, so it is cheap to clone and safe to share between
/// threads. A configuration change means building a new calculator.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use payroll_engine::config::default_company_configuration;
/// use payroll_engine::models::{Employee, EmploymentType, HolidayCalendar};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calculator = PayrollCalculator::new(default_company_configuration("Acme", 10)).unwrap();
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Anjali Ramdin".to_string(),
///     employment_type: EmploymentType::FullTime,
///     monthly_salary: None,
///     weekday_off: None,
/// };
///
/// // Sunday 08:00-16:00: 7.5 paid hours at OT 2.0
/// let sunday = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
/// let result = calculator
///     .calculate_daily_pay(&employee, sunday, "08:00", "16:00", &HolidayCalendar::new())
///     .unwrap();
///
/// assert_eq!(result.overtime_pay, Decimal::new(127500, 2));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollCalculator {
    config: Arc<CompanyConfiguration>,
}

impl PayrollCalculator {
    /// Creates a calculator after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidConfiguration`] when the
    /// configuration fails validation.
    pub fn new(config: CompanyConfiguration) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::from_trusted(config))
    }

    /// Creates a calculator from a configuration known to be valid.
    pub(crate) fn from_trusted(config: CompanyConfiguration) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration the calculator is bound to.
    pub fn config(&self) -> &CompanyConfiguration {
        &self.config
    }

    /// Calculates the pay for one shift given as `HH:MM` clock times.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidTime`] for malformed
    /// times and [`crate::error::EngineError::InvalidShift`] when clock-out
    /// is not after clock-in.
    pub fn calculate_daily_pay(
        &self,
        employee: &Employee,
        date: NaiveDate,
        clock_in: &str,
        clock_out: &str,
        calendar: &HolidayCalendar,
    ) -> EngineResult<ShiftPayResult> {
        let punch = ShiftPunch::parse(date, clock_in, clock_out)?;
        self.calculate_shift_pay(employee, &punch, calendar)
    }

    /// Calculates the pay for one parsed shift.
    pub fn calculate_shift_pay(
        &self,
        employee: &Employee,
        punch: &ShiftPunch,
        calendar: &HolidayCalendar,
    ) -> EngineResult<ShiftPayResult> {
        price_shift(employee, punch, calendar, &self.config)
    }

    /// Calculates the deduction for unpaid leave. Hours take priority over days.
    pub fn calculate_unpaid_leave_deduction(
        &self,
        employee: &Employee,
        days: Option<Decimal>,
        hours: Option<Decimal>,
    ) -> Decimal {
        unpaid_leave_amount(employee, days, hours, &self.config)
    }

    /// Splits a gross salary into statutory contributions and net salary.
    pub fn calculate_statutory_contributions(&self, gross_salary: Decimal) -> StatutoryContributions {
        calculate_statutory_contributions(gross_salary, &self.config)
    }

    /// Calculates and totals every shift in a pay period.
    pub fn calculate_period_pay(
        &self,
        employee: &Employee,
        punches: &[ShiftPunch],
        calendar: &HolidayCalendar,
    ) -> EngineResult<PeriodPaySummary> {
        total_period(employee, punches, calendar, &self.config)
    }

    /// Payslip labels for every enabled overtime tier, in tier order.
    ///
    /// Each label reads like `"OT 1.5 @ Rs 128.00/hr"`.
    pub fn overtime_rate_labels(&self) -> Vec<(OvertimeTier, String)> {
        let symbol = &self.config.base_salary_structure.currency_symbol;
        OvertimeTier::ALL
            .iter()
            .filter_map(|&tier| {
                self.config
                    .overtime_rules
                    .enabled_rate(tier)
                    .map(|rate| (tier, rate_label(tier.label(), symbol, rate)))
            })
            .collect()
    }
}
