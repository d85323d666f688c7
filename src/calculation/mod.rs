//! Calculation logic for the payroll engine.
//!
//! This module contains the rules that turn a shift into pay: day
//! classification, base rate derivation, meal allowance, unpaid break
//! deduction, overtime rate selection and the Mauritius overtime cap. It
//! also holds the unpaid leave deduction, the statutory contribution split,
//! the pay period summary and the [`PayrollCalculator`] that binds them all
//! to one company configuration.

mod base_rate;
mod break_deduction;
mod calculator;
mod day_detection;
mod leave_deduction;
mod meal_allowance;
mod overtime_cap;
mod period_pay;
mod rate_selection;
mod shift_pay;
mod statutory;

pub(crate) use base_rate::{BaseRateResult, derive_base_rate};
pub use base_rate::round_money;
pub use break_deduction::{BreakDeduction, calculate_break_deduction};
pub use calculator::PayrollCalculator;
pub use day_detection::{DayClassification, DayType, classify_day};
pub use leave_deduction::calculate_unpaid_leave_deduction;
pub use meal_allowance::{MealAllowanceResult, calculate_meal_allowance};
pub use overtime_cap::{
    COMPLIANCE_DAYS_PER_WEEK, OvertimeCapResult, apply_overtime_cap, daily_overtime_cap,
};
pub use period_pay::{PeriodPaySummary, calculate_period_pay};
pub use rate_selection::{RateSelection, TierHours, select_rates};
pub use shift_pay::{ShiftPayResult, calculate_shift_pay};
pub use statutory::{
    EmployeeContributions, EmployerContributions, StatutoryContributions,
    calculate_statutory_contributions,
};
