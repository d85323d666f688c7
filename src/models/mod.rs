//! Core data models for the payroll engine.
//!
//! This module contains the domain models supplied by callers and the
//! audit records returned with every calculation.

mod audit;
mod employee;
mod holiday;
mod shift;

pub use audit::AuditStep;
pub use employee::{Employee, EmploymentType};
pub use holiday::{Holiday, HolidayCalendar};
pub use shift::{ShiftPunch, parse_clock_time};
