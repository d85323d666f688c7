//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentType enum
//! for representing workers whose shifts are paid by the engine.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employment.
    FullTime,
    /// Part-time employment with a designated weekday off.
    PartTime,
}

/// Represents an employee whose attendance is being paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// Optional override for the company's default monthly salary.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// The weekday a part-time employee is normally off.
    #[serde(default)]
    pub weekday_off: Option<Weekday>,
}

impl Employee {
    /// Returns true if the employee works part time.
    pub fn is_part_time(&self) -> bool {
        self.employment_type == EmploymentType::PartTime
    }

    /// Returns the employee's monthly salary, or `default` when no override is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmploymentType};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Anjali Ramdin".to_string(),
    ///     employment_type: EmploymentType::FullTime,
    ///     monthly_salary: None,
    ///     weekday_off: None,
    /// };
    /// assert_eq!(employee.monthly_salary_or(Decimal::new(17710, 0)), Decimal::new(17710, 0));
    /// ```
    pub fn monthly_salary_or(&self, default: Decimal) -> Decimal {
        self.monthly_salary.unwrap_or(default)
    }

    /// Returns true if `weekday` is this part-time employee's day off.
    ///
    /// Full-time employees never have a weekday off.
    pub fn is_weekday_off(&self, weekday: Weekday) -> bool {
        self.is_part_time() && self.weekday_off == Some(weekday)
    }
}
