//! Shift punch model.
//!
//! This module defines [`ShiftPunch`], one clock-in/clock-out pair on a
//! work date, as captured by the attendance layer.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Parses a clock time in `HH:MM` form.
///
/// # Example
///
/// ```
/// use payroll_engine::models::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("08:30").unwrap(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
/// assert!(parse_clock_time("8.30am").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| EngineError::InvalidTime {
        value: value.to_string(),
    })
}

/// One attendance interval on a work date.
///
/// Both times are anchored to `date`; a shift does not cross midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPunch {
    /// The work date.
    pub date: NaiveDate,
    /// Clock-in time of day.
    pub clock_in: NaiveTime,
    /// Clock-out time of day.
    pub clock_out: NaiveTime,
}

impl ShiftPunch {
    /// Builds a punch from `HH:MM` clock strings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTime`] if either time is malformed.
    pub fn parse(date: NaiveDate, clock_in: &str, clock_out: &str) -> EngineResult<Self> {
        Ok(Self {
            date,
            clock_in: parse_clock_time(clock_in)?,
            clock_out: parse_clock_time(clock_out)?,
        })
    }

    /// Returns the elapsed hours between clock-in and clock-out.
    ///
    /// Seconds count toward the total. The value is negative when
    /// clock-out precedes clock-in.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::ShiftPunch;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let punch = ShiftPunch::parse(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), "08:00", "16:30").unwrap();
    /// assert_eq!(punch.total_hours(), Decimal::new(85, 1));
    /// ```
    pub fn total_hours(&self) -> Decimal {
        let start = self.date.and_time(self.clock_in);
        let end = self.date.and_time(self.clock_out);
        let seconds = (end - start).num_seconds();
        Decimal::new(seconds, 0) / Decimal::new(3600, 0)
    }

    /// Returns the day of the week of the work date.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}
