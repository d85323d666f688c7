//! Public holiday models.
//!
//! This module contains the [`Holiday`] record supplied by callers and the
//! [`HolidayCalendar`] lookup the calculator classifies work dates against.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a public holiday.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
///     name: "Independence Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// Holidays keyed by date.
///
/// When two records share a date the later one wins.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Holiday, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let calendar = HolidayCalendar::from(vec![Holiday {
///     date: new_year,
///     name: "New Year's Day".to_string(),
/// }]);
///
/// assert!(calendar.is_holiday(new_year));
/// assert_eq!(calendar.get(new_year).unwrap().name, "New Year's Day");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: HashMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday, replacing any holiday already on that date.
    pub fn insert(&mut self, holiday: Holiday) {
        self.holidays.insert(holiday.date, holiday);
    }

    /// Returns true if `date` is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the holiday on `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// Returns the number of holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar has no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl From<Vec<Holiday>> for HolidayCalendar {
    fn from(holidays: Vec<Holiday>) -> Self {
        holidays.into_iter().collect()
    }
}

impl From<&[Holiday]> for HolidayCalendar {
    fn from(holidays: &[Holiday]) -> Self {
        holidays.iter().cloned().collect()
    }
}

impl FromIterator<Holiday> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        let mut calendar = Self::new();
        for holiday in iter {
            calendar.insert(holiday);
        }
        calendar
    }
}
