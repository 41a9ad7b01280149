// 📅 Date Entity - Calendar value with weekday and month names
//
// Dates are values: copied freely, never mutated after construction.
// Weekday resolution is proleptic Gregorian, backed by chrono's NaiveDate,
// so ancient and negative years resolve the same way modern ones do.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BankError, Result};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ============================================================================
// DATE ENTITY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateParts", into = "DateParts")]
pub struct Date {
    inner: NaiveDate,
}

/// Wire shape of a Date: `{ "year": 1977, "month": 10, "day": 31 }`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DateParts {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// Build a date, rejecting unsupported years, months outside 1-12 and days the month doesn't have
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(BankError::invalid(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }

        if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
            return Err(BankError::invalid(format!(
                "Year {} is outside the supported range {} to {}",
                year,
                NaiveDate::MIN.year(),
                NaiveDate::MAX.year()
            )));
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(|inner| Date { inner })
            .ok_or_else(|| {
                BankError::invalid(format!(
                    "Day {} is out of range for {} {}",
                    day,
                    MONTH_NAMES[(month - 1) as usize],
                    year
                ))
            })
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn is_leap_year(&self) -> bool {
        self.inner.leap_year()
    }

    /// "Sunday" through "Saturday"
    pub fn day_of_the_week(&self) -> &'static str {
        match self.inner.weekday() {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        }
    }

    /// "January" through "December"
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.inner.month0() as usize]
    }

    /// Long form used in account details
    ///
    /// Example: 1994-05-10 → "Tuesday May 10, 1994"
    pub fn long_format(&self) -> String {
        format!(
            "{} {} {}, {}",
            self.day_of_the_week(),
            self.month_name(),
            self.day(),
            self.year()
        )
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.inner
    }
}

impl From<NaiveDate> for Date {
    fn from(inner: NaiveDate) -> Self {
        Date { inner }
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.inner
    }
}

impl TryFrom<DateParts> for Date {
    type Error = BankError;

    fn try_from(parts: DateParts) -> Result<Self> {
        Date::new(parts.year, parts.month, parts.day)
    }
}

impl From<Date> for DateParts {
    fn from(date: Date) -> Self {
        DateParts {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// ISO 8601 (`1977-10-31`)
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

// ============================================================================
// TESTS
// ============================================================================
