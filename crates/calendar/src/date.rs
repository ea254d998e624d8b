//! Proleptic Gregorian date with date-only semantics.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::leap::is_leap_year;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A date in the proleptic Gregorian calendar.
///
/// Carries no time-of-day component at all, so the midnight/timezone
/// drift hazard of timestamp-derived dates cannot arise: callers resolve
/// any timestamp to a calendar date before constructing one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is invalid for the
    /// given year (February 29 exists only in leap years), or if the year
    /// is outside the representable proleptic Gregorian range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        if NaiveDate::from_ymd_opt(year, month as u32, day as u32).is_none() {
            return Err(CalendarError::YearOutOfRange { year });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns whether this date is the Gregorian leap day (February 29).
    pub fn is_leap_day(self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// Returns the signed number of whole days from `self` to `other`.
    ///
    /// Positive when `other` is after `self`, negative when before. The
    /// difference is an exact integer because both operands are date-only.
    pub fn days_until(self, other: Self) -> i64 {
        other
            .to_naive()
            .signed_duration_since(self.to_naive())
            .num_days()
    }

    /// Returns the next calendar date.
    pub fn next(self) -> Self {
        // Safety: the successor of any representable date short of
        // NaiveDate::MAX is itself a representable date.
        Self::from(
            self.to_naive()
                .succ_opt()
                .expect("date successor within the representable range"),
        )
    }

    fn to_naive(self) -> NaiveDate {
        // Safety: GregorianDate always holds a valid in-range date,
        // guaranteed by the constructor.
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
            .expect("GregorianDate always holds a valid date")
    }
}

impl From<GregorianDate> for NaiveDate {
    fn from(date: GregorianDate) -> Self {
        date.to_naive()
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Returns the number of days in `month` of `year` (leap-aware).
///
/// `month` must be in 1..=12.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}
