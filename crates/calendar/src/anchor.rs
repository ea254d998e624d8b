//! Anchor-year computation for the 13-Moon cycle.

use crate::date::GregorianDate;

/// Month in which every 13-Moon year begins (July).
pub const CYCLE_START_MONTH: u8 = 7;

/// Day of month on which every 13-Moon year begins.
pub const CYCLE_START_DAY: u8 = 26;

/// Returns the Gregorian year whose July 26 begins the 13-Moon year
/// containing `date`.
///
/// Dates on or after July 26 belong to the cycle anchored in their own
/// Gregorian year; earlier dates belong to the cycle anchored in the
/// previous one.
pub fn anchor_year(date: GregorianDate) -> i32 {
    if date.month_day() >= (CYCLE_START_MONTH, CYCLE_START_DAY) {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Returns the Gregorian date on which the cycle anchored in `year` begins.
pub fn cycle_start(year: i32) -> GregorianDate {
    // Safety: July 26 is a valid date in every representable year.
    GregorianDate::new(year, CYCLE_START_MONTH, CYCLE_START_DAY)
        .expect("July 26 is valid in every year")
}
