//! Gregorian leap-year rule.

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
///
/// A year is a leap year iff it is divisible by 4 and not by 100, or
/// divisible by 400. Total over all `i32` years, including years before
/// the common era.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
