//! Error types for the dreamspell-calendar crate.

/// Error type for all fallible operations in the dreamspell-calendar crate.
///
/// The conversion functions themselves are total; errors only arise when
/// constructing a [`crate::GregorianDate`] or [`crate::Kin`] from raw
/// components.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year (February has 29 days only in leap years).
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a kin number is outside the valid range 1..=260.
    #[error("invalid kin: {kin} (must be 1..=260)")]
    InvalidKin {
        /// The invalid kin number that was provided.
        kin: u16,
    },

    /// Returned when a year falls outside the representable proleptic
    /// Gregorian range.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The out-of-range year that was provided.
        year: i32,
    },
}
