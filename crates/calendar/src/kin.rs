//! 260-day kin count.

use crate::date::GregorianDate;
use crate::error::CalendarError;
use crate::leap::is_leap_year;

/// Length of the kin cycle in days.
pub const CYCLE_LEN: u16 = 260;

/// Number of solar seals (the 20-day sub-cycle).
pub const SEAL_COUNT: u8 = 20;

/// Number of galactic tones (the 13-day sub-cycle).
pub const TONE_COUNT: u8 = 13;

/// Kin number assigned to the epoch date by convention.
pub const EPOCH_KIN: u16 = 34;

/// Returns the epoch of the kin count: July 26 1987, Kin 34.
///
/// The epoch is a fixed calendar date by convention, not an astronomical
/// computation.
pub fn epoch() -> GregorianDate {
    GregorianDate::new(1987, 7, 26).expect("the kin epoch is a valid date")
}

/// A position in the 260-day kin cycle (1..=260).
///
/// The seal and tone sub-indices are derived from the kin number, so the
/// congruences `seal_index == (kin - 1) % 20` and
/// `tone_index == (kin - 1) % 13` hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kin(u16);

impl Kin {
    /// Creates a new `Kin` from a kin number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidKin`] if `kin` is not in 1..=260.
    pub fn new(kin: u16) -> Result<Self, CalendarError> {
        if !(1..=CYCLE_LEN).contains(&kin) {
            return Err(CalendarError::InvalidKin { kin });
        }
        Ok(Self(kin))
    }

    /// Returns the inner kin number (1..=260).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=259).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the solar seal index (0..=19).
    pub fn seal_index(self) -> u8 {
        ((self.0 - 1) % SEAL_COUNT as u16) as u8
    }

    /// Returns the galactic tone index (0..=12).
    pub fn tone_index(self) -> u8 {
        ((self.0 - 1) % TONE_COUNT as u16) as u8
    }
}

/// Galactic signature of a Gregorian date.
///
/// Exactly one variant applies to every valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KinSignature {
    /// An ordinary day of the 260-day count.
    Regular(Kin),
    /// The Gregorian leap day (February 29), which carries no kin: the
    /// count pauses on it in either temporal direction.
    LeapDay,
}

impl KinSignature {
    /// Returns the kin, if the date has one.
    pub fn kin(self) -> Option<Kin> {
        match self {
            Self::Regular(kin) => Some(kin),
            Self::LeapDay => None,
        }
    }

    /// Returns whether this is the Gregorian leap day.
    pub fn is_leap_day(self) -> bool {
        matches!(self, Self::LeapDay)
    }
}

/// Converts a Gregorian date into its position in the 260-day kin count.
///
/// The count is offset from the epoch (July 26 1987 = Kin 34) by the
/// whole-day gap to `date`, minus every Gregorian leap day crossed while
/// measuring that gap: Feb 29 does not advance the count, so each one
/// strictly between the two dates is un-counted, with the sign of the
/// correction matching the direction of travel. The result is normalized
/// into 1..=260 (plain `%` yields non-positive remainders for dates far
/// enough before the epoch).
///
/// Total over all valid dates; never fails.
pub fn kin_signature(date: GregorianDate) -> KinSignature {
    if date.is_leap_day() {
        return KinSignature::LeapDay;
    }

    let epoch = epoch();
    let raw_diff = epoch.days_until(date);
    let leap_days = leap_days_between(epoch, date);

    let kin_diff = if raw_diff > 0 {
        raw_diff - leap_days
    } else {
        raw_diff + leap_days
    };

    let mut raw = (EPOCH_KIN as i64 + kin_diff) % CYCLE_LEN as i64;
    if raw <= 0 {
        raw += CYCLE_LEN as i64;
    }
    KinSignature::Regular(Kin(raw as u16))
}

/// Counts the Gregorian leap days falling strictly between two dates.
///
/// Exclusive on both ends: a date that is itself Feb 29 never reaches
/// this function, and the endpoints must not double-count.
fn leap_days_between(a: GregorianDate, b: GregorianDate) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut found = 0;
    for year in lo.year()..=hi.year() {
        if !is_leap_year(year) {
            continue;
        }
        let leap_day =
            GregorianDate::new(year, 2, 29).expect("Feb 29 is valid in a leap year");
        if leap_day > lo && leap_day < hi {
            found += 1;
        }
    }
    found
}
