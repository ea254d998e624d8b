//! 13-Moon position of a Gregorian date.

use crate::anchor::{anchor_year, cycle_start};
use crate::date::GregorianDate;
use crate::leap::is_leap_year;

/// Number of moons in a 13-Moon year.
pub const MOONS_PER_YEAR: u8 = 13;

/// Number of days in each moon.
pub const DAYS_PER_MOON: u8 = 28;

/// Day offset of the Day Out of Time: the 365th day of a 13 x 28 year.
pub const DAY_OUT_OF_TIME_OFFSET: i64 = 364;

/// Position of a date within the 13-Moon year.
///
/// Exactly one variant applies to every valid Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPosition {
    /// An ordinary day of the 13 x 28 structure.
    Regular {
        /// Moon index, 0..=12 (0 = Magnetic).
        moon: u8,
        /// Day within the moon, 1..=28.
        day_of_moon: u8,
        /// Day of the 7-day week, 0..=6 (0 = Dali). Always equal to
        /// `(day_of_moon - 1) % 7`.
        day_of_week: u8,
        /// Gregorian year in which the containing cycle began.
        anchor_year: i32,
    },
    /// The 365th day of the cycle (July 25 of a regular year), outside
    /// the moon/week structure.
    DayOutOfTime {
        /// Gregorian year in which the containing cycle began.
        anchor_year: i32,
    },
    /// The Gregorian leap day (February 29), outside the 13-Moon count
    /// entirely.
    LeapDay,
}

impl MoonPosition {
    /// Returns the anchor year of the containing cycle, if the date has one.
    ///
    /// The Gregorian leap day carries no cycle position.
    pub fn anchor_year(self) -> Option<i32> {
        match self {
            Self::Regular { anchor_year, .. } | Self::DayOutOfTime { anchor_year } => {
                Some(anchor_year)
            }
            Self::LeapDay => None,
        }
    }

    /// Returns whether this is the Day Out of Time.
    pub fn is_day_out_of_time(self) -> bool {
        matches!(self, Self::DayOutOfTime { .. })
    }

    /// Returns whether this is the Gregorian leap day.
    pub fn is_leap_day(self) -> bool {
        matches!(self, Self::LeapDay)
    }
}

/// Converts a Gregorian date into its 13-Moon position.
///
/// The leap day short-circuits before any offset arithmetic. For every
/// other date the offset from the cycle start (July 26 of the anchor
/// year) is counted in whole days, and then reduced by one if the cycle
/// has already passed through an inserted Gregorian leap day: Feb 29 does
/// not advance the moon count, so every later day of the same cycle would
/// otherwise sit one position too far.
///
/// Total over all valid dates; never fails.
pub fn moon_position(date: GregorianDate) -> MoonPosition {
    if date.is_leap_day() {
        return MoonPosition::LeapDay;
    }

    let anchor = anchor_year(date);
    let mut offset = cycle_start(anchor).days_until(date);

    // A cycle anchored on July 26 of year Y can only contain the leap day
    // of year Y + 1, never year Y.
    if is_leap_year(anchor + 1) {
        let leap_day = GregorianDate::new(anchor + 1, 2, 29)
            .expect("Feb 29 is valid in a leap year");
        if date > leap_day {
            offset -= 1;
        }
    }

    if offset == DAY_OUT_OF_TIME_OFFSET {
        return MoonPosition::DayOutOfTime {
            anchor_year: anchor,
        };
    }

    let day_of_moon = (offset % DAYS_PER_MOON as i64) as u8 + 1;
    MoonPosition::Regular {
        moon: (offset / DAYS_PER_MOON as i64) as u8,
        day_of_moon,
        day_of_week: (day_of_moon - 1) % 7,
        anchor_year: anchor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn cycle_start_is_moon_zero_day_one() {
        assert_eq!(
            moon_position(date(2024, 7, 26)),
            MoonPosition::Regular {
                moon: 0,
                day_of_moon: 1,
                day_of_week: 0,
                anchor_year: 2024,
            }
        );
    }

    #[test]
    fn second_moon_starts_28_days_in() {
        assert_eq!(
            moon_position(date(2024, 8, 23)),
            MoonPosition::Regular {
                moon: 1,
                day_of_moon: 1,
                day_of_week: 0,
                anchor_year: 2024,
            }
        );
    }

    #[test]
    fn common_year_has_no_adjustment() {
        // 2025 is not a leap year, so the 2024 cycle runs unadjusted.
        assert_eq!(
            moon_position(date(2025, 2, 28)),
            MoonPosition::Regular {
                moon: 7,
                day_of_moon: 22,
                day_of_week: 0,
                anchor_year: 2024,
            }
        );
    }

    #[test]
    fn leap_day_is_exempt() {
        assert_eq!(moon_position(date(2024, 2, 29)), MoonPosition::LeapDay);
        assert_eq!(moon_position(date(2000, 2, 29)), MoonPosition::LeapDay);
        assert!(moon_position(date(1988, 2, 29)).is_leap_day());
    }

    #[test]
    fn count_resumes_after_leap_day() {
        // Feb 28 and Mar 1 of a leap year are consecutive moon days.
        assert_eq!(
            moon_position(date(2024, 2, 28)),
            MoonPosition::Regular {
                moon: 7,
                day_of_moon: 22,
                day_of_week: 0,
                anchor_year: 2023,
            }
        );
        assert_eq!(
            moon_position(date(2024, 3, 1)),
            MoonPosition::Regular {
                moon: 7,
                day_of_moon: 23,
                day_of_week: 1,
                anchor_year: 2023,
            }
        );
    }

    #[test]
    fn day_out_of_time_common_cycle() {
        assert_eq!(
            moon_position(date(2025, 7, 25)),
            MoonPosition::DayOutOfTime { anchor_year: 2024 }
        );
    }

    #[test]
    fn day_out_of_time_leap_cycle() {
        // The 2023 cycle passed through Feb 29 2024; July 25 2024 is still
        // day 364 after the adjustment.
        assert_eq!(
            moon_position(date(2024, 7, 25)),
            MoonPosition::DayOutOfTime { anchor_year: 2023 }
        );
    }

    #[test]
    fn century_boundary_2100_is_not_leap() {
        // The 2099 cycle contains no Feb 29 (2100 is not a leap year), so
        // no adjustment applies anywhere in it.
        assert_eq!(
            moon_position(date(2100, 7, 25)),
            MoonPosition::DayOutOfTime { anchor_year: 2099 }
        );
        // March 1 2100 sits at the same raw offset a leap cycle only
        // reaches after its adjustment.
        assert_eq!(
            moon_position(date(2100, 3, 1)),
            MoonPosition::Regular {
                moon: 7,
                day_of_moon: 23,
                day_of_week: 1,
                anchor_year: 2099,
            }
        );
    }

    #[test]
    fn anchor_year_accessor() {
        assert_eq!(moon_position(date(2024, 7, 26)).anchor_year(), Some(2024));
        assert_eq!(moon_position(date(2025, 7, 25)).anchor_year(), Some(2024));
        assert_eq!(moon_position(date(2024, 2, 29)).anchor_year(), None);
    }

    #[test]
    fn regular_invariants_over_a_full_cycle() {
        let mut current = date(2023, 7, 26);
        for _ in 0..366 {
            match moon_position(current) {
                MoonPosition::Regular {
                    moon,
                    day_of_moon,
                    day_of_week,
                    anchor_year,
                } => {
                    assert!(moon <= 12, "moon {moon} out of range at {current}");
                    assert!(
                        (1..=28).contains(&day_of_moon),
                        "day_of_moon {day_of_moon} out of range at {current}"
                    );
                    assert_eq!(day_of_week, (day_of_moon - 1) % 7);
                    assert_eq!(anchor_year, 2023);
                }
                MoonPosition::DayOutOfTime { anchor_year } => {
                    assert_eq!(anchor_year, 2023);
                    assert_eq!(current, date(2024, 7, 25));
                }
                MoonPosition::LeapDay => {
                    assert_eq!(current, date(2024, 2, 29));
                }
            }
            current = current.next();
        }
        // 366 steps from July 26 2023 land on the next cycle start.
        assert_eq!(current, date(2024, 7, 26));
    }

    #[test]
    fn monotonic_within_a_cycle() {
        let mut current = date(2024, 7, 26);
        let mut prev_pair = (0u8, 0u8);
        for _ in 0..364 {
            if let MoonPosition::Regular {
                moon, day_of_moon, ..
            } = moon_position(current)
            {
                assert!(
                    (moon, day_of_moon) > prev_pair,
                    "position went backwards at {current}"
                );
                prev_pair = (moon, day_of_moon);
            }
            current = current.next();
        }
    }
}
