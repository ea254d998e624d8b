//! # dreamspell-calendar
//!
//! Pure date arithmetic for the 13-Moon calendar and the 260-day kin count.
//!
//! Two independent, stateless conversions map a proleptic Gregorian date
//! onto the Dreamspell cycles:
//!
//! ```text
//! GregorianDate ──moon_position()──▶ MoonPosition   (13 moons x 28 days)
//! GregorianDate ──kin_signature()──▶ KinSignature   (260-day kin cycle)
//! ```
//!
//! Both treat the calendar's irregular days as first-class variants: the
//! annual Day Out of Time (July 25 of a regular cycle) and the Gregorian
//! leap day, which is outside both counts entirely.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dreamspell_calendar::{GregorianDate, kin_signature, moon_position};
//!
//! let date = GregorianDate::new(2024, 7, 26)?;
//!
//! // Moon 0 (Magnetic), day 1, first day of the 2024 cycle.
//! let position = moon_position(date);
//!
//! // Kin 19: seal index 18 (Storm), tone index 5 (Rhythmic).
//! let signature = kin_signature(date);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Proleptic Gregorian date value object |
//! | `leap` | Gregorian leap-year rule |
//! | `anchor` | Anchor year of the July-26 cycle |
//! | `moon` | 13-Moon position conversion |
//! | `kin` | 260-day kin count conversion |
//! | `error` | Error types |

mod anchor;
mod date;
mod error;
mod kin;
mod leap;
mod moon;

pub use anchor::{CYCLE_START_DAY, CYCLE_START_MONTH, anchor_year, cycle_start};
pub use date::GregorianDate;
pub use error::CalendarError;
pub use kin::{
    CYCLE_LEN, EPOCH_KIN, Kin, KinSignature, SEAL_COUNT, TONE_COUNT, epoch, kin_signature,
};
pub use leap::is_leap_year;
pub use moon::{DAYS_PER_MOON, DAY_OUT_OF_TIME_OFFSET, MOONS_PER_YEAR, MoonPosition, moon_position};
