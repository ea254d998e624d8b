//! # dreamspell-tables
//!
//! Display lookup tables for the 13-Moon Dreamspell calendar.
//!
//! These tables belong to the presentation layer: the conversion core in
//! `dreamspell-calendar` returns only numeric indices, and every name,
//! color, and label lives here as a literal. None of the tables are
//! generated by formula; in particular the 52 portal kins are a fixed
//! published list reproduced verbatim.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `moons` | 13 moon names and totems |
//! | `plasma` | 7 plasma day names, qualities, and affirmation suffixes |
//! | `seals` | 20 solar seals, 13 galactic tones, seal colors |
//! | `portal` | The 52 galactic activation portal kins |

mod moons;
mod plasma;
mod portal;
mod seals;

pub use moons::{MOON_NAMES, MOON_TOTEMS, moon_name, moon_totem};
pub use plasma::{
    DAY_AFFIRMATIONS, DAY_NAMES, DAY_QUALITIES, day_affirmation, day_name, day_quality,
};
pub use portal::{PORTAL_KINS, is_portal};
pub use seals::{SEAL_NAMES, SealColor, TONE_NAMES, seal_color, seal_name, tone_name};
