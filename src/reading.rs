//! Composes core conversion output and lookup tables into display text.
//!
//! All name, color, and label lookups happen here; the conversion core
//! only ever supplies numeric indices.

use dreamspell_calendar::{Kin, KinSignature, MoonPosition};
use dreamspell_tables as tables;

/// Formats the 13-Moon position of a date as a single line.
pub fn moon_line(position: MoonPosition) -> String {
    match position {
        MoonPosition::Regular {
            moon,
            day_of_moon,
            day_of_week,
            ..
        } => format!(
            "Moon {} ({} {} Moon), day {} of 28, {} ({})",
            moon + 1,
            tables::moon_name(moon),
            tables::moon_totem(moon),
            day_of_moon,
            tables::day_name(day_of_week),
            tables::day_quality(day_of_week),
        ),
        MoonPosition::DayOutOfTime { anchor_year } => {
            format!("Day Out of Time, closing the {anchor_year} cycle")
        }
        MoonPosition::LeapDay => "Hunab Ku 0.0 (Gregorian leap day, outside the count)".to_string(),
    }
}

/// Formats the galactic signature of a date as a single line.
pub fn kin_line(signature: KinSignature) -> String {
    match signature {
        KinSignature::Regular(kin) => {
            let mut line = format!("Kin {}: {}", kin.get(), full_title(kin));
            if tables::is_portal(kin.get()) {
                line.push_str(" [Galactic Activation Portal]");
            }
            line
        }
        KinSignature::LeapDay => "No kin: the 260-day count pauses on February 29".to_string(),
    }
}

/// Returns the full title of a kin: "{Color} {Tone} {Seal}".
pub fn full_title(kin: Kin) -> String {
    let seal = kin.seal_index();
    format!(
        "{} {} {}",
        tables::seal_color(seal),
        tables::tone_name(kin.tone_index()),
        tables::seal_name(seal),
    )
}

/// Returns the affirmation for a date's moon position.
pub fn affirmation(position: MoonPosition) -> String {
    match position {
        MoonPosition::Regular {
            moon, day_of_week, ..
        } => format!(
            "I align with the {} Moon to {}.",
            tables::moon_name(moon),
            tables::day_affirmation(day_of_week),
        ),
        MoonPosition::DayOutOfTime { .. } => {
            "I am one with the eternal now. Time is Art.".to_string()
        }
        MoonPosition::LeapDay => "I exist in the pause between breaths.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreamspell_calendar::{GregorianDate, kin_signature, moon_position};

    fn date(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn moon_line_regular() {
        let line = moon_line(moon_position(date(2024, 7, 26)));
        assert_eq!(line, "Moon 1 (Magnetic Bat Moon), day 1 of 28, Dali (Target)");
    }

    #[test]
    fn moon_line_day_out_of_time() {
        let line = moon_line(moon_position(date(2025, 7, 25)));
        assert_eq!(line, "Day Out of Time, closing the 2024 cycle");
    }

    #[test]
    fn moon_line_leap_day() {
        let line = moon_line(moon_position(date(2024, 2, 29)));
        assert!(line.contains("Hunab Ku"));
    }

    #[test]
    fn epoch_title_is_white_galactic_wizard() {
        let kin = Kin::new(34).unwrap();
        assert_eq!(full_title(kin), "White Galactic Wizard");
    }

    #[test]
    fn kin_line_regular() {
        let line = kin_line(kin_signature(date(2024, 7, 26)));
        assert_eq!(line, "Kin 19: Blue Rhythmic Storm");
    }

    #[test]
    fn kin_line_portal_day() {
        let line = kin_line(kin_signature(date(2000, 1, 1)));
        assert_eq!(
            line,
            "Kin 153: Red Planetary Skywalker [Galactic Activation Portal]"
        );
    }

    #[test]
    fn kin_line_leap_day() {
        let line = kin_line(kin_signature(date(2024, 2, 29)));
        assert!(line.starts_with("No kin"));
    }

    #[test]
    fn affirmation_lines() {
        assert_eq!(
            affirmation(moon_position(date(2024, 7, 26))),
            "I align with the Magnetic Moon to target my highest purpose."
        );
        assert_eq!(
            affirmation(moon_position(date(2025, 7, 25))),
            "I am one with the eternal now. Time is Art."
        );
        assert_eq!(
            affirmation(moon_position(date(2024, 2, 29))),
            "I exist in the pause between breaths."
        );
    }
}
