//! The 7 radial plasma days of the 28-day moon.

/// Names of the 7 plasma days, indexed by day-of-week (0 = Dali).
pub const DAY_NAMES: [&str; 7] = ["Dali", "Seli", "Gamma", "Kali", "Alpha", "Limi", "Silio"];

/// Quality of each plasma day.
pub const DAY_QUALITIES: [&str; 7] = [
    "Target",
    "Flow",
    "Pacify",
    "Establish",
    "Release",
    "Purify",
    "Discharge",
];

/// Affirmation suffix for each plasma day, completing
/// "I align with the {moon} Moon to {suffix}.".
pub const DAY_AFFIRMATIONS: [&str; 7] = [
    "target my highest purpose",
    "flow with the universal rhythm",
    "pacify the mind and spirit",
    "establish clarity and power",
    "release what no longer serves",
    "purify my actions and intent",
    "discharge energy into the cosmos",
];

/// Returns the plasma day name for the given day-of-week index (0..=6).
pub fn day_name(day_of_week: u8) -> &'static str {
    DAY_NAMES[day_of_week as usize]
}

/// Returns the plasma quality for the given day-of-week index (0..=6).
pub fn day_quality(day_of_week: u8) -> &'static str {
    DAY_QUALITIES[day_of_week as usize]
}

/// Returns the affirmation suffix for the given day-of-week index (0..=6).
pub fn day_affirmation(day_of_week: u8) -> &'static str {
    DAY_AFFIRMATIONS[day_of_week as usize]
}
