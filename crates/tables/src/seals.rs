//! The 20 solar seals and 13 galactic tones.

/// Names of the 20 solar seals, indexed by seal index (0 = Dragon).
pub const SEAL_NAMES: [&str; 20] = [
    "Dragon",
    "Wind",
    "Night",
    "Seed",
    "Serpent",
    "Worldbridger",
    "Hand",
    "Star",
    "Moon",
    "Dog",
    "Monkey",
    "Human",
    "Skywalker",
    "Wizard",
    "Eagle",
    "Warrior",
    "Earth",
    "Mirror",
    "Storm",
    "Sun",
];

/// Names of the 13 galactic tones, indexed by tone index (0 = Magnetic).
pub const TONE_NAMES: [&str; 13] = [
    "Magnetic",
    "Lunar",
    "Electric",
    "Self-Existing",
    "Overtone",
    "Rhythmic",
    "Resonant",
    "Galactic",
    "Solar",
    "Planetary",
    "Spectral",
    "Crystal",
    "Cosmic",
];

/// Color family of a solar seal.
///
/// The seals cycle through the four root colors in a fixed order:
/// Dragon is Red, Wind is White, Night is Blue, Seed is Yellow, and the
/// pattern repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SealColor {
    Red,
    White,
    Blue,
    Yellow,
}

impl SealColor {
    /// Returns the display name of the color.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::White => "White",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for SealColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the seal name for the given seal index (0..=19).
pub fn seal_name(seal: u8) -> &'static str {
    SEAL_NAMES[seal as usize]
}

/// Returns the tone name for the given tone index (0..=12).
pub fn tone_name(tone: u8) -> &'static str {
    TONE_NAMES[tone as usize]
}

/// Returns the color family of the seal with the given index (0..=19).
pub fn seal_color(seal: u8) -> SealColor {
    match seal % 4 {
        0 => SealColor::Red,
        1 => SealColor::White,
        2 => SealColor::Blue,
        _ => SealColor::Yellow,
    }
}
