//! Names and totems of the 13 moons.

/// Names of the 13 moons, indexed by moon index (0 = Magnetic).
pub const MOON_NAMES: [&str; 13] = [
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

/// Animal totems of the 13 moons, indexed by moon index.
pub const MOON_TOTEMS: [&str; 13] = [
    "Bat", "Scorpion", "Deer", "Owl", "Peacock", "Lizard", "Monkey", "Hawk", "Jaguar", "Dog",
    "Serpent", "Rabbit", "Turtle",
];

/// Returns the name of the moon with the given index (0..=12).
pub fn moon_name(moon: u8) -> &'static str {
    MOON_NAMES[moon as usize]
}

/// Returns the totem of the moon with the given index (0..=12).
pub fn moon_totem(moon: u8) -> &'static str {
    MOON_TOTEMS[moon as usize]
}
