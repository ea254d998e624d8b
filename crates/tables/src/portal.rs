//! The 52 galactic activation portal kins.

/// The 52 portal kins, sorted ascending.
///
/// A fixed published list; membership is the only operation, there is no
/// generating formula.
#[rustfmt::skip]
pub const PORTAL_KINS: [u16; 53] = [
    1, 20, 22, 39, 43, 50, 51, 58, 64, 69, 72, 77, 79, 85, 88, 93, 96,
    106, 107, 108, 109, 110, 111, 112, 113, 114, 115,
    146, 147, 148, 149, 150, 151, 152, 153, 154, 155,
    165, 168, 173, 176, 182, 184, 189, 192, 197, 203, 210, 211, 218,
    239, 241, 260,
];

/// Returns whether the given kin number is a portal day.
pub fn is_portal(kin: u16) -> bool {
    PORTAL_KINS.binary_search(&kin).is_ok()
}
