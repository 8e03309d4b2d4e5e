//! Equal-house (bhava) assignment.
//!
//! House placement relative to the ascendant or the Moon uses the equal
//! 30°-per-house rule uniformly, regardless of how the reference cusp was
//! obtained.

use prashna_core::normalize_360;

/// House number [1, 12] of a longitude relative to a reference longitude.
///
/// `house = ((lon − ref) mod 360) div 30 + 1`. The result is clamped into
/// [1, 12] as a guard against malformed (non-finite) inputs.
pub fn house_from(longitude: f64, reference: f64) -> u8 {
    let diff = normalize_360(normalize_360(longitude) - normalize_360(reference));
    let house = (diff / 30.0).floor() as u8 + 1;
    house.clamp(1, 12)
}
