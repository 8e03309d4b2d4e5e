//! Manglik (Mars dosha) evaluation.
//!
//! Mars in house 1, 2, 4, 7, 8, or 12 — counted from the ascendant or from
//! the Moon — triggers the dosha. The combined flag is the OR of the two
//! triggers.

use serde::Serialize;

use prashna_core::{EphemerisSource, Graha, ascendant_or_default, graha_longitude};

use crate::bhava::house_from;

/// Houses that trigger Manglik dosha.
pub const MANGLIK_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Outcome of the Manglik evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ManglikResult {
    /// Mars longitude in degrees [0, 360).
    pub mars_longitude: f64,
    /// House of Mars counted from the ascendant.
    pub house_from_lagna: u8,
    /// House of Mars counted from the Moon.
    pub house_from_moon: u8,
    /// Trigger from the ascendant placement.
    pub by_lagna: bool,
    /// Trigger from the Moon placement.
    pub by_moon: bool,
    /// Combined flag: `by_lagna || by_moon`.
    pub is_manglik: bool,
}

/// Evaluate Manglik dosha for a birth moment and location.
///
/// Total: ephemeris failures are absorbed by the fail-soft lookups, so this
/// always produces a result.
pub fn evaluate_manglik(
    source: &dyn EphemerisSource,
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> ManglikResult {
    let mars_lon = graha_longitude(source, jd, Graha::Mangal);
    let asc_lon = ascendant_or_default(source, jd, latitude_deg, longitude_deg);
    let moon_lon = graha_longitude(source, jd, Graha::Chandra);

    let house_from_lagna = house_from(mars_lon, asc_lon);
    let house_from_moon = house_from(mars_lon, moon_lon);

    let by_lagna = MANGLIK_HOUSES.contains(&house_from_lagna);
    let by_moon = MANGLIK_HOUSES.contains(&house_from_moon);

    ManglikResult {
        mars_longitude: mars_lon,
        house_from_lagna,
        house_from_moon,
        by_lagna,
        by_moon,
        is_manglik: by_lagna || by_moon,
    }
}
