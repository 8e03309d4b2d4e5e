//! The ephemeris-source trait and fail-soft lookup helpers.
//!
//! A source answers two queries: body longitude at a JD, and house cusps
//! (ascendant first) at a JD and location. Sources are configured per
//! instance via [`SourceConfig`] so multiple configurations can coexist.
//!
//! Provider failures are absorbed here: the helpers log a warning and fall
//! back to 0.0 so the chart aggregator never sees a partial failure.

use std::path::PathBuf;

use log::warn;

use crate::angle::normalize_360;
use crate::error::SourceError;
use crate::graha::Graha;

/// Per-instance source configuration.
#[derive(Debug, Clone, Default)]
pub struct SourceConfig {
    /// Data directory for a file-backed source. Consumed only by sources
    /// that read ephemeris files; [`crate::MeanMotionSource`] computes
    /// from fixed elements and ignores it.
    pub ephemeris_path: Option<PathBuf>,
    /// Flip the geographic longitude sign at the boundary for callers on
    /// a west-positive convention (the engine is east-positive
    /// throughout).
    pub west_positive: bool,
}

/// House cusps at a moment and location: the ascendant plus 12 cusps.
///
/// `cusps[0]` is the first-house cusp (equals the ascendant in the equal
/// system); cusps are degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    pub ascendant: f64,
    pub cusps: [f64; 12],
}

impl HouseCusps {
    /// Build equal 30°-per-house cusps from an ascendant longitude.
    pub fn equal_from_ascendant(ascendant: f64) -> Self {
        let asc = normalize_360(ascendant);
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = normalize_360(asc + 30.0 * i as f64);
        }
        Self { ascendant: asc, cusps }
    }
}

/// A planetary-position data provider.
///
/// Implementations must return longitudes normalized to [0, 360). Ketu is
/// never queried through this trait; use [`graha_longitude`] which derives
/// it from Rahu.
pub trait EphemerisSource {
    /// Ecliptic longitude of a body in degrees [0, 360).
    fn longitude(&self, jd: f64, graha: Graha) -> Result<f64, SourceError>;

    /// House cusps (ascendant first) for a moment and geographic location.
    ///
    /// `longitude_deg` follows the source's configured sign convention.
    fn house_cusps(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<HouseCusps, SourceError>;
}

/// Body longitude with the Ketu derivation and the fail-soft fallback.
///
/// Ketu is always `normalize(Rahu + 180)`. On source failure the fallback
/// longitude 0.0 is returned and a warning logged; chart computation
/// continues.
pub fn graha_longitude(source: &dyn EphemerisSource, jd: f64, graha: Graha) -> f64 {
    if graha == Graha::Ketu {
        let rahu = graha_longitude(source, jd, Graha::Rahu);
        return normalize_360(rahu + 180.0);
    }
    match source.longitude(jd, graha) {
        Ok(lon) => normalize_360(lon),
        Err(e) => {
            warn!("{} lookup failed at JD {jd}: {e}; falling back to 0.0", graha.name());
            0.0
        }
    }
}

/// Ascendant longitude with the fail-soft fallback.
pub fn ascendant_or_default(
    source: &dyn EphemerisSource,
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> f64 {
    match source.house_cusps(jd, latitude_deg, longitude_deg) {
        Ok(h) => normalize_360(h.ascendant),
        Err(e) => {
            warn!("ascendant lookup failed at JD {jd}: {e}; falling back to 0.0");
            0.0
        }
    }
}
