//! The chart aggregator.

use serde::Serialize;

use prashna_core::{ALL_GRAHAS, EphemerisSource, Graha, ascendant_or_default, graha_longitude};
use prashna_time::{DAYS_PER_YEAR, to_julian_day};
use prashna_vedic::{
    ManglikResult, NakshatraInfo, RashiInfo, VimshottariResult, evaluate_manglik,
    nakshatra_from_longitude, rashi_from_longitude, vimshottari,
};

use crate::birth::BirthInput;
use crate::error::ChartError;

/// One body's computed position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaPosition {
    pub graha: Graha,
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude: f64,
}

/// Complete chart for one birth input and evaluation instant.
///
/// Built once per query and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Julian Day of the birth instant (UTC).
    pub birth_jd: f64,
    /// Julian Day the dasha state was evaluated against.
    pub evaluation_jd: f64,
    /// All 9 graha positions, in [`ALL_GRAHAS`] order.
    pub positions: [GrahaPosition; 9],
    /// Ascendant longitude in degrees [0, 360).
    pub ascendant: f64,
    /// Moon's rashi at birth.
    pub moon_rashi: RashiInfo,
    /// Moon's nakshatra at birth.
    pub moon_nakshatra: NakshatraInfo,
    /// Manglik evaluation.
    pub manglik: ManglikResult,
    /// Vimshottari timeline and current mahadasha.
    pub vimshottari: VimshottariResult,
}

impl Chart {
    /// Longitude of a graha from the position table.
    pub fn longitude_of(&self, graha: Graha) -> f64 {
        self.positions[graha.index() as usize].longitude
    }
}

/// Compute a complete chart.
///
/// Only invalid time input or an invalid location abort; every ephemeris
/// fallback still yields a complete chart. Deterministic: the same birth
/// input and `evaluation_jd` produce an identical chart.
pub fn compute_chart(
    source: &dyn EphemerisSource,
    birth: &BirthInput,
    evaluation_jd: f64,
) -> Result<Chart, ChartError> {
    let birth_jd = to_julian_day(birth.date, birth.time, &birth.timezone)?;

    let positions = ALL_GRAHAS.map(|graha| GrahaPosition {
        graha,
        longitude: graha_longitude(source, birth_jd, graha),
    });

    let ascendant = ascendant_or_default(source, birth_jd, birth.latitude, birth.longitude);

    let moon_lon = positions[Graha::Chandra.index() as usize].longitude;
    let moon_rashi = rashi_from_longitude(moon_lon);
    let moon_nakshatra = nakshatra_from_longitude(moon_lon);

    let manglik = evaluate_manglik(source, birth_jd, birth.latitude, birth.longitude);

    let elapsed_years = (evaluation_jd - birth_jd) / DAYS_PER_YEAR;
    let vimshottari = vimshottari(moon_lon, elapsed_years);

    Ok(Chart {
        birth_jd,
        evaluation_jd,
        positions,
        ascendant,
        moon_rashi,
        moon_nakshatra,
        manglik,
        vimshottari,
    })
}
