//! Deterministic mean-motion ephemeris source.
//!
//! Linear mean elements at J2000: `l = l0 + n · (jd − J2000)`, with the
//! mean lunar node regressing for Rahu. Accurate to a few degrees for the
//! slow bodies and useful wherever a data-backed ephemeris is not
//! configured: demos, tests, and the degraded mode of the query interface.
//!
//! The ascendant comes from the ERA→GMST→LST chain in [`crate::sidereal`];
//! cusps are equal 30° houses from the ascendant.
//!
//! Element values: J2000 mean longitudes and daily motions (Meeus,
//! "Astronomical Algorithms", Ch. 31 and 47).

use crate::angle::normalize_360;
use crate::error::SourceError;
use crate::graha::Graha;
use crate::sidereal::ascendant_deg;
use crate::source::{EphemerisSource, HouseCusps, SourceConfig};

/// J2000 epoch used by the element table.
const J2000_JD: f64 = 2_451_545.0;

/// (body, mean longitude at J2000 in degrees, mean motion in degrees/day).
/// Rahu (mean ascending node) regresses, hence the negative rate.
const MEAN_ELEMENTS: [(Graha, f64, f64); 8] = [
    (Graha::Surya, 280.4665, 0.985_647_36),
    (Graha::Chandra, 218.3165, 13.176_396_48),
    (Graha::Mangal, 355.4330, 0.524_038_40),
    (Graha::Buddh, 252.2509, 4.092_338_80),
    (Graha::Guru, 34.3515, 0.083_085_29),
    (Graha::Shukra, 181.9798, 1.602_130_34),
    (Graha::Shani, 50.0774, 0.033_444_14),
    (Graha::Rahu, 125.0446, -0.052_953_77),
];

/// Ephemeris source computing longitudes from J2000 mean elements.
#[derive(Debug, Clone, Default)]
pub struct MeanMotionSource {
    config: SourceConfig,
}

impl MeanMotionSource {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    /// Access the source configuration.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl EphemerisSource for MeanMotionSource {
    fn longitude(&self, jd: f64, graha: Graha) -> Result<f64, SourceError> {
        let (_, l0, rate) = MEAN_ELEMENTS
            .iter()
            .find(|(g, _, _)| *g == graha)
            .ok_or(SourceError::UnsupportedBody(graha))?;
        Ok(normalize_360(l0 + rate * (jd - J2000_JD)))
    }

    fn house_cusps(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<HouseCusps, SourceError> {
        // Normalize the sign convention at the boundary: the engine is
        // east-positive.
        let east_lon = if self.config.west_positive {
            -longitude_deg
        } else {
            longitude_deg
        };
        let asc = ascendant_deg(jd, latitude_deg, east_lon);
        Ok(HouseCusps::equal_from_ascendant(asc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_at_j2000() {
        let src = MeanMotionSource::default();
        let lon = src.longitude(J2000_JD, Graha::Surya).unwrap();
        assert!((lon - 280.4665).abs() < 1e-9);
    }

    #[test]
    fn sun_advances_roughly_one_degree_per_day() {
        let src = MeanMotionSource::default();
        let l0 = src.longitude(J2000_JD, Graha::Surya).unwrap();
        let l1 = src.longitude(J2000_JD + 1.0, Graha::Surya).unwrap();
        let delta = (l1 - l0).rem_euclid(360.0);
        assert!((delta - 0.9856).abs() < 0.001);
    }

    #[test]
    fn moon_advances_about_thirteen_degrees_per_day() {
        let src = MeanMotionSource::default();
        let l0 = src.longitude(J2000_JD, Graha::Chandra).unwrap();
        let l1 = src.longitude(J2000_JD + 1.0, Graha::Chandra).unwrap();
        let delta = (l1 - l0).rem_euclid(360.0);
        assert!((delta - 13.18).abs() < 0.01);
    }

    #[test]
    fn rahu_regresses() {
        let src = MeanMotionSource::default();
        let l0 = src.longitude(J2000_JD, Graha::Rahu).unwrap();
        let l1 = src.longitude(J2000_JD + 100.0, Graha::Rahu).unwrap();
        // Node moves backwards ~5.3° over 100 days.
        let delta = (l0 - l1).rem_euclid(360.0);
        assert!((delta - 5.295).abs() < 0.01);
    }

    #[test]
    fn ketu_unsupported_directly() {
        let src = MeanMotionSource::default();
        assert_eq!(
            src.longitude(J2000_JD, Graha::Ketu),
            Err(SourceError::UnsupportedBody(Graha::Ketu))
        );
    }

    #[test]
    fn all_longitudes_normalized_far_from_epoch() {
        let src = MeanMotionSource::default();
        for (g, _, _) in MEAN_ELEMENTS {
            for &jd in &[J2000_JD - 50_000.0, J2000_JD + 50_000.0] {
                let lon = src.longitude(jd, g).unwrap();
                assert!((0.0..360.0).contains(&lon), "{} at {jd}: {lon}", g.name());
            }
        }
    }

    #[test]
    fn west_positive_flips_longitude() {
        let east = MeanMotionSource::default();
        let west = MeanMotionSource::new(SourceConfig {
            west_positive: true,
            ..SourceConfig::default()
        });
        let jd = J2000_JD + 9_000.25;
        let a = east.house_cusps(jd, 22.5726, 88.3639).unwrap();
        let b = west.house_cusps(jd, 22.5726, -88.3639).unwrap();
        assert!((a.ascendant - b.ascendant).abs() < 1e-9);
    }

    #[test]
    fn cusps_cover_twelve_houses() {
        let src = MeanMotionSource::default();
        let h = src.house_cusps(J2000_JD, 22.5726, 88.3639).unwrap();
        assert!((0.0..360.0).contains(&h.ascendant));
        assert!((h.cusps[0] - h.ascendant).abs() < 1e-12);
        for w in h.cusps.windows(2) {
            let step = (w[1] - w[0]).rem_euclid(360.0);
            assert!((step - 30.0).abs() < 1e-9);
        }
    }
}
