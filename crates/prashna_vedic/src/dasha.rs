//! Vimshottari dasha timeline generation.
//!
//! The Vimshottari system cycles 9 lords over 120 years. The Moon's
//! nakshatra at birth selects the starting lord (lords rotate every 3
//! nakshatras), and the fraction of that nakshatra already traversed
//! shortens the first visible period to its unexpired balance. Segments are
//! chained end-to-end in birth-relative years; membership is half-open
//! [start, end), so an elapsed time exactly at a boundary belongs to the
//! next segment.

use serde::Serialize;

use prashna_core::{Graha, normalize_360};

use crate::nakshatra::{NAKSHATRA_SPAN, NakshatraInfo, nakshatra_from_longitude};

/// The 9 dasha lords in cycle order.
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Full period of each lord in years, matching [`VIMSHOTTARI_LORDS`] order.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// One full cycle: the 9 periods sum to exactly 120 years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Segments generated per timeline — covers well past one full cycle.
pub const TIMELINE_SEGMENTS: usize = 30;

/// One mahadasha segment in birth-relative years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaSegment {
    /// Ruling lord.
    pub lord: Graha,
    /// Full period of the lord in years (the first segment keeps the full
    /// period here even though only its balance is visible).
    pub duration_years: f64,
    /// Years since birth, inclusive.
    pub start_year: f64,
    /// Years since birth, exclusive.
    pub end_year: f64,
}

/// The active segment at an evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentDasha {
    pub segment: DashaSegment,
    /// Years elapsed within the segment.
    pub elapsed_in_current: f64,
    /// Years remaining within the segment.
    pub remaining: f64,
}

/// Complete Vimshottari output for a birth Moon longitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VimshottariResult {
    /// Moon longitude at birth, normalized.
    pub moon_longitude_at_birth: f64,
    /// The birth nakshatra.
    pub nakshatra: NakshatraInfo,
    /// The generated mahadasha timeline.
    pub timeline: Vec<DashaSegment>,
    /// Years elapsed from birth to the evaluation instant.
    pub elapsed_years: f64,
    /// Active segment, if the elapsed time falls inside the timeline.
    pub current: Option<CurrentDasha>,
}

/// Starting lord index for a birth nakshatra: lords rotate every 3
/// nakshatras (27 nakshatras / 9 lords).
pub fn starting_lord_index(nakshatra_index: u8) -> usize {
    (nakshatra_index as usize / 3) % 9
}

/// Generate the mahadasha timeline from the Moon's longitude at birth.
///
/// The first segment spans `[0, balance)` where balance is the unexpired
/// fraction of the starting lord's period; later segments follow the lord
/// cycle with full durations until [`TIMELINE_SEGMENTS`] exist.
pub fn vimshottari_timeline(moon_lon_at_birth: f64) -> Vec<DashaSegment> {
    let nak = nakshatra_from_longitude(moon_lon_at_birth);
    let mut lord_idx = starting_lord_index(nak.nakshatra_index);

    let fraction_elapsed = nak.degrees_in_nakshatra / NAKSHATRA_SPAN;
    let first_period = VIMSHOTTARI_YEARS[lord_idx];
    let balance = (1.0 - fraction_elapsed) * first_period;

    let mut timeline = Vec::with_capacity(TIMELINE_SEGMENTS);
    timeline.push(DashaSegment {
        lord: VIMSHOTTARI_LORDS[lord_idx],
        duration_years: first_period,
        start_year: 0.0,
        end_year: balance,
    });

    let mut cursor = balance;
    lord_idx = (lord_idx + 1) % 9;
    while timeline.len() < TIMELINE_SEGMENTS {
        let duration = VIMSHOTTARI_YEARS[lord_idx];
        timeline.push(DashaSegment {
            lord: VIMSHOTTARI_LORDS[lord_idx],
            duration_years: duration,
            start_year: cursor,
            end_year: cursor + duration,
        });
        cursor += duration;
        lord_idx = (lord_idx + 1) % 9;
    }

    timeline
}

/// Locate the segment whose [start, end) interval contains `elapsed_years`.
///
/// Returns None when the elapsed time falls outside the generated span —
/// a reportable absence, not an error.
pub fn current_segment(timeline: &[DashaSegment], elapsed_years: f64) -> Option<CurrentDasha> {
    timeline
        .iter()
        .find(|seg| seg.start_year <= elapsed_years && elapsed_years < seg.end_year)
        .map(|seg| CurrentDasha {
            segment: *seg,
            elapsed_in_current: elapsed_years - seg.start_year,
            remaining: seg.end_year - elapsed_years,
        })
}

/// Build the full Vimshottari result for a birth Moon longitude and an
/// elapsed time in years since birth.
pub fn vimshottari(moon_lon_at_birth: f64, elapsed_years: f64) -> VimshottariResult {
    let nak = nakshatra_from_longitude(moon_lon_at_birth);
    let timeline = vimshottari_timeline(moon_lon_at_birth);
    let current = current_segment(&timeline, elapsed_years);

    VimshottariResult {
        moon_longitude_at_birth: normalize_360(moon_lon_at_birth),
        nakshatra: nak,
        timeline,
        elapsed_years,
        current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lord_periods_sum_to_120() {
        let total: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert!((total - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn starting_lord_rotates_every_three_nakshatras() {
        assert_eq!(starting_lord_index(0), 0); // Ashwini → Ketu
        assert_eq!(starting_lord_index(2), 0); // Krittika → Ketu
        assert_eq!(starting_lord_index(3), 1); // Rohini → Shukra
        assert_eq!(starting_lord_index(26), 8); // Revati → Buddh
    }

    #[test]
    fn moon_at_zero_starts_full_ketu() {
        let timeline = vimshottari_timeline(0.0);
        assert_eq!(timeline.len(), TIMELINE_SEGMENTS);
        assert_eq!(timeline[0].lord, Graha::Ketu);
        assert!((timeline[0].start_year).abs() < 1e-12);
        assert!((timeline[0].end_year - 7.0).abs() < 1e-12);
        assert_eq!(timeline[1].lord, Graha::Shukra);
    }

    #[test]
    fn mid_nakshatra_halves_first_period() {
        // Moon mid-Rohini → Chandra start with 5 of 10 years remaining.
        let mid_rohini = 3.0 * NAKSHATRA_SPAN + NAKSHATRA_SPAN / 2.0;
        let timeline = vimshottari_timeline(mid_rohini);
        assert_eq!(timeline[0].lord, Graha::Chandra);
        assert!((timeline[0].end_year - 5.0).abs() < 1e-9);
        // Full period is still recorded on the segment.
        assert!((timeline[0].duration_years - 10.0).abs() < 1e-12);
    }

    #[test]
    fn segments_are_contiguous() {
        let timeline = vimshottari_timeline(100.0);
        for w in timeline.windows(2) {
            assert!((w[1].start_year - w[0].end_year).abs() < 1e-10);
        }
    }

    #[test]
    fn timeline_spans_beyond_one_cycle() {
        let timeline = vimshottari_timeline(0.0);
        let last_end = timeline.last().unwrap().end_year;
        assert!(last_end > VIMSHOTTARI_TOTAL_YEARS * 2.0);
    }

    #[test]
    fn boundary_elapsed_falls_into_next_segment() {
        let timeline = vimshottari_timeline(0.0);
        // First segment ends at exactly 7.0 years.
        let cur = current_segment(&timeline, 7.0).unwrap();
        assert_eq!(cur.segment.lord, Graha::Shukra);
        assert!(cur.elapsed_in_current.abs() < 1e-12);
    }

    #[test]
    fn elapsed_past_span_has_no_current() {
        let timeline = vimshottari_timeline(0.0);
        let beyond = timeline.last().unwrap().end_year + 1.0;
        assert!(current_segment(&timeline, beyond).is_none());
    }

    #[test]
    fn negative_elapsed_has_no_current() {
        let timeline = vimshottari_timeline(0.0);
        assert!(current_segment(&timeline, -0.5).is_none());
    }

    #[test]
    fn current_elapsed_plus_remaining_is_segment_span() {
        let timeline = vimshottari_timeline(200.0);
        let cur = current_segment(&timeline, 33.3).unwrap();
        let span = cur.segment.end_year - cur.segment.start_year;
        assert!((cur.elapsed_in_current + cur.remaining - span).abs() < 1e-9);
    }

    #[test]
    fn vimshottari_bundles_nakshatra_and_current() {
        let r = vimshottari(0.0, 10.0);
        assert_eq!(r.nakshatra.nakshatra_index, 0);
        assert_eq!(r.timeline.len(), TIMELINE_SEGMENTS);
        // 10 years after a full Ketu start → inside Shukra [7, 27).
        assert_eq!(r.current.unwrap().segment.lord, Graha::Shukra);
    }
}
