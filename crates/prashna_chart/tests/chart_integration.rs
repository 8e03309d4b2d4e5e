//! End-to-end chart computation through the public API.

use prashna_chart::{BirthInput, answer_question, chart_summary, compute_chart, run_question};
use prashna_core::{
    EphemerisSource, Graha, HouseCusps, MeanMotionSource, SourceConfig, SourceError, normalize_360,
};
use prashna_vedic::{ALL_NAKSHATRAS, VIMSHOTTARI_LORDS};

const EVAL_JD: f64 = 2_460_903.5; // 2025-08-16 00:00 UTC

fn kolkata_birth() -> BirthInput {
    BirthInput::parse("1990-08-15", "06:30:00", "Asia/Kolkata", 22.5726, 88.3639).unwrap()
}

#[test]
fn reference_scenario_produces_complete_chart() {
    let source = MeanMotionSource::default();
    let chart = compute_chart(&source, &kolkata_birth(), EVAL_JD).unwrap();

    assert_eq!(chart.positions.len(), 9);
    assert!((0.0..360.0).contains(&chart.ascendant));

    // Starting nakshatra must come from the fixed 27-name list.
    let nak_name = chart.moon_nakshatra.nakshatra.name();
    assert!(ALL_NAKSHATRAS.iter().any(|n| n.name() == nak_name));

    // ~35 years after birth the current mahadasha must exist and its lord
    // must come from the fixed 9-lord cycle.
    let cur = chart.vimshottari.current.expect("current mahadasha");
    assert!(VIMSHOTTARI_LORDS.contains(&cur.segment.lord));
    assert!((chart.vimshottari.elapsed_years - 35.0).abs() < 0.2);
}

#[test]
fn moon_at_exact_zero_classifies_to_first_entries() {
    // A source pinning the Moon to 0.0 exercises the 0-longitude boundary.
    struct MoonAtZero;

    impl EphemerisSource for MoonAtZero {
        fn longitude(&self, _jd: f64, graha: Graha) -> Result<f64, SourceError> {
            match graha {
                Graha::Chandra => Ok(0.0),
                Graha::Ketu => Err(SourceError::UnsupportedBody(graha)),
                g => Ok(40.0 * g.index() as f64),
            }
        }

        fn house_cusps(&self, _jd: f64, _lat: f64, _lon: f64) -> Result<HouseCusps, SourceError> {
            Ok(HouseCusps::equal_from_ascendant(100.0))
        }
    }

    let chart = compute_chart(&MoonAtZero, &kolkata_birth(), EVAL_JD).unwrap();
    assert_eq!(chart.moon_rashi.rashi_index, 0);
    assert_eq!(chart.moon_rashi.rashi.western_name(), "Aries");
    assert!(chart.moon_rashi.degrees_in_rashi.abs() < 1e-12);
    assert_eq!(chart.moon_nakshatra.nakshatra_index, 0);
    assert!(chart.moon_nakshatra.degrees_in_nakshatra.abs() < 1e-12);
}

#[test]
fn dead_provider_still_yields_complete_chart() {
    struct Dead;

    impl EphemerisSource for Dead {
        fn longitude(&self, _jd: f64, _graha: Graha) -> Result<f64, SourceError> {
            Err(SourceError::Unavailable("no data"))
        }

        fn house_cusps(&self, _jd: f64, _lat: f64, _lon: f64) -> Result<HouseCusps, SourceError> {
            Err(SourceError::Unavailable("no data"))
        }
    }

    let chart = compute_chart(&Dead, &kolkata_birth(), EVAL_JD).unwrap();
    // All direct lookups fall back to 0.0; Ketu still opposes Rahu.
    assert_eq!(chart.longitude_of(Graha::Surya), 0.0);
    assert_eq!(chart.longitude_of(Graha::Rahu), 0.0);
    assert_eq!(chart.longitude_of(Graha::Ketu), 180.0);
    assert_eq!(chart.ascendant, 0.0);
    // The derived values stay consistent with the fallback Moon.
    assert_eq!(chart.moon_rashi.rashi_index, 0);
    assert!(chart.vimshottari.current.is_some());
}

#[test]
fn identical_inputs_give_identical_answers() {
    let source = MeanMotionSource::new(SourceConfig::default());
    let birth = kolkata_birth();
    let a = run_question(&source, &birth, EVAL_JD, "Am I Manglik?");
    let b = run_question(&source, &birth, EVAL_JD, "Am I Manglik?");
    assert_eq!(a, b);
    assert!(!a.is_empty());
}

#[test]
fn ketu_always_opposes_rahu_across_dates() {
    let source = MeanMotionSource::default();
    for (date, tz) in [
        ("1965-01-03", "UTC"),
        ("1990-08-15", "Asia/Kolkata"),
        ("2001-09-09", "America/New_York"),
        ("2024-02-29", "Europe/Berlin"),
    ] {
        let birth = BirthInput::parse(date, "12:00:00", tz, 10.0, 20.0).unwrap();
        let chart = compute_chart(&source, &birth, EVAL_JD).unwrap();
        let rahu = chart.longitude_of(Graha::Rahu);
        let ketu = chart.longitude_of(Graha::Ketu);
        assert!(
            (ketu - normalize_360(rahu + 180.0)).abs() < 1e-9,
            "{date}: rahu={rahu} ketu={ketu}"
        );
    }
}

#[test]
fn answer_and_summary_render_for_the_reference_scenario() {
    let source = MeanMotionSource::default();
    let chart = compute_chart(&source, &kolkata_birth(), EVAL_JD).unwrap();

    let answer = answer_question(&chart, "moon sign and current dasha");
    assert!(answer.contains("Your Moon Sign"));
    assert!(answer.contains("Mahadasha"));

    let summary = chart_summary(&chart);
    assert!(summary.contains("Planetary positions:"));
    assert!(summary.contains("Ascendant"));
}

#[test]
fn chart_serializes_to_json() {
    let source = MeanMotionSource::default();
    let chart = compute_chart(&source, &kolkata_birth(), EVAL_JD).unwrap();
    let json = serde_json::to_string(&chart).unwrap();
    assert!(json.contains("\"positions\""));
    assert!(json.contains("\"vimshottari\""));
}
