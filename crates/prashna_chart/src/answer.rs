//! Answer rendering.
//!
//! Turns a computed [`Chart`] plus a classified question into display text.
//! All rounding happens here; the chart itself keeps full precision.

use std::fmt::Write;

use prashna_core::EphemerisSource;
use prashna_vedic::MANGLIK_HOUSES;

use crate::birth::BirthInput;
use crate::chart::{Chart, compute_chart};
use crate::intent::{Intent, classify_question};

fn manglik_answer(chart: &Chart, out: &mut String) {
    let m = &chart.manglik;
    if m.is_manglik {
        let _ = writeln!(out, "YES, you are Manglik.");
    } else {
        let _ = writeln!(out, "NO, you are not Manglik.");
    }
    let _ = writeln!(out, "Rule applied: Mars dosha (classical Vedic rule).");
    let _ = writeln!(out, "Mars is at {:.2} deg.", m.mars_longitude);
    let _ = writeln!(
        out,
        "House from Ascendant: {}{}",
        m.house_from_lagna,
        if m.by_lagna { " (Manglik house)" } else { "" }
    );
    let _ = writeln!(
        out,
        "House from Moon: {}{}",
        m.house_from_moon,
        if m.by_moon { " (Manglik house)" } else { "" }
    );
    let _ = writeln!(
        out,
        "Mars in houses {:?} from the Ascendant or the Moon triggers the dosha.",
        MANGLIK_HOUSES
    );
}

fn moon_sign_answer(chart: &Chart, out: &mut String) {
    let r = &chart.moon_rashi;
    let _ = writeln!(
        out,
        "Your Moon Sign (Rashi): {} ({})",
        r.rashi.western_name(),
        r.rashi.name()
    );
    let _ = writeln!(out, "Moon longitude: {:.2} deg", r.longitude);
    let _ = writeln!(out, "Degree in rashi: {:.2} deg", r.degrees_in_rashi);
    let _ = writeln!(out, "Nakshatra: {}", chart.moon_nakshatra.nakshatra.name());
}

fn dasha_answer(chart: &Chart, out: &mut String) {
    let v = &chart.vimshottari;
    match &v.current {
        Some(cur) => {
            let _ = writeln!(
                out,
                "Current Mahadasha: {} ({})",
                cur.segment.lord.english_name(),
                cur.segment.lord.name()
            );
            let _ = writeln!(out, "Elapsed in this period: {:.2} years", cur.elapsed_in_current);
            let _ = writeln!(out, "Remaining: {:.2} years", cur.remaining);
            let _ = writeln!(out, "Full period: {} years", cur.segment.duration_years);
        }
        None => {
            let _ = writeln!(out, "Could not determine the current Mahadasha.");
            let _ = writeln!(
                out,
                "Elapsed time ({:.1} years) falls outside the generated timeline.",
                v.elapsed_years
            );
        }
    }
    let _ = writeln!(
        out,
        "Birth Moon was in {} nakshatra.",
        v.nakshatra.nakshatra.name()
    );
    let _ = writeln!(out, "Timeline (first 10 periods):");
    for (i, seg) in v.timeline.iter().take(10).enumerate() {
        let marker = match &v.current {
            Some(cur) if cur.segment == *seg => "  <- current",
            _ => "",
        };
        let _ = writeln!(
            out,
            "  {:2}. {:<8} {:6.1} - {:6.1} yrs{marker}",
            i + 1,
            seg.lord.english_name(),
            seg.start_year,
            seg.end_year,
        );
    }
}

fn general_answer(chart: &Chart, out: &mut String) {
    let _ = writeln!(out, "General chart reading:");
    let _ = writeln!(out, "Ascendant (Lagna): {:.2} deg", chart.ascendant);
    let _ = writeln!(
        out,
        "Moon Sign: {} ({:.2} deg)",
        chart.moon_rashi.rashi.western_name(),
        chart.moon_rashi.longitude
    );
    let _ = writeln!(out, "Nakshatra: {}", chart.moon_nakshatra.nakshatra.name());
    let _ = writeln!(
        out,
        "Manglik: {} (Mars at {:.2} deg, house {} from Ascendant)",
        if chart.manglik.is_manglik { "YES" } else { "NO" },
        chart.manglik.mars_longitude,
        chart.manglik.house_from_lagna
    );
    let _ = writeln!(out, "You can ask:");
    let _ = writeln!(out, "  \"Am I Manglik?\"");
    let _ = writeln!(out, "  \"What is my Moon sign?\"");
    let _ = writeln!(out, "  \"Which Mahadasha am I in?\"");
}

/// Render the answer for a free-text question against a computed chart.
///
/// One block per matched intent, joined by a blank line.
pub fn answer_question(chart: &Chart, question: &str) -> String {
    let mut blocks = Vec::new();
    for intent in classify_question(question) {
        let mut block = String::new();
        match intent {
            Intent::Manglik => manglik_answer(chart, &mut block),
            Intent::MoonSign => moon_sign_answer(chart, &mut block),
            Intent::Dasha => dasha_answer(chart, &mut block),
            Intent::General => general_answer(chart, &mut block),
        }
        blocks.push(block);
    }
    blocks.join("\n")
}

/// Render the computed-data panel: all positions plus the key derived values.
pub fn chart_summary(chart: &Chart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Planetary positions:");
    for p in &chart.positions {
        let _ = writeln!(out, "  {:<8} {:8.2} deg", p.graha.english_name(), p.longitude);
    }
    let _ = writeln!(out, "Ascendant (Lagna): {:.2} deg", chart.ascendant);
    let _ = writeln!(
        out,
        "Moon Sign: {} ({:.2} deg)",
        chart.moon_rashi.rashi.western_name(),
        chart.moon_rashi.longitude
    );
    let _ = writeln!(out, "Moon Nakshatra: {}", chart.moon_nakshatra.nakshatra.name());
    let _ = writeln!(
        out,
        "Mars: {:.2} deg (house {} from Lagna)",
        chart.manglik.mars_longitude, chart.manglik.house_from_lagna
    );
    out
}

/// Compute a chart and answer a question in one step.
///
/// This is the query-interface boundary: failures are rendered as a
/// user-facing message instead of propagating.
pub fn run_question(
    source: &dyn EphemerisSource,
    birth: &BirthInput,
    evaluation_jd: f64,
    question: &str,
) -> String {
    match compute_chart(source, birth, evaluation_jd) {
        Ok(chart) => answer_question(&chart, question),
        Err(e) => format!("Could not compute chart: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prashna_core::MeanMotionSource;

    fn chart() -> Chart {
        let birth =
            BirthInput::parse("1990-08-15", "06:30:00", "Asia/Kolkata", 22.5726, 88.3639).unwrap();
        compute_chart(&MeanMotionSource::default(), &birth, 2_460_000.0).unwrap()
    }

    #[test]
    fn manglik_answer_states_yes_or_no() {
        let c = chart();
        let text = answer_question(&c, "Am I Manglik?");
        if c.manglik.is_manglik {
            assert!(text.contains("YES, you are Manglik"));
        } else {
            assert!(text.contains("NO, you are not Manglik"));
        }
        assert!(text.contains("House from Ascendant"));
    }

    #[test]
    fn moon_answer_names_the_sign() {
        let c = chart();
        let text = answer_question(&c, "what is my moon sign");
        assert!(text.contains(c.moon_rashi.rashi.western_name()));
        assert!(text.contains(c.moon_nakshatra.nakshatra.name()));
    }

    #[test]
    fn dasha_answer_lists_timeline() {
        let c = chart();
        let text = answer_question(&c, "which mahadasha am I in?");
        assert!(text.contains("Timeline (first 10 periods):"));
        if let Some(cur) = &c.vimshottari.current {
            assert!(text.contains(cur.segment.lord.english_name()));
            assert!(text.contains("<- current"));
        }
    }

    #[test]
    fn unmatched_question_gets_general_summary() {
        let c = chart();
        let text = answer_question(&c, "hello there");
        assert!(text.contains("General chart reading:"));
        assert!(text.contains("You can ask:"));
    }

    #[test]
    fn combined_question_renders_two_blocks() {
        let c = chart();
        let text = answer_question(&c, "moon sign and dasha");
        assert!(text.contains("Your Moon Sign"));
        assert!(text.contains("Mahadasha"));
    }

    #[test]
    fn summary_lists_all_nine_bodies() {
        let text = chart_summary(&chart());
        for name in ["Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn", "Rahu", "Ketu"] {
            assert!(text.contains(name), "missing {name}");
        }
    }

    #[test]
    fn run_question_renders_errors_as_text() {
        let birth =
            BirthInput::parse("1990-08-15", "06:30:00", "Nowhere/Void", 22.5726, 88.3639).unwrap();
        let text = run_question(&MeanMotionSource::default(), &birth, 2_460_000.0, "moon");
        assert!(text.contains("Could not compute chart"));
    }
}
