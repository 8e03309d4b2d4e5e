//! Derived Vedic calculations on top of ephemeris longitudes.
//!
//! This crate provides:
//! - Rashi (zodiac sign) and nakshatra (lunar station) classification
//! - Equal-house assignment relative to a reference longitude
//! - The Manglik (Mars dosha) evaluator
//! - The Vimshottari dasha timeline generator
//!
//! Everything here is a pure function of longitudes and JDs; ephemeris
//! access happens only through the fail-soft helpers of `prashna_core`,
//! so every evaluator is total.

pub mod bhava;
pub mod dasha;
pub mod manglik;
pub mod nakshatra;
pub mod rashi;

pub use bhava::house_from;
pub use dasha::{
    CurrentDasha, DashaSegment, TIMELINE_SEGMENTS, VIMSHOTTARI_LORDS, VIMSHOTTARI_TOTAL_YEARS,
    VIMSHOTTARI_YEARS, VimshottariResult, current_segment, starting_lord_index, vimshottari,
    vimshottari_timeline,
};
pub use manglik::{MANGLIK_HOUSES, ManglikResult, evaluate_manglik};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, rashi_from_longitude};
