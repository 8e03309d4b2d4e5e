//! Civil time conversion for birth-chart computation.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day conversion
//! - Local civil time + IANA timezone → UTC resolution
//! - Parsing of `YYYY-MM-DD` / `HH:MM:SS` birth inputs
//!
//! All functions are pure; the only clock access is [`jd_now`], which the
//! caller uses to obtain an explicit evaluation instant.

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{jd_from_utc, jd_now, local_to_utc, parse_civil_date, parse_civil_time, to_julian_day};
pub use error::TimeError;
pub use julian::{DAYS_PER_YEAR, J2000_JD, calendar_to_jd};
