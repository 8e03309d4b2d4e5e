//! Ephemeris access layer for the chart engine.
//!
//! This crate provides:
//! - The [`Graha`] enum of the 9 recognized bodies
//! - The [`EphemerisSource`] trait queried as (JD, body) → longitude
//! - [`MeanMotionSource`], a deterministic mean-element source usable
//!   without external ephemeris data
//! - Fail-soft lookup helpers that absorb provider errors so chart
//!   computation stays total
//!
//! Ketu is never queried from a source: it is always derived as the point
//! opposite Rahu.

pub mod angle;
pub mod error;
pub mod graha;
pub mod mean_motion;
pub mod sidereal;
pub mod source;

pub use angle::normalize_360;
pub use error::SourceError;
pub use graha::{ALL_GRAHAS, Graha};
pub use mean_motion::MeanMotionSource;
pub use sidereal::{ascendant_deg, earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use source::{
    EphemerisSource, HouseCusps, SourceConfig, ascendant_or_default, graha_longitude,
};
