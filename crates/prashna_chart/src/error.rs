//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use prashna_time::TimeError;

/// Errors that abort chart computation before a chart is built.
///
/// Ephemeris failures are absorbed below this layer and never appear here.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed date/time/timezone input.
    Time(TimeError),
    /// Latitude or longitude outside its valid range.
    InvalidLocation(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "invalid time input: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
