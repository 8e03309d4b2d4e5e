//! Error types for civil time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or resolving a birth date/time/timezone.
///
/// All variants correspond to invalid time input: the chart computation
/// aborts before anything is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    BadDate(String),
    /// Time string is not a valid `HH:MM:SS` (or `HH:MM`) time of day.
    BadTime(String),
    /// Timezone name is not in the IANA database.
    UnknownTimezone(String),
    /// Local time falls in a DST gap and does not exist in the zone.
    NonexistentLocalTime,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadDate(s) => write!(f, "invalid date: {s:?} (expected YYYY-MM-DD)"),
            Self::BadTime(s) => write!(f, "invalid time: {s:?} (expected HH:MM:SS)"),
            Self::UnknownTimezone(s) => write!(f, "unknown timezone: {s:?}"),
            Self::NonexistentLocalTime => write!(f, "local time does not exist in this timezone"),
        }
    }
}

impl Error for TimeError {}
