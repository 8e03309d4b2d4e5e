//! Error types for ephemeris lookup.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::graha::Graha;

/// Errors from an ephemeris source.
///
/// These never reach the chart aggregator: the fail-soft helpers in
/// [`crate::source`] absorb them with a fallback longitude.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SourceError {
    /// The source cannot answer this query (missing data, bad path, range).
    Unavailable(&'static str),
    /// The body has no direct representation in this source.
    UnsupportedBody(Graha),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "ephemeris source unavailable: {msg}"),
            Self::UnsupportedBody(g) => write!(f, "no direct ephemeris for {}", g.name()),
        }
    }
}

impl Error for SourceError {}
