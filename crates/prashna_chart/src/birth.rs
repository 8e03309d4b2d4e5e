//! Birth input: civil date/time, timezone, and geographic location.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use prashna_time::{parse_civil_date, parse_civil_time};

use crate::error::ChartError;

/// Immutable birth details for one chart query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthInput {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// IANA timezone name, e.g. "Asia/Kolkata".
    pub timezone: String,
    /// Latitude in decimal degrees [-90, 90].
    pub latitude: f64,
    /// Longitude in decimal degrees [-180, 180], east-positive.
    pub longitude: f64,
}

impl BirthInput {
    /// Construct a birth input, validating the location ranges.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        timezone: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ChartError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ChartError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ChartError::InvalidLocation("longitude outside [-180, 180]"));
        }
        Ok(Self {
            date,
            time,
            timezone: timezone.into(),
            latitude,
            longitude,
        })
    }

    /// Construct from string birth details as supplied by a UI or a batch
    /// harness row.
    pub fn parse(
        date: &str,
        time: &str,
        timezone: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ChartError> {
        let date = parse_civil_date(date)?;
        let time = parse_civil_time(time)?;
        Self::new(date, time, timezone, latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_accepted() {
        let b = BirthInput::parse("1990-08-15", "06:30:00", "Asia/Kolkata", 22.5726, 88.3639);
        assert!(b.is_ok());
    }

    #[test]
    fn latitude_out_of_range_rejected() {
        let b = BirthInput::parse("1990-08-15", "06:30:00", "Asia/Kolkata", 91.0, 88.0);
        assert!(matches!(b, Err(ChartError::InvalidLocation(_))));
    }

    #[test]
    fn longitude_out_of_range_rejected() {
        let b = BirthInput::parse("1990-08-15", "06:30:00", "Asia/Kolkata", 22.0, -180.5);
        assert!(matches!(b, Err(ChartError::InvalidLocation(_))));
    }

    #[test]
    fn bad_date_propagates_as_time_error() {
        let b = BirthInput::parse("August 15", "06:30:00", "Asia/Kolkata", 22.0, 88.0);
        assert!(matches!(b, Err(ChartError::Time(_))));
    }
}
