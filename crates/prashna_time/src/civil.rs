//! Local civil time → UTC → Julian Day.
//!
//! Birth details arrive as a naive civil date/time plus an IANA timezone
//! name (e.g. "Asia/Kolkata"). The zone resolves the civil time to a UTC
//! instant, which then converts to a Julian Day via [`calendar_to_jd`].

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_civil_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TimeError::BadDate(s.to_string()))
}

/// Parse a `HH:MM:SS` (or `HH:MM`) time string.
pub fn parse_civil_time(s: &str) -> Result<NaiveTime, TimeError> {
    let t = s.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .map_err(|_| TimeError::BadTime(s.to_string()))
}

/// Resolve a naive civil date/time in the named IANA zone to a UTC instant.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant;
/// nonexistent local times (DST gap) are an error.
pub fn local_to_utc(
    date: NaiveDate,
    time: NaiveTime,
    tz_name: &str,
) -> Result<DateTime<Utc>, TimeError> {
    let tz: Tz = tz_name
        .parse()
        .map_err(|_| TimeError::UnknownTimezone(tz_name.to_string()))?;
    let naive = NaiveDateTime::new(date, time);
    let local = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => return Err(TimeError::NonexistentLocalTime),
    };
    Ok(local.with_timezone(&Utc))
}

/// Julian Day of a UTC instant.
pub fn jd_from_utc(utc: DateTime<Utc>) -> f64 {
    let seconds = utc.second() as f64 + utc.nanosecond() as f64 / 1e9;
    let day_fraction = utc.day() as f64
        + utc.hour() as f64 / 24.0
        + utc.minute() as f64 / 1440.0
        + seconds / 86_400.0;
    calendar_to_jd(utc.year(), utc.month(), day_fraction)
}

/// Civil date/time + timezone name → Julian Day.
///
/// The single entry point used by the chart aggregator.
pub fn to_julian_day(date: NaiveDate, time: NaiveTime, tz_name: &str) -> Result<f64, TimeError> {
    Ok(jd_from_utc(local_to_utc(date, time, tz_name)?))
}

/// Julian Day of the current instant, used as the default evaluation time.
pub fn jd_now() -> f64 {
    jd_from_utc(Utc::now())
}
