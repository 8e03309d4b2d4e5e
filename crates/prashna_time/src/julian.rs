//! Gregorian calendar → Julian Day conversion.
//!
//! The Julian Day is a continuous day count used throughout the chart
//! engine; all ephemeris and dasha arithmetic is done on JD values.
//!
//! Source: standard Gregorian-calendar algorithm (Meeus, "Astronomical
//! Algorithms", Ch. 7).

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Year length used for dasha period arithmetic (Julian year).
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Convert a Gregorian calendar date to a Julian Day number.
///
/// `day_fraction` is the day of month plus the fraction of the day elapsed
/// (e.g. 15.5 for the 15th at 12:00 UT). Months January and February are
/// counted as months 13 and 14 of the previous year, and the Gregorian
/// century correction `B = 2 - A + A/4` is applied.
pub fn calendar_to_jd(year: i32, month: u32, day_fraction: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor()
        + day_fraction
        + b
        - 1524.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        // 2000-01-01 12:00 UT is JD 2451545.0 by definition.
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn j2000_midnight() {
        let jd = calendar_to_jd(2000, 1, 1.0);
        assert!((jd - 2_451_544.5).abs() < 1e-9);
    }

    #[test]
    fn january_rolls_into_previous_year() {
        // 1999-12-31 and 2000-01-01 must be exactly one day apart.
        let dec31 = calendar_to_jd(1999, 12, 31.0);
        let jan1 = calendar_to_jd(2000, 1, 1.0);
        assert!((jan1 - dec31 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn gregorian_epoch_1990() {
        // 1990-08-15 01:00 UT (Meeus algorithm, checked by hand).
        let jd = calendar_to_jd(1990, 8, 15.0 + 1.0 / 24.0);
        assert!((jd - 2_448_118.541_666_7).abs() < 1e-6);
    }

    #[test]
    fn day_fraction_advances_jd() {
        let midnight = calendar_to_jd(2024, 3, 20.0);
        let noon = calendar_to_jd(2024, 3, 20.5);
        assert!((noon - midnight - 0.5).abs() < 1e-12);
    }
}
