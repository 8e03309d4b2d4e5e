//! Sidereal time and the ascendant formula.
//!
//! Provides the ERA → GMST → LST chain and the standard spherical-astronomy
//! formula for the ecliptic longitude rising on the eastern horizon.
//!
//! JD UTC is used directly as JD UT1; the sub-second UT1−UTC offset is far
//! below the precision of the mean-motion source.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.
//! - Ascendant: Meeus, "Astronomical Algorithms" (2nd ed), Ch. 13.

use std::f64::consts::{PI, TAU};

/// Julian Day of the J2000.0 epoch.
const J2000_JD: f64 = 2_451_545.0;

/// Mean obliquity of the ecliptic at J2000.0, radians (23.439291111 deg).
const OBLIQUITY_J2000_RAD: f64 = 0.409_092_804_222_329;

/// Arcseconds to radians: 1″ = π / (180 × 3600).
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a given UT1 Julian Date, radians in [0, 2π).
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du),
/// where Du = JD_UT1 − 2451545.0.
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given UT1 Julian Date, radians in [0, 2π).
///
/// GMST = ERA + polynomial(T), T in Julian centuries of UT1 from J2000.0.
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut1);
    let t = (jd_ut1 - J2000_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and observer east longitude, [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

/// Ecliptic longitude of the ascendant in degrees [0, 360).
///
/// `Asc = atan2(-cos LST, sin LST · cos ε + tan φ · sin ε)`
///
/// Geographic longitude is east-positive; callers with a west-positive
/// convention flip the sign before calling (see `SourceConfig`).
pub fn ascendant_deg(jd_utc: f64, latitude_deg: f64, east_longitude_deg: f64) -> f64 {
    let lst = local_sidereal_time_rad(gmst_rad(jd_utc), east_longitude_deg.to_radians());
    let eps = OBLIQUITY_J2000_RAD;
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin());
    asc.rem_euclid(TAU).to_degrees()
}
