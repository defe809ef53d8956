//! Hour-angle solver: clock time at which the sun reaches a given angle.
//!
//! All times here are local mean solar hours on the day of `jd` (the Julian
//! date already shifted by longitude), before timezone correction.
//! `day_fraction` is the current estimate of the event time as a fraction of
//! the day; the solar position is sampled there.
//!
//! For a target depression `a`, latitude `φ` and declination `δ`:
//!
//! `cos H = (−sin a − sin φ · sin δ) / (cos φ · cos δ)`
//!
//! and the event lies `H / 15` hours before or after solar transit.

use miqat_math::{darccos, darccot, darcsin, dcos, dsin, dtan, fix_hour};

use crate::method::AsrJuristicMethod;
use crate::solar::{SolarPosition, solar_position};

/// Solar transit (Dhuhr) in local solar hours.
pub fn mid_day(jd: f64, day_fraction: f64) -> f64 {
    transit(&solar_position(jd + day_fraction))
}

fn transit(pos: &SolarPosition) -> f64 {
    fix_hour(12.0 - pos.equation_of_time_hours)
}

/// Time at which the sun's centre is `angle_deg` below the horizon.
///
/// Angles above 90° select the morning side of transit: Fajr and Sunrise
/// pass `180 − depression`. Anything else is the afternoon/evening side.
///
/// Returns `None` when the sun never reaches the angle on this day (the
/// cosine of the hour angle falls outside [−1, 1]).
pub fn time_for_angle(jd: f64, angle_deg: f64, day_fraction: f64, latitude_deg: f64) -> Option<f64> {
    let pos = solar_position(jd + day_fraction);
    let dec = pos.declination_deg;
    let z = transit(&pos);

    let cos_h = (-dsin(angle_deg) - dsin(dec) * dsin(latitude_deg))
        / (dcos(dec) * dcos(latitude_deg));
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }

    let v = darccos(cos_h) / 15.0;
    Some(if angle_deg > 90.0 { z - v } else { z + v })
}

/// Time of Asr: the shadow of a vertical object equals its noon shadow plus
/// `shadow_factor` times its length.
pub fn time_for_asr(
    method: AsrJuristicMethod,
    jd: f64,
    day_fraction: f64,
    latitude_deg: f64,
) -> Option<f64> {
    let dec = solar_position(jd + day_fraction).declination_deg;
    let angle = -darccot(method.shadow_factor() + dtan((latitude_deg - dec).abs()));
    time_for_angle(jd, angle, day_fraction, latitude_deg)
}

/// Depression of the sun's centre below the horizon at a local solar hour.
///
/// Negative when the sun is above the horizon. Inverse of
/// [`time_for_angle`], used to derive a twilight angle from an observed
/// Fajr or Isha time.
pub fn depression_at(jd: f64, solar_hour: f64, latitude_deg: f64) -> f64 {
    let pos = solar_position(jd + solar_hour / 24.0);
    let dec = pos.declination_deg;
    let h = (solar_hour - transit(&pos)) * 15.0;
    let sin_alt = dsin(latitude_deg) * dsin(dec) + dcos(latitude_deg) * dcos(dec) * dcos(h);
    -darcsin(sin_alt.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2015-08-03, Redmond WA, local solar day
    const JD: f64 = 2_457_237.5 + 122.136371 / 360.0;
    const LAT: f64 = 47.660918;

    #[test]
    fn transit_near_noon() {
        let z = mid_day(JD, 0.5);
        // EqT early August ≈ −6 min
        assert!((z - 12.1).abs() < 0.05, "transit = {z}");
    }

    #[test]
    fn sunrise_and_sunset_bracket_transit() {
        let z = mid_day(JD, 0.5);
        let rise = time_for_angle(JD, 180.0 - 0.833, 0.5, LAT).unwrap();
        let set = time_for_angle(JD, 0.833, 0.5, LAT).unwrap();
        assert!(rise < z && z < set);
        // same sample point → symmetric about transit
        assert!(((z - rise) - (set - z)).abs() < 1e-9);
    }

    #[test]
    fn deeper_angle_is_further_from_transit() {
        let fajr15 = time_for_angle(JD, 165.0, 5.0 / 24.0, LAT).unwrap();
        let fajr18 = time_for_angle(JD, 162.0, 5.0 / 24.0, LAT).unwrap();
        assert!(fajr18 < fajr15);
    }

    #[test]
    fn polar_night_has_no_sunrise() {
        // Tromsø, December solstice
        let jd = 2_457_377.5 - 18.9553 / 360.0;
        assert_eq!(time_for_angle(jd, 180.0 - 0.833, 0.25, 69.6492), None);
        assert_eq!(time_for_angle(jd, 0.833, 0.75, 69.6492), None);
    }

    #[test]
    fn midnight_sun_has_no_twilight() {
        // Oslo, June solstice: sun never 15 deg below the horizon
        let jd = 2_457_194.5 - 10.7522 / 360.0;
        assert_eq!(time_for_angle(jd, 165.0, 5.0 / 24.0, 59.9139), None);
        assert!(time_for_angle(jd, 180.0 - 0.833, 0.25, 59.9139).is_some());
    }

    #[test]
    fn hanafi_asr_is_later() {
        let shafii = time_for_asr(AsrJuristicMethod::Shafii, JD, 13.0 / 24.0, LAT).unwrap();
        let hanafi = time_for_asr(AsrJuristicMethod::Hanafi, JD, 13.0 / 24.0, LAT).unwrap();
        let z = mid_day(JD, 0.5);
        assert!(z < shafii && shafii < hanafi, "z={z} shafii={shafii} hanafi={hanafi}");
    }

    #[test]
    fn depression_at_transit() {
        let z = mid_day(JD, 0.5);
        let dec = solar_position(JD + z / 24.0).declination_deg;
        let d = depression_at(JD, mid_day(JD, z / 24.0), LAT);
        let expected = -(90.0 - (LAT - dec).abs());
        assert!((d - expected).abs() < 1e-6, "d={d} expected={expected}");
    }

    #[test]
    fn depression_inverts_time_for_angle() {
        let t = time_for_angle(JD, 165.0, 4.0 / 24.0, LAT).unwrap();
        let d = depression_at(JD, t, LAT);
        assert!((d - 15.0).abs() < 0.05, "depression = {d}");
    }
}
