//! Low-precision solar ephemeris.
//!
//! Mean anomaly and mean longitude are linear in days since J2000.0; the
//! ecliptic longitude adds the first two terms of the equation of centre.
//! Good to about a minute of time in the resulting rise/set estimates for
//! dates within a couple of centuries of J2000.
//!
//! Sources: USNO "Approximate Solar Coordinates"; Meeus, *Astronomical
//! Algorithms*, ch. 25 (low-accuracy method).

use miqat_math::{darcsin, darctan2, dcos, dsin, fix_angle, fix_hour};
use miqat_time::J2000_JD;

/// Sun's declination and the equation of time at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Declination in degrees, north positive.
    pub declination_deg: f64,
    /// Mean minus apparent solar time, in hours, within [-12, 12).
    pub equation_of_time_hours: f64,
}

/// Solar declination and equation of time at a (fractional) Julian date.
pub fn solar_position(jd: f64) -> SolarPosition {
    let d = jd - J2000_JD;

    let g = fix_angle(357.529 + 0.985_600_28 * d);
    let q = fix_angle(280.459 + 0.985_647_36 * d);
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));

    let e = 23.439 - 0.000_000_36 * d;

    let declination_deg = darcsin(dsin(e) * dsin(l));
    let ra_hours = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0);

    // q/15 and RA wrap at different instants near the March equinox
    let equation_of_time_hours = fix_hour(q / 15.0 - ra_hours + 12.0) - 12.0;

    SolarPosition {
        declination_deg,
        equation_of_time_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declination_june_solstice() {
        // 2015-06-21 12:00 → ~+23.44
        let p = solar_position(2_457_195.0);
        assert!(
            (p.declination_deg - 23.44).abs() < 0.05,
            "dec = {}",
            p.declination_deg
        );
    }

    #[test]
    fn declination_december_solstice() {
        // 2015-12-22 12:00 → ~-23.44
        let p = solar_position(2_457_379.0);
        assert!(
            (p.declination_deg + 23.44).abs() < 0.05,
            "dec = {}",
            p.declination_deg
        );
    }

    #[test]
    fn declination_near_zero_at_equinox() {
        // 2015-03-20 22:45 UT equinox
        let p = solar_position(2_457_102.448);
        assert!(p.declination_deg.abs() < 0.05, "dec = {}", p.declination_deg);
    }

    #[test]
    fn equation_of_time_early_november_maximum() {
        // Sundial fast by ~16.4 min around Nov 3
        let p = solar_position(2_457_330.0);
        let minutes = p.equation_of_time_hours * 60.0;
        assert!((minutes - 16.4).abs() < 0.3, "EqT = {minutes} min");
    }

    #[test]
    fn equation_of_time_mid_february_minimum() {
        // Sundial slow by ~14.2 min around Feb 11
        let p = solar_position(2_457_064.5);
        let minutes = p.equation_of_time_hours * 60.0;
        assert!((minutes + 14.2).abs() < 0.3, "EqT = {minutes} min");
    }

    #[test]
    fn equation_of_time_continuous_through_equinox() {
        let p = solar_position(2_457_102.448);
        let minutes = p.equation_of_time_hours * 60.0;
        assert!((minutes + 7.4).abs() < 0.3, "EqT = {minutes} min");
    }

    #[test]
    fn equation_of_time_stays_small() {
        for i in 0..(366 * 4) {
            let p = solar_position(2_457_023.5 + f64::from(i) / 4.0);
            assert!(
                p.equation_of_time_hours.abs() < 0.3,
                "day {i}: EqT = {}",
                p.equation_of_time_hours
            );
        }
    }
}
