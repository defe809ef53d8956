//! Calendar date → Julian date.

use chrono::{Datelike, NaiveDate};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian date at 0h for a calendar date.
///
/// `JD = C + day + ⌊365.25·(year + 4716)⌋ + ⌊30.6001·(month + 1)⌋ − 1524.5`
/// with `A = year / 100` (truncated) and `C = 2 − A + ⌊A/4⌋`.
///
/// January and February are not shifted into the previous year, so those
/// months run early (one day in January, three in February) and Jan 31 and
/// Feb 1 share a day number. Published timetables generated by this engine
/// carry that offset; do not "fix" it without regenerating them.
pub fn calendar_to_jd(year: i32, month: u32, day: u32) -> f64 {
    let a = (year / 100) as f64;
    let b = (a / 4.0).floor();
    let c = 2.0 - a + b;
    let e = (365.25 * (year as f64 + 4716.0)).floor();
    let f = (30.6001 * (month as f64 + 1.0)).floor();
    c + day as f64 + e + f - 1524.5
}

/// [`calendar_to_jd`] for a `chrono` date.
pub fn date_to_jd(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), date.day())
}

/// Julian date shifted to the local mean solar day of a longitude.
///
/// `JD_local = JD − longitude / (15 · 24)`, longitude east positive.
pub fn local_solar_jd(date: NaiveDate, longitude_deg: f64) -> f64 {
    date_to_jd(date) - longitude_deg / (15.0 * 24.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_runs_one_day_early() {
        // true JD of 2000-01-01 0h is 2451544.5
        assert!((calendar_to_jd(2000, 1, 1) - 2_451_543.5).abs() < 1e-9);
    }

    #[test]
    fn month_boundary_repeats_day_number() {
        assert_eq!(calendar_to_jd(2015, 1, 31), calendar_to_jd(2015, 2, 1));
    }

    #[test]
    fn august_matches_astronomical_jd() {
        assert!((calendar_to_jd(2015, 8, 3) - 2_457_237.5).abs() < 1e-9);
    }

    #[test]
    fn march_matches_astronomical_jd() {
        assert!((calendar_to_jd(2015, 3, 1) - 2_457_082.5).abs() < 1e-9);
    }

    #[test]
    fn february_runs_three_days_early() {
        assert!((calendar_to_jd(2015, 2, 3) - 2_457_053.5).abs() < 1e-9);
    }

    #[test]
    fn chrono_date_agrees() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        assert_eq!(date_to_jd(d), calendar_to_jd(2024, 6, 21));
    }

    #[test]
    fn local_jd_west_is_later() {
        let d = NaiveDate::from_ymd_opt(2015, 8, 3).unwrap();
        let jd = local_solar_jd(d, -90.0);
        // 90 deg west → +0.25 day
        assert!((jd - (2_457_237.5 + 0.25)).abs() < 1e-9);
    }

    #[test]
    fn local_jd_greenwich_unchanged() {
        let d = NaiveDate::from_ymd_opt(2015, 8, 3).unwrap();
        assert_eq!(local_solar_jd(d, 0.0), date_to_jd(d));
    }
}
