//! Fractional hours ↔ clock time.

use chrono::{NaiveTime, Timelike};
use miqat_math::fix_hour;

/// Half a minute, added before truncating to whole minutes.
pub const ROUNDING_BIAS_HOURS: f64 = 0.5 / 60.0;

/// Round fractional hours to the nearest minute on the 24-hour clock.
///
/// The value is biased by 30 seconds, wrapped into [0, 24) and truncated to
/// whole hours and minutes. Returns `None` for non-finite input.
pub fn hours_to_clock(hours: f64) -> Option<NaiveTime> {
    if !hours.is_finite() {
        return None;
    }
    let t = fix_hour(hours + ROUNDING_BIAS_HOURS);
    let h = t.floor();
    let m = ((t - h) * 60.0).floor().min(59.0);
    NaiveTime::from_hms_opt(h as u32, m as u32, 0)
}

/// Clock time as fractional hours since midnight.
pub fn clock_to_hours(time: NaiveTime) -> f64 {
    f64::from(time.num_seconds_from_midnight()) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn rounds_to_nearest_minute() {
        // 04:01:40 → 04:02
        let hours = 4.0 + 1.0 / 60.0 + 40.0 / 3600.0;
        assert_eq!(hours_to_clock(hours), Some(hm(4, 2)));
    }

    #[test]
    fn under_half_minute_truncates() {
        // 04:01:20 → 04:01
        let hours = 4.0 + 1.0 / 60.0 + 20.0 / 3600.0;
        assert_eq!(hours_to_clock(hours), Some(hm(4, 1)));
    }

    #[test]
    fn wraps_past_midnight() {
        assert_eq!(hours_to_clock(24.5), Some(hm(0, 30)));
    }

    #[test]
    fn negative_wraps_to_previous_evening() {
        assert_eq!(hours_to_clock(-0.5), Some(hm(23, 30)));
    }

    #[test]
    fn last_half_minute_rounds_to_midnight() {
        assert_eq!(hours_to_clock(23.0 + 59.75 / 60.0), Some(hm(0, 0)));
    }

    #[test]
    fn nan_has_no_clock_time() {
        assert_eq!(hours_to_clock(f64::NAN), None);
        assert_eq!(hours_to_clock(f64::INFINITY), None);
    }

    #[test]
    fn clock_to_hours_inverse() {
        assert!((clock_to_hours(hm(13, 15)) - 13.25).abs() < 1e-12);
    }
}
