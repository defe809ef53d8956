//! Range reduction for angles and clock hours.

/// Reduce an angle to [0, 360) degrees.
pub fn fix_angle(deg: f64) -> f64 {
    wrap(deg, 360.0)
}

/// Reduce a value in hours to [0, 24).
pub fn fix_hour(hours: f64) -> f64 {
    wrap(hours, 24.0)
}

/// Forward difference from `from` to `to` on the 24-hour clock, in [0, 24).
///
/// `time_diff(22.0, 2.0)` is 4 hours: from 22:00 forward to 02:00.
pub fn time_diff(from: f64, to: f64) -> f64 {
    fix_hour(to - from)
}

fn wrap(x: f64, period: f64) -> f64 {
    let r = x.rem_euclid(period);
    // rem_euclid rounds up to `period` for tiny negative inputs
    if r >= period { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_in_range_unchanged() {
        assert!((fix_angle(123.5) - 123.5).abs() < 1e-12);
    }

    #[test]
    fn angle_negative() {
        assert!((fix_angle(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn angle_large() {
        assert!((fix_angle(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn hour_wraps_past_midnight() {
        assert!((fix_hour(25.5) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn hour_negative() {
        assert!((fix_hour(-1.0) - 23.0).abs() < 1e-12);
    }

    #[test]
    fn hour_exactly_24_is_zero() {
        assert_eq!(fix_hour(24.0), 0.0);
    }

    #[test]
    fn hour_tiny_negative_stays_below_24() {
        let h = fix_hour(-1.0e-17);
        assert!((0.0..24.0).contains(&h), "got {h}");
    }

    #[test]
    fn diff_forward_across_midnight() {
        assert!((time_diff(22.0, 2.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn diff_same_day() {
        assert!((time_diff(5.0, 6.5) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn diff_nan_propagates() {
        assert!(time_diff(f64::NAN, 3.0).is_nan());
    }
}
