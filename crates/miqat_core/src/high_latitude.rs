//! High-latitude adjustment.
//!
//! Near the summer solstice at high latitudes the sun may never reach the
//! Fajr or Isha depression, or reach it so close to midnight that the
//! result is unusable. The adjustment bounds each twilight event to a
//! portion of the night (sunset to next sunrise) and substitutes the bound
//! when the computed time is missing or falls outside it.

use miqat_math::time_diff;
use tracing::trace;

use crate::day_times::{DayHours, Event};
use crate::method::{HighLatitudeMethod, MethodParams};

/// Isha angle used for the bound when Isha is minute-based.
pub const ISHA_FALLBACK_ANGLE: f64 = 18.0;
/// Maghrib angle used for the bound when Maghrib is minute-based.
pub const MAGHRIB_FALLBACK_ANGLE: f64 = 4.0;

/// Fraction of the night allowed between a twilight event and sunrise/sunset.
pub fn night_portion(method: HighLatitudeMethod, angle_deg: f64) -> f64 {
    match method {
        HighLatitudeMethod::AngleBased => angle_deg / 60.0,
        HighLatitudeMethod::MidNight => 0.5,
        HighLatitudeMethod::OneSeventh => 1.0 / 7.0,
        // never consulted: None skips the adjustment entirely
        HighLatitudeMethod::None => 0.0,
    }
}

/// Bound Fajr, Isha and Maghrib to their night portion, in place.
///
/// Needs both sunrise and sunset; without them the night length is unknown
/// and the hours are left as they are.
pub fn adjust_high_latitude(hours: &mut DayHours, method: HighLatitudeMethod, params: &MethodParams) {
    if method == HighLatitudeMethod::None {
        return;
    }
    let (Some(sunrise), Some(sunset)) = (hours.get(Event::Sunrise), hours.get(Event::Sunset))
    else {
        trace!(%method, "no sunrise or sunset; night length undefined");
        return;
    };
    let night = time_diff(sunset, sunrise);

    let fajr_diff = night_portion(method, params.fajr_angle) * night;
    let fajr = hours.get(Event::Fajr);
    if fajr.is_none_or(|f| time_diff(f, sunrise) > fajr_diff) {
        trace!(%method, ?fajr, bound = sunrise - fajr_diff, "fajr replaced");
        hours.set(Event::Fajr, Some(sunrise - fajr_diff));
    }

    let isha_angle = params.isha.angle_or(ISHA_FALLBACK_ANGLE);
    let isha_diff = night_portion(method, isha_angle) * night;
    let isha = hours.get(Event::Isha);
    if isha.is_none_or(|i| time_diff(sunset, i) > isha_diff) {
        trace!(%method, ?isha, bound = sunset + isha_diff, "isha replaced");
        hours.set(Event::Isha, Some(sunset + isha_diff));
    }

    let maghrib_angle = params.maghrib.angle_or(MAGHRIB_FALLBACK_ANGLE);
    let maghrib_diff = night_portion(method, maghrib_angle) * night;
    let maghrib = hours.get(Event::Maghrib);
    if maghrib.is_none_or(|m| time_diff(sunset, m) > maghrib_diff) {
        trace!(%method, ?maghrib, bound = sunset + maghrib_diff, "maghrib replaced");
        hours.set(Event::Maghrib, Some(sunset + maghrib_diff));
    }
}
