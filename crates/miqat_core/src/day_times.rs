//! Day-times engine: all seven events for one calendar day.
//!
//! Starting from nominal hours, one refinement pass solves every event with
//! the solar position sampled at its estimated time. The solved local solar
//! hours are then shifted to the requested timezone, minute-based Maghrib
//! and Isha rules are applied, and, if configured, the high-latitude
//! adjustment bounds the twilight events.

use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::high_latitude::adjust_high_latitude;
use crate::hour_angle::{mid_day, time_for_angle, time_for_asr};
use crate::method::{AsrJuristicMethod, EventRule, HighLatitudeMethod, MethodParams};

/// Depression of the sun's centre at sunrise/sunset: 34' refraction plus
/// 16' semidiameter, rounded.
pub const SUNRISE_DEPRESSION_DEG: f64 = 0.833;

/// Number of refinement passes over the nominal estimates. Declination and
/// equation of time change too little within a day for a second pass to
/// move any event by a rounded minute.
const REFINEMENT_PASSES: usize = 1;

/// The seven daily events, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
}

impl Event {
    pub const ALL: [Event; 7] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Sunset,
        Self::Maghrib,
        Self::Isha,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Nominal local hour used to seed the refinement.
    pub const fn seed_hour(self) -> f64 {
        match self {
            Self::Fajr => 5.0,
            Self::Sunrise => 6.0,
            Self::Dhuhr => 12.0,
            Self::Asr => 13.0,
            Self::Sunset | Self::Maghrib | Self::Isha => 18.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Event times in fractional hours; `None` where the event does not occur.
///
/// Values are not wrapped: after timezone correction an event may sit
/// slightly below 0 or above 24.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayHours {
    hours: [Option<f64>; 7],
}

impl DayHours {
    pub fn get(&self, event: Event) -> Option<f64> {
        self.hours[event.index()]
    }

    pub fn set(&mut self, event: Event, hours: Option<f64>) {
        self.hours[event.index()] = hours;
    }

    /// Events paired with their times, chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Event, Option<f64>)> + '_ {
        Event::ALL.into_iter().map(|e| (e, self.get(e)))
    }

    fn shift(mut self, delta_hours: f64) -> Self {
        for h in self.hours.iter_mut().flatten() {
            *h += delta_hours;
        }
        self
    }
}

/// Resolved inputs for one day's computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayParams {
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    pub method: MethodParams,
    pub asr: AsrJuristicMethod,
    pub high_latitude: HighLatitudeMethod,
    /// Minutes added to Dhuhr after transit.
    pub dhuhr_minutes: f64,
}

/// Compute the seven event times for the local solar day `jd`.
///
/// `jd` is the Julian date at 0h already shifted by `−longitude/360`;
/// `timezone` is in hours east of UTC. Returned hours are clock hours in
/// that timezone, not yet wrapped or rounded.
pub fn compute_day_hours(jd: f64, timezone: f64, params: &DayParams) -> DayHours {
    let mut estimates = Event::ALL.map(Event::seed_hour);
    let mut solved = DayHours::default();
    for _ in 0..REFINEMENT_PASSES {
        solved = solve_events(jd, &estimates, params);
        for (e, h) in solved.iter() {
            if let Some(h) = h {
                estimates[e.index()] = h;
            }
        }
    }

    for (event, h) in solved.iter() {
        if h.is_none() {
            debug!(
                %event,
                latitude = params.latitude_deg,
                jd,
                "sun does not reach the event angle"
            );
        }
    }

    let mut hours = solved.shift(timezone - params.longitude_deg / 15.0);

    if let Some(dhuhr) = hours.get(Event::Dhuhr) {
        hours.set(Event::Dhuhr, Some(dhuhr + params.dhuhr_minutes / 60.0));
    }
    if let EventRule::MinutesAfter(m) = params.method.maghrib {
        let sunset = hours.get(Event::Sunset);
        hours.set(Event::Maghrib, sunset.map(|s| s + m / 60.0));
    }
    if let EventRule::MinutesAfter(m) = params.method.isha {
        let maghrib = hours.get(Event::Maghrib);
        hours.set(Event::Isha, maghrib.map(|s| s + m / 60.0));
    }

    adjust_high_latitude(&mut hours, params.high_latitude, &params.method);
    hours
}

/// One pass of the solver at the given hour estimates.
///
/// Minute-based Maghrib/Isha rules are left unsolved; they are derived from
/// their reference event after the timezone shift.
fn solve_events(jd: f64, estimates: &[f64; 7], params: &DayParams) -> DayHours {
    let lat = params.latitude_deg;
    let t = |e: Event| estimates[e.index()] / 24.0;
    let by_rule = |rule: EventRule, e: Event| match rule {
        EventRule::Angle(a) => time_for_angle(jd, a, t(e), lat),
        EventRule::MinutesAfter(_) => None,
    };

    let mut out = DayHours::default();
    out.set(
        Event::Fajr,
        time_for_angle(jd, 180.0 - params.method.fajr_angle, t(Event::Fajr), lat),
    );
    out.set(
        Event::Sunrise,
        time_for_angle(jd, 180.0 - SUNRISE_DEPRESSION_DEG, t(Event::Sunrise), lat),
    );
    out.set(Event::Dhuhr, Some(mid_day(jd, t(Event::Dhuhr))));
    out.set(Event::Asr, time_for_asr(params.asr, jd, t(Event::Asr), lat));
    out.set(
        Event::Sunset,
        time_for_angle(jd, SUNRISE_DEPRESSION_DEG, t(Event::Sunset), lat),
    );
    out.set(Event::Maghrib, by_rule(params.method.maghrib, Event::Maghrib));
    out.set(Event::Isha, by_rule(params.method.isha, Event::Isha));
    out
}
