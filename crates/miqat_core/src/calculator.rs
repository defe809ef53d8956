//! Public calculation entry points.
//!
//! [`prayer_times`] resolves the effective timezone and the local solar
//! Julian date for a calendar day, runs the day-times engine and converts
//! the resulting hours to clock times. [`depression_angle_at`] runs the
//! geometry backwards: given an observed clock time, the sun's depression.

use chrono::{DateTime, FixedOffset, NaiveTime};
use miqat_time::{DaylightSaving, clock_to_hours, effective_timezone, hours_to_clock, local_solar_jd};
use tracing::debug;

use crate::day_times::{DayParams, Event, compute_day_hours};
use crate::hour_angle::depression_at;
use crate::method::{AsrJuristicMethod, CalculationMethod, HighLatitudeMethod, MethodParams};

/// Location and conventions for a calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorParams {
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    pub method: CalculationMethod,
    /// Overrides the table entry for `method` when set.
    pub custom: Option<MethodParams>,
    pub asr: AsrJuristicMethod,
    pub high_latitude: HighLatitudeMethod,
    /// Minutes added to Dhuhr after solar transit.
    pub dhuhr_minutes: f64,
}

impl CalculatorParams {
    /// Parameters with no high-latitude adjustment and no Dhuhr offset.
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        method: CalculationMethod,
        asr: AsrJuristicMethod,
    ) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            method,
            custom: None,
            asr,
            high_latitude: HighLatitudeMethod::None,
            dhuhr_minutes: 0.0,
        }
    }

    pub fn with_high_latitude(mut self, high_latitude: HighLatitudeMethod) -> Self {
        self.high_latitude = high_latitude;
        self
    }

    pub fn with_dhuhr_minutes(mut self, minutes: f64) -> Self {
        self.dhuhr_minutes = minutes;
        self
    }

    /// Use caller-supplied angles and rules instead of the method table.
    pub fn with_custom_params(mut self, params: MethodParams) -> Self {
        self.custom = Some(params);
        self
    }

    /// The method parameters actually used.
    pub fn method_params(&self) -> MethodParams {
        self.custom.unwrap_or_else(|| self.method.params())
    }

    fn day_params(&self) -> DayParams {
        DayParams {
            latitude_deg: self.latitude_deg,
            longitude_deg: self.longitude_deg,
            method: self.method_params(),
            asr: self.asr,
            high_latitude: self.high_latitude,
            dhuhr_minutes: self.dhuhr_minutes,
        }
    }
}

/// The seven event times of one day, as local clock times.
///
/// A `None` field means the sun does not reach the event's angle on that
/// date and no high-latitude adjustment supplied a substitute.
///
/// Clock times are in the effective timezone chosen by [`prayer_times`],
/// which is not always the offset carried by `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Times {
    /// The calendar date the times belong to, as supplied by the caller.
    pub date: DateTime<FixedOffset>,
    pub fajr: Option<NaiveTime>,
    pub sunrise: Option<NaiveTime>,
    pub dhuhr: Option<NaiveTime>,
    pub asr: Option<NaiveTime>,
    pub sunset: Option<NaiveTime>,
    pub maghrib: Option<NaiveTime>,
    pub isha: Option<NaiveTime>,
}

impl Times {
    pub fn get(&self, event: Event) -> Option<NaiveTime> {
        match event {
            Event::Fajr => self.fajr,
            Event::Sunrise => self.sunrise,
            Event::Dhuhr => self.dhuhr,
            Event::Asr => self.asr,
            Event::Sunset => self.sunset,
            Event::Maghrib => self.maghrib,
            Event::Isha => self.isha,
        }
    }
}

/// Prayer times for the calendar date of `date`.
///
/// Only the date part of `date` is used. `timezone` (hours east of UTC)
/// takes precedence over the offset carried by `date`; either way it is
/// read as the zone's daylight-time offset and `dst` decides whether one
/// hour is backed out for the date. A `date` that already carries its
/// standard-time offset (say `-08:00` in February under US rules) has the
/// hour backed out a second time.
pub fn prayer_times<D>(
    date: &DateTime<FixedOffset>,
    params: &CalculatorParams,
    timezone: Option<f64>,
    dst: &D,
) -> Times
where
    D: DaylightSaving + ?Sized,
{
    let tz = effective_timezone(timezone, date, dst);
    let jd = local_solar_jd(date.date_naive(), params.longitude_deg);
    debug!(
        date = %date.date_naive(),
        timezone = tz,
        jd,
        method = %params.method,
        "computing prayer times"
    );

    let hours = compute_day_hours(jd, tz, &params.day_params());
    let clock = |e: Event| hours.get(e).and_then(hours_to_clock);
    Times {
        date: *date,
        fajr: clock(Event::Fajr),
        sunrise: clock(Event::Sunrise),
        dhuhr: clock(Event::Dhuhr),
        asr: clock(Event::Asr),
        sunset: clock(Event::Sunset),
        maghrib: clock(Event::Maghrib),
        isha: clock(Event::Isha),
    }
}

/// Depression of the sun (degrees below the horizon) at a local clock time
/// on the calendar date of `date`.
///
/// Timezone resolution matches [`prayer_times`]. Negative results mean the
/// sun is above the horizon. Feeding an observed Fajr or Isha time back in
/// recovers the twilight angle behind it.
pub fn depression_angle_at<D>(
    date: &DateTime<FixedOffset>,
    clock: NaiveTime,
    params: &CalculatorParams,
    timezone: Option<f64>,
    dst: &D,
) -> f64
where
    D: DaylightSaving + ?Sized,
{
    let tz = effective_timezone(timezone, date, dst);
    let jd = local_solar_jd(date.date_naive(), params.longitude_deg);
    let solar_hour = clock_to_hours(clock) - (tz - params.longitude_deg / 15.0);
    depression_at(jd, solar_hour, params.latitude_deg)
}
