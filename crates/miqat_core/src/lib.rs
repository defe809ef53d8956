//! Islamic prayer-time calculation engine.
//!
//! Computes the seven daily events (Fajr, Sunrise, Dhuhr, Asr, Sunset,
//! Maghrib, Isha) for a location and calendar date from a low-precision
//! solar ephemeris and the hour-angle equation.
//!
//! Layers, bottom up:
//! - [`solar`]: declination and equation of time
//! - [`hour_angle`]: time at which the sun reaches a depression angle, and
//!   its inverse
//! - [`day_times`]: all seven events for one day, timezone corrected
//! - [`high_latitude`]: night-portion bounds for twilight events
//! - [`calculator`]: date/timezone resolution and clock-time output
//!
//! Events the sun never reaches are `None`, never NaN. The calculation
//! itself has no failure modes.

pub mod calculator;
pub mod day_times;
pub mod error;
pub mod high_latitude;
pub mod hour_angle;
pub mod method;
pub mod solar;

pub use calculator::{CalculatorParams, Times, depression_angle_at, prayer_times};
pub use day_times::{DayHours, DayParams, Event, SUNRISE_DEPRESSION_DEG, compute_day_hours};
pub use error::ParseError;
pub use high_latitude::{adjust_high_latitude, night_portion};
pub use hour_angle::{depression_at, mid_day, time_for_angle, time_for_asr};
pub use method::{AsrJuristicMethod, CalculationMethod, EventRule, HighLatitudeMethod, MethodParams};
pub use solar::{SolarPosition, solar_position};
