//! Calendar and civil-time support for the prayer-time engine.
//!
//! This crate provides:
//! - Calendar date → Julian date conversion, corrected to local mean solar time
//! - A daylight-saving provider interface with rule-based implementations
//! - Effective timezone resolution for a date
//! - Conversion between fractional hours and clock times

pub mod civil;
pub mod clock;
pub mod dst;
pub mod error;
pub mod julian;
pub mod zone;

pub use civil::{fixed_offset_from_hours, local_midnight, parse_clock, parse_date};
pub use clock::{ROUNDING_BIAS_HOURS, clock_to_hours, hours_to_clock};
pub use dst::{DaylightSaving, DstRule, DstState};
pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, date_to_jd, local_solar_jd};
pub use zone::{effective_timezone, offset_hours};
