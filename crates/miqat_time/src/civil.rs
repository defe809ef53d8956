//! Parsing and construction helpers for civil dates, clock times and offsets.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};

use crate::error::TimeError;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` clock time.
pub fn parse_clock(s: &str) -> Result<NaiveTime, TimeError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| TimeError::InvalidClock(s.to_string()))
}

/// Fixed offset from fractional hours east of UTC, rounded to the second.
pub fn fixed_offset_from_hours(hours: f64) -> Result<FixedOffset, TimeError> {
    if !hours.is_finite() {
        return Err(TimeError::InvalidOffset(hours));
    }
    let seconds = (hours * 3600.0).round();
    if seconds.abs() >= 86_400.0 {
        return Err(TimeError::InvalidOffset(hours));
    }
    FixedOffset::east_opt(seconds as i32).ok_or(TimeError::InvalidOffset(hours))
}

/// 00:00 local time on `date` at a fixed offset of `offset_hours`.
pub fn local_midnight(date: NaiveDate, offset_hours: f64) -> Result<DateTime<FixedOffset>, TimeError> {
    let offset = fixed_offset_from_hours(offset_hours)?;
    date.and_time(NaiveTime::MIN)
        .and_local_timezone(offset)
        .single()
        .ok_or(TimeError::InvalidOffset(offset_hours))
}
