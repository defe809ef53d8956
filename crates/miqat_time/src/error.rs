//! Error types for calendar and civil-time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date parsing, offsets, or DST rule lookup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar date string could not be parsed.
    InvalidDate(String),
    /// A clock time string could not be parsed.
    InvalidClock(String),
    /// A UTC offset in hours outside the representable range.
    InvalidOffset(f64),
    /// Unknown daylight-saving rule name.
    UnknownDstRule(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date (expected YYYY-MM-DD): {s}"),
            Self::InvalidClock(s) => write!(f, "invalid clock time (expected HH:MM): {s}"),
            Self::InvalidOffset(h) => write!(f, "UTC offset out of range: {h} hours"),
            Self::UnknownDstRule(s) => {
                write!(f, "unknown daylight-saving rule '{s}' (expected none, us or eu)")
            }
        }
    }
}

impl Error for TimeError {}
