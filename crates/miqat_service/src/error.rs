//! Error types for request validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use miqat_time::TimeError;

/// Errors from validating or resolving a prayer-times request.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ServiceError {
    /// `from` is after `to`.
    InvalidRange { from: NaiveDate, to: NaiveDate },
    /// The range spans more days than allowed.
    RangeTooLong { days: i64, max: i64 },
    /// The request's timezone or date could not be represented.
    Time(TimeError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { from, to } => {
                write!(f, "the 'from' date ({from}) must not be after the 'to' date ({to})")
            }
            Self::RangeTooLong { days, max } => {
                write!(f, "the date range must not exceed {max} days (got {days})")
            }
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for ServiceError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
