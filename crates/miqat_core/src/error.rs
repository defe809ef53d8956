//! Error types for the prayer-time engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing engine parameters by name.
///
/// The calculation itself cannot fail: undefined events are reported as
/// absent values, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Unknown calculation method name.
    UnknownMethod(String),
    /// Unknown Asr juristic method name.
    UnknownAsrMethod(String),
    /// Unknown high-latitude adjustment name.
    UnknownHighLatitudeMethod(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMethod(s) => write!(
                f,
                "unknown calculation method '{s}' (expected Jafari, Karachi, ISNA, MWL, Makkah, Egypt or Custom)"
            ),
            Self::UnknownAsrMethod(s) => {
                write!(f, "unknown Asr juristic method '{s}' (expected Shafii or Hanafi)")
            }
            Self::UnknownHighLatitudeMethod(s) => write!(
                f,
                "unknown high-latitude method '{s}' (expected None, MidNight, OneSeventh or AngleBased)"
            ),
        }
    }
}

impl Error for ParseError {}
