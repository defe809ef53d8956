//! Request/response layer over the prayer-time engine.
//!
//! Maps camelCase request payloads to [`miqat_core::CalculatorParams`],
//! validates date ranges and returns serializable responses. One engine
//! call per calendar day, in ascending date order.

pub mod error;
pub mod range;
pub mod request;
pub mod response;

pub use error::ServiceError;
pub use range::{MAX_RANGE_DAYS, prayer_times_for_day, prayer_times_for_range, validate_range};
pub use request::{PrayerTimesRangeRequest, PrayerTimesRequest};
pub use response::{PrayerTimesResponse, PrayerTimesResponseRange};
