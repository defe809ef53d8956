//! Single-day and date-range scheduling.

use chrono::NaiveDate;
use miqat_core::prayer_times;
use miqat_time::local_midnight;
use tracing::{debug, instrument};

use crate::error::ServiceError;
use crate::request::{PrayerTimesRangeRequest, PrayerTimesRequest};
use crate::response::{PrayerTimesResponse, PrayerTimesResponseRange};

/// Longest allowed span between `from` and `to`, in days.
pub const MAX_RANGE_DAYS: i64 = 365;

/// Check that `from..=to` is ordered and not longer than [`MAX_RANGE_DAYS`].
///
/// Returns the span in days (0 for a single-day range).
pub fn validate_range(from: NaiveDate, to: NaiveDate) -> Result<i64, ServiceError> {
    if from > to {
        return Err(ServiceError::InvalidRange { from, to });
    }
    let days = (to - from).num_days();
    if days > MAX_RANGE_DAYS {
        return Err(ServiceError::RangeTooLong {
            days,
            max: MAX_RANGE_DAYS,
        });
    }
    Ok(days)
}

/// Prayer times for one calendar date.
#[instrument(level = "debug", skip(request), fields(lat = request.latitude, lon = request.longitude))]
pub fn prayer_times_for_day(
    date: NaiveDate,
    request: &PrayerTimesRequest,
) -> Result<PrayerTimesResponse, ServiceError> {
    let at = local_midnight(date, request.time_zone)?;
    let times = prayer_times(
        &at,
        &request.calculator_params(),
        Some(request.time_zone),
        &request.dst,
    );
    Ok(times.into())
}

/// Prayer times for every date in `from_date..=to_date`, ascending.
#[instrument(level = "debug", skip(request), fields(from = %request.from_date, to = %request.to_date))]
pub fn prayer_times_for_range(
    request: &PrayerTimesRangeRequest,
) -> Result<PrayerTimesResponseRange, ServiceError> {
    let span = validate_range(request.from_date, request.to_date)?;
    debug!(days = span + 1, "computing range");

    let entries = request
        .from_date
        .iter_days()
        .take(span as usize + 1)
        .map(|date| prayer_times_for_day(date, &request.day))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PrayerTimesResponseRange {
        prayer_times: entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_day_range() {
        assert_eq!(validate_range(d(2024, 1, 1), d(2024, 1, 1)), Ok(0));
    }

    #[test]
    fn full_year_allowed() {
        assert_eq!(validate_range(d(2024, 1, 1), d(2024, 12, 31)), Ok(365));
    }

    #[test]
    fn reversed_rejected() {
        assert_eq!(
            validate_range(d(2024, 1, 2), d(2024, 1, 1)),
            Err(ServiceError::InvalidRange {
                from: d(2024, 1, 2),
                to: d(2024, 1, 1)
            })
        );
    }

    #[test]
    fn too_long_rejected() {
        assert_eq!(
            validate_range(d(2024, 1, 1), d(2025, 1, 1)),
            Err(ServiceError::RangeTooLong { days: 366, max: 365 })
        );
    }
}
