//! Effective timezone resolution.

use chrono::{DateTime, FixedOffset};

use crate::dst::{DaylightSaving, DstState};

/// UTC offset of a fixed offset, in fractional hours (east positive).
pub fn offset_hours(offset: &FixedOffset) -> f64 {
    f64::from(offset.local_minus_utc()) / 3600.0
}

/// Timezone (hours east of UTC) used for the solar calculation on a date.
///
/// Starts from `explicit` when given, otherwise from the offset carried by
/// `date`. The offset is taken to be the zone's daylight-time offset: on
/// dates where the zone observes DST but standard time applies, one hour is
/// subtracted. Zones that do not observe DST are left unchanged.
pub fn effective_timezone<D>(explicit: Option<f64>, date: &DateTime<FixedOffset>, dst: &D) -> f64
where
    D: DaylightSaving + ?Sized,
{
    let base = explicit.unwrap_or_else(|| offset_hours(date.offset()));
    match dst.state_on(date.date_naive()) {
        DstState::Standard => base - 1.0,
        DstState::Daylight | DstState::NotObserved => base,
    }
}
