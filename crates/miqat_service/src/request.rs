//! Request payloads (camelCase JSON).

use chrono::NaiveDate;
use miqat_core::{AsrJuristicMethod, CalculationMethod, CalculatorParams, HighLatitudeMethod};
use miqat_time::DstRule;
use serde::{Deserialize, Serialize};

/// Location, conventions and zone for a single day. The date itself is
/// supplied separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimesRequest {
    /// Hours east of UTC; the zone's daylight-time offset when `dst` is set.
    pub time_zone: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub calculation_method: CalculationMethod,
    pub asr_juristic_method: AsrJuristicMethod,
    #[serde(default)]
    pub high_latitude_adjustment_method: HighLatitudeMethod,
    #[serde(default)]
    pub dhuhr_minutes: f64,
    /// Daylight-saving rule of the zone.
    #[serde(default)]
    pub dst: DstRule,
}

impl PrayerTimesRequest {
    pub fn new(
        time_zone: f64,
        latitude: f64,
        longitude: f64,
        calculation_method: CalculationMethod,
        asr_juristic_method: AsrJuristicMethod,
    ) -> Self {
        Self {
            time_zone,
            latitude,
            longitude,
            calculation_method,
            asr_juristic_method,
            high_latitude_adjustment_method: HighLatitudeMethod::None,
            dhuhr_minutes: 0.0,
            dst: DstRule::None,
        }
    }

    pub fn calculator_params(&self) -> CalculatorParams {
        CalculatorParams::new(
            self.latitude,
            self.longitude,
            self.calculation_method,
            self.asr_juristic_method,
        )
        .with_high_latitude(self.high_latitude_adjustment_method)
        .with_dhuhr_minutes(self.dhuhr_minutes)
    }
}

/// An inclusive date range plus the per-day request fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimesRangeRequest {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(flatten)]
    pub day: PrayerTimesRequest,
}
