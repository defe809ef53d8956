//! Response payloads.
//!
//! Times serialize as `"HH:MM"`, or `null` when the event does not occur.

use chrono::{DateTime, FixedOffset, NaiveTime};
use miqat_core::Times;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimesResponse {
    pub date: DateTime<FixedOffset>,
    #[serde(with = "hhmm")]
    pub fajr: Option<NaiveTime>,
    #[serde(with = "hhmm")]
    pub sunrise: Option<NaiveTime>,
    #[serde(with = "hhmm")]
    pub dhuhr: Option<NaiveTime>,
    #[serde(with = "hhmm")]
    pub asr: Option<NaiveTime>,
    #[serde(with = "hhmm")]
    pub sunset: Option<NaiveTime>,
    #[serde(with = "hhmm")]
    pub maghrib: Option<NaiveTime>,
    #[serde(with = "hhmm")]
    pub isha: Option<NaiveTime>,
}

impl From<Times> for PrayerTimesResponse {
    fn from(t: Times) -> Self {
        Self {
            date: t.date,
            fajr: t.fajr,
            sunrise: t.sunrise,
            dhuhr: t.dhuhr,
            asr: t.asr,
            sunset: t.sunset,
            maghrib: t.maghrib,
            isha: t.isha,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimesResponseRange {
    pub prayer_times: Vec<PrayerTimesResponse>,
}

impl FromIterator<Times> for PrayerTimesResponseRange {
    fn from_iter<I: IntoIterator<Item = Times>>(iter: I) -> Self {
        Self {
            prayer_times: iter.into_iter().map(PrayerTimesResponse::from).collect(),
        }
    }
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.collect_str(&t.format(FORMAT)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|s| NaiveTime::parse_from_str(&s, FORMAT).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample() -> PrayerTimesResponse {
        let date = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2015, 6, 21, 0, 0, 0)
            .unwrap();
        PrayerTimesResponse {
            date,
            fajr: None,
            sunrise: NaiveTime::from_hms_opt(3, 54, 0),
            dhuhr: NaiveTime::from_hms_opt(13, 19, 0),
            asr: NaiveTime::from_hms_opt(18, 0, 0),
            sunset: NaiveTime::from_hms_opt(22, 44, 0),
            maghrib: NaiveTime::from_hms_opt(22, 44, 0),
            isha: None,
        }
    }

    #[test]
    fn serializes_clock_strings_and_nulls() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["date"], "2015-06-21T00:00:00+02:00");
        assert_eq!(v["sunrise"], "03:54");
        assert_eq!(v["asr"], "18:00");
        assert!(v["fajr"].is_null());
        assert!(v["isha"].is_null());
    }

    #[test]
    fn reads_back_what_it_writes() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: PrayerTimesResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn range_wraps_list() {
        let range: PrayerTimesResponseRange = PrayerTimesResponseRange {
            prayer_times: vec![sample()],
        };
        let v = serde_json::to_value(&range).unwrap();
        assert_eq!(v["prayerTimes"].as_array().unwrap().len(), 1);
    }
}
