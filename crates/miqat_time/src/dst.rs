//! Daylight-saving providers.
//!
//! The engine never consults the host's timezone database. Callers inject a
//! [`DaylightSaving`] implementation that answers, for a local calendar
//! date, whether the zone observes DST and whether it is in effect at
//! 00:00 local time on that date.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Daylight-saving status of a zone on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DstState {
    /// The zone does not observe daylight-saving time.
    NotObserved,
    /// The zone observes DST but standard time applies on this date.
    Standard,
    /// Daylight-saving time is in effect on this date.
    Daylight,
}

/// Source of daylight-saving information for local dates.
pub trait DaylightSaving {
    /// DST status at 00:00 local time on `date`.
    fn state_on(&self, date: NaiveDate) -> DstState;
}

impl<F> DaylightSaving for F
where
    F: Fn(NaiveDate) -> DstState,
{
    fn state_on(&self, date: NaiveDate) -> DstState {
        self(date)
    }
}

/// Built-in rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DstRule {
    /// No daylight-saving time.
    #[default]
    #[serde(rename = "none")]
    None,
    /// United States and Canada since 2007: second Sunday of March to the
    /// first Sunday of November.
    #[serde(rename = "us")]
    UnitedStates,
    /// European Union: last Sunday of March to the last Sunday of October.
    #[serde(rename = "eu")]
    EuropeanUnion,
}

impl DstRule {
    /// All rules, in declaration order.
    pub const ALL: [DstRule; 3] = [Self::None, Self::UnitedStates, Self::EuropeanUnion];

    /// Short name used on the command line and in config files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::UnitedStates => "us",
            Self::EuropeanUnion => "eu",
        }
    }

    /// First and last local dates of the year on which the clock changes.
    ///
    /// DST is in effect strictly after the first and up to and including
    /// the second, when sampled at 00:00 local.
    pub fn transitions(self, year: i32) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::None => None,
            Self::UnitedStates => Some((
                NaiveDate::from_weekday_of_month_opt(year, 3, Weekday::Sun, 2)?,
                NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Sun, 1)?,
            )),
            Self::EuropeanUnion => Some((
                last_weekday_of_month(year, 3, Weekday::Sun)?,
                last_weekday_of_month(year, 10, Weekday::Sun)?,
            )),
        }
    }
}

impl DaylightSaving for DstRule {
    fn state_on(&self, date: NaiveDate) -> DstState {
        if *self == Self::None {
            return DstState::NotObserved;
        }
        match self.transitions(date.year()) {
            Some((start, end)) if date > start && date <= end => DstState::Daylight,
            Some(_) => DstState::Standard,
            None => DstState::NotObserved,
        }
    }
}

impl Display for DstRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DstRule {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "us" | "unitedstates" => Ok(Self::UnitedStates),
            "eu" | "europeanunion" => Ok(Self::EuropeanUnion),
            _ => Err(TimeError::UnknownDstRule(s.to_string())),
        }
    }
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let last = NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()?;
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    last.checked_sub_days(Days::new(u64::from(back)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn us_transitions_2015() {
        let (start, end) = DstRule::UnitedStates.transitions(2015).unwrap();
        assert_eq!(start, date(2015, 3, 8));
        assert_eq!(end, date(2015, 11, 1));
    }

    #[test]
    fn eu_transitions_2015() {
        let (start, end) = DstRule::EuropeanUnion.transitions(2015).unwrap();
        assert_eq!(start, date(2015, 3, 29));
        assert_eq!(end, date(2015, 10, 25));
    }

    #[test]
    fn us_summer_and_winter() {
        assert_eq!(DstRule::UnitedStates.state_on(date(2015, 8, 3)), DstState::Daylight);
        assert_eq!(DstRule::UnitedStates.state_on(date(2015, 2, 3)), DstState::Standard);
    }

    #[test]
    fn us_spring_forward_day_is_still_standard_at_midnight() {
        assert_eq!(DstRule::UnitedStates.state_on(date(2015, 3, 8)), DstState::Standard);
        assert_eq!(DstRule::UnitedStates.state_on(date(2015, 3, 9)), DstState::Daylight);
    }

    #[test]
    fn us_fall_back_day_is_still_daylight_at_midnight() {
        assert_eq!(DstRule::UnitedStates.state_on(date(2015, 11, 1)), DstState::Daylight);
        assert_eq!(DstRule::UnitedStates.state_on(date(2015, 11, 2)), DstState::Standard);
    }

    #[test]
    fn eu_summer() {
        assert_eq!(DstRule::EuropeanUnion.state_on(date(2024, 7, 1)), DstState::Daylight);
        assert_eq!(DstRule::EuropeanUnion.state_on(date(2024, 12, 1)), DstState::Standard);
    }

    #[test]
    fn none_never_observed() {
        assert_eq!(DstRule::None.state_on(date(2015, 8, 3)), DstState::NotObserved);
    }

    #[test]
    fn last_sunday_of_december_rolls_year() {
        assert_eq!(
            last_weekday_of_month(2023, 12, Weekday::Sun),
            Some(date(2023, 12, 31))
        );
    }

    #[test]
    fn closure_provider() {
        let always = |_: NaiveDate| DstState::Daylight;
        assert_eq!(always.state_on(date(2015, 1, 1)), DstState::Daylight);
    }

    #[test]
    fn parse_names() {
        assert_eq!("US".parse::<DstRule>().unwrap(), DstRule::UnitedStates);
        assert_eq!("eu".parse::<DstRule>().unwrap(), DstRule::EuropeanUnion);
        assert_eq!("none".parse::<DstRule>().unwrap(), DstRule::None);
        assert!(matches!(
            "mars".parse::<DstRule>(),
            Err(TimeError::UnknownDstRule(_))
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for rule in DstRule::ALL {
            assert_eq!(rule.to_string().parse::<DstRule>().unwrap(), rule);
        }
    }
}
