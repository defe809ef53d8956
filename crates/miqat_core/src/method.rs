//! Calculation conventions and their parameter table.
//!
//! Each [`CalculationMethod`] maps to a fixed [`MethodParams`]: the Fajr
//! depression angle plus a rule each for Maghrib and Isha. The table is a
//! `const` match; nothing mutates it at runtime.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Calculation convention (authority defining the twilight angles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// Ithna Ashari (Leva Research Institute, Qum).
    #[serde(alias = "jafari")]
    Jafari,
    /// University of Islamic Sciences, Karachi.
    #[serde(alias = "karachi")]
    Karachi,
    /// Islamic Society of North America.
    #[serde(rename = "ISNA", alias = "isna")]
    Isna,
    /// Muslim World League.
    #[serde(rename = "MWL", alias = "mwl")]
    Mwl,
    /// Umm al-Qura University, Makkah.
    #[serde(alias = "makkah")]
    Makkah,
    /// Egyptian General Authority of Survey.
    #[serde(alias = "egypt")]
    Egypt,
    /// Caller-defined convention. Currently resolves to MWL-like defaults.
    #[serde(alias = "custom")]
    Custom,
}

/// How Maghrib or Isha is placed relative to the rest of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventRule {
    /// The moment the sun's centre is this many degrees below the horizon.
    Angle(f64),
    /// This many minutes after the reference event (sunset for Maghrib,
    /// Maghrib for Isha).
    MinutesAfter(f64),
}

impl EventRule {
    /// Whether the rule is angle-based.
    pub fn is_angle(self) -> bool {
        matches!(self, Self::Angle(_))
    }

    /// The numeric parameter, degrees or minutes depending on the rule.
    pub fn value(self) -> f64 {
        match self {
            Self::Angle(v) | Self::MinutesAfter(v) => v,
        }
    }

    /// The angle if angle-based, otherwise `fallback`.
    pub fn angle_or(self, fallback: f64) -> f64 {
        match self {
            Self::Angle(a) => a,
            Self::MinutesAfter(_) => fallback,
        }
    }
}

/// The five parameters of a calculation convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodParams {
    /// Fajr: solar depression angle in degrees.
    pub fajr_angle: f64,
    /// Maghrib rule.
    pub maghrib: EventRule,
    /// Isha rule.
    pub isha: EventRule,
}

impl MethodParams {
    pub const fn new(fajr_angle: f64, maghrib: EventRule, isha: EventRule) -> Self {
        Self {
            fajr_angle,
            maghrib,
            isha,
        }
    }
}

impl CalculationMethod {
    /// All methods, in table order.
    pub const ALL: [CalculationMethod; 7] = [
        Self::Jafari,
        Self::Karachi,
        Self::Isna,
        Self::Mwl,
        Self::Makkah,
        Self::Egypt,
        Self::Custom,
    ];

    /// Parameters of this convention.
    pub const fn params(self) -> MethodParams {
        use EventRule::{Angle, MinutesAfter};
        match self {
            Self::Jafari => MethodParams::new(16.0, Angle(4.0), Angle(14.0)),
            Self::Karachi => MethodParams::new(18.0, MinutesAfter(0.0), Angle(18.0)),
            Self::Isna => MethodParams::new(15.0, MinutesAfter(0.0), Angle(15.0)),
            Self::Mwl => MethodParams::new(18.0, MinutesAfter(0.0), Angle(17.0)),
            Self::Makkah => MethodParams::new(19.0, MinutesAfter(0.0), MinutesAfter(90.0)),
            Self::Egypt => MethodParams::new(19.5, MinutesAfter(0.0), Angle(17.5)),
            Self::Custom => MethodParams::new(18.0, MinutesAfter(0.0), Angle(17.0)),
        }
    }

    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jafari => "Jafari",
            Self::Karachi => "Karachi",
            Self::Isna => "ISNA",
            Self::Mwl => "MWL",
            Self::Makkah => "Makkah",
            Self::Egypt => "Egypt",
            Self::Custom => "Custom",
        }
    }
}

impl Display for CalculationMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalculationMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownMethod(s.to_string()))
    }
}

/// Juristic convention for the Asr shadow length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AsrJuristicMethod {
    /// Shadow equals object length (Shafii, Maliki, Hanbali).
    #[default]
    #[serde(alias = "shafii")]
    Shafii,
    /// Shadow equals twice the object length.
    #[serde(alias = "hanafi")]
    Hanafi,
}

impl AsrJuristicMethod {
    pub const ALL: [AsrJuristicMethod; 2] = [Self::Shafii, Self::Hanafi];

    /// Shadow-length multiplier used in the Asr angle.
    pub const fn shadow_factor(self) -> f64 {
        match self {
            Self::Shafii => 1.0,
            Self::Hanafi => 2.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Shafii => "Shafii",
            Self::Hanafi => "Hanafi",
        }
    }
}

impl Display for AsrJuristicMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AsrJuristicMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownAsrMethod(s.to_string()))
    }
}

/// Heuristic used to bound Fajr, Maghrib and Isha at high latitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HighLatitudeMethod {
    /// No adjustment; undefined events stay undefined.
    #[default]
    #[serde(alias = "none")]
    None,
    /// Half of the night.
    #[serde(alias = "midnight")]
    MidNight,
    /// One seventh of the night.
    #[serde(alias = "oneseventh")]
    OneSeventh,
    /// `angle / 60` of the night.
    #[serde(alias = "anglebased")]
    AngleBased,
}

impl HighLatitudeMethod {
    pub const ALL: [HighLatitudeMethod; 4] =
        [Self::None, Self::MidNight, Self::OneSeventh, Self::AngleBased];

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::MidNight => "MidNight",
            Self::OneSeventh => "OneSeventh",
            Self::AngleBased => "AngleBased",
        }
    }
}

impl Display for HighLatitudeMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HighLatitudeMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownHighLatitudeMethod(s.to_string()))
    }
}
