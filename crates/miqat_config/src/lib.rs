//! Configuration file for the prayer-time CLI.
//!
//! A TOML file supplies defaults for anything not given on the command
//! line. Every key is optional:
//!
//! ```toml
//! [location]
//! latitude = 47.660918
//! longitude = -122.136371
//!
//! [calculation]
//! method = "ISNA"
//! asr = "Shafii"
//! high_latitude = "AngleBased"
//! dhuhr_minutes = 0
//!
//! [zone]
//! timezone = -7
//! dst = "us"
//! ```
//!
//! The file is found via an explicit path, else the `MIQAT_CONFIG`
//! environment variable, else no file is used.

pub mod error;

use std::path::{Path, PathBuf};

use miqat_core::{AsrJuristicMethod, CalculationMethod, HighLatitudeMethod};
use miqat_time::DstRule;
use serde::Deserialize;
use tracing::debug;

pub use error::ConfigError;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "MIQAT_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub location: LocationConfig,
    pub calculation: CalculationConfig,
    pub zone: ZoneConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculationConfig {
    pub method: Option<CalculationMethod>,
    pub asr: Option<AsrJuristicMethod>,
    pub high_latitude: Option<HighLatitudeMethod>,
    pub dhuhr_minutes: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZoneConfig {
    /// Hours east of UTC.
    pub timezone: Option<f64>,
    pub dst: Option<DstRule>,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `explicit` if given, else from [`CONFIG_ENV_VAR`], else
    /// return the empty configuration.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit.map(Path::to_path_buf).or_else(env_config_path) {
            Some(path) => Self::load(&path),
            None => {
                debug!("no config file; using built-in defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Path from the [`CONFIG_ENV_VAR`] environment variable, if set and non-empty.
pub fn env_config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
