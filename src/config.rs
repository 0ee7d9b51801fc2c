//! Location and timezone configuration.
//!
//! The configuration is a small TOML document:
//!
//! ```toml
//! [location]
//! label = "My House"
//! latitude = 35.514873
//! longitude = -97.538425
//! timezone = "America/Chicago"
//! ```
//!
//! Every key is optional and falls back to the defaults shown above.

use crate::{Error, Location, Result};
use chrono_tz::Tz;
use serde::Deserialize;

/// Top-level calendar configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Observer location and timezone.
    #[serde(default)]
    pub location: LocationConfig,
}

/// Raw location settings as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    /// Label shown in calendar titles.
    #[serde(default = "default_label")]
    pub label: String,
    /// Latitude in degrees, north positive.
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// IANA timezone name for clock times.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_label() -> String {
    "My House".to_string()
}
fn default_latitude() -> f64 {
    35.514873
}
fn default_longitude() -> f64 {
    -97.538425
}
fn default_timezone() -> String {
    "America/Chicago".to_string()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
        }
    }
}

/// Validated settings for one calendar run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Observer location.
    pub location: Location,
    /// Timezone used for clock times.
    pub timezone: Tz,
}

impl CalendarConfig {
    /// Parses a TOML configuration document.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the document is not valid TOML or has unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// Validates the configuration and resolves the timezone name.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `UnknownTimeZone`.
    pub fn resolve(&self) -> Result<Settings> {
        let LocationConfig {
            label,
            latitude,
            longitude,
            timezone,
        } = &self.location;
        let location = Location::new(label.clone(), *latitude, *longitude)?;
        let timezone = parse_time_zone(timezone)?;
        Ok(Settings { location, timezone })
    }
}

/// Looks up an IANA timezone name, e.g. `America/Chicago`.
///
/// # Errors
/// Returns `UnknownTimeZone` if the name is not in the timezone database.
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|_| Error::unknown_time_zone(name))
}
