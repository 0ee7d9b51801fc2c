//! Core data types for calendar generation.

use crate::error::{check_coordinates, check_month, check_year};
use crate::{Error, Result};
use chrono::NaiveDate;
use core::fmt;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Predefined sun positions that count as "rising" and "setting".
///
/// Each horizon corresponds to a zenith angle the sun's center must cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Official sunrise/sunset (upper limb on the horizon, including refraction)
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.8,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Gets the zenith angle in degrees (90° minus the elevation angle).
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation_angle()
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&elevation_degrees) {
            return Err(Error::invalid_elevation_angle(elevation_degrees));
        }
        Ok(Self::Custom(elevation_degrees))
    }
}

/// A named observer position on the Earth's surface.
///
/// # Example
/// ```
/// # use sunrise_calendar::Location;
/// let home = Location::new("My House", 35.514873, -97.538425).unwrap();
/// assert_eq!(home.label(), "My House");
/// assert!(Location::new("Nowhere", 91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Human-readable label used in calendar titles
    label: String,
    /// Latitude in degrees, north positive
    latitude: f64,
    /// Longitude in degrees, east positive
    longitude: f64,
}

impl Location {
    /// Creates a new location.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn new(label: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            label: label.into(),
            latitude,
            longitude,
        })
    }

    /// Gets the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// The calendar month to generate.
///
/// # Example
/// ```
/// # use sunrise_calendar::MonthSpec;
/// let april = MonthSpec::new(2025, 4).unwrap();
/// assert_eq!(april.name(), "April");
/// assert!(MonthSpec::new(2025, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthSpec {
    year: i32,
    month: u32,
}

impl MonthSpec {
    /// Creates a new month specification.
    ///
    /// # Errors
    /// Returns `InvalidMonth` if month is outside 1-12, or `InvalidYear` if the
    /// year is outside the supported range.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        check_month(month)?;
        check_year(year)?;
        Ok(Self { year, month })
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the English month name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    /// Gets the date of the given day within this month.
    ///
    /// # Errors
    /// Returns `InvalidDay` if the day does not exist in this month.
    pub fn date(&self, day: u32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .ok_or_else(|| Error::invalid_day(self.year, self.month, day))
    }
}

impl fmt::Display for MonthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// Reason a sunrise or sunset instant does not exist for a date and location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unavailable {
    /// Polar night: the sun stays below the horizon all day
    NeverRises,
    /// Polar day: the sun stays above the horizon all day
    NeverSets,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeverRises => {
                f.write_str("the sun never rises on this location on the specified date")
            }
            Self::NeverSets => {
                f.write_str("the sun never sets on this location on the specified date")
            }
        }
    }
}

impl std::error::Error for Unavailable {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_angles() {
        assert_eq!(Horizon::SunriseSunset.elevation_angle(), -0.8);
        assert!((Horizon::SunriseSunset.zenith_angle() - 90.8).abs() < 1e-12);
        assert_eq!(Horizon::CivilTwilight.zenith_angle(), 96.0);
        assert_eq!(Horizon::NauticalTwilight.zenith_angle(), 102.0);
        assert_eq!(Horizon::AstronomicalTwilight.zenith_angle(), 108.0);

        let custom = Horizon::custom(-3.0).unwrap();
        assert_eq!(custom.zenith_angle(), 93.0);

        assert!(Horizon::custom(-95.0).is_err());
        assert!(Horizon::custom(95.0).is_err());
    }

    #[test]
    fn test_location_creation() {
        let location = Location::new("My House", 35.514873, -97.538425).unwrap();
        assert_eq!(location.label(), "My House");
        assert_eq!(location.latitude(), 35.514873);
        assert_eq!(location.longitude(), -97.538425);

        assert_eq!(
            Location::new("x", 0.0, 200.0),
            Err(Error::invalid_longitude(200.0))
        );
        assert_eq!(
            Location::new("x", -95.0, 0.0),
            Err(Error::invalid_latitude(-95.0))
        );
    }

    #[test]
    fn test_month_spec_validation() {
        assert!(MonthSpec::new(2024, 1).is_ok());
        assert!(MonthSpec::new(2024, 12).is_ok());
        assert_eq!(MonthSpec::new(2024, 0), Err(Error::invalid_month(0)));
        assert_eq!(MonthSpec::new(2024, 13), Err(Error::invalid_month(13)));
        assert_eq!(MonthSpec::new(0, 5), Err(Error::invalid_year(0)));
    }

    #[test]
    fn test_month_spec_names() {
        let names: Vec<_> = (1..=12)
            .map(|m| MonthSpec::new(2025, m).unwrap().name())
            .collect();
        assert_eq!(names, MONTH_NAMES);
        assert_eq!(MonthSpec::new(1999, 12).unwrap().to_string(), "December 1999");
    }

    #[test]
    fn test_month_spec_dates() {
        let feb = MonthSpec::new(2023, 2).unwrap();
        assert_eq!(feb.date(28).unwrap(), NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
        assert_eq!(feb.date(29), Err(Error::invalid_day(2023, 2, 29)));
        assert!(MonthSpec::new(2024, 2).unwrap().date(29).is_ok());
    }

    #[test]
    fn test_unavailable_messages() {
        assert_eq!(
            Unavailable::NeverRises.to_string(),
            "the sun never rises on this location on the specified date"
        );
        assert_eq!(
            Unavailable::NeverSets.to_string(),
            "the sun never sets on this location on the specified date"
        );
    }
}
