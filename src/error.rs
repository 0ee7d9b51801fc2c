//! Error types for the sunrise calendar library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Earliest year accepted for a calendar month.
pub const MIN_YEAR: i32 = 1;

/// Latest year accepted for a calendar month.
pub const MAX_YEAR: i32 = 9999;

/// Errors that can occur while preparing or building a calendar.
///
/// Missing sunrise/sunset for a single date is not an error; see
/// [`Unavailable`](crate::Unavailable).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid month number (must be between 1 and 12).
    InvalidMonth {
        /// The invalid month value provided.
        value: u32,
    },
    /// Year outside the supported range.
    InvalidYear {
        /// The invalid year value provided.
        value: i32,
    },
    /// Day of month that does not exist in the given month.
    InvalidDay {
        /// Year of the requested date.
        year: i32,
        /// Month of the requested date.
        month: u32,
        /// The invalid day value provided.
        day: u32,
    },
    /// Invalid elevation angle for a custom horizon.
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// Timezone name not found in the IANA database.
    UnknownTimeZone {
        /// The unrecognised timezone name.
        name: String,
    },
    /// Configuration document could not be parsed.
    InvalidConfig {
        /// Description of the parse failure.
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidMonth { value } => {
                write!(f, "invalid month {value} (must be between 1 and 12)")
            }
            Self::InvalidYear { value } => {
                write!(
                    f,
                    "invalid year {value} (must be between {MIN_YEAR} and {MAX_YEAR})"
                )
            }
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid date {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::UnknownTimeZone { name } => write!(f, "unknown timezone '{name}'"),
            Self::InvalidConfig { message } => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid month error.
    #[must_use]
    pub const fn invalid_month(value: u32) -> Self {
        Self::InvalidMonth { value }
    }

    /// Creates an invalid year error.
    #[must_use]
    pub const fn invalid_year(value: i32) -> Self {
        Self::InvalidYear { value }
    }

    /// Creates an invalid day error.
    #[must_use]
    pub const fn invalid_day(year: i32, month: u32, day: u32) -> Self {
        Self::InvalidDay { year, month, day }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an unknown timezone error.
    #[must_use]
    pub fn unknown_time_zone(name: impl Into<String>) -> Self {
        Self::UnknownTimeZone { name: name.into() }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a month number is between 1 and 12.
///
/// # Errors
/// Returns `InvalidMonth` for any other value.
pub fn check_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_month(month));
    }
    Ok(())
}

/// Validates a year is between [`MIN_YEAR`] and [`MAX_YEAR`].
///
/// # Errors
/// Returns `InvalidYear` for years outside the supported range.
pub fn check_year(year: i32) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::invalid_year(year));
    }
    Ok(())
}
