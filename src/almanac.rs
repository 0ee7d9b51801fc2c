//! Sunrise and sunset instants from the "Almanac for Computers" algorithm.
//!
//! Implements the sunrise/sunset procedure published in the *Almanac for Computers*
//! (Nautical Almanac Office, U.S. Naval Observatory, 1990). It is a short closed-form
//! computation with an accuracy of about one to two minutes at mid latitudes, which is
//! what a printed calendar shows.
//!
//! Times are computed for a calendar date in UTC. Callers convert to their own timezone.

use crate::math::{
    acos_deg, atan_deg, cos_deg, normalize, normalize_degrees_0_to_360, sin_deg, tan_deg,
};
use crate::{Horizon, Location, Unavailable};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Seconds per hour (3,600)
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Degrees of longitude per hour of time
const DEGREES_PER_HOUR: f64 = 15.0;

/// Result of a single sunrise or sunset lookup.
pub type SunTime = core::result::Result<DateTime<Utc>, Unavailable>;

/// Provider of sunrise and sunset instants for a date and location.
///
/// Implementations must be deterministic for a given input: calendar generation
/// relies on that to produce identical grids for identical requests.
pub trait SunTimeSource {
    /// Instant of sunrise on `date` at `location`.
    ///
    /// # Errors
    /// Returns [`Unavailable`] when the sun does not rise or set on that date.
    fn sunrise(&self, date: NaiveDate, location: &Location) -> SunTime;

    /// Instant of sunset on `date` at `location`.
    ///
    /// # Errors
    /// Returns [`Unavailable`] when the sun does not rise or set on that date.
    fn sunset(&self, date: NaiveDate, location: &Location) -> SunTime;
}

impl<S: SunTimeSource + ?Sized> SunTimeSource for &S {
    fn sunrise(&self, date: NaiveDate, location: &Location) -> SunTime {
        (**self).sunrise(date, location)
    }

    fn sunset(&self, date: NaiveDate, location: &Location) -> SunTime {
        (**self).sunset(date, location)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SunEvent {
    Rising,
    Setting,
}

/// Sunrise/sunset calculator using the *Almanac for Computers* algorithm.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use sunrise_calendar::{Almanac, Location, SunTimeSource};
///
/// let okc = Location::new("Oklahoma City", 35.514873, -97.538425).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let almanac = Almanac::new();
///
/// let sunrise = almanac.sunrise(date, &okc).unwrap();
/// let sunset = almanac.sunset(date, &okc).unwrap();
/// assert!(sunset > sunrise);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Almanac {
    zenith: f64,
}

impl Default for Almanac {
    fn default() -> Self {
        Self::new()
    }
}

impl Almanac {
    /// Creates a calculator for official sunrise and sunset (zenith 90.8°).
    #[must_use]
    pub fn new() -> Self {
        Self::for_horizon(Horizon::SunriseSunset)
    }

    /// Creates a calculator for the given horizon definition.
    #[must_use]
    pub fn for_horizon(horizon: Horizon) -> Self {
        Self {
            zenith: horizon.zenith_angle(),
        }
    }

    /// Gets the zenith angle in degrees that counts as rising or setting.
    #[must_use]
    pub const fn zenith(&self) -> f64 {
        self.zenith
    }

    /// Calculates sunrise as hours since midnight UTC of `date`, in the range [0, 24).
    ///
    /// # Errors
    /// Returns [`Unavailable::NeverRises`] during polar night and
    /// [`Unavailable::NeverSets`] during polar day.
    pub fn sunrise_hours_utc(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
    ) -> core::result::Result<f64, Unavailable> {
        self.event_hours_utc(date, latitude, longitude, SunEvent::Rising)
    }

    /// Calculates sunset as hours since midnight UTC of `date`, in the range [0, 24).
    ///
    /// The result can be smaller than the sunrise hours of the same date when sunset
    /// falls on the following UTC day; [`SunTimeSource::sunset`] corrects for that.
    ///
    /// # Errors
    /// Returns [`Unavailable::NeverRises`] during polar night and
    /// [`Unavailable::NeverSets`] during polar day.
    pub fn sunset_hours_utc(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
    ) -> core::result::Result<f64, Unavailable> {
        self.event_hours_utc(date, latitude, longitude, SunEvent::Setting)
    }

    fn event_hours_utc(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        event: SunEvent,
    ) -> core::result::Result<f64, Unavailable> {
        let day_of_year = f64::from(date.ordinal());

        // 1. Approximate time of the event, in days
        let longitude_hours = longitude / DEGREES_PER_HOUR;
        let approximate_hour = match event {
            SunEvent::Rising => 6.0,
            SunEvent::Setting => 18.0,
        };
        let t = day_of_year + (approximate_hour - longitude_hours) / 24.0;

        // 2. Sun's mean anomaly and true longitude
        let mean_anomaly = 0.9856 * t - 3.289;
        let true_longitude = normalize_degrees_0_to_360(
            mean_anomaly
                + 1.916 * sin_deg(mean_anomaly)
                + 0.020 * sin_deg(2.0 * mean_anomaly)
                + 282.634,
        );

        // 3. Right ascension, in the same quadrant as the true longitude, in hours
        let right_ascension =
            normalize_degrees_0_to_360(atan_deg(0.91764 * tan_deg(true_longitude)));
        let longitude_quadrant = (true_longitude / 90.0).floor() * 90.0;
        let ascension_quadrant = (right_ascension / 90.0).floor() * 90.0;
        let right_ascension_hours =
            (right_ascension + longitude_quadrant - ascension_quadrant) / DEGREES_PER_HOUR;

        // 4. Declination
        let sin_declination = 0.39782 * sin_deg(true_longitude);
        let cos_declination = sin_declination.asin().cos();

        // 5. Local hour angle
        let cos_hour_angle = (cos_deg(self.zenith) - sin_declination * sin_deg(latitude))
            / (cos_declination * cos_deg(latitude));
        if cos_hour_angle > 1.0 {
            return Err(Unavailable::NeverRises);
        }
        if cos_hour_angle < -1.0 {
            return Err(Unavailable::NeverSets);
        }

        let hour_angle = match event {
            SunEvent::Rising => 360.0 - acos_deg(cos_hour_angle),
            SunEvent::Setting => acos_deg(cos_hour_angle),
        } / DEGREES_PER_HOUR;

        // 6. Local mean time of the event, then back to UTC
        let local_mean_time = hour_angle + right_ascension_hours - 0.06571 * t - 6.622;
        Ok(normalize(local_mean_time - longitude_hours, 24.0))
    }
}

/// Adds fractional hours to UTC midnight of `date`, at whole-second resolution.
fn instant_from_hours(date: NaiveDate, hours: f64) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    midnight + TimeDelta::seconds((hours * SECONDS_PER_HOUR).round() as i64)
}

impl SunTimeSource for Almanac {
    fn sunrise(&self, date: NaiveDate, location: &Location) -> SunTime {
        let hours = self.sunrise_hours_utc(date, location.latitude(), location.longitude())?;
        Ok(instant_from_hours(date, hours))
    }

    fn sunset(&self, date: NaiveDate, location: &Location) -> SunTime {
        let hours = self.sunset_hours_utc(date, location.latitude(), location.longitude())?;
        let sunset = instant_from_hours(date, hours);

        // Keep sunset after the sunrise of the same date
        match self.sunrise(date, location) {
            Ok(sunrise) if sunset < sunrise => Ok(sunset + TimeDelta::days(1)),
            _ => Ok(sunset),
        }
    }
}
