//! Per-date sunrise, sunset, solar noon and day/night length records.
//!
//! All arithmetic happens on absolute instants; conversion to the local timezone is
//! done only when formatting the clock times.

use crate::{Location, SunTimeSource};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Timelike};
use core::fmt;
use tracing::{trace, warn};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: u32 = 86_400;

/// 12-hour clock format with zero-padded hour, e.g. `06:42 AM`.
const CLOCK_FORMAT: &str = "%I:%M %p";

/// A length of time within a single day, at whole-second resolution.
///
/// # Example
/// ```
/// # use sunrise_calendar::TimeLength;
/// let day = TimeLength::from_hms(13, 42, 7).unwrap();
/// assert_eq!(day.to_string(), "13:42:07");
/// assert_eq!(day.complement().to_string(), "10:17:53");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeLength(u32);

impl TimeLength {
    /// Zero length.
    pub const ZERO: Self = Self(0);

    /// A full day (24:00:00).
    pub const FULL_DAY: Self = Self(SECONDS_PER_DAY);

    /// Creates a length from a second count of at most one day.
    #[must_use]
    pub const fn from_seconds(seconds: u32) -> Option<Self> {
        if seconds > SECONDS_PER_DAY {
            None
        } else {
            Some(Self(seconds))
        }
    }

    /// Creates a length from hours, minutes and seconds.
    #[must_use]
    pub const fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        if minutes > 59 || seconds > 59 || hours > 24 {
            return None;
        }
        Self::from_seconds(hours * 3600 + minutes * 60 + seconds)
    }

    /// Length of the period from `start` to `end`, truncated to whole seconds.
    ///
    /// The result is taken modulo one day, so it is never negative.
    #[must_use]
    pub fn between<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Self {
        let seconds = end
            .clone()
            .signed_duration_since(start.clone())
            .num_seconds()
            .rem_euclid(i64::from(SECONDS_PER_DAY));
        // rem_euclid keeps the value in [0, 86400)
        Self(u32::try_from(seconds).unwrap_or(0))
    }

    /// Remaining time of the day: `24:00:00 - self`.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(SECONDS_PER_DAY - self.0)
    }

    /// Total number of seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.0
    }

    /// Whole hours.
    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.0 / 3600
    }

    /// Minutes past the whole hours.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        (self.0 % 3600) / 60
    }

    /// Seconds past the whole minutes.
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for TimeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

/// Sunrise, sunset and derived values for one date, formatted in a local timezone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayTimes {
    sunrise: String,
    sunset: String,
    solar_noon: String,
    day_length: TimeLength,
    night_length: TimeLength,
}

impl DayTimes {
    /// Local sunrise, e.g. `07:31 AM`.
    #[must_use]
    pub fn sunrise(&self) -> &str {
        &self.sunrise
    }

    /// Local sunset, e.g. `05:22 PM`.
    #[must_use]
    pub fn sunset(&self) -> &str {
        &self.sunset
    }

    /// Local solar noon (midpoint of sunrise and sunset).
    #[must_use]
    pub fn solar_noon(&self) -> &str {
        &self.solar_noon
    }

    /// Time from sunrise to sunset.
    #[must_use]
    pub const fn day_length(&self) -> TimeLength {
        self.day_length
    }

    /// Time from sunset to the next sunrise: 24 hours minus the day length.
    #[must_use]
    pub const fn night_length(&self) -> TimeLength {
        self.night_length
    }
}

/// Record shown in a calendar day cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DayRecord {
    /// Sunrise and sunset exist for the date
    Available(DayTimes),
    /// Sunrise or sunset does not exist for the date
    Unavailable {
        /// Human-readable reason
        message: String,
    },
}

impl DayRecord {
    /// Gets the day times if available.
    #[must_use]
    pub const fn times(&self) -> Option<&DayTimes> {
        if let Self::Available(times) = self {
            Some(times)
        } else {
            None
        }
    }

    /// Checks if sunrise and sunset were available.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Formats a wall-clock time on the 12-hour clock.
///
/// # Example
/// ```
/// # use chrono::NaiveTime;
/// # use sunrise_calendar::day::format_clock_time;
/// let time = NaiveTime::from_hms_opt(18, 5, 59).unwrap();
/// assert_eq!(format_clock_time(time), "06:05 PM");
/// ```
#[must_use]
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Formats solar noon on the 12-hour clock.
///
/// Solar noon falling in the midnight hour is labelled `PM` instead of `AM`.
///
/// # Example
/// ```
/// # use chrono::NaiveTime;
/// # use sunrise_calendar::day::format_solar_noon;
/// let time = NaiveTime::from_hms_opt(0, 12, 0).unwrap();
/// assert_eq!(format_solar_noon(time), "12:12 PM");
/// ```
#[must_use]
pub fn format_solar_noon(time: NaiveTime) -> String {
    let formatted = format_clock_time(time);
    if time.hour() == 0 {
        formatted.replace("AM", "PM")
    } else {
        formatted
    }
}

/// Computes the day record for `date` at `location`, with clock times in `zone`.
///
/// Unavailable sunrise or sunset yields [`DayRecord::Unavailable`]; it never fails.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use chrono_tz::America::Chicago;
/// use sunrise_calendar::{Almanac, Location, day::compute_day_record};
///
/// let home = Location::new("My House", 35.514873, -97.538425).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let record = compute_day_record(&Almanac::new(), date, &home, &Chicago);
///
/// let times = record.times().unwrap();
/// assert_eq!(times.sunrise(), "06:14 AM");
/// assert_eq!(times.sunset(), "08:47 PM");
/// ```
pub fn compute_day_record<S, Tz>(
    source: &S,
    date: NaiveDate,
    location: &Location,
    zone: &Tz,
) -> DayRecord
where
    S: SunTimeSource + ?Sized,
    Tz: TimeZone,
{
    let instants = source
        .sunrise(date, location)
        .and_then(|sunrise| Ok((sunrise, source.sunset(date, location)?)));
    let (sunrise, sunset) = match instants {
        Ok(pair) => pair,
        Err(reason) => {
            warn!(%date, %reason, "sunrise/sunset unavailable");
            return DayRecord::Unavailable {
                message: reason.to_string(),
            };
        }
    };

    // Midpoint in absolute time, before any timezone conversion
    let solar_noon = sunrise + (sunset - sunrise) / 2;
    let day_length = TimeLength::between(&sunrise, &sunset);

    let local = |instant: DateTime<chrono::Utc>| instant.with_timezone(zone).time();
    let times = DayTimes {
        sunrise: format_clock_time(local(sunrise)),
        sunset: format_clock_time(local(sunset)),
        solar_noon: format_solar_noon(local(solar_noon)),
        day_length,
        night_length: day_length.complement(),
    };
    trace!(%date, sunrise = %times.sunrise, sunset = %times.sunset, day = %day_length, "day record");
    DayRecord::Available(times)
}
