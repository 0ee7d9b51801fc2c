//! Almanac sunrise/sunset against reference instants for three locations in 2024.

use chrono::{DateTime, NaiveDate, Utc};
use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use sunrise_calendar::{Almanac, Horizon, Location, SunTimeSource, Unavailable};

/// Reference values are rounded to whole seconds; allow for floating-point drift.
const TOLERANCE_SECONDS: i64 = 60;

#[derive(Debug)]
struct ReferenceRecord {
    location: String,
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

impl ReferenceRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            location: record[0].to_string(),
            latitude: record[1].parse()?,
            longitude: record[2].parse()?,
            date: record[3].parse()?,
            sunrise: record[4].parse()?,
            sunset: record[5].parse()?,
        })
    }
}

fn load_reference() -> Result<Vec<ReferenceRecord>, Box<dyn Error>> {
    let file = File::open("tests/data/almanac_reference_2024.csv")?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(ReferenceRecord::from_csv_record(&result?)?);
    }
    Ok(records)
}

#[test]
fn almanac_matches_reference_instants() -> Result<(), Box<dyn Error>> {
    let records = load_reference()?;
    assert_eq!(records.len(), 72, "expected 24 dates for each of 3 locations");

    let almanac = Almanac::new();
    let mut max_sunrise_error = 0_i64;
    let mut max_sunset_error = 0_i64;

    for record in &records {
        let location = Location::new(&record.location, record.latitude, record.longitude)?;
        let sunrise = almanac.sunrise(record.date, &location)?;
        let sunset = almanac.sunset(record.date, &location)?;

        let sunrise_error = (sunrise - record.sunrise).num_seconds().abs();
        let sunset_error = (sunset - record.sunset).num_seconds().abs();
        max_sunrise_error = max_sunrise_error.max(sunrise_error);
        max_sunset_error = max_sunset_error.max(sunset_error);

        assert!(
            sunrise_error <= TOLERANCE_SECONDS,
            "{} {}: sunrise {} differs from {} by {}s",
            record.location,
            record.date,
            sunrise,
            record.sunrise,
            sunrise_error
        );
        assert!(
            sunset_error <= TOLERANCE_SECONDS,
            "{} {}: sunset {} differs from {} by {}s",
            record.location,
            record.date,
            sunset,
            record.sunset,
            sunset_error
        );
        assert!(sunset > sunrise, "{} {}", record.location, record.date);
    }

    println!(
        "{} records, max sunrise error {}s, max sunset error {}s",
        records.len(),
        max_sunrise_error,
        max_sunset_error
    );
    Ok(())
}

#[test]
fn sunset_rolls_to_next_utc_day_west_of_greenwich() -> Result<(), Box<dyn Error>> {
    let okc = Location::new("OKC", 35.514873, -97.538425)?;
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let sunset = Almanac::new().sunset(date, &okc)?;
    assert_eq!(sunset.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 16).unwrap());
    Ok(())
}

#[test]
fn twilight_horizons_widen_the_day() -> Result<(), Box<dyn Error>> {
    let okc = Location::new("OKC", 35.514873, -97.538425)?;
    let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();

    let mut previous_length = 0_i64;
    for horizon in [
        Horizon::SunriseSunset,
        Horizon::CivilTwilight,
        Horizon::NauticalTwilight,
        Horizon::AstronomicalTwilight,
    ] {
        let almanac = Almanac::for_horizon(horizon);
        let length = (almanac.sunset(date, &okc)? - almanac.sunrise(date, &okc)?).num_seconds();
        assert!(
            length > previous_length,
            "{horizon:?}: {length}s should exceed {previous_length}s"
        );
        previous_length = length;
    }
    Ok(())
}

#[test]
fn polar_night_and_midnight_sun() {
    let tromso = Location::new("Tromsø", 69.6492, 18.9553).unwrap();
    let almanac = Almanac::new();

    let winter = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
    assert_eq!(almanac.sunrise(winter, &tromso), Err(Unavailable::NeverRises));
    assert_eq!(almanac.sunset(winter, &tromso), Err(Unavailable::NeverRises));

    let summer = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    assert_eq!(almanac.sunrise(summer, &tromso), Err(Unavailable::NeverSets));
    assert_eq!(almanac.sunset(summer, &tromso), Err(Unavailable::NeverSets));
}

#[test]
fn equator_day_is_close_to_twelve_hours() -> Result<(), Box<dyn Error>> {
    let quito = Location::new("Quito", -0.1807, -78.4678)?;
    let almanac = Almanac::new();

    for month in 1..=12 {
        let date = NaiveDate::from_ymd_opt(2024, month, 1).unwrap();
        let length = (almanac.sunset(date, &quito)? - almanac.sunrise(date, &quito)?).num_minutes();
        assert!(
            (720..=740).contains(&length),
            "2024-{month:02}-01: day length {length} minutes"
        );
    }
    Ok(())
}
