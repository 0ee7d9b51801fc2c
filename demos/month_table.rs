//! Day records for a month across diverse global locations, plus twilight horizons.

use chrono::NaiveDate;
use chrono_tz::Tz;
use sunrise_calendar::grid::build_populated_grid;
use sunrise_calendar::{Almanac, DayRecord, Horizon, Location, MonthSpec, SunTimeSource};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    timezone: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            timezone: "Arctic/Longyearbyen",
        },
        City {
            name: "Oklahoma City, USA",
            latitude: 35.514873,
            longitude: -97.538425,
            timezone: "America/Chicago",
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            timezone: "Pacific/Auckland",
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            timezone: "Asia/Singapore",
        },
    ];

    // December shows the most extreme variations
    let month = MonthSpec::new(2024, 12)?;
    let almanac = Almanac::new();

    for city in &cities {
        let location = Location::new(city.name, city.latitude, city.longitude)?;
        let zone: Tz = city.timezone.parse()?;

        println!("=== {} ({}) ===", city.name, month);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E, {}",
            city.latitude, city.longitude, city.timezone
        );
        println!();

        let grid = build_populated_grid(month, &location, &zone, &almanac)?;
        for cell in grid.day_cells().step_by(7) {
            print_day(cell.day_of_month(), cell.record());
        }
        println!();

        let solstice = NaiveDate::from_ymd_opt(2024, 12, 21).ok_or("invalid date")?;
        print_horizons(solstice, &location);
        println!();
    }

    Ok(())
}

fn print_day(day: Option<u32>, record: Option<&DayRecord>) {
    let (Some(day), Some(record)) = (day, record) else {
        return;
    };
    match record {
        DayRecord::Available(times) => println!(
            "  {:>2}  rise {}  set {}  noon {}  day {}  night {}",
            day,
            times.sunrise(),
            times.sunset(),
            times.solar_noon(),
            times.day_length(),
            times.night_length()
        ),
        DayRecord::Unavailable { message } => println!("  {day:>2}  {message}"),
    }
}

fn print_horizons(date: NaiveDate, location: &Location) {
    let horizons = [
        ("Sunrise/Sunset", Horizon::SunriseSunset),
        ("Civil Twilight", Horizon::CivilTwilight),
        ("Nautical Twilight", Horizon::NauticalTwilight),
        ("Astronomical Twilight", Horizon::AstronomicalTwilight),
    ];

    println!("Horizons on {date} (UTC):");
    for (name, horizon) in horizons {
        let almanac = Almanac::for_horizon(horizon);
        match (almanac.sunrise(date, location), almanac.sunset(date, location)) {
            (Ok(begin), Ok(end)) => println!(
                "  {name:<22} {} - {}",
                begin.format("%H:%M:%S"),
                end.format("%H:%M:%S")
            ),
            (Err(reason), _) | (_, Err(reason)) => println!("  {name:<22} {reason}"),
        }
    }
}
