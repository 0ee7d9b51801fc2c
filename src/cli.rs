use std::path::PathBuf;

use clap::Parser;
use sunrise_calendar::types::MONTH_NAMES;

/// First year offered for calendar generation.
pub const FIRST_YEAR: i64 = 1900;

/// Last year offered for calendar generation.
pub const LAST_YEAR: i64 = 2030;

/// Sunrise/sunset calendar generator.
#[derive(Parser)]
#[command(
    name = "sunrise-calendar",
    version,
    about = "Printable monthly calendar of sunrise, sunset and day length"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Month as a number (1-12) or English name. Defaults to the current month.
    #[arg(short, long, value_parser = parse_month)]
    pub month: Option<u32>,

    /// Year (1900-2030). Defaults to the current year.
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(FIRST_YEAR..=LAST_YEAR))]
    pub year: Option<i32>,

    /// Path to TOML configuration file with the location.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the calendar file is written to.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the page to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,

    /// Override the location label from config.
    #[arg(long)]
    pub label: Option<String>,

    /// Override the latitude from config (degrees, north positive).
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    /// Override the longitude from config (degrees, east positive).
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    /// Override the IANA timezone from config, e.g. America/Chicago.
    #[arg(long)]
    pub timezone: Option<String>,
}

/// Parses a month number or a (possibly abbreviated) English month name.
fn parse_month(value: &str) -> Result<u32, String> {
    if let Ok(number) = value.parse::<u32>() {
        return if (1..=12).contains(&number) {
            Ok(number)
        } else {
            Err(format!("month must be between 1 and 12, got {number}"))
        };
    }

    let wanted = value.to_ascii_lowercase();
    if wanted.len() >= 3 {
        for (index, name) in MONTH_NAMES.iter().enumerate() {
            if name.to_ascii_lowercase().starts_with(&wanted) {
                return Ok(index as u32 + 1);
            }
        }
    }
    Err(format!("unknown month '{value}'"))
}
