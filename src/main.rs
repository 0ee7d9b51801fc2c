mod cli;
mod logging;

use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::Parser;
use sunrise_calendar::config::CalendarConfig;
use sunrise_calendar::grid::build_populated_grid;
use sunrise_calendar::render::{CalendarRenderer, TextRenderer, artifact_name, calendar_title};
use sunrise_calendar::{Almanac, MonthSpec};
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CalendarConfig::default(),
    };
    if let Some(label) = cli.label {
        config.location.label = label;
    }
    if let Some(latitude) = cli.latitude {
        config.location.latitude = latitude;
    }
    if let Some(longitude) = cli.longitude {
        config.location.longitude = longitude;
    }
    if let Some(timezone) = cli.timezone {
        config.location.timezone = timezone;
    }
    let settings = config.resolve().context("invalid location settings")?;

    let today = Utc::now().with_timezone(&settings.timezone);
    let month_spec = MonthSpec::new(
        cli.year.unwrap_or_else(|| today.year()),
        cli.month.unwrap_or_else(|| today.month()),
    )
    .context("invalid month or year")?;

    info!(
        month = %month_spec,
        location = settings.location.label(),
        timezone = %settings.timezone,
        "generating calendar"
    );
    let grid = build_populated_grid(
        month_spec,
        &settings.location,
        &settings.timezone,
        &Almanac::new(),
    )?;

    let renderer = TextRenderer::default();
    let page = renderer.render(&calendar_title(&settings.location, month_spec), &grid);
    if cli.stdout {
        print!("{page}");
        return Ok(());
    }

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("failed to create {}", cli.output_dir.display()))?;
    let path = cli
        .output_dir
        .join(artifact_name(month_spec, renderer.extension()));
    fs::write(&path, page).with_context(|| format!("failed to write {}", path.display()))?;

    println!("calendar written to {}", path.display());
    Ok(())
}

fn load_config(path: &Path) -> Result<CalendarConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    CalendarConfig::from_toml_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))
}
