//! # Sunrise Calendar
//!
//! Monthly calendar pages showing sunrise, sunset, solar noon, day length and night
//! length for a fixed location.
//!
//! The library is split into small pieces joined by plain data types:
//! - [`grid`]: month layout (weekday of the 1st, days in month, row-major cells)
//! - [`day`]: per-date records, formatted on the 12-hour clock in a local timezone
//! - [`almanac`]: the default [`SunTimeSource`], the *Almanac for Computers* algorithm
//! - [`render`]: page titles, file names and a plain-text page renderer
//! - [`config`]: TOML configuration for the location and timezone
//!
//! A date with no sunrise or sunset (polar day or night) does not fail the calendar;
//! its cell carries an [`Unavailable`] message instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono_tz::America::Chicago;
//! use sunrise_calendar::{Almanac, Location, MonthSpec, grid::build_populated_grid};
//! use sunrise_calendar::render::{CalendarRenderer, TextRenderer, calendar_title};
//!
//! let home = Location::new("My House", 35.514873, -97.538425).unwrap();
//! let month = MonthSpec::new(2024, 12).unwrap();
//!
//! let grid = build_populated_grid(month, &home, &Chicago, &Almanac::new()).unwrap();
//! assert_eq!(grid.day_cells().count(), 31);
//!
//! let page = TextRenderer::default().render(&calendar_title(&home, month), &grid);
//! assert!(page.contains("My House - December 2024"));
//! ```
//!
//! ## Solar noon
//!
//! Solar noon is the midpoint between sunrise and sunset in absolute time, not the
//! astronomical meridian transit. It is computed before converting to local time.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::float_cmp, // Exact comparisons of configured constants in tests
)]

// Public API exports
pub use crate::almanac::{Almanac, SunTime, SunTimeSource};
pub use crate::day::{DayRecord, DayTimes, TimeLength};
pub use crate::error::{Error, Result};
pub use crate::grid::{CalendarGrid, CellDescriptor, PopulatedGrid};
pub use crate::types::{Horizon, Location, MonthSpec, Unavailable};

// Calendar modules
pub mod day;
pub mod grid;
pub mod render;

// Astronomical time source
pub mod almanac;

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Internal modules
mod math;
