//! Month grid layout: weekday offset, month length and populated cells.
//!
//! The grid has seven columns, Sunday first, and as many rows as needed to hold the
//! month. Cells are stored row-major.

use crate::day::{DayRecord, compute_day_record};
use crate::error::check_month;
use crate::{Location, MonthSpec, Result, SunTimeSource};
use chrono::TimeZone;
use tracing::{debug, info};

/// Number of columns in the grid.
pub const DAYS_PER_WEEK: u32 = 7;

/// Checks if a year is a Gregorian leap year.
///
/// # Example
/// ```
/// # use sunrise_calendar::grid::is_leap_year;
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2023));
/// ```
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month of the Gregorian calendar.
///
/// # Errors
/// Returns `InvalidMonth` if month is outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    check_month(month)?;
    Ok(match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    })
}

/// Weekday of the first of a month, 0 = Sunday through 6 = Saturday.
///
/// Uses Zeller's congruence on the proleptic Gregorian calendar.
const fn first_weekday_offset(year: i32, month: u32) -> u32 {
    // January and February count as months 13 and 14 of the previous year
    let (m, y) = if month < 3 {
        (month as i32 + 12, year - 1)
    } else {
        (month as i32, year)
    };
    let k = y.rem_euclid(100);
    let j = y.div_euclid(100);

    // h: 0 = Saturday, 1 = Sunday, ..., 6 = Friday
    let h = (1 + (13 * (m + 1)) / 5 + k + k / 4 + j / 4 + 5 * j).rem_euclid(7);
    ((h + 6) % 7) as u32
}

/// Shape of a month grid.
///
/// # Example
/// ```
/// # use sunrise_calendar::{MonthSpec, grid::build_grid};
/// let grid = build_grid(MonthSpec::new(2025, 4).unwrap());
/// assert_eq!(grid.start_weekday_offset(), 2); // Tuesday
/// assert_eq!(grid.days_in_month(), 30);
/// assert_eq!(grid.rows(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarGrid {
    month_spec: MonthSpec,
    start_weekday_offset: u32,
    days_in_month: u32,
}

impl CalendarGrid {
    /// The month this grid lays out.
    #[must_use]
    pub const fn month_spec(&self) -> MonthSpec {
        self.month_spec
    }

    /// Weekday of the first of the month, 0 = Sunday through 6 = Saturday.
    #[must_use]
    pub const fn start_weekday_offset(&self) -> u32 {
        self.start_weekday_offset
    }

    /// Number of days in the month (28-31).
    #[must_use]
    pub const fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Number of grid rows: `ceil((offset + days) / 7)`.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        (self.start_weekday_offset + self.days_in_month).div_ceil(DAYS_PER_WEEK)
    }

    /// Total number of cells, a multiple of seven.
    #[must_use]
    pub const fn cell_count(&self) -> u32 {
        self.rows() * DAYS_PER_WEEK
    }

    /// Day of month shown at a row and column, or `None` for cells outside the month.
    #[must_use]
    pub fn day_number(&self, row: u32, column: u32) -> Option<u32> {
        let position = row * DAYS_PER_WEEK + column + 1;
        position
            .checked_sub(self.start_weekday_offset)
            .filter(|day| (1..=self.days_in_month).contains(day))
    }
}

/// Computes the grid shape for a month.
#[must_use]
pub fn build_grid(month_spec: MonthSpec) -> CalendarGrid {
    let year = month_spec.year();
    let month = month_spec.month();
    CalendarGrid {
        month_spec,
        start_weekday_offset: first_weekday_offset(year, month),
        // MonthSpec guarantees a valid month
        days_in_month: days_in_month(year, month).unwrap_or(0),
    }
}

/// One position in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellDescriptor {
    /// Outside the month
    Empty,
    /// A day of the month and its sunrise/sunset record
    Day {
        /// Day of month (1-31)
        day_of_month: u32,
        /// Sunrise/sunset record for the day
        record: DayRecord,
    },
}

impl CellDescriptor {
    /// Gets the day of month, if this cell belongs to the month.
    #[must_use]
    pub const fn day_of_month(&self) -> Option<u32> {
        if let Self::Day { day_of_month, .. } = self {
            Some(*day_of_month)
        } else {
            None
        }
    }

    /// Gets the day record, if this cell belongs to the month.
    #[must_use]
    pub const fn record(&self) -> Option<&DayRecord> {
        if let Self::Day { record, .. } = self {
            Some(record)
        } else {
            None
        }
    }

    /// Checks if this cell lies outside the month.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A month grid with every cell filled in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PopulatedGrid {
    grid: CalendarGrid,
    cells: Vec<CellDescriptor>,
}

impl PopulatedGrid {
    /// Grid shape.
    #[must_use]
    pub const fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[CellDescriptor] {
        &self.cells
    }

    /// Cells grouped into rows of seven, Sunday first.
    pub fn rows(&self) -> impl Iterator<Item = &[CellDescriptor]> {
        self.cells.chunks(DAYS_PER_WEEK as usize)
    }

    /// Cells that belong to the month, in day order.
    pub fn day_cells(&self) -> impl Iterator<Item = &CellDescriptor> {
        self.cells.iter().filter(|cell| !cell.is_empty())
    }
}

/// Builds the month grid and computes a day record for every day of the month.
///
/// Lookups run in row-major cell order. A date without sunrise or sunset yields an
/// unavailable record for that cell only.
///
/// # Errors
/// Returns `InvalidDay` if a date of the month cannot be represented.
///
/// # Example
/// ```
/// use chrono_tz::America::Chicago;
/// use sunrise_calendar::{Almanac, Location, MonthSpec, grid::build_populated_grid};
///
/// let home = Location::new("My House", 35.514873, -97.538425).unwrap();
/// let month = MonthSpec::new(2024, 2).unwrap();
/// let grid = build_populated_grid(month, &home, &Chicago, &Almanac::new()).unwrap();
///
/// assert_eq!(grid.day_cells().count(), 29);
/// assert_eq!(grid.cells().len(), 35);
/// ```
pub fn build_populated_grid<S, Tz>(
    month_spec: MonthSpec,
    location: &Location,
    zone: &Tz,
    source: &S,
) -> Result<PopulatedGrid>
where
    S: SunTimeSource + ?Sized,
    Tz: TimeZone,
{
    let grid = build_grid(month_spec);
    debug!(
        month = %month_spec,
        offset = grid.start_weekday_offset(),
        days = grid.days_in_month(),
        rows = grid.rows(),
        "grid shape"
    );

    let mut cells = Vec::with_capacity(grid.cell_count() as usize);
    let mut unavailable = 0_usize;
    for row in 0..grid.rows() {
        for column in 0..DAYS_PER_WEEK {
            let Some(day_of_month) = grid.day_number(row, column) else {
                cells.push(CellDescriptor::Empty);
                continue;
            };

            let date = month_spec.date(day_of_month)?;
            let record = compute_day_record(source, date, location, zone);
            if !record.is_available() {
                unavailable += 1;
            }
            cells.push(CellDescriptor::Day {
                day_of_month,
                record,
            });
        }
    }

    info!(
        month = %month_spec,
        location = location.label(),
        cells = cells.len(),
        unavailable,
        "calendar grid populated"
    );
    Ok(PopulatedGrid { grid, cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2025, 4).unwrap(), 30);
        assert_eq!(days_in_month(2025, 12).unwrap(), 31);
        assert!(days_in_month(2025, 0).is_err());
        assert!(days_in_month(2025, 13).is_err());
    }

    #[test]
    fn test_first_weekday_matches_chrono() {
        for year in [1, 4, 99, 100, 400, 1582, 1752, 1899, 1900, 2000, 2024, 2030, 9999] {
            for month in 1..=12 {
                let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                assert_eq!(
                    first_weekday_offset(year, month),
                    first.weekday().num_days_from_sunday(),
                    "{year}-{month:02}"
                );
            }
        }
    }

    #[test]
    fn test_day_numbers() {
        // February 2024 starts on a Thursday
        let grid = build_grid(MonthSpec::new(2024, 2).unwrap());
        assert_eq!(grid.start_weekday_offset(), 4);
        assert_eq!(grid.day_number(0, 3), None);
        assert_eq!(grid.day_number(0, 4), Some(1));
        assert_eq!(grid.day_number(1, 0), Some(4));
        assert_eq!(grid.day_number(4, 4), Some(29));
        assert_eq!(grid.day_number(4, 5), None);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cell_count(), 35);
    }

    #[test]
    fn test_four_row_february() {
        // February 2015 starts on a Sunday and has 28 days
        let grid = build_grid(MonthSpec::new(2015, 2).unwrap());
        assert_eq!(grid.start_weekday_offset(), 0);
        assert_eq!(grid.rows(), 4);
    }

    #[test]
    fn test_six_row_month() {
        // August 2026 starts on a Saturday and has 31 days
        let grid = build_grid(MonthSpec::new(2026, 8).unwrap());
        assert_eq!(grid.start_weekday_offset(), 6);
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.day_number(5, 1), Some(31));
        assert_eq!(grid.day_number(5, 2), None);
    }
}
