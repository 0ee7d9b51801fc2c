//! Calendar page rendering.
//!
//! Renderers turn a [`PopulatedGrid`] into a printable page. The built-in
//! [`TextRenderer`] draws a fixed-width page of boxed cells.

use crate::day::DayRecord;
use crate::grid::{CellDescriptor, PopulatedGrid};
use crate::{Location, MonthSpec};

/// Column headers, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Title of a calendar page: `"<label> - <Month> <Year>"`.
///
/// # Example
/// ```
/// # use sunrise_calendar::{Location, MonthSpec, render::calendar_title};
/// let home = Location::new("My House", 35.514873, -97.538425).unwrap();
/// let month = MonthSpec::new(2024, 12).unwrap();
/// assert_eq!(calendar_title(&home, month), "My House - December 2024");
/// ```
#[must_use]
pub fn calendar_title(location: &Location, month_spec: MonthSpec) -> String {
    format!("{} - {month_spec}", location.label())
}

/// File name of a rendered calendar: `"<Month>_<Year>.<extension>"`.
///
/// # Example
/// ```
/// # use sunrise_calendar::{MonthSpec, render::artifact_name};
/// let month = MonthSpec::new(2025, 4).unwrap();
/// assert_eq!(artifact_name(month, "txt"), "April_2025.txt");
/// ```
#[must_use]
pub fn artifact_name(month_spec: MonthSpec, extension: &str) -> String {
    format!("{}_{}.{extension}", month_spec.name(), month_spec.year())
}

/// Text lines shown inside a cell; empty for cells outside the month.
#[must_use]
pub fn cell_lines(cell: &CellDescriptor) -> Vec<String> {
    let CellDescriptor::Day {
        day_of_month,
        record,
    } = cell
    else {
        return Vec::new();
    };

    let mut lines = vec![day_of_month.to_string()];
    match record {
        DayRecord::Available(times) => {
            lines.push(format!("Sunrise: {}", times.sunrise()));
            lines.push(format!("Sunset: {}", times.sunset()));
            lines.push(format!("Solar Noon: {}", times.solar_noon()));
            lines.push(format!("Day: {}", times.day_length()));
            lines.push(format!("Night: {}", times.night_length()));
        }
        DayRecord::Unavailable { message } => lines.push(format!("Error: {message}")),
    }
    lines
}

/// Something that lays out a populated grid as a page.
pub trait CalendarRenderer {
    /// File extension of the rendered document, without the dot.
    fn extension(&self) -> &'static str;

    /// Renders one page with the given title.
    fn render(&self, title: &str, grid: &PopulatedGrid) -> String;
}

/// Plain-text renderer drawing each cell as a fixed-size box.
///
/// # Example
/// ```
/// use chrono_tz::America::Chicago;
/// use sunrise_calendar::{Almanac, Location, MonthSpec, grid::build_populated_grid};
/// use sunrise_calendar::render::{CalendarRenderer, TextRenderer};
///
/// let home = Location::new("My House", 35.514873, -97.538425).unwrap();
/// let month = MonthSpec::new(2025, 4).unwrap();
/// let grid = build_populated_grid(month, &home, &Chicago, &Almanac::new()).unwrap();
///
/// let page = TextRenderer::default().render("My House - April 2025", &grid);
/// assert!(page.contains("Sunrise: "));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    cell_width: usize,
    cell_height: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            cell_width: 20,
            cell_height: 6,
        }
    }
}

impl TextRenderer {
    /// Creates a renderer with the given inner cell size in characters and lines.
    ///
    /// Sizes are raised to the minimum that fits a day number and weekday name.
    #[must_use]
    pub fn new(cell_width: usize, cell_height: usize) -> Self {
        Self {
            cell_width: cell_width.max(3),
            cell_height: cell_height.max(1),
        }
    }

    fn separator(&self) -> String {
        let segment = "-".repeat(self.cell_width + 2);
        let mut line = String::from("+");
        for _ in 0..WEEKDAY_NAMES.len() {
            line.push_str(&segment);
            line.push('+');
        }
        line
    }

    fn boxed_row(&self, cells: &[Vec<String>], height: usize) -> Vec<String> {
        (0..height)
            .map(|index| {
                let mut line = String::from("|");
                for cell in cells {
                    let text = cell.get(index).map_or("", String::as_str);
                    line.push_str(&format!(" {text:<width$} |", width = self.cell_width));
                }
                line
            })
            .collect()
    }

    fn fit(&self, lines: &[String]) -> Vec<String> {
        let mut fitted: Vec<String> = lines
            .iter()
            .flat_map(|line| wrap(line, self.cell_width))
            .collect();
        fitted.truncate(self.cell_height);
        fitted
    }
}

impl CalendarRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, title: &str, grid: &PopulatedGrid) -> String {
        let separator = self.separator();
        let mut page = vec![format!("{title:^width$}", width = separator.len())
            .trim_end()
            .to_string()];
        page.push(String::new());

        let header: Vec<Vec<String>> = WEEKDAY_NAMES
            .iter()
            .map(|name| vec![format!("{name:^width$}", width = self.cell_width)])
            .collect();
        page.push(separator.clone());
        page.extend(self.boxed_row(&header, 1));
        page.push(separator.clone());

        for row in grid.rows() {
            let cells: Vec<Vec<String>> = row
                .iter()
                .map(|cell| self.fit(&cell_lines(cell)))
                .collect();
            page.extend(self.boxed_row(&cells, self.cell_height));
            page.push(separator.clone());
        }

        let mut text = page.join("\n");
        text.push('\n');
        text
    }
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = word.char_indices().nth(width).map_or(word.len(), |(i, _)| i);
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap("Sunrise: 07:31 AM", 20), vec!["Sunrise: 07:31 AM"]);
        assert!(wrap("", 20).is_empty());
    }

    #[test]
    fn test_wrap_long_text() {
        let lines = wrap(
            "Error: the sun never rises on this location on the specified date",
            20,
        );
        assert_eq!(
            lines,
            vec![
                "Error: the sun never",
                "rises on this",
                "location on the",
                "specified date"
            ]
        );
        assert!(lines.iter().all(|line| line.chars().count() <= 20));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_empty_cell_has_no_lines() {
        assert!(cell_lines(&CellDescriptor::Empty).is_empty());
    }

    #[test]
    fn test_unavailable_cell_lines() {
        let cell = CellDescriptor::Day {
            day_of_month: 12,
            record: DayRecord::Unavailable {
                message: "no data".to_string(),
            },
        };
        assert_eq!(cell_lines(&cell), vec!["12", "Error: no data"]);
    }

    #[test]
    fn test_separator_width() {
        let renderer = TextRenderer::default();
        assert_eq!(renderer.separator().len(), 1 + 7 * 23);
        assert_eq!(TextRenderer::new(0, 0), TextRenderer::new(3, 1));
    }
}
