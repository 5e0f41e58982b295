//! Month and year calendar grids.

use super::{days_in_month, first_weekday, iso_date, normalize_month};
use crate::constants::{DAYS_PER_WEEK, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};

/// One day placed in a calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarCell {
    /// Day of the month (1..=31)
    pub day: u32,
    /// `YYYY-MM-DD`
    pub date: String,
}

/// A calendar row; slots outside the month are `None`.
pub type Week = [Option<CalendarCell>; DAYS_PER_WEEK];

/// A month laid out in week rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// Days of the month in visual order: row by row, left to right.
    pub fn days(&self) -> impl Iterator<Item = &CalendarCell> + '_ {
        self.weeks.iter().flatten().flatten()
    }

    /// Dates of the month in visual order.
    pub fn dates(&self) -> impl Iterator<Item = &str> + '_ {
        self.days().map(|cell| cell.date.as_str())
    }

    /// Number of days placed in the grid.
    pub fn day_count(&self) -> usize {
        self.days().count()
    }
}

/// Twelve month grids of one year, January first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGrid {
    pub year: i32,
    pub months: Vec<MonthGrid>,
}

impl YearGrid {
    /// Every day of the year in month order, each month in visual order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarCell> + '_ {
        self.months.iter().flat_map(|month| month.days())
    }
}

/// Lay out a month as a grid of weeks.
///
/// Sunday-first grids place day 1 in the column of its weekday
/// (`0` = Sunday). With `start_monday` every column shifts one to the left
/// and Sunday moves to the last column. The row count is
/// `ceil((days + first_weekday) / 7)`, raised when a Sunday start needs an
/// extra row, so a Monday-first grid may end in an empty row.
///
/// ```
/// use timeline_slider::calendar::month_grid;
///
/// let grid = month_grid(2021, 12, false);
/// assert_eq!(grid.weeks.len(), 5);
/// assert_eq!(grid.weeks[0][3].as_ref().unwrap().date, "2021-12-01");
/// ```
pub fn month_grid(year: i32, month: u32, start_monday: bool) -> MonthGrid {
    let (year, month) = normalize_month(year, i64::from(month));
    let total = days_in_month(year, month) as usize;
    let first = first_weekday(year, month) as usize;
    let offset = if start_monday {
        (first + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK
    } else {
        first
    };

    let rows = (total + first)
        .div_ceil(DAYS_PER_WEEK)
        .max((total + offset).div_ceil(DAYS_PER_WEEK));
    let mut weeks = vec![Week::default(); rows];
    for day in 1..=total {
        let slot = offset + day - 1;
        weeks[slot / DAYS_PER_WEEK][slot % DAYS_PER_WEEK] = Some(CalendarCell {
            day: day as u32,
            date: iso_date(year, month, day as u32),
        });
    }

    log::trace!(
        "Built grid for {}-{:02}: {} days, {} weeks, offset {}",
        year,
        month,
        total,
        rows,
        offset
    );
    MonthGrid { year, month, weeks }
}

/// Lay out all twelve months of `year`, Sunday first.
pub fn year_grid(year: i32) -> YearGrid {
    year_grid_with_start(year, false)
}

/// Lay out all twelve months of `year` with the chosen first weekday.
pub fn year_grid_with_start(year: i32, start_monday: bool) -> YearGrid {
    let months = (1..=MONTHS_PER_YEAR)
        .map(|month| month_grid(year, month, start_monday))
        .collect();
    YearGrid { year, months }
}

/// Flatten a month (or, without `month`, the whole year) into its dates.
///
/// ```
/// use timeline_slider::calendar::calendar_to_list;
///
/// assert_eq!(calendar_to_list(2021, Some(2)).len(), 28);
/// assert_eq!(calendar_to_list(2024, None).len(), 366);
/// ```
pub fn calendar_to_list(year: i32, month: Option<u32>) -> Vec<String> {
    match month {
        Some(month) => month_grid(year, month, false).dates().map(str::to_string).collect(),
        None => year_grid(year).days().map(|cell| cell.date.clone()).collect(),
    }
}
