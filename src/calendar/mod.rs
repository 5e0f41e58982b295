//! Gregorian calendar arithmetic for timeline layout.
//!
//! Everything here is pure integer arithmetic on `(year, month, day)`
//! triples, so the builders accept any month number: values outside
//! `1..=12` roll over into the neighbouring years the same way calendar
//! overflow does (month `13` of 2021 is January 2022, month `0` is
//! December 2020).
//!
//! | Module | Description |
//! |--------|-------------|
//! | `grid` | Month and year calendar grids, grid flattening |
//! | `position` | Day-of-year percentage positions with labels and marks |
//! | `timeline` | Lookup over a year's positioned days |

mod grid;
mod position;
mod timeline;

pub use grid::{
    calendar_to_list, month_grid, year_grid, year_grid_with_start, CalendarCell, MonthGrid, Week, YearGrid,
};
pub use position::{get_percentage, year_positions, PositionedDay};
pub use timeline::YearTimeline;

use serde::{Deserialize, Serialize};

/// Day-of-week offsets for Sakamoto's method, January first
const WEEKDAY_MONTH_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Determines if `year` is a leap year in the Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `year`: 366 for leap years, 365 otherwise.
pub fn number_of_days(year: i32) -> usize {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Fold a possibly out-of-range month into `1..=12`, carrying whole years.
pub fn normalize_month(year: i32, month: i64) -> (i32, u32) {
    let zero_based = month - 1;
    let carry = zero_based.div_euclid(12);
    let carry = i32::try_from(carry).unwrap_or(if carry < 0 { i32::MIN } else { i32::MAX });
    (year.saturating_add(carry), zero_based.rem_euclid(12) as u32 + 1)
}

/// Number of days in a month; the last day before the first of the next one.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (year, month) = normalize_month(year, i64::from(month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Weekday of the first day of a month, `0` for Sunday through `6` for Saturday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    let (year, month) = normalize_month(year, i64::from(month));
    day_of_week(year, month, 1)
}

fn day_of_week(year: i32, month: u32, day: u32) -> u32 {
    let y = i64::from(year) - i64::from(month < 3);
    let sum = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + WEEKDAY_MONTH_OFFSETS[(month - 1) as usize]
        + i64::from(day);
    sum.rem_euclid(7) as u32
}

/// `YYYY-MM-DD` with the month and day zero-padded.
pub(crate) fn iso_date(year: i32, month: u32, day: u32) -> String {
    format!("{}-{:02}-{:02}", year, month, day)
}

/// First and last day of a month or of a whole year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_time: String,
    pub end_time: String,
}

/// First and last date of `month` in `year`, or of the whole year when
/// `month` is `None`.
///
/// ```
/// use timeline_slider::calendar::month_range;
///
/// let range = month_range(2021, Some(12));
/// assert_eq!(range.start_time, "2021-12-01");
/// assert_eq!(range.end_time, "2021-12-31");
/// ```
pub fn month_range(year: i32, month: Option<u32>) -> DateRange {
    match month {
        Some(month) => {
            let (year, month) = normalize_month(year, i64::from(month));
            DateRange {
                start_time: iso_date(year, month, 1),
                end_time: iso_date(year, month, days_in_month(year, month)),
            }
        }
        None => DateRange {
            start_time: iso_date(year, 1, 1),
            end_time: iso_date(year, 12, 31),
        },
    }
}
