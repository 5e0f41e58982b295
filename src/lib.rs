//! Timeline Slider - calendar layout and date formatting for timeline widgets
//!
//! This library computes what a yearly timeline slider displays: calendar
//! grids for a month or a year, each day's percentage position along the
//! year with month labels and marks, token-pattern date formatting with
//! Chinese weekday names, runs of recent days, and relative time labels.
//!
//! # Modules
//!
//! * [`calendar`] - Month/year grids, day-of-year positions, timeline lookup
//! * [`config`] - Configuration file loading and validation
//! * [`constants`] - Format patterns, labels and default values
//! * [`error`] - Error type for date parsing and formatting
//! * [`logger`] - Log output setup
//! * [`utils`] - Date formatting, recent days and relative time
//!
//! # Example
//!
//! ```
//! use timeline_slider::calendar::year_positions;
//!
//! let days = year_positions(2021, &["2021-10-01"]);
//! assert_eq!(days.len(), 365);
//! assert_eq!(days[0].position, 0.0);
//! assert!(days[364].position < 100.0);
//! ```

/// Calendar grids and yearly timeline positions
pub mod calendar;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types for date operations
pub mod error;

/// Logging setup built on `fern`
pub mod logger;

/// Utility functions for date/time handling
pub mod utils;

pub use calendar::{
    calendar_to_list, get_percentage, is_leap_year, month_grid, month_range, number_of_days, year_grid,
    year_grid_with_start, year_positions, CalendarCell, DateRange, MonthGrid, PositionedDay, YearGrid, YearTimeline,
};
pub use error::CalendarError;
pub use utils::date::{recent_days, Direction};
pub use utils::datetime::{format_date, format_datetime, DateInput};
pub use utils::relative::relative_time;
