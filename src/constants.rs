//! Constants used throughout the application
//!
//! This module centralizes format patterns, display labels, and other
//! constant values to improve maintainability and consistency.

// Format patterns
/// Pattern used when the caller does not supply one
pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd hh:mm:ss";
/// Pattern for plain calendar dates
pub const DATE_PATTERN: &str = "yyyy-MM-dd";

/// Weekday numerals, Sunday first
pub const WEEKDAY_NUMERALS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];
/// Prefix for the short weekday form (`EE`)
pub const WEEKDAY_SHORT_PREFIX: &str = "周";
/// Prefix for the long weekday form (`EEE`)
pub const WEEKDAY_LONG_PREFIX: &str = "星期";

// Timeline labels
/// Suffix of the label attached to the first day of each month
pub const MONTH_LABEL_SUFFIX: &str = "月";

// Relative time suffixes
pub const SUFFIX_DAYS_LATER: &str = "天后";
pub const SUFFIX_HOURS_LATER: &str = "小时后";
pub const SUFFIX_MINUTES_LATER: &str = "分钟后";
pub const SUFFIX_DAYS_AGO: &str = "天前";
pub const SUFFIX_HOURS_AGO: &str = "小时前";
pub const SUFFIX_MINUTES_AGO: &str = "分钟前";

// Calendar layout
/// Number of columns in a calendar week row
pub const DAYS_PER_WEEK: usize = 7;
/// Number of months in a year grid
pub const MONTHS_PER_YEAR: u32 = 12;

// Relative time defaults
/// Offset (hours east of UTC) that relative-time inputs are read in
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 8;
/// Smallest accepted UTC offset in hours
pub const UTC_OFFSET_MIN_HOURS: i32 = -12;
/// Largest accepted UTC offset in hours
pub const UTC_OFFSET_MAX_HOURS: i32 = 14;

// CLI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
