//! Date utility functions

use crate::constants::DATE_PATTERN;
use crate::error::CalendarError;
use crate::utils::datetime::format_datetime;
use chrono::{Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which way a run of recent days extends from the reference day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The reference day and the days after it
    #[default]
    Forward,
    /// The days leading up to and including the reference day
    Before,
}

impl FromStr for Direction {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Direction::Forward),
            "before" => Ok(Direction::Before),
            other => Err(CalendarError::UnsupportedInput {
                kind: format!("direction {:?}", other),
            }),
        }
    }
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    format_datetime(&d.and_time(NaiveTime::MIN), DATE_PATTERN)
}

/// List `count` consecutive days next to `today`, in ascending order
///
/// # Arguments
/// * `count` - Number of days, `today` included
/// * `direction` - [`Direction::Forward`] starts at `today`,
///   [`Direction::Before`] ends at it
/// * `today` - Reference day
///
/// # Returns
/// * `Ok(Vec<String>)` - Dates in YYYY-MM-DD format
/// * `Err(CalendarError::DayCountOutOfRange)` - The run does not fit the
///   representable date range
pub fn recent_days(count: usize, direction: Direction, today: NaiveDate) -> Result<Vec<String>, CalendarError> {
    let Some(span) = count.checked_sub(1) else {
        return Ok(Vec::new());
    };
    let span = Days::new(span as u64);
    let first = match direction {
        Direction::Forward => today.checked_add_days(span).map(|_| today),
        Direction::Before => today.checked_sub_days(span),
    };
    let first = first.ok_or_else(|| CalendarError::DayCountOutOfRange {
        count,
        from: format_ymd(today),
    })?;
    Ok(first.iter_days().take(count).map(format_ymd).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() {
        assert_eq!("forward".parse::<Direction>().unwrap(), Direction::Forward);
        assert_eq!("before".parse::<Direction>().unwrap(), Direction::Before);
        assert!("after".parse::<Direction>().is_err());
    }

    #[test]
    fn test_recent_days_zero() {
        let today = NaiveDate::from_ymd_opt(2021, 12, 7).unwrap();
        assert!(recent_days(0, Direction::Before, today).unwrap().is_empty());
    }

    #[test]
    fn test_recent_days_past_date_range() {
        let today = NaiveDate::from_ymd_opt(2021, 12, 7).unwrap();
        for direction in [Direction::Before, Direction::Forward] {
            let err = recent_days(200_000_000, direction, today).unwrap_err();
            assert_eq!(
                err,
                CalendarError::DayCountOutOfRange {
                    count: 200_000_000,
                    from: "2021-12-07".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_recent_days_ending_at_min_date() {
        let days = recent_days(2, Direction::Before, NaiveDate::MIN.succ_opt().unwrap()).unwrap();
        assert_eq!(days.len(), 2);
        assert!(recent_days(2, Direction::Before, NaiveDate::MIN).is_err());
        assert_eq!(recent_days(1, Direction::Forward, NaiveDate::MAX).unwrap().len(), 1);
    }

    #[test]
    fn test_recent_days_crosses_year() {
        let today = NaiveDate::from_ymd_opt(2021, 12, 30).unwrap();
        assert_eq!(
            recent_days(3, Direction::Forward, today).unwrap(),
            vec!["2021-12-30", "2021-12-31", "2022-01-01"]
        );
    }
}
