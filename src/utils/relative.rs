//! Relative time labels ("3天前", "2小时后")

use crate::calendar::normalize_month;
use crate::constants::{
    SUFFIX_DAYS_AGO, SUFFIX_DAYS_LATER, SUFFIX_HOURS_AGO, SUFFIX_HOURS_LATER, SUFFIX_MINUTES_AGO,
    SUFFIX_MINUTES_LATER,
};
use crate::error::CalendarError;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, Utc};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Describe how far `input` lies from `now`
///
/// `input` is `YYYY-MM-DD HH:mm` read as wall-clock time at `offset`. When
/// the first `:` sits before the 14th character the year is missing, and the
/// year of `now` (at `offset`) is prepended.
///
/// The largest unit whose magnitude exceeds one is used, truncated toward
/// zero. Differences under a minute produce an empty label, as does empty
/// input.
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use timeline_slider::utils::relative::relative_time;
///
/// let now = Utc.with_ymd_and_hms(2021, 12, 7, 8, 0, 0).unwrap();
/// let east8 = FixedOffset::east_opt(8 * 3600).unwrap();
/// assert_eq!(relative_time("2021-12-05 16:00", now, east8).unwrap(), "2天前");
/// ```
pub fn relative_time(input: &str, now: DateTime<Utc>, offset: FixedOffset) -> Result<String, CalendarError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let has_year = matches!(input.chars().position(|c| c == ':'), Some(idx) if idx >= 13);
    let text: Vec<char> = if has_year {
        input.chars().take(16).collect()
    } else {
        format!("{}-{}", now.with_timezone(&offset).year(), input)
            .chars()
            .take(16)
            .collect()
    };

    let local = wall_clock(&text).ok_or_else(|| CalendarError::invalid_date(input))?;
    let then = local - Duration::seconds(i64::from(offset.local_minus_utc()));
    let seconds = (then - now.naive_utc()).num_milliseconds() as f64 / 1000.0;
    log::trace!("Relative time for {:?}: {} seconds from now", input, seconds);

    Ok(describe(seconds))
}

/// Read `YYYY-MM-DD HH:mm` by character position, rolling overflowing
/// fields into the next larger unit
fn wall_clock(text: &[char]) -> Option<NaiveDateTime> {
    let year = field(text, 0, 4)?;
    let month = field(text, 5, 7)?;
    let day = field(text, 8, 10)?;
    let hour = field(text, 11, 13)?;
    let minute = field(text, 14, 16)?;

    let year = i32::try_from(year).ok()?;
    let (year, month) = normalize_month(year, month);
    let first = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    first
        .checked_add_signed(Duration::days(day - 1))?
        .checked_add_signed(Duration::hours(hour))?
        .checked_add_signed(Duration::minutes(minute))
}

fn field(text: &[char], start: usize, end: usize) -> Option<i64> {
    let end = end.min(text.len());
    if start >= end {
        return None;
    }
    text[start..end].iter().collect::<String>().trim().parse().ok()
}

/// Label a signed difference in seconds
pub fn describe(seconds: f64) -> String {
    let days = seconds / SECONDS_PER_DAY;
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = seconds / SECONDS_PER_MINUTE;

    let (amount, suffix) = if seconds > 0.0 {
        if days > 1.0 {
            (days, SUFFIX_DAYS_LATER)
        } else if hours > 1.0 {
            (hours, SUFFIX_HOURS_LATER)
        } else if minutes > 1.0 {
            (minutes, SUFFIX_MINUTES_LATER)
        } else {
            return String::new();
        }
    } else if days < -1.0 {
        (-days, SUFFIX_DAYS_AGO)
    } else if hours < -1.0 {
        (-hours, SUFFIX_HOURS_AGO)
    } else if minutes < -1.0 {
        (-minutes, SUFFIX_MINUTES_AGO)
    } else {
        return String::new();
    };

    format!("{}{}", amount.trunc() as i64, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        // 2021-12-07 16:00 at UTC+8
        Utc.with_ymd_and_hms(2021, 12, 7, 8, 0, 0).unwrap()
    }

    fn east8() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(relative_time("", now(), east8()).unwrap(), "");
    }

    #[test]
    fn test_days_ago() {
        assert_eq!(relative_time("2020-01-01 18:00", now(), east8()).unwrap(), "705天前");
    }

    #[test]
    fn test_hours_later() {
        assert_eq!(relative_time("2021-12-07 18:30", now(), east8()).unwrap(), "2小时后");
    }

    #[test]
    fn test_missing_year_uses_current_year() {
        assert_eq!(relative_time("12-07 16:30", now(), east8()).unwrap(), "30分钟后");
    }

    #[test]
    fn test_exactly_one_hour_falls_to_minutes() {
        assert_eq!(relative_time("2021-12-07 15:00", now(), east8()).unwrap(), "60分钟前");
    }

    #[test]
    fn test_under_a_minute_is_empty() {
        assert_eq!(relative_time("2021-12-07 16:00", now(), east8()).unwrap(), "");
        assert_eq!(describe(59.0), "");
        assert_eq!(describe(-59.0), "");
    }

    #[test]
    fn test_crosses_midnight_at_offset() {
        // 00:30 at UTC+8 is 16:30 UTC the previous day
        let now = Utc.with_ymd_and_hms(2021, 12, 6, 16, 0, 0).unwrap();
        assert_eq!(relative_time("2021-12-07 00:30", now, east8()).unwrap(), "30分钟后");
    }

    #[test]
    fn test_malformed_input() {
        assert!(relative_time("yesterday at noon", now(), east8()).is_err());
    }
}
