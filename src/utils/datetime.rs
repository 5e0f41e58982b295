//! Date input parsing and pattern formatting
//!
//! This module turns loosely typed date values (timestamps, date strings,
//! date-times) into [`NaiveDateTime`] and renders them through token
//! patterns such as `yyyy-MM-dd EE hh:mm:ss`.

use crate::constants::{DEFAULT_PATTERN, WEEKDAY_LONG_PREFIX, WEEKDAY_NUMERALS, WEEKDAY_SHORT_PREFIX};
use crate::error::CalendarError;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use serde_json::Value;

/// Formats tried, in order, once a date string has been normalized to
/// slash-separated form
const TEXT_DATETIME_FORMATS: [&str; 2] = ["%Y/%m/%d %H:%M:%S%.f", "%Y/%m/%d %H:%M"];
const TEXT_DATE_FORMAT: &str = "%Y/%m/%d";

/// A date value as supplied by a caller
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch
    Timestamp(i64),
    /// A date string, e.g. `2021-12-07`, `2021/12/07 16:02` or
    /// `2021-12-07T16:02:18.912Z`; a purely numeric string is a timestamp
    Text(String),
    /// An already constructed date-time
    DateTime(NaiveDateTime),
}

impl DateInput {
    /// Resolve the input to a wall-clock date-time in the local time zone
    pub fn resolve(&self) -> Result<NaiveDateTime, CalendarError> {
        self.resolve_in(&Local)
    }

    /// Resolve the input to a wall-clock date-time, reading timestamps in `tz`
    ///
    /// Text and date-time inputs carry no zone and are returned as written.
    pub fn resolve_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<NaiveDateTime, CalendarError> {
        match self {
            DateInput::Timestamp(millis) => timestamp_in(*millis, tz),
            DateInput::Text(text) => parse_text(text, tz),
            DateInput::DateTime(dt) => Ok(*dt),
        }
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::Timestamp(millis)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::DateTime(date.and_time(NaiveTime::MIN))
    }
}

impl TryFrom<&Value> for DateInput {
    type Error = CalendarError;

    /// Numbers become timestamps and strings become text; every other JSON
    /// kind is rejected
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let kind = match value {
            Value::Number(n) => {
                return n
                    .as_i64()
                    .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                    .map(DateInput::Timestamp)
                    .ok_or_else(|| CalendarError::invalid_date(n.to_string()));
            }
            Value::String(s) => return Ok(DateInput::Text(s.clone())),
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Err(CalendarError::UnsupportedInput { kind: kind.to_string() })
    }
}

fn timestamp_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> Result<NaiveDateTime, CalendarError> {
    DateTime::from_timestamp_millis(millis)
        .map(|utc| utc.with_timezone(tz).naive_local())
        .ok_or(CalendarError::TimestampOutOfRange { millis })
}

fn parse_text<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<NaiveDateTime, CalendarError> {
    let mut text = input.trim().replace('-', "/");
    if text.contains('T') {
        // Sub-second precision and the zone designator are dropped
        if let Some(dot) = text.find('.') {
            text.truncate(dot);
        }
        text = text.trim_end_matches('Z').replacen('T', " ", 1);
    }

    if let Ok(millis) = text.parse::<i64>() {
        return timestamp_in(millis, tz);
    }

    TEXT_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&text, TEXT_DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| {
            log::debug!("Rejected date text {:?} (normalized to {:?})", input, text);
            CalendarError::invalid_date(input)
        })
}

/// Format a date value with a token pattern
///
/// Timestamps are read in the local time zone. `pattern` defaults to
/// `yyyy-MM-dd hh:mm:ss`.
///
/// # Returns
/// * `Result<String, CalendarError>` - Rendered pattern, or the reason the
///   input could not be read as a date
pub fn format_date(input: &DateInput, pattern: Option<&str>) -> Result<String, CalendarError> {
    let dt = input.resolve()?;
    Ok(format_datetime(&dt, pattern.unwrap_or(DEFAULT_PATTERN)))
}

/// Render a date-time through a token pattern
///
/// Supported tokens, each matched as a run of the same letter:
///
/// | Token | Meaning | Run length |
/// |-------|---------|------------|
/// | `y` | year, last N digits | 1-4 |
/// | `E` | weekday: `二`, `周二`, `星期二` | 1, 2, 3+ |
/// | `M` `d` `h` `H` `m` `s` `q` | month, day, hour, hour, minute, second, quarter | 1 bare, 2+ zero-padded |
/// | `S` | millisecond | 1 |
///
/// Only the first run of each token is replaced.
pub fn format_datetime(dt: &NaiveDateTime, pattern: &str) -> String {
    let mut out = pattern.to_string();
    for rule in &RULES {
        if let Some((start, run)) = find_run(&out, rule.token, rule.greedy) {
            let rendered = (rule.render)(dt, run);
            out.replace_range(start..start + run, &rendered);
        }
    }
    out
}

type Render = fn(&NaiveDateTime, usize) -> String;

/// One substitution step: the first run of `token` is replaced by `render`
struct Rule {
    token: char,
    greedy: bool,
    render: Render,
}

/// Substitution order is significant: year, then weekday, then the numeric
/// fields
const RULES: [Rule; 10] = [
    Rule { token: 'y', greedy: true, render: render_year },
    Rule { token: 'E', greedy: true, render: render_weekday },
    Rule { token: 'M', greedy: true, render: render_month },
    Rule { token: 'd', greedy: true, render: render_day },
    Rule { token: 'h', greedy: true, render: render_hour_12 },
    Rule { token: 'H', greedy: true, render: render_hour_24 },
    Rule { token: 'm', greedy: true, render: render_minute },
    Rule { token: 's', greedy: true, render: render_second },
    Rule { token: 'q', greedy: true, render: render_quarter },
    Rule { token: 'S', greedy: false, render: render_millisecond },
];

/// Byte offset and length of the first run of an ASCII `token`
fn find_run(text: &str, token: char, greedy: bool) -> Option<(usize, usize)> {
    let start = text.find(token)?;
    let run = if greedy {
        text[start..].chars().take_while(|&c| c == token).count()
    } else {
        1
    };
    Some((start, run))
}

fn numeric(value: u32, run: usize) -> String {
    if run == 1 {
        value.to_string()
    } else {
        format!("{:02}", value)
    }
}

fn render_year(dt: &NaiveDateTime, run: usize) -> String {
    let year = format!("{:04}", dt.year());
    let skip = year.chars().count().saturating_sub(run);
    year.chars().skip(skip).collect()
}

fn render_weekday(dt: &NaiveDateTime, run: usize) -> String {
    let numeral = WEEKDAY_NUMERALS[dt.weekday().num_days_from_sunday() as usize];
    let prefix = match run {
        1 => "",
        2 => WEEKDAY_SHORT_PREFIX,
        _ => WEEKDAY_LONG_PREFIX,
    };
    format!("{}{}", prefix, numeral)
}

fn render_month(dt: &NaiveDateTime, run: usize) -> String {
    numeric(dt.month(), run)
}

fn render_day(dt: &NaiveDateTime, run: usize) -> String {
    numeric(dt.day(), run)
}

fn render_hour_12(dt: &NaiveDateTime, run: usize) -> String {
    let hour = dt.hour() % 24;
    if hour == 0 {
        "00".to_string()
    } else {
        numeric(hour, run)
    }
}

fn render_hour_24(dt: &NaiveDateTime, run: usize) -> String {
    numeric(dt.hour(), run)
}

fn render_minute(dt: &NaiveDateTime, run: usize) -> String {
    numeric(dt.minute(), run)
}

fn render_second(dt: &NaiveDateTime, run: usize) -> String {
    numeric(dt.second(), run)
}

fn render_quarter(dt: &NaiveDateTime, run: usize) -> String {
    numeric((dt.month() + 2) / 3, run)
}

fn render_millisecond(dt: &NaiveDateTime, _run: usize) -> String {
    (dt.nanosecond() / 1_000_000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 12, 7)
            .unwrap()
            .and_hms_milli_opt(16, 2, 18, 912)
            .unwrap()
    }

    #[test]
    fn test_default_pattern() {
        let input = DateInput::from(sample());
        assert_eq!(format_date(&input, None).unwrap(), "2021-12-07 16:02:18");
    }

    #[test]
    fn test_short_tokens_and_millis() {
        assert_eq!(format_datetime(&sample(), "yyyy-M-d h:m:s.S"), "2021-12-7 16:2:18.912");
    }

    #[test]
    fn test_weekday_forms() {
        assert_eq!(format_datetime(&sample(), "yyyy-MM-dd E HH:mm:ss"), "2021-12-07 二 16:02:18");
        assert_eq!(format_datetime(&sample(), "yyyy-MM-dd EE hh:mm:ss"), "2021-12-07 周二 16:02:18");
        assert_eq!(
            format_datetime(&sample(), "yyyy-MM-dd EEE hh:mm:ss"),
            "2021-12-07 星期二 16:02:18"
        );
    }

    #[test]
    fn test_year_run_length() {
        assert_eq!(format_datetime(&sample(), "yy"), "21");
        assert_eq!(format_datetime(&sample(), "y"), "1");
        assert_eq!(format_datetime(&sample(), "yyy"), "021");
        assert_eq!(format_datetime(&sample(), "yyyyy"), "2021");
        assert_eq!(format_datetime(&sample(), "yyyyy-MM"), "2021-12");
    }

    #[test]
    fn test_midnight_hour_is_double_zero() {
        let midnight = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_time(NaiveTime::MIN);
        assert_eq!(format_datetime(&midnight, "h:m"), "00:0");
        assert_eq!(format_datetime(&midnight, "H:m"), "0:0");
    }

    #[test]
    fn test_quarter() {
        for (month, quarter) in [(1, "1"), (3, "1"), (4, "2"), (9, "3"), (10, "4"), (12, "4")] {
            let dt = NaiveDate::from_ymd_opt(2021, month, 1).unwrap().and_time(NaiveTime::MIN);
            assert_eq!(format_datetime(&dt, "q"), quarter, "month {month}");
        }
    }

    #[test]
    fn test_only_first_run_replaced() {
        assert_eq!(format_datetime(&sample(), "dd/dd"), "07/dd");
    }

    #[test]
    fn test_text_inputs() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let expect = NaiveDate::from_ymd_opt(2021, 12, 7).unwrap().and_hms_opt(16, 2, 18).unwrap();
        for text in [
            "2021-12-07 16:02:18",
            "2021/12/07 16:02:18",
            "2021-12-07T16:02:18.912Z",
            "2021-12-07T16:02:18",
        ] {
            assert_eq!(DateInput::from(text).resolve_in(&utc).unwrap(), expect, "{text}");
        }
    }

    #[test]
    fn test_date_only_text() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let dt = DateInput::from("2021-2-5").resolve_in(&utc).unwrap();
        assert_eq!(format_datetime(&dt, "yyyy-MM-dd hh:mm"), "2021-02-05 00:00");
    }

    #[test]
    fn test_numeric_text_is_timestamp() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let dt = DateInput::from("86400000").resolve_in(&utc).unwrap();
        assert_eq!(format_datetime(&dt, "yyyy-MM-dd"), "1970-01-02");
    }

    #[test]
    fn test_timestamp_in_offset() {
        let east8 = FixedOffset::east_opt(8 * 3600).unwrap();
        let dt = DateInput::Timestamp(0).resolve_in(&east8).unwrap();
        assert_eq!(format_datetime(&dt, "yyyy-MM-dd HH:mm"), "1970-01-01 08:00");
    }

    #[test]
    fn test_invalid_text() {
        let err = DateInput::from("not a date").resolve().unwrap_err();
        assert_eq!(err, CalendarError::invalid_date("not a date"));
    }

    #[test]
    fn test_json_inputs() {
        assert_eq!(DateInput::try_from(&json!(1000)).unwrap(), DateInput::Timestamp(1000));
        assert_eq!(
            DateInput::try_from(&json!("2021-12-07")).unwrap(),
            DateInput::Text("2021-12-07".to_string())
        );
        assert_eq!(
            DateInput::try_from(&json!(true)).unwrap_err(),
            CalendarError::UnsupportedInput {
                kind: "boolean".to_string()
            }
        );
    }
}
