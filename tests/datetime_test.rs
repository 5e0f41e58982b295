use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use timeline_slider::{format_date, format_datetime, relative_time, CalendarError, DateInput};

fn sample() -> DateInput {
    NaiveDate::from_ymd_opt(2021, 12, 7)
        .unwrap()
        .and_hms_opt(16, 2, 18)
        .unwrap()
        .into()
}

#[test]
fn test_format_fixed_date() {
    assert_eq!(
        format_date(&sample(), Some("yyyy-MM-dd hh:mm:ss")).unwrap(),
        "2021-12-07 16:02:18"
    );
}

#[test]
fn test_format_short_weekday() {
    let formatted = format_date(&sample(), Some("yyyy-MM-dd EE hh:mm:ss")).unwrap();
    assert!(formatted.contains("周二"));
}

#[test]
fn test_format_text_input_without_pattern() {
    assert_eq!(format_date(&"2021-12-07".into(), None).unwrap(), "2021-12-07 00:00:00");
}

#[test]
fn test_format_every_weekday() {
    // 2021-12-05 is a Sunday
    let expected = ["星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六"];
    for (offset, name) in expected.iter().enumerate() {
        let date = NaiveDate::from_ymd_opt(2021, 12, 5 + offset as u32).unwrap();
        assert_eq!(format_datetime(&date.and_hms_opt(0, 0, 0).unwrap(), "EEE"), *name);
    }
}

#[test]
fn test_format_rejects_garbage() {
    let err = format_date(&"31/31/31 xx".into(), None).unwrap_err();
    assert!(matches!(err, CalendarError::InvalidDate { .. }));
}

#[test]
fn test_timestamp_out_of_range() {
    let err = DateInput::Timestamp(i64::MAX).resolve().unwrap_err();
    assert_eq!(err, CalendarError::TimestampOutOfRange { millis: i64::MAX });
}

#[test]
fn test_relative_time_with_other_offset() {
    let now = Utc.with_ymd_and_hms(2021, 12, 7, 12, 0, 0).unwrap();
    let utc = FixedOffset::east_opt(0).unwrap();
    assert_eq!(relative_time("2021-12-10 13:00", now, utc).unwrap(), "3天后");
    assert_eq!(relative_time("2021-12-07 09:59", now, utc).unwrap(), "2小时前");
}
