//! Property-based tests for the temporal primitives using QuickCheck

use chrono::{FixedOffset, TimeZone};
use ferrum_stu3::{Date, DateTime, Instant, Time};
use quickcheck::{QuickCheck, TestResult};

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        _ => 31,
    }
}

/// Property: every well-formed dateTime string survives parse + display unchanged
#[test]
fn prop_date_time_lexical_round_trip() {
    fn prop(year: u16, month: u8, day: u8, secs: u32, millis: u16, offset: i16) -> TestResult {
        let year = i32::from(year % 9999) + 1;
        let month = u32::from(month % 12) + 1;
        let day = u32::from(day) % days_in_month(year, month) + 1;
        let secs = secs % 86_400;
        let offset_minutes = i32::from(offset) % (14 * 60);

        let sign = if offset_minutes < 0 { '-' } else { '+' };
        let text = format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}{}{:02}:{:02}",
            year,
            month,
            day,
            secs / 3600,
            secs / 60 % 60,
            secs % 60,
            millis % 1000,
            sign,
            offset_minutes.abs() / 60,
            offset_minutes.abs() % 60
        );

        match text.parse::<DateTime>() {
            Ok(value) => TestResult::from_bool(value.to_string() == text),
            Err(_) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u16, u8, u8, u32, u16, i16) -> TestResult);
}

/// Property: partial dates keep their precision through JSON
#[test]
fn prop_partial_dates_keep_precision() {
    fn prop(year: u16, month: Option<u8>) -> TestResult {
        let year = i32::from(year % 9999) + 1;
        let text = match month {
            Some(month) => format!("{:04}-{:02}", year, u32::from(month % 12) + 1),
            None => format!("{:04}", year),
        };

        let json = serde_json::Value::String(text.clone());
        let date: Date = match serde_json::from_value(json.clone()) {
            Ok(date) => date,
            Err(_) => return TestResult::failed(),
        };

        TestResult::from_bool(
            date.day().is_none()
                && date.month().is_some() == month.is_some()
                && serde_json::to_value(date).ok() == Some(json),
        )
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u16, Option<u8>) -> TestResult);
}

/// Property: days past the end of the month are rejected
#[test]
fn prop_day_past_month_end_rejected() {
    fn prop(year: u16, month: u8, extra: u8) -> TestResult {
        let year = i32::from(year % 9999) + 1;
        let month = u32::from(month % 12) + 1;
        let day = days_in_month(year, month) + 1 + u32::from(extra % 3);
        if day > 99 {
            return TestResult::discard();
        }

        let text = format!("{:04}-{:02}-{:02}", year, month, day);
        TestResult::from_bool(text.parse::<Date>().is_err())
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u16, u8, u8) -> TestResult);
}

/// Property: converting from chrono and back preserves the instant in time
#[test]
fn prop_chrono_conversion_preserves_timestamp() {
    fn prop(seconds: u32, offset_hours: i8) -> TestResult {
        let offset = match FixedOffset::east_opt(i32::from(offset_hours % 14) * 3600) {
            Some(offset) => offset,
            None => return TestResult::discard(),
        };
        let original = match offset.timestamp_opt(i64::from(seconds), 0).single() {
            Some(value) => value,
            None => return TestResult::discard(),
        };

        let instant = Instant::from(original);
        let back = match instant.to_chrono() {
            Some(value) => value,
            None => return TestResult::failed(),
        };

        TestResult::from_bool(back.timestamp() == original.timestamp())
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u32, i8) -> TestResult);
}

#[test]
fn time_rejects_out_of_range_components() {
    for text in ["24:00:00", "12:60:00", "12:00:61", "7:00:00", "12:00"] {
        assert!(text.parse::<Time>().is_err(), "{} should be rejected", text);
    }
    assert!("23:59:59.999999999".parse::<Time>().is_ok());
    assert!("23:59:60".parse::<Time>().is_ok());
}

#[test]
fn year_zero_and_negative_zero_offset() {
    for text in ["0000", "0000-06", "0000-06-01T00:00:00Z"] {
        assert!(text.parse::<DateTime>().is_err(), "{} should be rejected", text);
    }
    for text in ["0001", "2017-01-01T00:00:00-00:00", "2016-12-31T23:59:60Z"] {
        let value: DateTime = text.parse().unwrap();
        assert_eq!(value.to_string(), text);
    }
}
