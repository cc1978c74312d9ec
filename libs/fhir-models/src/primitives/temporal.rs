//! Partial-precision temporal primitives
//!
//! FHIR `date` and `dateTime` values may stop at the year or the month,
//! and `dateTime` / `instant` values keep the timezone exactly as written
//! (`Z` and `+00:00` are different spellings). These types parse the
//! lexical forms strictly and format back to the same text, including the
//! number of fractional-second digits.

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{Error, Result};

const MAX_OFFSET_MINUTES: u32 = 14 * 60;
const MAX_FRACTION_DIGITS: usize = 9;
const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// How much of a [`Date`] is present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    Year,
    Month,
    Day,
}

/// `date`: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
}

/// `time`: `hh:mm:ss` with an optional fraction, no timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    hour: u32,
    minute: u32,
    second: u32,
    nanos: u32,
    fraction_digits: u8,
}

/// Timezone designator of a `dateTime` or `instant`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneOffset {
    /// Written as `Z`
    Utc,
    /// Written as `-00:00`: UTC, local offset unknown
    UnknownLocal,
    /// Written as `+hh:mm` or `-hh:mm`; seconds east of UTC
    Fixed(i32),
}

/// `dateTime`: a partial [`Date`], or a full date with time and timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    date: Date,
    time: Option<(Time, ZoneOffset)>,
}

/// `instant`: a full date, time and timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instant(DateTime);

impl Date {
    /// Builds a date, validating each present component
    pub fn new(year: i32, month: Option<u32>, day: Option<u32>) -> Result<Self> {
        let date = Date { year, month, day };
        check_date(&date).map_err(|reason| Error::invalid_primitive("date", &date.to_string(), reason))?;
        Ok(date)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn precision(&self) -> DatePrecision {
        match (self.month, self.day) {
            (Some(_), Some(_)) => DatePrecision::Day,
            (Some(_), None) => DatePrecision::Month,
            _ => DatePrecision::Year,
        }
    }

    /// The calendar date, when the value is given to the day
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month?, self.day?)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Date {
            year: date.year(),
            month: Some(date.month()),
            day: Some(date.day()),
        }
    }
}

impl Time {
    /// Builds a time without fractional seconds
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        let time = Time {
            hour,
            minute,
            second,
            nanos: 0,
            fraction_digits: 0,
        };
        check_time(&time).map_err(|reason| Error::invalid_primitive("time", &time.to_string(), reason))?;
        Ok(time)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Fractional part of the second in nanoseconds
    pub fn nanosecond(&self) -> u32 {
        self.nanos
    }

    /// Second 60 becomes chrono's leap-second representation
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if self.second == 60 {
            return NaiveTime::from_hms_nano_opt(
                self.hour,
                self.minute,
                59,
                NANOS_PER_SECOND + self.nanos,
            );
        }
        NaiveTime::from_hms_nano_opt(self.hour, self.minute, self.second, self.nanos)
    }
}

impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        // chrono stores a leap second as nanos >= 1s
        let (second, nanos) = match time.nanosecond().checked_sub(NANOS_PER_SECOND) {
            Some(nanos) => (time.second() + 1, nanos),
            None => (time.second(), time.nanosecond()),
        };
        Time {
            hour: time.hour(),
            minute: time.minute(),
            second,
            nanos,
            fraction_digits: fraction_digits_for(nanos),
        }
    }
}

impl ZoneOffset {
    /// Offset east of UTC in seconds
    pub fn seconds(&self) -> i32 {
        match self {
            ZoneOffset::Utc | ZoneOffset::UnknownLocal => 0,
            ZoneOffset::Fixed(seconds) => *seconds,
        }
    }

    pub fn to_fixed_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.seconds())
    }
}

impl DateTime {
    /// A date-only value at any precision
    pub fn from_date(date: Date) -> Self {
        DateTime { date, time: None }
    }

    /// A full value; the date must be given to the day
    pub fn new(date: Date, time: Time, zone: ZoneOffset) -> Result<Self> {
        let value = DateTime {
            date,
            time: Some((time, zone)),
        };
        check_date_time(&value)
            .map_err(|reason| Error::invalid_primitive("dateTime", &value.to_string(), reason))?;
        Ok(value)
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn time(&self) -> Option<&Time> {
        self.time.as_ref().map(|(time, _)| time)
    }

    pub fn zone(&self) -> Option<ZoneOffset> {
        self.time.map(|(_, zone)| zone)
    }

    /// The instant denoted by this value, when it carries a time
    pub fn to_chrono(&self) -> Option<chrono::DateTime<FixedOffset>> {
        let (time, zone) = self.time?;
        let naive = NaiveDateTime::new(self.date.to_naive_date()?, time.to_naive_time()?);
        zone.to_fixed_offset()?
            .from_local_datetime(&naive)
            .single()
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        DateTime::from_date(date)
    }
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for DateTime {
    fn from(value: chrono::DateTime<Tz>) -> Self {
        let seconds = value.offset().fix().local_minus_utc();
        let zone = if seconds == 0 {
            ZoneOffset::Utc
        } else {
            ZoneOffset::Fixed(seconds)
        };
        let local = value.naive_local();
        DateTime {
            date: Date::from(local.date()),
            time: Some((Time::from(local.time()), zone)),
        }
    }
}

impl Instant {
    pub fn as_date_time(&self) -> &DateTime {
        &self.0
    }

    pub fn to_chrono(&self) -> Option<chrono::DateTime<FixedOffset>> {
        self.0.to_chrono()
    }
}

impl TryFrom<DateTime> for Instant {
    type Error = Error;

    fn try_from(value: DateTime) -> Result<Self> {
        check_instant(&value)
            .map_err(|reason| Error::invalid_primitive("instant", &value.to_string(), reason))?;
        Ok(Instant(value))
    }
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for Instant {
    fn from(value: chrono::DateTime<Tz>) -> Self {
        Instant(DateTime::from(value))
    }
}

impl From<Instant> for DateTime {
    fn from(value: Instant) -> Self {
        value.0
    }
}

// Validation

fn check_date(date: &Date) -> std::result::Result<(), &'static str> {
    if !(0..=9999).contains(&date.year) {
        return Err("year must have four digits");
    }
    if date.year == 0 {
        return Err("year 0000 does not exist");
    }
    match (date.month, date.day) {
        (None, None) => Ok(()),
        (None, Some(_)) => Err("day given without a month"),
        (Some(month), None) if (1..=12).contains(&month) => Ok(()),
        (Some(_), None) => Err("month out of range"),
        (Some(month), Some(_)) if !(1..=12).contains(&month) => Err("month out of range"),
        (Some(month), Some(day)) => NaiveDate::from_ymd_opt(date.year, month, day)
            .map(|_| ())
            .ok_or("day out of range"),
    }
}

fn check_time(time: &Time) -> std::result::Result<(), &'static str> {
    if time.hour > 23 {
        return Err("hour out of range");
    }
    if time.minute > 59 {
        return Err("minute out of range");
    }
    // 60 is a leap second
    if time.second > 60 {
        return Err("second out of range");
    }
    Ok(())
}

fn check_zone(zone: ZoneOffset) -> std::result::Result<(), &'static str> {
    if zone.seconds().unsigned_abs() > MAX_OFFSET_MINUTES * 60 {
        return Err("timezone offset out of range");
    }
    Ok(())
}

fn check_date_time(value: &DateTime) -> std::result::Result<(), &'static str> {
    check_date(&value.date)?;
    if let Some((time, zone)) = &value.time {
        if value.date.precision() != DatePrecision::Day {
            return Err("a time requires a full date");
        }
        check_time(time)?;
        check_zone(*zone)?;
    }
    Ok(())
}

fn check_instant(value: &DateTime) -> std::result::Result<(), &'static str> {
    if value.time.is_none() {
        return Err("an instant requires a time and timezone");
    }
    check_date_time(value)
}

fn fraction_digits_for(nanos: u32) -> u8 {
    match nanos {
        0 => 0,
        n if n % 1_000_000 == 0 => 3,
        n if n % 1_000 == 0 => 6,
        _ => 9,
    }
}

// Parsing

fn parse_digits(s: &str, len: usize) -> Option<u32> {
    if s.len() == len && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

fn parse_date_parts(s: &str) -> std::result::Result<Date, &'static str> {
    let mut parts = s.split('-');
    let year = parts
        .next()
        .and_then(|p| parse_digits(p, 4))
        .ok_or("year must have four digits")?;
    let month = parts
        .next()
        .map(|p| parse_digits(p, 2).ok_or("month must have two digits"))
        .transpose()?;
    let day = parts
        .next()
        .map(|p| parse_digits(p, 2).ok_or("day must have two digits"))
        .transpose()?;
    if parts.next().is_some() {
        return Err("unexpected trailing characters");
    }

    let date = Date {
        year: year as i32,
        month,
        day,
    };
    check_date(&date)?;
    Ok(date)
}

fn parse_time_parts(s: &str) -> std::result::Result<Time, &'static str> {
    let (main, fraction) = match s.split_once('.') {
        Some((main, fraction)) => (main, Some(fraction)),
        None => (s, None),
    };

    let mut fields = main.split(':');
    let (Some(hour), Some(minute), Some(second), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err("time must be hh:mm:ss");
    };

    let (nanos, fraction_digits) = match fraction {
        None => (0, 0),
        Some(f) => {
            if f.is_empty()
                || f.len() > MAX_FRACTION_DIGITS
                || !f.bytes().all(|b| b.is_ascii_digit())
            {
                return Err("fraction must have one to nine digits");
            }
            let padded = format!("{:0<9}", f);
            let nanos = padded.parse().map_err(|_| "invalid fraction")?;
            (nanos, f.len() as u8)
        }
    };

    let time = Time {
        hour: parse_digits(hour, 2).ok_or("hour must have two digits")?,
        minute: parse_digits(minute, 2).ok_or("minute must have two digits")?,
        second: parse_digits(second, 2).ok_or("second must have two digits")?,
        nanos,
        fraction_digits,
    };
    check_time(&time)?;
    Ok(time)
}

fn split_zone(s: &str) -> std::result::Result<(&str, ZoneOffset), &'static str> {
    if let Some(rest) = s.strip_suffix('Z') {
        return Ok((rest, ZoneOffset::Utc));
    }
    if s.len() < 6 {
        return Err("a time requires a timezone");
    }

    let (rest, zone) = s.split_at(s.len() - 6);
    let sign = match zone.as_bytes() {
        [b'+', _, _, b':', _, _] => 1,
        [b'-', _, _, b':', _, _] => -1,
        _ => return Err("a time requires a timezone"),
    };
    let hours = parse_digits(&zone[1..3], 2).ok_or("invalid timezone offset")?;
    let minutes = parse_digits(&zone[4..6], 2).ok_or("invalid timezone offset")?;
    if minutes > 59 || hours * 60 + minutes > MAX_OFFSET_MINUTES {
        return Err("timezone offset out of range");
    }
    if sign < 0 && hours == 0 && minutes == 0 {
        return Ok((rest, ZoneOffset::UnknownLocal));
    }

    Ok((rest, ZoneOffset::Fixed(sign * (hours * 3600 + minutes * 60) as i32)))
}

fn parse_date_time(s: &str) -> std::result::Result<DateTime, &'static str> {
    if !s.is_ascii() {
        return Err("unexpected character");
    }

    let Some((date, rest)) = s.split_once('T') else {
        return Ok(DateTime::from_date(parse_date_parts(s)?));
    };

    let date = parse_date_parts(date)?;
    if date.precision() != DatePrecision::Day {
        return Err("a time requires a full date");
    }
    let (time, zone) = split_zone(rest)?;
    let time = parse_time_parts(time)?;

    Ok(DateTime {
        date,
        time: Some((time, zone)),
    })
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if !s.is_ascii() {
            return Err(Error::invalid_primitive("date", s, "unexpected character"));
        }
        parse_date_parts(s).map_err(|reason| Error::invalid_primitive("date", s, reason))
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if !s.is_ascii() {
            return Err(Error::invalid_primitive("time", s, "unexpected character"));
        }
        parse_time_parts(s).map_err(|reason| Error::invalid_primitive("time", s, reason))
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_date_time(s).map_err(|reason| Error::invalid_primitive("dateTime", s, reason))
    }
}

impl FromStr for Instant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_date_time(s)
            .and_then(|value| check_instant(&value).map(|_| Instant(value)))
            .map_err(|reason| Error::invalid_primitive("instant", s, reason))
    }
}

// Formatting

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{:02}", month)?;
        }
        if let Some(day) = self.day {
            write!(f, "-{:02}", day)?;
        }
        Ok(())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.fraction_digits > 0 {
            let digits = format!("{:09}", self.nanos);
            write!(f, ".{}", &digits[..self.fraction_digits as usize])?;
        }
        Ok(())
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneOffset::Utc => f.write_str("Z"),
            ZoneOffset::UnknownLocal => f.write_str("-00:00"),
            ZoneOffset::Fixed(seconds) => {
                let sign = if *seconds < 0 { '-' } else { '+' };
                let minutes = seconds.unsigned_abs() / 60;
                write!(f, "{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
            }
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;
        if let Some((time, zone)) = &self.time {
            write!(f, "T{}{}", time, zone)?;
        }
        Ok(())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! lexical_serde {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                    let raw = String::deserialize(deserializer)?;
                    raw.parse().map_err(de::Error::custom)
                }
            }
        )+
    };
}

lexical_serde!(Date, Time, DateTime, Instant);

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<T: FromStr<Err = Error> + fmt::Display>(input: &str) {
        let parsed: T = input.parse().unwrap_or_else(|e| panic!("{input}: {e}"));
        assert_eq!(parsed.to_string(), input);
    }

    #[test]
    fn dates_at_every_precision() {
        for input in ["1000", "9999", "2015-12", "2015-01", "2015-01-01", "2015-01-31"] {
            round_trip::<Date>(input);
            round_trip::<DateTime>(input);
        }

        let date: Date = "2015-05".parse().unwrap();
        assert_eq!(date.precision(), DatePrecision::Month);
        assert_eq!(date.to_naive_date(), None);
    }

    #[test]
    fn rejects_malformed_dates() {
        for input in [
            "", " ", "abc", "999", "-999", "10000", "-10000", "-1", "0000", "0000-01-01",
            "2017-13", "2017-00",
            "2017-11-00", "2017-11-32", "2017-00-12", "2017-02-29", "2017-1-01",
        ] {
            assert!(input.parse::<Date>().is_err(), "{input}");
            assert!(input.parse::<DateTime>().is_err(), "{input}");
        }
    }

    #[test]
    fn date_times_keep_fraction_and_zone_spelling() {
        for input in [
            "2015-01-31T21:32:52Z",
            "2015-01-31T21:32:52.12679Z",
            "2015-01-31T21:32:52.000000001Z",
            "2015-01-31T21:32:52.999999999Z",
            "2015-01-31T21:32:52+01:00",
            "2015-01-31T21:32:52-01:00",
            "2015-11-09T12:12:12.00026+01:00",
            "2015-11-09T12:12:12+00:00",
            "2015-11-09T12:12:12-00:00",
            "2015-11-09T12:12:12-05:00",
            "2015-11-09T12:12:12+14:00",
        ] {
            round_trip::<DateTime>(input);
            round_trip::<Instant>(input);
        }

        let utc: DateTime = "2015-11-09T12:12:12Z".parse().unwrap();
        let zero: DateTime = "2015-11-09T12:12:12+00:00".parse().unwrap();
        let unknown: DateTime = "2015-11-09T12:12:12-00:00".parse().unwrap();
        assert_ne!(utc, zero);
        assert_ne!(zero, unknown);
        assert_eq!(unknown.zone(), Some(ZoneOffset::UnknownLocal));
        assert_eq!(utc.to_chrono(), zero.to_chrono());
        assert_eq!(unknown.to_chrono(), zero.to_chrono());
    }

    #[test]
    fn rejects_malformed_date_times() {
        for input in [
            "2017-11-00T01:12:31",
            "2017-11-10T01:12:31",
            "2017-11T01:12:31Z",
            "2017-11-10T24:00:00Z",
            "2017-11-10T01:60:00Z",
            "2017-11-10T01:12Z",
            "2017-11-10T01:12:31.Z",
            "2017-11-10T01:12:31.1234567890Z",
            "2017-11-10T01:12:31+14:30",
            "2017-11-10T01:12:31+0100",
        ] {
            assert!(input.parse::<DateTime>().is_err(), "{input}");
        }
    }

    #[test]
    fn instant_requires_full_precision() {
        assert!("2015-01-31".parse::<Instant>().is_err());
        assert!("2015".parse::<Instant>().is_err());
        let err = "2015-01-31".parse::<Instant>().unwrap_err();
        assert!(err.to_string().contains("instant"));
    }

    #[test]
    fn times() {
        for input in ["00:00:00", "23:59:59", "23:59:60", "12:30:05.5", "08:15:00.000001"] {
            round_trip::<Time>(input);
        }
        for input in ["24:00:00", "12:60:00", "12:00:61", "12:00", "12:00:00Z", "1:00:00"] {
            assert!(input.parse::<Time>().is_err(), "{input}");
        }
    }

    #[test]
    fn chrono_conversions() {
        let value: DateTime = "2015-01-31T21:32:52.125+01:00".parse().unwrap();
        let chrono = value.to_chrono().unwrap();
        assert_eq!(chrono.timestamp(), 1_422_736_372);
        assert_eq!(DateTime::from(chrono), value);

        let naive = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(Date::from(naive).to_string(), "2020-02-29");

        let instant = Instant::from(chrono::Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(instant.to_string(), "2020-01-01T00:00:00Z");

        let leap: DateTime = "2016-12-31T23:59:60.500Z".parse().unwrap();
        let chrono = leap.to_chrono().unwrap();
        assert_eq!(chrono.nanosecond(), 1_500_000_000);
        assert_eq!(DateTime::from(chrono), leap);
    }

    #[test]
    fn constructors_validate() {
        assert!(Date::new(2017, Some(2), Some(29)).is_err());
        assert!(Date::new(2016, Some(2), Some(29)).is_ok());
        assert!(Date::new(2016, None, Some(1)).is_err());
        assert!(Time::new(23, 59, 60).is_ok());
        assert!(Time::new(23, 59, 61).is_err());
        assert!(Date::new(0, None, None).is_err());

        let date = Date::new(2016, Some(5), None).unwrap();
        let time = Time::new(10, 0, 0).unwrap();
        assert!(DateTime::new(date, time, ZoneOffset::Utc).is_err());
        let full = Date::new(2016, Some(5), Some(1)).unwrap();
        assert_eq!(
            DateTime::new(full, time, ZoneOffset::Fixed(-3 * 3600)).unwrap().to_string(),
            "2016-05-01T10:00:00-03:00"
        );
    }

    #[test]
    fn serde_uses_lexical_form() {
        let value: DateTime = serde_json::from_str("\"2015-11-09T12:12:12.12345+01:00\"").unwrap();
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            "\"2015-11-09T12:12:12.12345+01:00\""
        );
        let err = serde_json::from_str::<Date>("\"2017-13\"").unwrap_err();
        assert!(err.to_string().contains("month out of range"), "{err}");
    }
}
