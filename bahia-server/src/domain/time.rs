//! Timetable time handling.
//!
//! The GTFS feed provides times as "HH:MM:SS" strings on the service
//! day's wall clock; the published dataset keeps them at minute
//! precision as "HH:MM". Times for service running past midnight use
//! hours of 24 and above ("24:15" is 00:15 on the following day), so
//! this type cannot be a plain `chrono::NaiveTime`.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Minutes in a service day.
const MINUTES_PER_DAY: i32 = 24 * 60;

/// Highest hour accepted from the feed.
///
/// GTFS allows times past 24:00 for trips that start before midnight
/// and finish after it; anything beyond a second day is feed garbage.
const MAX_HOUR: u32 = 47;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A timetable time with minute precision.
///
/// Stored as minutes past the service day's midnight. Ordering is
/// temporal, and because the display form is zero-padded, lexicographic
/// ordering of the rendered strings agrees with it.
///
/// # Examples
///
/// ```
/// use bahia_server::domain::TimetableTime;
///
/// let t = TimetableTime::parse("08:15").unwrap();
/// assert_eq!(t.to_string(), "08:15");
///
/// // Seconds from the raw feed are truncated
/// let t = TimetableTime::parse("08:15:42").unwrap();
/// assert_eq!(t.to_string(), "08:15");
///
/// // Past-midnight times are preserved as-is
/// let t = TimetableTime::parse("24:10:00").unwrap();
/// assert_eq!(t.to_string(), "24:10");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimetableTime(u16);

impl TimetableTime {
    /// Parse a time from "HH:MM" or "HH:MM:SS" format.
    ///
    /// Seconds, if present, are validated and then dropped: the
    /// published dataset works at minute precision.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();

        if bytes.len() != 5 && bytes.len() != 8 {
            return Err(TimeError::new("expected HH:MM or HH:MM:SS format"));
        }

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > MAX_HOUR {
            return Err(TimeError::new("hour must be 0-47"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        if bytes.len() == 8 {
            if bytes[5] != b':' {
                return Err(TimeError::new("expected colon at position 5"));
            }
            let second = parse_two_digits(&bytes[6..8])
                .ok_or_else(|| TimeError::new("invalid second digits"))?;
            if second > 59 {
                return Err(TimeError::new("second must be 0-59"));
            }
        }

        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Returns the hour (0-47).
    pub fn hour(&self) -> u32 {
        u32::from(self.0) / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        u32::from(self.0) % 60
    }

    /// Returns minutes past the service day's midnight.
    pub fn minutes_of_day(&self) -> u32 {
        u32::from(self.0)
    }

    /// Minutes from this time until `arrival`.
    ///
    /// If `arrival` is clock-earlier than `self`, it is taken to fall
    /// on the following day: the result is `(24h - self) + arrival`.
    /// Always non-negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use bahia_server::domain::TimetableTime;
    ///
    /// let dep = TimetableTime::parse("08:00").unwrap();
    /// let arr = TimetableTime::parse("08:45").unwrap();
    /// assert_eq!(dep.minutes_until(arr), 45);
    ///
    /// // Overnight wrap
    /// let dep = TimetableTime::parse("23:50").unwrap();
    /// let arr = TimetableTime::parse("00:20").unwrap();
    /// assert_eq!(dep.minutes_until(arr), 30);
    /// ```
    pub fn minutes_until(&self, arrival: Self) -> u32 {
        let dep = i32::from(self.0);
        let arr = i32::from(arrival.0);
        if arr >= dep {
            (arr - dep) as u32
        } else {
            (arr - dep).rem_euclid(MINUTES_PER_DAY) as u32
        }
    }

    /// Anchor this time onto a calendar date.
    ///
    /// Hours of 24 and above land on the day after `date`.
    pub fn on_date(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(self.0))
    }
}

impl fmt::Debug for TimetableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimetableTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimetableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimetableTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimetableTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TimetableTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
