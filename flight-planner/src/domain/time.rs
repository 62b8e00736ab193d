//! Schedule timestamp handling.
//!
//! The flight catalog writes schedule times as `M/D/YYYY H:MM` strings
//! (e.g. `5/5/2017 12:20`). This module parses them into a totally ordered
//! value so window filtering and transfer checks compare instants, never text.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A schedule instant with minute precision.
///
/// Two timestamps are equal exactly when they denote the same instant, so
/// `05/05/2017 12:20` and `5/5/2017 12:20` compare equal.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Timestamp;
///
/// let t = Timestamp::parse("5/5/2017 12:20").unwrap();
/// assert_eq!(t.to_string(), "5/5/2017 12:20");
/// assert_eq!(t, Timestamp::parse("05/05/2017 12:20").unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Create a timestamp from date and time components.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self(date.and_time(time))
    }

    /// Parse a timestamp from `M/D/YYYY H:MM` format.
    ///
    /// Month, day and hour may be one or two digits; the year must be four
    /// digits and the minute two.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::Timestamp;
    ///
    /// assert!(Timestamp::parse("12/31/2017 23:59").is_ok());
    /// assert!(Timestamp::parse("1/1/2018 0:00").is_ok());
    ///
    /// assert!(Timestamp::parse("2017-05-05 12:20").is_err());
    /// assert!(Timestamp::parse("2/30/2017 10:00").is_err());
    /// assert!(Timestamp::parse("5/5/2017 24:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        let (date_part, time_part) = s
            .split_once(' ')
            .ok_or_else(|| TimeError::new("expected date and time separated by a space"))?;
        let time_part = time_part.trim_start();

        let mut date_fields = date_part.split('/');
        let month = parse_digits(date_fields.next(), 1, 2)
            .ok_or_else(|| TimeError::new("invalid month digits"))?;
        let day = parse_digits(date_fields.next(), 1, 2)
            .ok_or_else(|| TimeError::new("invalid day digits"))?;
        let year = parse_digits(date_fields.next(), 4, 4)
            .ok_or_else(|| TimeError::new("invalid year digits"))?;
        if date_fields.next().is_some() {
            return Err(TimeError::new("expected M/D/YYYY date"));
        }

        let (hour, minute) = time_part
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected H:MM time"))?;
        let hour =
            parse_digits(Some(hour), 1, 2).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_digits(Some(minute), 2, 2)
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        // Four ASCII digits always fit in an i32.
        let date = NaiveDate::from_ymd_opt(year as i32, month, day)
            .ok_or_else(|| TimeError::new("no such calendar date"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time of day"))?;

        Ok(Self::new(date, time))
    }

    /// Returns the duration between two timestamps.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Add a duration, returning `None` on calendar overflow.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        self.0.checked_add_signed(duration).map(Self)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl FromStr for Timestamp {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0.format("%Y-%m-%d %H:%M"))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.0.date();
        write!(
            f,
            "{}/{}/{} {}:{:02}",
            date.month(),
            date.day(),
            date.year(),
            self.0.hour(),
            self.0.minute()
        )
    }
}

/// Parse a run of `min..=max` ASCII digits.
fn parse_digits(field: Option<&str>, min: usize, max: usize) -> Option<u32> {
    let field = field?;
    if field.len() < min || field.len() > max || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn parse_valid_timestamps() {
        assert!(Timestamp::parse("5/5/2017 12:20").is_ok());
        assert!(Timestamp::parse("12/31/2017 23:59").is_ok());
        assert!(Timestamp::parse("1/1/2018 0:00").is_ok());
        assert!(Timestamp::parse("02/29/2016 07:05").is_ok());
        assert!(Timestamp::parse("  5/5/2017 12:20  ").is_ok());
    }

    #[test]
    fn parse_invalid_format() {
        assert!(Timestamp::parse("").is_err());
        assert!(Timestamp::parse("5/5/2017").is_err());
        assert!(Timestamp::parse("12:20").is_err());
        assert!(Timestamp::parse("2017-05-05 12:20").is_err());
        assert!(Timestamp::parse("5/5/17 12:20").is_err());
        assert!(Timestamp::parse("5/5/2017/1 12:20").is_err());
        assert!(Timestamp::parse("5/5/2017 1220").is_err());
        assert!(Timestamp::parse("5/5/2017 12:2").is_err());
        assert!(Timestamp::parse("5/5/2017 -1:20").is_err());
        assert!(Timestamp::parse("five/5/2017 12:20").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(Timestamp::parse("13/1/2017 10:00").is_err());
        assert!(Timestamp::parse("0/1/2017 10:00").is_err());
        assert!(Timestamp::parse("2/29/2017 10:00").is_err());
        assert!(Timestamp::parse("4/31/2017 10:00").is_err());
        assert!(Timestamp::parse("5/5/2017 24:00").is_err());
        assert!(Timestamp::parse("5/5/2017 12:60").is_err());
    }

    #[test]
    fn error_reason_is_reported() {
        let err = Timestamp::parse("5/5/2017 25:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid timestamp: hour must be 0-23");

        let err = Timestamp::parse("2/30/2017 10:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid timestamp: no such calendar date");
    }

    #[test]
    fn padding_does_not_change_the_instant() {
        assert_eq!(ts("5/5/2017 9:05"), ts("05/05/2017 09:05"));
        assert_eq!(ts("5/5/2017 9:05"), ts("5/5/2017  9:05"));
    }

    #[test]
    fn display_is_unpadded() {
        assert_eq!(ts("05/05/2017 09:05").to_string(), "5/5/2017 9:05");
        assert_eq!(ts("12/31/2017 23:59").to_string(), "12/31/2017 23:59");
    }

    #[test]
    fn debug_format() {
        assert_eq!(
            format!("{:?}", ts("5/5/2017 9:05")),
            "Timestamp(2017-05-05 09:05)"
        );
    }

    #[test]
    fn ordering_follows_the_calendar() {
        assert!(ts("5/5/2017 12:20") < ts("5/5/2017 12:21"));
        assert!(ts("5/5/2017 23:59") < ts("5/6/2017 0:00"));
        assert!(ts("12/31/2017 23:59") < ts("1/1/2018 0:00"));
        // Text order would get this one wrong.
        assert!(ts("9/1/2017 10:00") < ts("10/1/2017 10:00"));
    }

    #[test]
    fn duration_between() {
        let dep = ts("5/5/2017 23:30");
        let arr = ts("5/6/2017 1:15");
        assert_eq!(arr.signed_duration_since(dep), Duration::minutes(105));
        assert_eq!(dep.signed_duration_since(arr), Duration::minutes(-105));
    }

    #[test]
    fn checked_add_crosses_midnight() {
        let later = ts("5/5/2017 23:30").checked_add(Duration::hours(1)).unwrap();
        assert_eq!(later, ts("5/6/2017 0:30"));
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: Timestamp = "5/5/2017 12:20".parse().unwrap();
        assert_eq!(parsed, ts("5/5/2017 12:20"));
    }
}
