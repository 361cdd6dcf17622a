//! Date inputs accepted at the format-call boundary.

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

use crate::calendar::CalendarTime;
use crate::error::FormatError;

/// A date value accepted by a format call.
///
/// Every variant is normalized into a [`CalendarTime`] before tokenization;
/// inputs that don't carry a UTC offset are interpreted at the runtime's
/// local offset.
#[derive(Debug, Clone, PartialEq)]
pub enum DateLike<'a> {
    /// An already-normalized calendar time.
    CalendarTime(CalendarTime),
    /// An ISO-8601 date or date/time string.
    Iso(&'a str),
    /// Milliseconds since the Unix epoch.
    UnixMillis(i64),
}

impl<'a> From<CalendarTime> for DateLike<'a> {
    fn from(t: CalendarTime) -> Self {
        DateLike::CalendarTime(t)
    }
}

impl<'a> From<DateTime<FixedOffset>> for DateLike<'a> {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        DateLike::CalendarTime(dt.into())
    }
}

impl<'a> From<DateTime<Local>> for DateLike<'a> {
    fn from(dt: DateTime<Local>) -> Self {
        DateLike::CalendarTime(dt.into())
    }
}

impl<'a> From<DateTime<chrono::Utc>> for DateLike<'a> {
    fn from(dt: DateTime<chrono::Utc>) -> Self {
        DateLike::CalendarTime(dt.into())
    }
}

impl<'a> From<&'a str> for DateLike<'a> {
    fn from(s: &'a str) -> Self {
        DateLike::Iso(s)
    }
}

impl<'a> From<i64> for DateLike<'a> {
    fn from(millis: i64) -> Self {
        DateLike::UnixMillis(millis)
    }
}

impl DateLike<'_> {
    /// Normalizes this input into the canonical calendar-time form.
    pub fn into_calendar_time(self) -> Result<CalendarTime, FormatError> {
        match self {
            DateLike::CalendarTime(t) => Ok(t),
            DateLike::Iso(s) => parse_iso(s),
            DateLike::UnixMillis(millis) => match Local.timestamp_millis_opt(millis) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.into()),
                LocalResult::None => Err(FormatError::invalid_date(format!(
                    "timestamp {millis}ms is out of range"
                ))),
            },
        }
    }
}

/// Parses an ISO-8601 string, trying offset-carrying forms first.
///
/// Strings without an offset (`2020-06-12T12:01:24.125`, `2020-06-12`) are
/// interpreted as local time.
fn parse_iso(s: &str) -> Result<CalendarTime, FormatError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.into());
    }
    if let Ok(naive) = s.parse::<NaiveDateTime>() {
        return local_from_naive(naive);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return local_from_naive(naive);
    }
    if let Ok(date) = s.parse::<NaiveDate>() {
        return local_from_naive(date.and_time(chrono::NaiveTime::MIN));
    }
    Err(FormatError::invalid_date(format!(
        "unrecognized ISO-8601 string '{s}'"
    )))
}

/// Pins an offset-less civil time to the runtime's local offset.
/// Ambiguous times (DST fold) take the earlier offset.
fn local_from_naive(naive: NaiveDateTime) -> Result<CalendarTime, FormatError> {
    match naive.and_local_timezone(Local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.into()),
        LocalResult::None => Err(FormatError::invalid_date(format!(
            "local time {naive} does not exist"
        ))),
    }
}
