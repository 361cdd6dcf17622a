//! Canonical calendar-time representation.
//!
//! Every accepted date input is normalized into a [`CalendarTime`] before
//! formatting. It pins a civil date/time to a fixed UTC offset, so token
//! resolvers read plain components without consulting the environment:
//! - weekday indexing is 0 = Sunday, matching the locale tables
//! - the offset is whatever the input carried, or the runtime's local
//!   offset for inputs that don't carry one

use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};

/// A civil date/time at a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTime {
    inner: DateTime<FixedOffset>,
}

impl CalendarTime {
    /// The current instant at the runtime's local offset.
    pub fn now() -> Self {
        CalendarTime {
            inner: Local::now().fixed_offset(),
        }
    }

    /// Calendar year (proleptic Gregorian, may be negative).
    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    /// Weekday index, 0 = Sunday through 6 = Saturday.
    pub fn weekday(&self) -> u32 {
        self.inner.weekday().num_days_from_sunday()
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    /// Hour on the 12-hour clock, 1-12. Midnight and noon both render 12.
    pub fn hour12(&self) -> u32 {
        match self.inner.hour() % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Minute, 0-59.
    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    /// Second, 0-59.
    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    /// Millisecond part of the second, 0-999.
    pub fn millisecond(&self) -> u32 {
        self.inner.timestamp_subsec_millis() % 1000
    }

    /// True from noon onward.
    pub fn is_pm(&self) -> bool {
        self.inner.hour() >= 12
    }

    /// UTC offset of this instant, in seconds east of UTC.
    pub fn offset_seconds(&self) -> i32 {
        self.inner.offset().local_minus_utc()
    }

    /// Renders the UTC offset as `+HH:MM` / `-HH:MM`, or `+HHMM` without
    /// the colon. The sign is always explicit, including for zero.
    pub fn offset_string(&self, colon: bool) -> String {
        let secs = self.offset_seconds();
        let sign = if secs < 0 { '-' } else { '+' };
        let minutes = secs.abs() / 60;
        let (hours, minutes) = (minutes / 60, minutes % 60);
        if colon {
            format!("{sign}{hours:02}:{minutes:02}")
        } else {
            format!("{sign}{hours:02}{minutes:02}")
        }
    }
}

impl From<DateTime<FixedOffset>> for CalendarTime {
    fn from(inner: DateTime<FixedOffset>) -> Self {
        CalendarTime { inner }
    }
}

impl From<DateTime<Local>> for CalendarTime {
    fn from(dt: DateTime<Local>) -> Self {
        CalendarTime {
            inner: dt.fixed_offset(),
        }
    }
}

impl From<DateTime<chrono::Utc>> for CalendarTime {
    fn from(dt: DateTime<chrono::Utc>) -> Self {
        CalendarTime {
            inner: dt.fixed_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> CalendarTime {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().into()
    }

    #[test]
    fn test_hour12() {
        assert_eq!(at("2020-06-12T00:30:00+00:00").hour12(), 12);
        assert_eq!(at("2020-06-12T01:30:00+00:00").hour12(), 1);
        assert_eq!(at("2020-06-12T11:30:00+00:00").hour12(), 11);
        assert_eq!(at("2020-06-12T12:30:00+00:00").hour12(), 12);
        assert_eq!(at("2020-06-12T13:30:00+00:00").hour12(), 1);
        assert_eq!(at("2020-06-12T23:30:00+00:00").hour12(), 11);
    }

    #[test]
    fn test_weekday_index_is_sunday_based() {
        // 2020-06-12 was a Friday
        assert_eq!(at("2020-06-12T12:00:00+00:00").weekday(), 5);
        // 2020-06-14 was a Sunday
        assert_eq!(at("2020-06-14T12:00:00+00:00").weekday(), 0);
    }

    #[test]
    fn test_offset_string() {
        let t = at("2020-06-12T12:00:00+02:00");
        assert_eq!(t.offset_string(true), "+02:00");
        assert_eq!(t.offset_string(false), "+0200");

        let t = at("2020-06-12T12:00:00-05:30");
        assert_eq!(t.offset_string(true), "-05:30");
        assert_eq!(t.offset_string(false), "-0530");

        // Zero offset keeps an explicit sign
        let t = at("2020-06-12T12:00:00+00:00");
        assert_eq!(t.offset_string(true), "+00:00");
        assert_eq!(t.offset_string(false), "+0000");
    }

    #[test]
    fn test_millisecond() {
        assert_eq!(at("2020-06-12T12:01:24.125+02:00").millisecond(), 125);
        assert_eq!(at("2020-06-12T12:01:24+02:00").millisecond(), 0);
    }
}
