//! Per-token value resolvers.
//!
//! Each resolver is a pure function of the calendar time and the effective
//! locale table. Name lookups index the locale arrays with the same
//! zero-based month/weekday indexing `CalendarTime` exposes.

use crate::calendar::CalendarTime;
use crate::locale::Locale;

pub(crate) fn year4(time: &CalendarTime, _locale: &Locale) -> String {
    format!("{:04}", time.year())
}

pub(crate) fn year2(time: &CalendarTime, _locale: &Locale) -> String {
    format!("{:02}", time.year().rem_euclid(100))
}

pub(crate) fn month(time: &CalendarTime, _locale: &Locale) -> String {
    time.month().to_string()
}

pub(crate) fn month2(time: &CalendarTime, _locale: &Locale) -> String {
    format!("{:02}", time.month())
}

pub(crate) fn month_abbr(time: &CalendarTime, locale: &Locale) -> String {
    locale.month_names_short[(time.month() - 1) as usize].to_string()
}

pub(crate) fn month_full(time: &CalendarTime, locale: &Locale) -> String {
    locale.month_names_full[(time.month() - 1) as usize].to_string()
}

pub(crate) fn day(time: &CalendarTime, _locale: &Locale) -> String {
    time.day().to_string()
}

pub(crate) fn day2(time: &CalendarTime, _locale: &Locale) -> String {
    format!("{:02}", time.day())
}

pub(crate) fn weekday_letter(time: &CalendarTime, locale: &Locale) -> String {
    locale.day_letters[time.weekday() as usize].to_string()
}

pub(crate) fn weekday_abbr(time: &CalendarTime, locale: &Locale) -> String {
    locale.day_names_short[time.weekday() as usize].to_string()
}

pub(crate) fn weekday_full(time: &CalendarTime, locale: &Locale) -> String {
    locale.day_names_full[time.weekday() as usize].to_string()
}

pub(crate) fn hour24(time: &CalendarTime, _locale: &Locale) -> String {
    time.hour().to_string()
}

pub(crate) fn hour24_2(time: &CalendarTime, _locale: &Locale) -> String {
    format!("{:02}", time.hour())
}

pub(crate) fn hour12(time: &CalendarTime, _locale: &Locale) -> String {
    time.hour12().to_string()
}

pub(crate) fn hour12_2(time: &CalendarTime, _locale: &Locale) -> String {
    format!("{:02}", time.hour12())
}

pub(crate) fn minute(time: &CalendarTime, _locale: &Locale) -> String {
    time.minute().to_string()
}

pub(crate) fn minute2(time: &CalendarTime, _locale: &Locale) -> String {
    format!("{:02}", time.minute())
}

pub(crate) fn second(time: &CalendarTime, _locale: &Locale) -> String {
    time.second().to_string()
}

pub(crate) fn second2(time: &CalendarTime, _locale: &Locale) -> String {
    format!("{:02}", time.second())
}

/// `f` and `ff` both render the raw millisecond value, with no fixed-width
/// padding.
pub(crate) fn milliseconds(time: &CalendarTime, _locale: &Locale) -> String {
    time.millisecond().to_string()
}

pub(crate) fn meridiem_lower(time: &CalendarTime, locale: &Locale) -> String {
    locale.meridiem_lower[time.is_pm() as usize].to_string()
}

pub(crate) fn meridiem_upper(time: &CalendarTime, locale: &Locale) -> String {
    locale.meridiem_upper[time.is_pm() as usize].to_string()
}

pub(crate) fn offset_colon(time: &CalendarTime, _locale: &Locale) -> String {
    time.offset_string(true)
}

pub(crate) fn offset_plain(time: &CalendarTime, _locale: &Locale) -> String {
    time.offset_string(false)
}
