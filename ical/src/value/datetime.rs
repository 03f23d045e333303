// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date, time, date-time and UTC offset values as defined in RFC 5545
//! Sections 3.3.4, 3.3.5, 3.3.12 and 3.3.14.
//!
//! Decoding never converts between timezones: the literal fields are kept
//! and a trailing `Z` is recorded as [`ValueTime::utc`].

use std::fmt::{self, Display};
use std::str::FromStr;

use chumsky::prelude::*;

use crate::value::ValueType;
use crate::value::miscellaneous::{Extra, ValueParseError, digits, run};

/// Date value in the iCalendar format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueDate {
    /// Year component.
    pub year: i16,

    /// Month component, 1-12.
    pub month: i8,

    /// Day component, 1-31.
    pub day: i8,
}

impl ValueDate {
    /// Create a date, checking the day against the month length.
    #[must_use]
    pub fn new(year: i16, month: i8, day: i8) -> Option<Self> {
        let valid = (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month);
        valid.then_some(Self { year, month, day })
    }

    fn from_digits(year: u32, month: u32, day: u32) -> Option<Self> {
        Self::new(
            i16::try_from(year).ok()?,
            i8::try_from(month).ok()?,
            i8::try_from(day).ok()?,
        )
    }

    /// Extended ISO 8601 form, `YYYY-MM-DD`.
    #[must_use]
    pub fn to_iso_string(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Convert to `jiff::civil::Date`.
    ///
    /// ## Errors
    /// If the fields are out of jiff's range.
    #[cfg(feature = "jiff")]
    pub fn civil_date(self) -> Result<jiff::civil::Date, jiff::Error> {
        jiff::civil::Date::new(self.year, self.month, self.day)
    }
}

fn days_in_month(year: i16, month: i8) -> i8 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::Date> for ValueDate {
    fn from(date: jiff::civil::Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl Display for ValueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for ValueDate {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run(value_date(), ValueType::Date, s)
    }
}

/// Time value in the iCalendar format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueTime {
    /// Hour component, 0-23.
    pub hour: i8,

    /// Minute component, 0-59.
    pub minute: i8,

    /// Second component, 0-60 (60 for leap seconds).
    pub second: i8,

    /// Whether the time is in UTC (trailing `Z`).
    pub utc: bool,
}

impl ValueTime {
    /// Create a time value, checking the ranges.
    #[must_use]
    pub fn new(hour: i8, minute: i8, second: i8, utc: bool) -> Option<Self> {
        let valid = (0..24).contains(&hour) && (0..60).contains(&minute) && (0..=60).contains(&second);
        valid.then_some(Self {
            hour,
            minute,
            second,
            utc,
        })
    }

    fn from_digits(hour: u32, minute: u32, second: u32, utc: bool) -> Option<Self> {
        Self::new(
            i8::try_from(hour).ok()?,
            i8::try_from(minute).ok()?,
            i8::try_from(second).ok()?,
            utc,
        )
    }

    /// Convert to `jiff::civil::Time`, clamping a leap second to 59.
    ///
    /// ## Errors
    /// If the fields are out of range.
    #[cfg(feature = "jiff")]
    pub fn civil_time(self) -> Result<jiff::civil::Time, jiff::Error> {
        jiff::civil::Time::new(self.hour, self.minute, self.second.min(59), 0)
    }
}

impl Display for ValueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)?;
        if self.utc {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

impl FromStr for ValueTime {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run(value_time(), ValueType::Time, s)
    }
}

/// Date-Time value in the iCalendar format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueDateTime {
    /// Date component.
    pub date: ValueDate,

    /// Time component.
    pub time: ValueTime,
}

impl ValueDateTime {
    /// Whether the value is in UTC.
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        self.time.utc
    }

    /// Extended ISO 8601 form, `YYYY-MM-DDTHH:MM:SS` with a trailing `Z` for UTC.
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        let t = self.time;
        let zone = if t.utc { "Z" } else { "" };
        format!(
            "{}T{:02}:{:02}:{:02}{zone}",
            self.date.to_iso_string(),
            t.hour,
            t.minute,
            t.second
        )
    }

    /// Convert to `jiff::civil::DateTime`, ignoring the UTC flag.
    ///
    /// ## Errors
    /// If the fields are out of jiff's range.
    #[cfg(feature = "jiff")]
    pub fn civil_date_time(&self) -> Result<jiff::civil::DateTime, jiff::Error> {
        Ok(self.date.civil_date()?.to_datetime(self.time.civil_time()?))
    }

    /// Build from a civil date-time, marking it UTC or floating.
    #[cfg(feature = "jiff")]
    #[must_use]
    pub fn from_civil(dt: jiff::civil::DateTime, utc: bool) -> Self {
        Self {
            date: dt.date().into(),
            time: ValueTime {
                hour: dt.hour(),
                minute: dt.minute(),
                second: dt.second(),
                utc,
            },
        }
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::DateTime> for ValueDateTime {
    fn from(dt: jiff::civil::DateTime) -> Self {
        Self::from_civil(dt, false)
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::Timestamp> for ValueDateTime {
    fn from(ts: jiff::Timestamp) -> Self {
        Self::from_civil(ts.to_zoned(jiff::tz::TimeZone::UTC).datetime(), true)
    }
}

impl Display for ValueDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl FromStr for ValueDateTime {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run(value_date_time(), ValueType::DateTime, s)
    }
}

/// Either a date or a date-time, as used by DTSTART, DTEND or the UNTIL rule part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateOrDateTime {
    /// Date without time component
    Date(ValueDate),
    /// Date with time component
    DateTime(ValueDateTime),
}

impl DateOrDateTime {
    /// Whether the value has no time component.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Whether the value is a UTC date-time.
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        match self {
            Self::Date(_) => false,
            Self::DateTime(dt) => dt.is_utc(),
        }
    }

    /// The date part.
    #[must_use]
    pub const fn date(&self) -> ValueDate {
        match self {
            Self::Date(date) => *date,
            Self::DateTime(dt) => dt.date,
        }
    }

    /// The value type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Date(_) => ValueType::Date,
            Self::DateTime(_) => ValueType::DateTime,
        }
    }

    /// Extended ISO 8601 form.
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        match self {
            Self::Date(date) => date.to_iso_string(),
            Self::DateTime(dt) => dt.to_iso_string(),
        }
    }

    /// Convert to `jiff::civil::DateTime`, a date maps to its midnight.
    ///
    /// ## Errors
    /// If the fields are out of jiff's range.
    #[cfg(feature = "jiff")]
    pub fn civil_date_time(&self) -> Result<jiff::civil::DateTime, jiff::Error> {
        match self {
            Self::Date(date) => Ok(date.civil_date()?.to_datetime(jiff::civil::Time::midnight())),
            Self::DateTime(dt) => dt.civil_date_time(),
        }
    }
}

impl From<ValueDate> for DateOrDateTime {
    fn from(date: ValueDate) -> Self {
        Self::Date(date)
    }
}

impl From<ValueDateTime> for DateOrDateTime {
    fn from(dt: ValueDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl Display for DateOrDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => date.fmt(f),
            Self::DateTime(dt) => dt.fmt(f),
        }
    }
}

/// Accepts both the iCalendar basic form (`20210315T100000Z`) and the
/// extended ISO 8601 form (`2021-03-15T10:00:00.000Z`).
impl FromStr for DateOrDateTime {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run(iso_date_or_date_time(), ValueType::DateTime, s)
    }
}

/// UTC Offset value defined in RFC 5545 Section 3.3.14
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueUtcOffset {
    /// Whether the offset is positive
    pub positive: bool,
    /// Hour component
    pub hour: i8,
    /// Minute component
    pub minute: i8,
    /// Second component
    pub second: i8,
}

impl Display for ValueUtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.positive { '+' } else { '-' };
        write!(f, "{sign}{:02}{:02}", self.hour, self.minute)?;
        if self.second != 0 {
            write!(f, "{:02}", self.second)?;
        }
        Ok(())
    }
}

impl FromStr for ValueUtcOffset {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run(value_utc_offset(), ValueType::UtcOffset, s)
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date               = date-value
///
/// date-value         = date-fullyear date-month date-mday
/// date-fullyear      = 4DIGIT
/// date-month         = 2DIGIT        ;01-12
/// date-mday          = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
///                                    ;based on month/year
/// ```
pub(crate) fn value_date<'src>() -> impl Parser<'src, &'src str, ValueDate, Extra<'src>> + Clone {
    digits(4)
        .then(digits(2))
        .then(digits(2))
        .try_map(|((year, month), day), span| {
            ValueDate::from_digits(year, month, day)
                .ok_or_else(|| Rich::custom(span, "invalid calendar date"))
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// time         = time-hour time-minute time-second [time-utc]
///
/// time-hour    = 2DIGIT        ;00-23
/// time-minute  = 2DIGIT        ;00-59
/// time-second  = 2DIGIT        ;00-60
/// time-utc     = "Z"
/// ```
pub(crate) fn value_time<'src>() -> impl Parser<'src, &'src str, ValueTime, Extra<'src>> + Clone {
    digits(2)
        .then(digits(2))
        .then(digits(2))
        .then(just('Z').or_not())
        .try_map(|(((hour, minute), second), utc), span| {
            ValueTime::from_digits(hour, minute, second, utc.is_some())
                .ok_or_else(|| Rich::custom(span, "invalid time of day"))
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date-time  = date "T" time ;As specified in the DATE and TIME
///                            ;value definitions
/// ```
pub(crate) fn value_date_time<'src>()
-> impl Parser<'src, &'src str, ValueDateTime, Extra<'src>> + Clone {
    value_date()
        .then_ignore(just('T'))
        .then(value_time())
        .map(|(date, time)| ValueDateTime { date, time })
}

/// A date-time, or a date when there is no time part.
pub(crate) fn value_date_or_date_time<'src>()
-> impl Parser<'src, &'src str, DateOrDateTime, Extra<'src>> + Clone {
    choice((
        value_date_time().map(DateOrDateTime::DateTime),
        value_date().map(DateOrDateTime::Date),
    ))
}

fn iso_date<'src>() -> impl Parser<'src, &'src str, ValueDate, Extra<'src>> + Clone {
    let dash = just('-').or_not();
    digits(4)
        .then_ignore(dash.clone())
        .then(digits(2))
        .then_ignore(dash)
        .then(digits(2))
        .try_map(|((year, month), day), span| {
            ValueDate::from_digits(year, month, day)
                .ok_or_else(|| Rich::custom(span, "invalid calendar date"))
        })
}

fn iso_time<'src>() -> impl Parser<'src, &'src str, ValueTime, Extra<'src>> + Clone {
    let colon = just(':').or_not();
    let fraction = just('.').then(select! { c @ '0'..='9' => c }.repeated().at_least(1));
    digits(2)
        .then_ignore(colon.clone())
        .then(digits(2))
        .then_ignore(colon)
        .then(digits(2))
        .then_ignore(fraction.or_not())
        .then(just('Z').or_not())
        .try_map(|(((hour, minute), second), utc), span| {
            ValueTime::from_digits(hour, minute, second, utc.is_some())
                .ok_or_else(|| Rich::custom(span, "invalid time of day"))
        })
}

fn iso_date_or_date_time<'src>()
-> impl Parser<'src, &'src str, DateOrDateTime, Extra<'src>> + Clone {
    choice((
        iso_date()
            .then_ignore(just('T'))
            .then(iso_time())
            .map(|(date, time)| DateOrDateTime::DateTime(ValueDateTime { date, time })),
        iso_date().map(DateOrDateTime::Date),
    ))
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// utc-offset = time-numzone
///
/// time-numzone = ("+" / "-") time-hour time-minute [time-second]
/// ```
pub(crate) fn value_utc_offset<'src>()
-> impl Parser<'src, &'src str, ValueUtcOffset, Extra<'src>> + Clone {
    select! { '+' => true, '-' => false }
        .then(digits(2))
        .then(digits(2))
        .then(digits(2).or_not())
        .try_map(|(((positive, hour), minute), second), span| {
            utc_offset(positive, hour, minute, second.unwrap_or(0))
                .ok_or_else(|| Rich::custom(span, "invalid utc offset"))
        })
}

fn utc_offset(positive: bool, hour: u32, minute: u32, second: u32) -> Option<ValueUtcOffset> {
    Some(ValueUtcOffset {
        positive,
        hour: i8::try_from(hour).ok().filter(|h| *h < 24)?,
        minute: i8::try_from(minute).ok().filter(|m| *m < 60)?,
        second: i8::try_from(second).ok().filter(|s| *s < 60)?,
    })
}
