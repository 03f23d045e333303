// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::str::FromStr;

use davparser_ical::keyword::KW_TZID;
use davparser_ical::{
    DateOrDateTime, Property, Value, ValueDate, ValueDateTime, ValueDuration, ValueParseError,
};
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp, Zoned, civil};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A point in time of an event: a date, or a date-time that is UTC, tied to
/// a timezone identifier, or floating.
///
/// The timezone identifier is kept verbatim, resolving it is left to
/// [`EventTime::to_zoned`].
///
/// The string form is extended ISO 8601 (`2021-03-15T10:00:00`, `2021-03-15`,
/// a trailing `Z` for UTC) followed by the timezone identifier in brackets,
/// e.g. `2021-03-15T10:00:00[Europe/Paris]`. Parsing also accepts the
/// iCalendar basic form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventTime {
    /// The literal date or date-time
    pub value: DateOrDateTime,

    /// The `TZID` parameter, if any
    pub tzid: Option<String>,
}

impl EventTime {
    /// Create a time without timezone identifier.
    #[must_use]
    pub fn new(value: impl Into<DateOrDateTime>) -> Self {
        Self {
            value: value.into(),
            tzid: None,
        }
    }

    /// Attach a timezone identifier.
    #[must_use]
    pub fn with_tzid(mut self, tzid: impl Into<String>) -> Self {
        self.tzid = Some(tzid.into());
        self
    }

    /// Whether this is a date without time, i.e. an all-day value.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        self.value.is_date()
    }

    /// Read the time from a date or date-time property.
    ///
    /// Returns `None` when the property holds no date value, e.g. when an
    /// undecodable value was kept as text.
    pub(crate) fn from_property(property: &Property) -> Option<Self> {
        let value = property.value()?.as_date_or_date_time()?;
        let tzid = property.parameters.first(KW_TZID).map(str::to_string);
        Some(Self { value, tzid })
    }

    /// Build a property holding this time, with its `TZID` parameter.
    pub(crate) fn to_property(&self, name: &str) -> Property {
        let property = Property::new(name, vec![Value::from(self.value)]);
        match &self.tzid {
            Some(tzid) if !self.value.is_utc() => property.with_parameter(KW_TZID, tzid.clone()),
            _ => property,
        }
    }

    /// Resolve to an instant.
    ///
    /// UTC values are UTC, values with a timezone identifier use jiff's
    /// timezone database, and floating values and dates use `fallback`.
    ///
    /// ## Errors
    /// If the timezone identifier is unknown or the value is out of range.
    pub fn to_zoned(&self, fallback: &TimeZone) -> Result<Zoned, jiff::Error> {
        let civil = self.value.civil_date_time()?;
        let tz = match &self.tzid {
            _ if self.value.is_utc() => TimeZone::UTC,
            Some(tzid) => TimeZone::get(tzid)?,
            None => fallback.clone(),
        };
        civil.to_zoned(tz)
    }

    /// Add a duration, keeping dates as dates when the duration is a whole
    /// number of days.
    pub(crate) fn checked_add(&self, duration: &ValueDuration) -> Result<Self, jiff::Error> {
        let value = match self.value {
            DateOrDateTime::Date(date) if duration.is_whole_days() => {
                let days = jiff::Span::new().days(duration.as_seconds() / 86_400);
                DateOrDateTime::Date(date.civil_date()?.checked_add(days)?.into())
            }
            value => {
                let end = value
                    .civil_date_time()?
                    .checked_add(duration.signed_duration())?;
                DateOrDateTime::DateTime(ValueDateTime::from_civil(end, value.is_utc()))
            }
        };
        Ok(Self {
            value,
            tzid: self.tzid.clone(),
        })
    }

    /// Signed length from `start` to this time, comparing the literal fields.
    pub(crate) fn duration_since(&self, start: &EventTime) -> Result<SignedDuration, jiff::Error> {
        let end = self.value.civil_date_time()?;
        let start = start.value.civil_date_time()?;
        Ok(end.duration_since(start))
    }
}

impl From<DateOrDateTime> for EventTime {
    fn from(value: DateOrDateTime) -> Self {
        Self::new(value)
    }
}

impl From<civil::Date> for EventTime {
    fn from(date: civil::Date) -> Self {
        Self::new(ValueDate::from(date))
    }
}

impl From<civil::DateTime> for EventTime {
    fn from(dt: civil::DateTime) -> Self {
        Self::new(ValueDateTime::from(dt))
    }
}

impl From<Timestamp> for EventTime {
    fn from(ts: Timestamp) -> Self {
        Self::new(ValueDateTime::from(ts))
    }
}

impl From<&Zoned> for EventTime {
    fn from(zoned: &Zoned) -> Self {
        let time = Self::new(ValueDateTime::from(zoned.datetime()));
        match zoned.time_zone().iana_name() {
            Some("UTC") => Self::from(zoned.timestamp()),
            Some(name) => time.with_tzid(name),
            None => time,
        }
    }
}

impl Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.to_iso_string())?;
        if let Some(tzid) = &self.tzid {
            write!(f, "[{tzid}]")?;
        }
        Ok(())
    }
}

impl FromStr for EventTime {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (value, tzid) = match s.strip_suffix(']').and_then(|rest| rest.split_once('[')) {
            Some((value, tzid)) => (value, Some(tzid.to_string())),
            None => (s, None),
        };
        Ok(Self {
            value: value.parse()?,
            tzid,
        })
    }
}

impl Serialize for EventTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EventTimeVisitor;

        impl de::Visitor<'_> for EventTimeVisitor {
            type Value = EventTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a date or date-time like "2021-03-15T10:00:00Z""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(EventTimeVisitor)
    }
}
