// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value type parsing module for iCalendar property values.
//!
//! This module handles the parsing and validation of iCalendar value types
//! as defined in RFC 5545 Section 3.3.

mod datetime;
mod duration;
mod miscellaneous;
mod numeric;
mod period;
mod rrule;
mod text;

use std::fmt::{self, Display};

pub use datetime::{DateOrDateTime, ValueDate, ValueDateTime, ValueTime, ValueUtcOffset};
pub use duration::ValueDuration;
pub use miscellaneous::ValueParseError;
pub use period::ValuePeriod;
pub use rrule::{RecurrenceFrequency, ValueRecurrenceRule, WeekDay, WeekDayNum};
pub use text::{escape_text, unescape_text};

use crate::value::datetime::{value_date, value_date_time, value_time, value_utc_offset};
use crate::value::duration::value_duration;
use crate::value::miscellaneous::run;
use crate::value::numeric::{value_boolean, value_float, value_integer};
use crate::value::period::value_period;
use crate::value::text::split_unescaped;

/// Value types defined in RFC 5545 Section 3.3, named as they appear in the
/// `VALUE` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(serialize_all = "SCREAMING-KEBAB-CASE", ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum ValueType {
    Binary,
    Boolean,
    CalAddress,
    Date,
    DateTime,
    Duration,
    Float,
    Integer,
    Period,
    Recur,
    Text,
    Time,
    Uri,
    UtcOffset,
}

impl ValueType {
    /// Whether values of this type are kept as raw strings instead of being
    /// parsed into a structured form.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::Binary | Self::CalAddress | Self::Text | Self::Uri)
    }
}

/// The properties in an iCalendar object are strongly typed.  The definition
/// of each property restricts the value to be one of the value data types, or
/// simply value types, defined in this section.
///
/// See RFC 5545 Section 3.3 for more details.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Inline binary data, kept in its encoded form.
    ///
    /// See RFC 5545 Section 3.3.1 for more details.
    Binary(String),

    /// See RFC 5545 Section 3.3.2 for more details.
    Boolean(bool),

    /// A calendar user address, usually a `mailto:` URI.
    ///
    /// See RFC 5545 Section 3.3.3 for more details.
    CalAddress(String),

    /// See RFC 5545 Section 3.3.4 for more details.
    Date(ValueDate),

    /// See RFC 5545 Section 3.3.5 for more details.
    DateTime(ValueDateTime),

    /// See RFC 5545 Section 3.3.6 for more details.
    Duration(ValueDuration),

    /// See RFC 5545 Section 3.3.7 for more details.
    Float(f64),

    /// See RFC 5545 Section 3.3.8 for more details.
    Integer(i32),

    /// See RFC 5545 Section 3.3.9 for more details.
    Period(ValuePeriod),

    /// See RFC 5545 Section 3.3.10 for more details.
    Recur(Box<ValueRecurrenceRule>),

    /// Human-readable text, already unescaped.
    ///
    /// See RFC 5545 Section 3.3.11 for more details.
    Text(String),

    /// See RFC 5545 Section 3.3.12 for more details.
    Time(ValueTime),

    /// See RFC 5545 Section 3.3.13 for more details.
    Uri(String),

    /// See RFC 5545 Section 3.3.14 for more details.
    UtcOffset(ValueUtcOffset),
}

impl Value {
    /// Get the type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::Binary(_) => ValueType::Binary,
            Value::Boolean(_) => ValueType::Boolean,
            Value::CalAddress(_) => ValueType::CalAddress,
            Value::Date(_) => ValueType::Date,
            Value::DateTime(_) => ValueType::DateTime,
            Value::Duration(_) => ValueType::Duration,
            Value::Float(_) => ValueType::Float,
            Value::Integer(_) => ValueType::Integer,
            Value::Period(_) => ValueType::Period,
            Value::Recur(_) => ValueType::Recur,
            Value::Text(_) => ValueType::Text,
            Value::Time(_) => ValueType::Time,
            Value::Uri(_) => ValueType::Uri,
            Value::UtcOffset(_) => ValueType::UtcOffset,
        }
    }

    /// The string content of textual values.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Binary(s) | Value::CalAddress(s) | Value::Text(s) | Value::Uri(s) => Some(s),
            _ => None,
        }
    }

    /// The date or date-time content, if any.
    #[must_use]
    pub const fn as_date_or_date_time(&self) -> Option<DateOrDateTime> {
        match self {
            Value::Date(d) => Some(DateOrDateTime::Date(*d)),
            Value::DateTime(dt) => Some(DateOrDateTime::DateTime(*dt)),
            _ => None,
        }
    }
}

impl From<DateOrDateTime> for Value {
    fn from(value: DateOrDateTime) -> Self {
        match value {
            DateOrDateTime::Date(d) => Value::Date(d),
            DateOrDateTime::DateTime(dt) => Value::DateTime(dt),
        }
    }
}

impl From<ValueRecurrenceRule> for Value {
    fn from(value: ValueRecurrenceRule) -> Self {
        Value::Recur(Box::new(value))
    }
}

/// Writes the unescaped wire form. Text escaping is up to the formatter.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Binary(s) | Value::CalAddress(s) | Value::Text(s) | Value::Uri(s) => {
                write!(f, "{s}")
            }
            Value::Boolean(true) => write!(f, "TRUE"),
            Value::Boolean(false) => write!(f, "FALSE"),
            Value::Date(v) => write!(f, "{v}"),
            Value::DateTime(v) => write!(f, "{v}"),
            Value::Duration(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Period(v) => write!(f, "{v}"),
            Value::Recur(v) => write!(f, "{v}"),
            Value::Time(v) => write!(f, "{v}"),
            Value::UtcOffset(v) => write!(f, "{v}"),
        }
    }
}

/// Decode a raw property value as the given type.
///
/// With a separator, the raw value is split first. Text splits only on
/// separators that are not backslash-escaped, and each piece is unescaped.
/// Binary, URI and CAL-ADDRESS values are kept as they are.
///
/// # Errors
///
/// If any piece is not a valid value of the type.
pub fn decode_values(
    value_type: ValueType,
    raw: &str,
    separator: Option<char>,
) -> Result<Vec<Value>, ValueParseError> {
    match value_type {
        ValueType::Text => {
            let pieces = match separator {
                Some(sep) => split_unescaped(raw, sep),
                None => vec![raw],
            };
            Ok(pieces
                .into_iter()
                .map(|piece| Value::Text(unescape_text(piece)))
                .collect())
        }
        ValueType::Binary => Ok(vec![Value::Binary(raw.to_string())]),
        ValueType::CalAddress => Ok(vec![Value::CalAddress(raw.to_string())]),
        ValueType::Uri => Ok(vec![Value::Uri(raw.to_string())]),
        _ => {
            let pieces: Vec<&str> = match separator {
                Some(sep) => raw.split(sep).collect(),
                None => vec![raw],
            };
            pieces
                .into_iter()
                .map(|piece| decode_value(value_type, piece))
                .collect()
        }
    }
}

/// Decode a single non-list value.
///
/// # Errors
///
/// If `raw` is not a valid value of the type.
pub fn decode_value(value_type: ValueType, raw: &str) -> Result<Value, ValueParseError> {
    let value = match value_type {
        ValueType::Binary => Value::Binary(raw.to_string()),
        ValueType::Boolean => Value::Boolean(run(value_boolean(), value_type, raw)?),
        ValueType::CalAddress => Value::CalAddress(raw.to_string()),
        ValueType::Date => Value::Date(run(value_date(), value_type, raw)?),
        ValueType::DateTime => Value::DateTime(run(value_date_time(), value_type, raw)?),
        ValueType::Duration => Value::Duration(run(value_duration(), value_type, raw)?),
        ValueType::Float => Value::Float(run(value_float(), value_type, raw)?),
        ValueType::Integer => Value::Integer(run(value_integer(), value_type, raw)?),
        ValueType::Period => Value::Period(run(value_period(), value_type, raw)?),
        ValueType::Recur => Value::Recur(Box::new(raw.parse()?)),
        ValueType::Text => Value::Text(unescape_text(raw)),
        ValueType::Time => Value::Time(run(value_time(), value_type, raw)?),
        ValueType::Uri => Value::Uri(raw.to_string()),
        ValueType::UtcOffset => Value::UtcOffset(run(value_utc_offset(), value_type, raw)?),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_names_match_value_parameter() {
        assert_eq!(ValueType::DateTime.to_string(), "DATE-TIME");
        assert_eq!(ValueType::CalAddress.to_string(), "CAL-ADDRESS");
        assert_eq!(ValueType::UtcOffset.to_string(), "UTC-OFFSET");
        assert_eq!("date".parse::<ValueType>(), Ok(ValueType::Date));
        assert_eq!("Date-Time".parse::<ValueType>(), Ok(ValueType::DateTime));
        assert!("DATETIME".parse::<ValueType>().is_err());
    }

    #[test]
    fn decodes_text_lists() {
        let values = decode_values(ValueType::Text, r"a\,b,c\nd", Some(',')).unwrap();
        assert_eq!(
            values,
            [Value::Text("a,b".to_string()), Value::Text("c\nd".to_string())]
        );

        let values = decode_values(ValueType::Text, r"a\,b,c", None).unwrap();
        assert_eq!(values, [Value::Text("a,b,c".to_string())]);
    }

    #[test]
    fn decodes_structured_lists() {
        let values = decode_values(ValueType::Float, "37.386013;-122.082932", Some(';')).unwrap();
        assert_eq!(values, [Value::Float(37.386_013), Value::Float(-122.082_932)]);

        let values = decode_values(
            ValueType::DateTime,
            "20210315T100000Z,20210322T100000Z",
            Some(','),
        )
        .unwrap();
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|v| v.value_type() == ValueType::DateTime));
    }

    #[test]
    fn keeps_addresses_raw() {
        let values = decode_values(ValueType::CalAddress, "mailto:a@b.c", None).unwrap();
        assert_eq!(values, [Value::CalAddress("mailto:a@b.c".to_string())]);
        assert_eq!(values[0].as_str(), Some("mailto:a@b.c"));
    }

    #[test]
    fn reports_invalid_values() {
        let err = decode_value(ValueType::DateTime, "2021-03-15").unwrap_err();
        assert_eq!(err.expected, ValueType::DateTime);
        assert!(decode_value(ValueType::Integer, "ten").is_err());
        assert!(decode_value(ValueType::Recur, "BYDAY=MO").is_err());
    }

    #[test]
    fn displays_wire_form() {
        let rule: ValueRecurrenceRule = "FREQ=DAILY;COUNT=2".parse().unwrap();
        assert_eq!(Value::from(rule).to_string(), "FREQ=DAILY;COUNT=2");
        assert_eq!(Value::Boolean(true).to_string(), "TRUE");
        assert_eq!(
            decode_value(ValueType::Date, "20210315").unwrap().to_string(),
            "20210315"
        );
    }
}
