// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Default value types of known properties.

use crate::keyword::{
    KW_ATTACH, KW_ATTENDEE, KW_CATEGORIES, KW_COMPLETED, KW_CREATED, KW_DTEND, KW_DTSTAMP,
    KW_DTSTART, KW_DUE, KW_DURATION, KW_EXDATE, KW_EXRULE, KW_FREEBUSY, KW_GEO, KW_LAST_MODIFIED,
    KW_ORGANIZER, KW_PERCENT_COMPLETE, KW_PRIORITY, KW_RDATE, KW_RECURRENCE_ID, KW_REPEAT,
    KW_RESOURCES, KW_RRULE, KW_SEQUENCE, KW_TRIGGER, KW_TZOFFSETFROM, KW_TZOFFSETTO, KW_TZURL,
    KW_URL,
};
use crate::value::ValueType;

/// How the value of a property is decoded when no `VALUE` parameter says
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    /// Lower-case property name
    pub name: &'static str,
    /// Default value type
    pub default_type: ValueType,
    /// Separator between multiple values, if the property is a list
    pub separator: Option<char>,
}

impl PropertySpec {
    const fn new(name: &'static str, default_type: ValueType, separator: Option<char>) -> Self {
        Self {
            name,
            default_type,
            separator,
        }
    }

    /// Whether a date-typed property may hold a plain date without `VALUE=DATE`.
    #[must_use]
    pub const fn detects_date(&self) -> bool {
        matches!(self.default_type, ValueType::DateTime)
    }
}

/// Properties whose value is not plain text.
pub static PROPERTY_SPECS: &[PropertySpec] = &[
    PropertySpec::new(KW_DTSTART, ValueType::DateTime, None),
    PropertySpec::new(KW_DTEND, ValueType::DateTime, None),
    PropertySpec::new(KW_DTSTAMP, ValueType::DateTime, None),
    PropertySpec::new(KW_CREATED, ValueType::DateTime, None),
    PropertySpec::new(KW_LAST_MODIFIED, ValueType::DateTime, None),
    PropertySpec::new(KW_RECURRENCE_ID, ValueType::DateTime, None),
    PropertySpec::new(KW_DUE, ValueType::DateTime, None),
    PropertySpec::new(KW_COMPLETED, ValueType::DateTime, None),
    PropertySpec::new(KW_EXDATE, ValueType::DateTime, Some(',')),
    PropertySpec::new(KW_RDATE, ValueType::DateTime, Some(',')),
    PropertySpec::new(KW_DURATION, ValueType::Duration, None),
    PropertySpec::new(KW_TRIGGER, ValueType::Duration, None),
    PropertySpec::new(KW_RRULE, ValueType::Recur, None),
    PropertySpec::new(KW_EXRULE, ValueType::Recur, None),
    PropertySpec::new(KW_ATTENDEE, ValueType::CalAddress, None),
    PropertySpec::new(KW_ORGANIZER, ValueType::CalAddress, None),
    PropertySpec::new(KW_URL, ValueType::Uri, None),
    PropertySpec::new(KW_TZURL, ValueType::Uri, None),
    PropertySpec::new(KW_ATTACH, ValueType::Uri, None),
    PropertySpec::new(KW_SEQUENCE, ValueType::Integer, None),
    PropertySpec::new(KW_PRIORITY, ValueType::Integer, None),
    PropertySpec::new(KW_PERCENT_COMPLETE, ValueType::Integer, None),
    PropertySpec::new(KW_REPEAT, ValueType::Integer, None),
    PropertySpec::new(KW_GEO, ValueType::Float, Some(';')),
    PropertySpec::new(KW_FREEBUSY, ValueType::Period, Some(',')),
    PropertySpec::new(KW_TZOFFSETFROM, ValueType::UtcOffset, None),
    PropertySpec::new(KW_TZOFFSETTO, ValueType::UtcOffset, None),
    PropertySpec::new(KW_CATEGORIES, ValueType::Text, Some(',')),
    PropertySpec::new(KW_RESOURCES, ValueType::Text, Some(',')),
];

/// Look up the spec of a property, unknown and `X-` properties are text.
#[must_use]
pub fn property_spec(name: &str) -> PropertySpec {
    PROPERTY_SPECS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
        .copied()
        .unwrap_or(PropertySpec {
            name: "",
            default_type: ValueType::Text,
            separator: None,
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_unique_property_names() {
        let names = PROPERTY_SPECS
            .iter()
            .map(|spec| spec.name)
            .collect::<HashSet<_>>();

        assert_eq!(
            names.len(),
            PROPERTY_SPECS.len(),
            "Property names should be unique"
        );
    }

    #[test]
    fn test_property_names_are_lowercase() {
        for spec in PROPERTY_SPECS {
            assert!(
                spec.name.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "{}",
                spec.name
            );
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(property_spec("DTSTART").default_type, ValueType::DateTime);
        assert!(property_spec("dtstart").detects_date());
        assert_eq!(property_spec("geo").separator, Some(';'));
        assert_eq!(property_spec("categories").separator, Some(','));
        assert_eq!(property_spec("x-custom").default_type, ValueType::Text);
        assert_eq!(property_spec("summary").separator, None);
    }
}
