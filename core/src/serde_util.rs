// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Serde glue for the grammar types, which know nothing about serde.
//!
//! A recurrence rule is an object keyed by lower-case rule part names, e.g.
//! `{"freq": "WEEKLY", "byday": ["MO", "TU"]}`, written in the rule's part
//! order. Numeric parts are numbers, UNTIL is an extended ISO date.

use std::fmt;

use davparser_ical::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_COUNT, KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_UNTIL,
    KW_RRULE_WKST,
};
use davparser_ical::{DateOrDateTime, ValueRecurrenceRule};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Serialize a recurrence rule as an object.
pub(crate) struct RuleRef<'a>(pub(crate) &'a ValueRecurrenceRule);

impl Serialize for RuleRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let parts = self.0.parts();
        let mut map = serializer.serialize_map(Some(parts.len()))?;
        for (key, value) in &parts {
            let json_key = key.to_ascii_lowercase();
            match key.as_str() {
                KW_RRULE_FREQ | KW_RRULE_WKST => map.serialize_entry(&json_key, value)?,
                KW_RRULE_UNTIL => match &self.0.until {
                    Some(until) => map.serialize_entry(&json_key, &until.to_iso_string())?,
                    None => map.serialize_entry(&json_key, value)?,
                },
                KW_RRULE_COUNT | KW_RRULE_INTERVAL => match value.parse::<u64>() {
                    Ok(number) => map.serialize_entry(&json_key, &number)?,
                    Err(_) => map.serialize_entry(&json_key, value)?,
                },
                KW_RRULE_BYDAY => {
                    let days: Vec<&str> = value.split(',').collect();
                    map.serialize_entry(&json_key, &days)?;
                }
                _ if key.starts_with("BY") => {
                    match value.split(',').map(str::parse).collect::<Result<Vec<i64>, _>>() {
                        Ok(numbers) => map.serialize_entry(&json_key, &numbers)?,
                        Err(_) => map.serialize_entry(&json_key, value)?,
                    }
                }
                _ => map.serialize_entry(&json_key, value)?,
            }
        }
        map.end()
    }
}

/// Deserialize a recurrence rule from an object, or from its RECUR text.
pub(crate) struct RuleVisitor;

impl<'de> de::Visitor<'de> for RuleVisitor {
    type Value = ValueRecurrenceRule;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(r#"a recurrence rule like {"freq": "WEEKLY"} or "FREQ=WEEKLY""#)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(de::Error::custom)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let mut parts = Vec::new();
        while let Some((key, PartValue(value))) = map.next_entry::<String, PartValue>()? {
            let key = key.to_ascii_uppercase();
            let value = if key == KW_RRULE_UNTIL {
                value
                    .parse::<DateOrDateTime>()
                    .map_err(de::Error::custom)?
                    .to_string()
            } else {
                value
            };
            parts.push(format!("{key}={value}"));
        }
        parts.join(";").parse().map_err(de::Error::custom)
    }
}

/// A rule part value, a scalar or a list of scalars, in its RECUR text form.
struct PartValue(String);

impl<'de> Deserialize<'de> for PartValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PartVisitor;

        impl<'de> de::Visitor<'de> for PartVisitor {
            type Value = PartValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, a number, or a list of them")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(PartValue(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(PartValue(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(PartValue(value.to_string()))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(PartValue(item)) = seq.next_element()? {
                    items.push(item);
                }
                Ok(PartValue(items.join(",")))
            }
        }

        deserializer.deserialize_any(PartVisitor)
    }
}

/// `#[serde(with)]` helpers for an optional recurrence rule.
pub(crate) mod optional_rule {
    use super::{RuleRef, RuleVisitor};
    use davparser_ical::ValueRecurrenceRule;
    use serde::{Deserialize, Deserializer, Serializer};

    struct Rule(ValueRecurrenceRule);

    impl<'de> Deserialize<'de> for Rule {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(RuleVisitor).map(Rule)
        }
    }

    pub(crate) fn serialize<S>(
        rule: &Option<ValueRecurrenceRule>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match rule {
            Some(rule) => serializer.serialize_some(&RuleRef(rule)),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<ValueRecurrenceRule>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Rule>::deserialize(deserializer)?.map(|rule| rule.0))
    }
}

/// `#[serde(with)]` helpers for optional values with a `Display` / `FromStr` text form.
pub(crate) mod optional_text {
    use std::fmt::Display;
    use std::marker::PhantomData;
    use std::str::FromStr;

    use serde::{Deserializer, Serializer, de};

    pub(crate) fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        struct TextVisitor<T>(PhantomData<T>);

        impl<'de, T> de::Visitor<'de> for TextVisitor<T>
        where
            T: FromStr,
            T::Err: Display,
        {
            type Value = Option<T>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string or null")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map(Some).map_err(de::Error::custom)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_str(self)
            }
        }

        deserializer.deserialize_option(TextVisitor(PhantomData))
    }
}
