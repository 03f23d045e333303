// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};

use davparser_ical::{Property, Value};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::serde_util::{RuleRef, RuleVisitor};

/// Decoded value of a property that has no first-class field.
///
/// The JSON form is a string, number or boolean for a single value, an
/// array for several values, and an object for a recurrence rule. Dates
/// and date-times are written in extended ISO form, other typed values in
/// their iCalendar text form.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A single value
    Single(Value),

    /// Several values, from a list property or a repeated property
    List(Vec<Value>),
}

impl PropertyValue {
    /// Wrap decoded values, a single one as [`PropertyValue::Single`].
    #[must_use]
    pub fn from_values(mut values: Vec<Value>) -> Self {
        match values.len() {
            1 => match values.pop() {
                Some(value) => Self::Single(value),
                None => Self::List(values),
            },
            _ => Self::List(values),
        }
    }

    /// All values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::List(values) => values,
        }
    }

    /// Consume into all values.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Self::Single(value) => vec![value],
            Self::List(values) => values,
        }
    }

    /// The string of a single textual value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => value.as_str(),
            Self::List(_) => None,
        }
    }

    /// Append the values of another occurrence of the same property.
    pub fn merge(&mut self, other: PropertyValue) {
        let mut values = std::mem::replace(self, Self::List(Vec::new())).into_values();
        values.extend(other.into_values());
        *self = Self::List(values);
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Single(Value::Text(value.to_string()))
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Single(Value::Text(value))
    }
}

/// Values joined by commas, each in its unescaped iCalendar text form.
impl Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl Serialize for PropertyValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Single(value) => ValueRef(value).serialize(serializer),
            Self::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(&ValueRef(value))?;
                }
                seq.end()
            }
        }
    }
}

struct ValueRef<'a>(&'a Value);

impl Serialize for ValueRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i32(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Recur(rule) => RuleRef(rule).serialize(serializer),
            Value::Date(date) => serializer.serialize_str(&date.to_iso_string()),
            Value::DateTime(dt) => serializer.serialize_str(&dt.to_iso_string()),
            value => serializer.collect_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PropertyValueVisitor)
    }
}

struct PropertyValueVisitor;

impl<'de> de::Visitor<'de> for PropertyValueVisitor {
    type Value = PropertyValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number, boolean, recurrence rule object or a list of them")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Boolean(value).into())
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let value = i32::try_from(value).map_or(Value::Float(value as f64), Value::Integer);
        Ok(value.into())
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let value = i32::try_from(value).map_or(Value::Float(value as f64), Value::Integer);
        Ok(value.into())
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Float(value).into())
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.into())
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.into())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(String::new().into())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut values = Vec::new();
        while let Some(item) = seq.next_element::<PropertyValue>()? {
            values.extend(item.into_values());
        }
        Ok(PropertyValue::List(values))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let rule = de::Visitor::visit_map(RuleVisitor, map)?;
        Ok(Value::from(rule).into())
    }
}

/// Ordered association of lower-case property names to values.
///
/// Lookups are case-insensitive. Serialized as an object in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap(Vec<(String, PropertyValue)>);

impl PropertyMap {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Whether the map has a property.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set a property, replacing any previous value.
    pub fn insert(&mut self, name: &str, value: impl Into<PropertyValue>) {
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((name.to_ascii_lowercase(), value)),
        }
    }

    /// Add a property, merging into a list if it is already present.
    pub fn append(&mut self, name: &str, value: impl Into<PropertyValue>) {
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
            Some((_, existing)) => existing.merge(value),
            None => self.0.push((name.to_ascii_lowercase(), value)),
        }
    }

    /// Add a decoded property, merging repeated names.
    pub(crate) fn append_property(&mut self, property: &Property) {
        self.append(&property.name, PropertyValue::from_values(property.values.clone()));
    }

    /// Remove a property.
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        let index = self.0.iter().position(|(key, _)| key.eq_ignore_ascii_case(name))?;
        Some(self.0.remove(index).1)
    }

    /// Iterate over names and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<PropertyValue>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.append(key.as_ref(), value);
        }
        map
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, PropertyValue);
    type IntoIter = std::vec::IntoIter<(String, PropertyValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for PropertyMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PropertyMapVisitor;

        impl<'de> de::Visitor<'de> for PropertyMapVisitor {
            type Value = PropertyMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of property names to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut map = PropertyMap::new();
                while let Some((key, value)) = access.next_entry::<String, PropertyValue>()? {
                    map.append(&key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(PropertyMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use davparser_ical::{ValueDuration, ValueRecurrenceRule};

    use super::*;

    #[test]
    fn merges_repeated_names() {
        let mut map = PropertyMap::new();
        map.append("X-TAG", "a");
        map.append("x-tag", "b");
        map.append("x-other", "c");
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("X-Tag"),
            Some(&PropertyValue::List(vec![
                Value::Text("a".to_string()),
                Value::Text("b".to_string())
            ]))
        );
        assert_eq!(map.keys().collect::<Vec<_>>(), ["x-tag", "x-other"]);

        map.insert("x-tag", "c");
        assert_eq!(map.get("x-tag").and_then(PropertyValue::as_str), Some("c"));
        assert!(map.remove("x-tag").is_some());
        assert!(!map.contains_key("x-tag"));
    }

    #[test]
    fn serializes_json_shapes() {
        let mut map = PropertyMap::new();
        map.insert("x-text", "hello");
        map.insert("sequence", Value::Integer(2));
        map.insert("trigger", Value::Duration(ValueDuration::from_seconds(-900)));
        map.insert(
            "dtstamp",
            Value::DateTime("20210315T100000Z".parse().unwrap()),
        );
        map.insert(
            "categories",
            PropertyValue::List(vec![Value::Text("a".to_string()), Value::Text("b".to_string())]),
        );
        let rule: ValueRecurrenceRule = "FREQ=DAILY;COUNT=2".parse().unwrap();
        map.insert("exrule", Value::from(rule));

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"x-text":"hello","sequence":2,"trigger":"-PT15M","#,
                r#""dtstamp":"2021-03-15T10:00:00Z","categories":["a","b"],"#,
                r#""exrule":{"freq":"DAILY","count":2}}"#
            )
        );
    }

    #[test]
    fn deserializes_json_shapes() {
        let map: PropertyMap = serde_json::from_str(
            r#"{"X-Text":"hello","sequence":2,"geo":[1.5,-2.25],"x-flag":true,"exrule":{"freq":"DAILY"}}"#,
        )
        .unwrap();
        assert_eq!(map.get("x-text").and_then(PropertyValue::as_str), Some("hello"));
        assert_eq!(map.get("sequence"), Some(&PropertyValue::Single(Value::Integer(2))));
        assert_eq!(
            map.get("geo"),
            Some(&PropertyValue::List(vec![Value::Float(1.5), Value::Float(-2.25)]))
        );
        assert_eq!(map.get("x-flag"), Some(&PropertyValue::Single(Value::Boolean(true))));
        assert!(matches!(
            map.get("exrule"),
            Some(PropertyValue::Single(Value::Recur(_)))
        ));
        assert_eq!(map.keys().next(), Some("x-text"));
    }

    #[test]
    fn displays_joined_values() {
        let value = PropertyValue::List(vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(value.to_string(), "1,2");
        assert_eq!(PropertyValue::from("x").to_string(), "x");
    }
}
