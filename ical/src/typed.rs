// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed representation of iCalendar components and properties.

use std::str::FromStr;

use crate::keyword::{KW_DTEND, KW_DTSTART, KW_RECURRENCE_ID, KW_VALUE};
use crate::parameter::{Parameter, Parameters};
use crate::property_spec::{PropertySpec, property_spec};
use crate::syntax::{ContentLine, RawComponent};
use crate::value::{
    DateOrDateTime, Value, ValueParseError, ValueType, decode_values, unescape_text,
};

/// Properties whose values must decode even in lenient mode.
const STRUCTURAL_PROPERTIES: [&str; 3] = [KW_DTSTART, KW_DTEND, KW_RECURRENCE_ID];

/// Options of the typed analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Fail on every undecodable value instead of falling back to text.
    pub strict: bool,
}

/// A property value that could not be decoded as its type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: invalid value {raw:?} for property {name}: {reason}")]
pub struct ValueError {
    /// Lower-case property name
    pub name: String,
    /// The raw, still escaped value
    pub raw: String,
    /// Physical line the property started on
    pub line: usize,
    /// Why decoding failed
    pub reason: ValueParseError,
}

/// A component with decoded properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    /// Lower-case component name, e.g. `vevent`
    pub name: String,
    /// Properties in source order
    pub properties: Vec<Property>,
    /// Nested components in source order
    pub children: Vec<Component>,
}

impl Component {
    /// Create an empty component.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The first property with the given name.
    #[must_use]
    pub fn property<'a>(&'a self, name: &'a str) -> Option<&'a Property> {
        self.properties_named(name).next()
    }

    /// All properties with the given name.
    pub fn properties_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Property> {
        self.properties
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// All direct children with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Component> {
        self.children
            .iter()
            .filter(move |c| c.name.eq_ignore_ascii_case(name))
    }

    /// Append a property.
    pub fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Append a child component.
    pub fn push_child(&mut self, child: Component) {
        self.children.push(child);
    }
}

/// A property with its parameters and decoded values.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Lower-case property name
    pub name: String,
    /// Parameters in source order
    pub parameters: Parameters,
    /// Type the values were decoded as
    pub value_type: ValueType,
    /// One value, or several for list properties
    pub values: Vec<Value>,
}

impl Property {
    /// Build a property for output.
    ///
    /// Text values given for a property whose default type is not text are
    /// decoded as that type first, accepting the extended ISO form for dates.
    /// Values that still do not decode are written as they are. A `VALUE`
    /// parameter is added when the resulting type is not the default one.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        let name = name.into().to_ascii_lowercase();
        let spec = property_spec(&name);

        let mut value_type = spec.default_type;
        let mut decoded = Vec::with_capacity(values.len());
        for value in values {
            match value {
                Value::Text(raw) if !spec.default_type.is_textual() => {
                    match redecode(&spec, &raw) {
                        Ok(values) => decoded.extend(values),
                        Err(err) => {
                            tracing::debug!(%name, %raw, %err, "writing value as is");
                            decoded.push(Value::Text(raw));
                        }
                    }
                }
                value => decoded.push(value),
            }
        }

        let types: Vec<ValueType> = decoded
            .iter()
            .map(Value::value_type)
            .filter(|t| *t != ValueType::Text || spec.default_type == ValueType::Text)
            .collect();
        if let Some(&first) = types.first() {
            if types.iter().all(|t| *t == first) {
                value_type = first;
            }
        }

        let mut parameters = Parameters::new();
        if value_type != spec.default_type {
            parameters.set(KW_VALUE, value_type.to_string());
        }

        Self {
            name,
            parameters,
            value_type,
            values: decoded,
        }
    }

    /// Build a text property holding a single string.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, vec![Value::Text(text.into())])
    }

    /// Add a parameter, merging with an existing one of the same name.
    #[must_use]
    pub fn with_parameter(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parameters.insert(name, [value.into()]);
        self
    }

    /// Add a parameter.
    #[must_use]
    pub fn with(mut self, parameter: Parameter) -> Self {
        self.parameters.insert(&parameter.name, parameter.values);
        self
    }

    /// The first value.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.values.first()
    }

    /// Separator used between values on output.
    #[must_use]
    pub fn separator(&self) -> Option<char> {
        property_spec(&self.name).separator
    }
}

fn redecode(spec: &PropertySpec, raw: &str) -> Result<Vec<Value>, ValueParseError> {
    let pieces: Vec<&str> = match spec.separator {
        Some(sep) => raw.split(sep).collect(),
        None => vec![raw],
    };

    match spec.default_type {
        ValueType::DateTime | ValueType::Date => pieces
            .into_iter()
            .map(|piece| DateOrDateTime::from_str(piece.trim()).map(Value::from))
            .collect(),
        _ => decode_values(spec.default_type, raw, spec.separator),
    }
}

/// Decode every property of a raw component tree.
///
/// ## Errors
/// If a value does not decode and the options or the property do not allow
/// a fallback to text.
pub fn typed_analysis(raw: RawComponent, options: &DecodeOptions) -> Result<Component, ValueError> {
    let properties = raw
        .properties
        .into_iter()
        .map(|line| typed_property(line, options))
        .collect::<Result<Vec<_>, _>>()?;

    let children = raw
        .children
        .into_iter()
        .map(|child| typed_analysis(child, options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Component {
        name: raw.name,
        properties,
        children,
    })
}

fn typed_property(line: ContentLine, options: &DecodeOptions) -> Result<Property, ValueError> {
    let spec = property_spec(&line.name);
    let value_type = line
        .parameters
        .value_type()
        .unwrap_or_else(|| implied_type(&spec, &line.value));

    match decode_values(value_type, &line.value, spec.separator) {
        Ok(values) => Ok(Property {
            name: line.name,
            parameters: line.parameters,
            value_type,
            values,
        }),
        Err(reason) => {
            if options.strict || STRUCTURAL_PROPERTIES.contains(&line.name.as_str()) {
                return Err(ValueError {
                    name: line.name,
                    raw: line.value,
                    line: line.line,
                    reason,
                });
            }

            tracing::warn!(
                name = %line.name,
                raw = %line.value,
                line = line.line,
                %reason,
                "keeping undecodable value as text"
            );
            let mut parameters = line.parameters;
            parameters.remove(KW_VALUE);
            Ok(Property {
                values: vec![Value::Text(unescape_text(&line.value))],
                name: line.name,
                parameters,
                value_type: ValueType::Text,
            })
        }
    }
}

/// A date-time property holding a bare `YYYYMMDD` is a date.
fn implied_type(spec: &PropertySpec, raw: &str) -> ValueType {
    let first = match spec.separator {
        Some(sep) => raw.split(sep).next().unwrap_or(raw),
        None => raw,
    };
    if spec.detects_date() && first.len() == 8 && first.bytes().all(|b| b.is_ascii_digit()) {
        ValueType::Date
    } else {
        spec.default_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::syntax_analysis;
    use crate::value::{ValueDate, ValueDuration};

    fn typed(src: &str, strict: bool) -> Result<Component, ValueError> {
        let raw = syntax_analysis(src).unwrap();
        typed_analysis(raw, &DecodeOptions { strict })
    }

    fn calendar(body: &str) -> String {
        format!("BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\n{body}\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n")
    }

    fn event(body: &str) -> Component {
        let root = typed(&calendar(body), false).unwrap();
        root.children.into_iter().next().unwrap()
    }

    #[test]
    fn decodes_by_default_type() {
        let event = event("DTSTART:20210315T100000\r\nSEQUENCE:2\r\nCATEGORIES:a,b\r\nDURATION:PT1H");
        let dtstart = event.property("dtstart").unwrap();
        assert_eq!(dtstart.value_type, ValueType::DateTime);
        assert_eq!(event.property("sequence").unwrap().values, [Value::Integer(2)]);
        assert_eq!(event.property("categories").unwrap().values.len(), 2);
        assert_eq!(
            event.property("duration").unwrap().values,
            [Value::Duration(ValueDuration::from_seconds(3600))]
        );
    }

    #[test]
    fn detects_bare_dates() {
        let event = event("DTSTART:20210315\r\nEXDATE:20210316,20210317");
        let dtstart = event.property("dtstart").unwrap();
        assert_eq!(dtstart.value_type, ValueType::Date);
        assert_eq!(dtstart.values, [Value::Date(ValueDate::new(2021, 3, 15).unwrap())]);
        assert_eq!(event.property("exdate").unwrap().values.len(), 2);
    }

    #[test]
    fn honors_value_parameter() {
        let event = event("DTSTART;VALUE=DATE:20210315\r\nX-NUM;VALUE=INTEGER:7");
        assert_eq!(event.property("dtstart").unwrap().value_type, ValueType::Date);
        assert_eq!(event.property("x-num").unwrap().values, [Value::Integer(7)]);
    }

    #[test]
    fn falls_back_to_text_when_lenient() {
        let event = event("DTSTART:20210315T100000\r\nSEQUENCE:two");
        let sequence = event.property("sequence").unwrap();
        assert_eq!(sequence.value_type, ValueType::Text);
        assert_eq!(sequence.values, [Value::Text("two".to_string())]);
    }

    #[test]
    fn fails_when_strict() {
        let err = typed(&calendar("SEQUENCE:two"), true).unwrap_err();
        assert_eq!(err.name, "sequence");
        assert_eq!(err.raw, "two");
    }

    #[test]
    fn structural_properties_always_fail() {
        let err = typed(&calendar("DTSTART:yesterday"), false).unwrap_err();
        assert_eq!(err.name, "dtstart");
        assert_eq!(err.line, 3);
    }

    #[test]
    fn builds_output_properties() {
        let prop = Property::text("dtstart", "2021-03-15T10:00:00");
        assert_eq!(prop.value_type, ValueType::DateTime);
        assert!(prop.parameters.is_empty());
        assert_eq!(prop.values[0].to_string(), "20210315T100000");

        let prop = Property::text("dtstart", "2021-03-15");
        assert_eq!(prop.value_type, ValueType::Date);
        assert_eq!(prop.parameters.first("value"), Some("DATE"));

        let prop = Property::text("attendee", "mailto:a@b.c");
        assert_eq!(prop.value_type, ValueType::CalAddress);
        assert!(prop.parameters.is_empty());

        let prop = Property::text("trigger", "-PT15M");
        assert_eq!(prop.value_type, ValueType::Duration);
    }

    #[test]
    fn passes_undecodable_output_through() {
        let prop = Property::text("dtstart", "next monday");
        assert_eq!(prop.value_type, ValueType::DateTime);
        assert_eq!(prop.values, [Value::Text("next monday".to_string())]);
        assert!(prop.parameters.is_empty());
    }
}
