// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use davparser_ical::keyword::{KW_CN, KW_CUTYPE, KW_PARTSTAT, KW_ROLE, KW_RSVP, KW_VALUE};
use davparser_ical::{Parameter, Property, Value};
use serde::{Deserialize, Serialize};

/// A calendar user: an attendee, or the organizer of a free/busy reply.
///
/// `email` is the bare property value, usually a `mailto:` URI. The
/// well-known parameters are fields, every other parameter is kept in
/// `parameters` and flattened into the JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// The calendar user address
    pub email: String,

    /// Common name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cn: Option<String>,

    /// Participation status, e.g. `ACCEPTED`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partstat: Option<String>,

    /// Participation role, e.g. `REQ-PARTICIPANT`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Calendar user type, e.g. `INDIVIDUAL`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutype: Option<String>,

    /// Whether a reply is expected, kept as written, e.g. `TRUE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp: Option<String>,

    /// Other parameters by lower-case name
    #[serde(flatten)]
    pub parameters: BTreeMap<String, ParameterValue>,
}

/// Value of a parameter without a dedicated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// A single value
    Single(String),

    /// A multi-valued parameter, e.g. `DELEGATED-TO`
    Multi(Vec<String>),
}

impl ParameterValue {
    fn into_values(self) -> Vec<String> {
        match self {
            Self::Single(value) => vec![value],
            Self::Multi(values) => values,
        }
    }
}

impl Attendee {
    /// Create an attendee with only an address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Read an attendee from an `ATTENDEE` or `ORGANIZER` property.
    pub(crate) fn from_property(property: &Property) -> Self {
        let mut attendee = Self::new(property.value().map(bare_value).unwrap_or_default());
        for param in property.parameters.iter() {
            let first = param.first().map(str::to_string);
            match param.name.as_str() {
                KW_CN => attendee.cn = first,
                KW_PARTSTAT => attendee.partstat = first,
                KW_ROLE => attendee.role = first,
                KW_CUTYPE => attendee.cutype = first,
                KW_RSVP => attendee.rsvp = first,
                KW_VALUE => {}
                name => {
                    let value = match param.values.as_slice() {
                        [single] => ParameterValue::Single(single.clone()),
                        values => ParameterValue::Multi(values.to_vec()),
                    };
                    attendee.parameters.insert(name.to_string(), value);
                }
            }
        }
        attendee
    }

    /// Build a property with the given name, parameters in the order CN,
    /// PARTSTAT, ROLE, CUTYPE, RSVP, then the rest.
    pub(crate) fn to_property(&self, name: &str) -> Property {
        let mut property = Property::new(name, vec![Value::CalAddress(self.email.clone())]);
        let known = [
            (KW_CN, &self.cn),
            (KW_PARTSTAT, &self.partstat),
            (KW_ROLE, &self.role),
            (KW_CUTYPE, &self.cutype),
            (KW_RSVP, &self.rsvp),
        ];
        for (key, value) in known {
            if let Some(value) = value {
                property = property.with_parameter(key, value.clone());
            }
        }
        for (key, value) in &self.parameters {
            property = property.with(Parameter {
                name: key.to_ascii_lowercase(),
                values: value.clone().into_values(),
            });
        }
        property
    }
}

fn bare_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use davparser_ical::formatter::{FormatOptions, format};
    use davparser_ical::{Component, parse};

    use super::*;

    fn first_attendee(line: &str) -> Attendee {
        let src = format!("BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\n{line}\r\nEND:VEVENT\r\nEND:VCALENDAR");
        let calendar = parse(&src).unwrap();
        let event = &calendar.children[0];
        Attendee::from_property(event.property("attendee").unwrap())
    }

    #[test]
    fn reads_parameters() {
        let attendee = first_attendee(
            "ATTENDEE;PARTSTAT=ACCEPTED;CN=Khaled FERJANI;RSVP=TRUE;X-NUM-GUESTS=0;\
             DELEGATED-TO=\"mailto:a@b.c\",\"mailto:d@e.f\":mailto:kferjani@linagora.com",
        );
        assert_eq!(attendee.email, "mailto:kferjani@linagora.com");
        assert_eq!(attendee.cn.as_deref(), Some("Khaled FERJANI"));
        assert_eq!(attendee.partstat.as_deref(), Some("ACCEPTED"));
        assert_eq!(attendee.rsvp.as_deref(), Some("TRUE"));
        assert_eq!(attendee.role, None);
        assert_eq!(
            attendee.parameters.get("x-num-guests"),
            Some(&ParameterValue::Single("0".to_string()))
        );
        assert_eq!(
            attendee.parameters.get("delegated-to"),
            Some(&ParameterValue::Multi(vec![
                "mailto:a@b.c".to_string(),
                "mailto:d@e.f".to_string()
            ]))
        );
    }

    #[test]
    fn writes_parameters_in_order() {
        let attendee = Attendee {
            email: "mailto:a@b.com".to_string(),
            cn: Some("A B".to_string()),
            partstat: Some("ACCEPTED".to_string()),
            rsvp: Some("false".to_string()),
            parameters: BTreeMap::from([(
                "x-num-guests".to_string(),
                ParameterValue::Single("1".to_string()),
            )]),
            ..Attendee::default()
        };
        let mut component = Component::new("vevent");
        component.push_property(attendee.to_property("attendee"));
        let text = format(&component, FormatOptions::default().folding(None)).unwrap();
        assert_eq!(
            text,
            "BEGIN:VEVENT\r\nATTENDEE;CN=A B;PARTSTAT=ACCEPTED;RSVP=false;X-NUM-GUESTS=1:mailto:a@b.com\r\nEND:VEVENT"
        );
    }

    #[test]
    fn serializes_flat_json() {
        let attendee = Attendee {
            email: "mailto:a@b.com".to_string(),
            cn: Some("A B".to_string()),
            parameters: BTreeMap::from([(
                "x-num-guests".to_string(),
                ParameterValue::Single("1".to_string()),
            )]),
            ..Attendee::default()
        };
        let json = serde_json::to_string(&attendee).unwrap();
        assert_eq!(json, r#"{"email":"mailto:a@b.com","cn":"A B","x-num-guests":"1"}"#);

        let back: Attendee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attendee);
    }
}
