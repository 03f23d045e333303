// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use davparser_ical::keyword::{
    KW_ATTENDEE, KW_CN, KW_DESCRIPTION, KW_DTEND, KW_DTSTART, KW_DURATION, KW_LOCATION,
    KW_ORGANIZER, KW_RECURRENCE_ID, KW_RRULE, KW_SUMMARY, KW_TRIGGER, KW_UID, KW_VALARM,
    KW_VEVENT,
};
use davparser_ical::{Component, Property, Value, ValueDuration, ValueRecurrenceRule};
use serde::{Deserialize, Serialize};

use crate::attendee::Attendee;
use crate::datetime::EventTime;
use crate::error::{Error, Result};
use crate::property::PropertyMap;
use crate::serde_util::{optional_rule, optional_text};

/// Names of the properties mapped to first-class fields of [`CalendarEvent`].
///
/// Every other property of a `VEVENT` ends up in
/// [`CalendarEvent::extended_props`].
pub const KNOWN_PROPERTIES: [&str; 10] = [
    KW_UID,
    KW_SUMMARY,
    KW_DTSTART,
    KW_DTEND,
    KW_ATTENDEE,
    KW_RRULE,
    KW_RECURRENCE_ID,
    KW_DESCRIPTION,
    KW_LOCATION,
    KW_DURATION,
];

/// Whether a property name is one of [`KNOWN_PROPERTIES`].
#[must_use]
pub fn is_known_property(name: &str) -> bool {
    KNOWN_PROPERTIES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(name))
}

/// A calendar event, the structured form of a `VEVENT`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// The UID, shared by the master event and its exceptions
    pub id: String,

    /// The summary
    #[serde(default)]
    pub title: Option<String>,

    /// Start time
    #[serde(default)]
    pub start: Option<EventTime>,

    /// End time, derived from the start when the source has no DTEND
    #[serde(default)]
    pub end: Option<EventTime>,

    /// Whether the event starts on a date without time
    #[serde(default)]
    pub all_day: bool,

    /// Length of the event
    #[serde(default, with = "optional_text")]
    pub duration: Option<ValueDuration>,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Location
    #[serde(default)]
    pub location: Option<String>,

    /// Attendees in source order
    #[serde(default)]
    pub attendees: Vec<Attendee>,

    /// Properties of the first `VALARM`, by name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alarm: Option<PropertyMap>,

    /// Recurrence rule
    #[serde(default, with = "optional_rule", skip_serializing_if = "Option::is_none")]
    pub rrule: Option<ValueRecurrenceRule>,

    /// Set on exception instances, the original start of the replaced occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_id: Option<EventTime>,

    /// Exception instances of a recurring master event
    #[serde(default)]
    pub exceptions: Vec<CalendarEvent>,

    /// Every property that has no first-class field
    #[serde(default)]
    pub extended_props: PropertyMap,
}

impl CalendarEvent {
    /// Create an event with an id, title, start and end.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: impl Into<EventTime>,
        end: impl Into<EventTime>,
    ) -> Self {
        let start = start.into();
        Self {
            id: id.into(),
            title: Some(title.into()),
            all_day: start.is_date(),
            start: Some(start),
            end: Some(end.into()),
            ..Self::default()
        }
    }

    /// Map a `VEVENT` component, without its exceptions.
    ///
    /// ## Errors
    /// If the end or duration cannot be computed from the start.
    #[tracing::instrument(skip_all, fields(uid = tracing::field::Empty))]
    pub(crate) fn from_component(component: &Component) -> Result<Self> {
        let mut event = Self::default();
        let mut duration = None;

        for property in &component.properties {
            match property.name.as_str() {
                KW_UID => event.id = text(property),
                KW_SUMMARY => event.title = Some(text(property)),
                KW_DESCRIPTION => event.description = Some(text(property)),
                KW_LOCATION => event.location = Some(text(property)),
                KW_DTSTART => event.start = EventTime::from_property(property),
                KW_DTEND => event.end = EventTime::from_property(property),
                KW_RECURRENCE_ID => event.recurrence_id = EventTime::from_property(property),
                KW_DURATION => match property.value() {
                    Some(Value::Duration(d)) => duration = Some(*d),
                    _ => tracing::warn!(value = ?property.values, "ignoring undecodable duration"),
                },
                KW_ATTENDEE => event.attendees.push(Attendee::from_property(property)),
                KW_RRULE => match property.value() {
                    Some(Value::Recur(rule)) if event.rrule.is_none() => {
                        event.rrule = Some(rule.as_ref().clone());
                    }
                    Some(Value::Recur(_)) => tracing::debug!("ignoring additional rrule"),
                    _ => tracing::warn!(value = ?property.values, "ignoring undecodable rrule"),
                },
                _ => event.extended_props.append_property(property),
            }
        }
        tracing::Span::current().record("uid", event.id.as_str());

        let mut alarms = component.children_named(KW_VALARM);
        if let Some(alarm) = alarms.next() {
            let mut map = PropertyMap::new();
            for property in &alarm.properties {
                map.append_property(property);
            }
            event.alarm = Some(map);
        }
        let ignored = alarms.count();
        if ignored > 0 {
            tracing::debug!(ignored, "only the first alarm is kept");
        }

        event.all_day = event.start.as_ref().is_some_and(EventTime::is_date);
        event.derive_end_and_duration(duration)?;
        Ok(event)
    }

    /// Fill in the end when DTEND is missing, and the duration from start and end.
    fn derive_end_and_duration(&mut self, duration: Option<ValueDuration>) -> Result<()> {
        let Some(start) = &self.start else {
            self.duration = duration;
            return Ok(());
        };

        if self.end.is_none() {
            let end = match &duration {
                Some(duration) => start
                    .checked_add(duration)
                    .map_err(|_| invalid_duration(duration))?,
                None if start.is_date() => start
                    .checked_add(&ValueDuration {
                        days: 1,
                        ..ValueDuration::default()
                    })
                    .map_err(|_| Error::InvalidPropertyValue {
                        name: KW_DTSTART.to_string(),
                        raw: start.value.to_string(),
                    })?,
                None => start.clone(),
            };
            self.end = Some(end);
        }

        self.duration = match &self.end {
            Some(end) => {
                let length = end
                    .duration_since(start)
                    .map_err(|_| Error::InvalidPropertyValue {
                        name: KW_DTEND.to_string(),
                        raw: end.value.to_string(),
                    })?;
                Some(ValueDuration::from(length))
            }
            None => duration,
        };
        Ok(())
    }

    /// Build the `VEVENT` component of this event, without its exceptions.
    ///
    /// ## Errors
    /// If the id, title, start or end is missing.
    pub(crate) fn to_component(&self) -> Result<Component> {
        if self.id.is_empty() {
            return Err(Error::InvalidEventObject { field: "id" });
        }
        let title = self
            .title
            .as_deref()
            .ok_or(Error::InvalidEventObject { field: "title" })?;
        let start = self
            .start
            .as_ref()
            .ok_or(Error::InvalidEventObject { field: "start" })?;
        let end = self
            .end
            .as_ref()
            .ok_or(Error::InvalidEventObject { field: "end" })?;

        let mut component = Component::new(KW_VEVENT);
        component.push_property(Property::text(KW_UID, self.id.clone()));
        component.push_property(Property::text(KW_SUMMARY, title));
        let location = self.location.clone().unwrap_or_default();
        component.push_property(Property::text(KW_LOCATION, location));
        let description = self.description.clone().unwrap_or_default();
        component.push_property(Property::text(KW_DESCRIPTION, description));
        component.push_property(start.to_property(KW_DTSTART));
        component.push_property(end.to_property(KW_DTEND));

        if let Some(recurrence_id) = &self.recurrence_id {
            component.push_property(recurrence_id.to_property(KW_RECURRENCE_ID));
        }

        for attendee in &self.attendees {
            component.push_property(attendee.to_property(KW_ATTENDEE));
        }

        if let Some(rrule) = &self.rrule {
            component.push_property(Property::new(KW_RRULE, vec![Value::from(rrule.clone())]));
        }

        if let Some(alarm) = &self.alarm
            && alarm.contains_key(KW_TRIGGER)
        {
            let mut valarm = Component::new(KW_VALARM);
            for (name, value) in alarm.iter() {
                valarm.push_property(Property::new(name, value.clone().into_values()));
            }
            component.push_child(valarm);
        }

        for (name, value) in self.extended_props.iter() {
            if is_known_property(name) {
                tracing::warn!(name, "skipping extended property with a known name");
                continue;
            }
            component.push_property(extended_property(name, value.clone().into_values()));
        }

        Ok(component)
    }
}

/// An extended property on output. The organizer gets a `CN` derived from a
/// `mailto:` address.
fn extended_property(name: &str, values: Vec<Value>) -> Property {
    let organizer = name.eq_ignore_ascii_case(KW_ORGANIZER);
    let cn = match values.as_slice() {
        [value] if organizer => value
            .as_str()
            .and_then(|address| address.strip_prefix("mailto:"))
            .map(str::to_string),
        _ => None,
    };

    let property = Property::new(name, values);
    match cn {
        Some(cn) => property.with_parameter(KW_CN, cn),
        None => property,
    }
}

fn text(property: &Property) -> String {
    property
        .values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn invalid_duration(duration: &ValueDuration) -> Error {
    Error::InvalidPropertyValue {
        name: KW_DURATION.to_string(),
        raw: duration.to_string(),
    }
}
