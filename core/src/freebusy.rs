// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use davparser_ical::keyword::{
    KW_ATTENDEE, KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_FBTYPE, KW_FBTYPE_BUSY, KW_FREEBUSY,
    KW_ORGANIZER, KW_UID, KW_VFREEBUSY,
};
use davparser_ical::{
    Component, DateOrDateTime, Property, Value, ValueDateTime, ValuePeriod, ValueTime,
};
use serde::{Deserialize, Serialize};

use crate::attendee::Attendee;
use crate::datetime::EventTime;
use crate::error::{Error, Result};
use crate::property::PropertyMap;

/// The structured form of a `VFREEBUSY`, e.g. a reply to a free/busy request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeBusy {
    /// The UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// The organizer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<Attendee>,

    /// The attendee whose time is described
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendee: Option<Attendee>,

    /// Start of the covered range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<EventTime>,

    /// End of the covered range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,

    /// When the reply was created (DTSTAMP)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<EventTime>,

    /// The first period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_busy: Option<FreeBusyPeriod>,

    /// Every period in source order
    #[serde(default)]
    pub periods: Vec<FreeBusyPeriod>,

    /// Every other property, flattened into the JSON object
    #[serde(flatten)]
    pub extra: PropertyMap,
}

/// A busy or free time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeBusyPeriod {
    /// Start of the range
    pub start: EventTime,

    /// End of the range
    pub end: EventTime,

    /// The `FBTYPE` parameter, e.g. `BUSY` or `FREE`
    #[serde(default = "default_fbtype", rename = "fbtype")]
    pub kind: String,
}

fn default_fbtype() -> String {
    KW_FBTYPE_BUSY.to_string()
}

impl FreeBusyPeriod {
    /// Create a busy period.
    pub fn busy(start: impl Into<EventTime>, end: impl Into<EventTime>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            kind: default_fbtype(),
        }
    }
}

impl FreeBusy {
    /// Map a `VFREEBUSY` component.
    ///
    /// ## Errors
    /// If the end of a start plus duration period is out of range.
    pub(crate) fn from_component(component: &Component) -> Result<Self> {
        let mut fb = Self::default();
        for property in &component.properties {
            match property.name.as_str() {
                KW_UID => fb.uid = property.value().map(ToString::to_string),
                KW_ORGANIZER => fb.organizer = Some(Attendee::from_property(property)),
                KW_ATTENDEE => fb.attendee = Some(Attendee::from_property(property)),
                KW_DTSTART => fb.start = EventTime::from_property(property),
                KW_DTEND => fb.end = EventTime::from_property(property),
                KW_DTSTAMP => fb.timestamp = EventTime::from_property(property),
                KW_FREEBUSY => fb.periods.extend(periods(property)?),
                _ => fb.extra.append_property(property),
            }
        }
        fb.free_busy = fb.periods.first().cloned();
        Ok(fb)
    }

    /// Build the `VFREEBUSY` component.
    pub(crate) fn to_component(&self) -> Component {
        let mut component = Component::new(KW_VFREEBUSY);
        if let Some(uid) = &self.uid {
            component.push_property(Property::text(KW_UID, uid.clone()));
        }
        if let Some(organizer) = &self.organizer {
            component.push_property(organizer.to_property(KW_ORGANIZER));
        }
        if let Some(attendee) = &self.attendee {
            component.push_property(attendee.to_property(KW_ATTENDEE));
        }
        for (name, time) in [
            (KW_DTSTART, &self.start),
            (KW_DTEND, &self.end),
            (KW_DTSTAMP, &self.timestamp),
        ] {
            if let Some(time) = time {
                component.push_property(time.to_property(name));
            }
        }

        let periods = match (&self.free_busy, self.periods.is_empty()) {
            (Some(first), true) => std::slice::from_ref(first),
            _ => self.periods.as_slice(),
        };
        for period in periods {
            let value = ValuePeriod::Explicit {
                start: date_time(&period.start),
                end: date_time(&period.end),
            };
            let property = Property::new(KW_FREEBUSY, vec![Value::Period(value)]);
            let property = if period.kind.eq_ignore_ascii_case(KW_FBTYPE_BUSY) {
                property
            } else {
                property.with_parameter(KW_FBTYPE, period.kind.clone())
            };
            component.push_property(property);
        }

        for (name, value) in self.extra.iter() {
            component.push_property(Property::new(name, value.clone().into_values()));
        }
        component
    }
}

fn periods(property: &Property) -> Result<Vec<FreeBusyPeriod>> {
    let kind = property
        .parameters
        .first(KW_FBTYPE)
        .map_or_else(default_fbtype, str::to_string);

    let mut periods = Vec::with_capacity(property.values.len());
    for value in &property.values {
        let Value::Period(period) = value else {
            tracing::warn!(%value, "ignoring undecodable free/busy period");
            continue;
        };
        let end = period.end().map_err(|_| Error::InvalidPropertyValue {
            name: KW_FREEBUSY.to_string(),
            raw: period.to_string(),
        })?;
        periods.push(FreeBusyPeriod {
            start: EventTime::new(period.start()),
            end: EventTime::new(end),
            kind: kind.clone(),
        });
    }
    Ok(periods)
}

/// Periods hold date-times, a date is taken at midnight.
fn date_time(time: &EventTime) -> ValueDateTime {
    match time.value {
        DateOrDateTime::DateTime(dt) => dt,
        DateOrDateTime::Date(date) => ValueDateTime {
            date,
            time: ValueTime {
                hour: 0,
                minute: 0,
                second: 0,
                utc: false,
            },
        },
    }
}
