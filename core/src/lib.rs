// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Convert iCalendar text to calendar events and free/busy replies, and back.
//!
//! ```
//! let ics = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:1\r\nSUMMARY:Standup\r\n\
//!     DTSTART:20210315T100000\r\nDTEND:20210315T101500\r\nEND:VEVENT\r\nEND:VCALENDAR";
//! let events = davparser::parse(ics)?;
//! assert_eq!(events[0].title.as_deref(), Some("Standup"));
//!
//! let text = davparser::translate(&events[0])?;
//! assert!(text.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
//! # Ok::<(), davparser::Error>(())
//! ```

mod attendee;
mod codec;
mod config;
mod datetime;
mod error;
mod event;
mod freebusy;
mod property;
mod recurrence;
mod serde_util;

pub use crate::attendee::{Attendee, ParameterValue};
pub use crate::codec::Codec;
pub use crate::config::{Config, DEFAULT_FOLDING, OrphanPolicy};
pub use crate::datetime::EventTime;
pub use crate::error::{Error, Result};
pub use crate::event::{CalendarEvent, KNOWN_PROPERTIES, is_known_property};
pub use crate::freebusy::{FreeBusy, FreeBusyPeriod};
pub use crate::property::{PropertyMap, PropertyValue};
pub use davparser_ical::{
    DateOrDateTime, RecurrenceFrequency, Value, ValueDuration, ValueRecurrenceRule, WeekDay,
    WeekDayNum,
};

/// Parse every event of a calendar with the default [`Config`].
///
/// ## Errors
/// See [`Codec::parse`].
pub fn parse(ics: &str) -> Result<Vec<CalendarEvent>> {
    Codec::default().parse(ics)
}

/// Parse every free/busy reply of a calendar with the default [`Config`].
///
/// ## Errors
/// See [`Codec::parse_free_busy`].
pub fn parse_free_busy(ics: &str) -> Result<Vec<FreeBusy>> {
    Codec::default().parse_free_busy(ics)
}

/// Write an event and its exceptions with the default [`Config`].
///
/// ## Errors
/// See [`Codec::translate`].
pub fn translate(event: &CalendarEvent) -> Result<String> {
    Codec::default().translate(event)
}

/// Write a free/busy reply with the default [`Config`].
///
/// ## Errors
/// See [`Codec::translate_free_busy`].
pub fn translate_free_busy(free_busy: &FreeBusy) -> Result<String> {
    Codec::default().translate_free_busy(free_busy)
}
