// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use davparser_ical::keyword::{
    KW_CALSCALE, KW_CALSCALE_GREGORIAN, KW_VCALENDAR, KW_VERSION, KW_VEVENT, KW_VFREEBUSY,
};
use davparser_ical::{Component, DecodeOptions, FormatOptions, Property, format};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::event::CalendarEvent;
use crate::freebusy::FreeBusy;
use crate::recurrence::group_exceptions;

/// Converts between iCalendar text and the structured model, with a
/// [`Config`] applied to every call.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: Config,
}

impl Codec {
    /// Create a codec with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse every `VEVENT` of a calendar, with recurrence exceptions nested
    /// under their master event.
    ///
    /// ## Errors
    /// - [`Error::MalformedInput`] on folding, content line or nesting errors
    /// - [`Error::InvalidPropertyValue`] on an undecodable start, end or
    ///   recurrence id, or on any undecodable value in strict mode
    /// - [`Error::OrphanException`] when orphan exceptions are configured to fail
    #[tracing::instrument(skip_all)]
    pub fn parse(&self, ics: &str) -> Result<Vec<CalendarEvent>> {
        let calendar = self.parse_calendar(ics)?;
        let instances = calendar
            .children_named(KW_VEVENT)
            .map(CalendarEvent::from_component)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(instances = instances.len(), "mapped events");

        let events = group_exceptions(instances, self.config.orphan_exceptions)?;
        tracing::debug!(events = events.len(), "grouped exceptions");
        Ok(events)
    }

    /// Parse every `VFREEBUSY` of a calendar.
    ///
    /// ## Errors
    /// [`Error::NoFreeBusyData`] when the calendar has no `VFREEBUSY`, and
    /// the errors of [`Codec::parse`].
    #[tracing::instrument(skip_all)]
    pub fn parse_free_busy(&self, ics: &str) -> Result<Vec<FreeBusy>> {
        let calendar = self.parse_calendar(ics)?;
        let replies = calendar
            .children_named(KW_VFREEBUSY)
            .map(FreeBusy::from_component)
            .collect::<Result<Vec<_>>>()?;
        if replies.is_empty() {
            return Err(Error::NoFreeBusyData);
        }
        tracing::debug!(replies = replies.len(), "mapped free/busy replies");
        Ok(replies)
    }

    /// Write an event and its exceptions as a calendar.
    ///
    /// The master comes first, then every exception depth-first.
    ///
    /// ## Errors
    /// [`Error::InvalidEventObject`] if the event or an exception lacks an
    /// id, title, start or end.
    #[tracing::instrument(skip_all, fields(uid = %event.id))]
    pub fn translate(&self, event: &CalendarEvent) -> Result<String> {
        let mut calendar = calendar();
        push_event(&mut calendar, event)?;
        tracing::debug!(components = calendar.children.len(), "built calendar");
        self.format(&calendar)
    }

    /// Write a free/busy reply as a calendar.
    ///
    /// ## Errors
    /// [`Error::Format`] if the text cannot be written.
    #[tracing::instrument(skip_all)]
    pub fn translate_free_busy(&self, free_busy: &FreeBusy) -> Result<String> {
        let mut calendar = calendar();
        calendar.push_child(free_busy.to_component());
        self.format(&calendar)
    }

    fn parse_calendar(&self, ics: &str) -> Result<Component> {
        let options = DecodeOptions {
            strict: self.config.strict_values,
        };
        Ok(davparser_ical::parse_with_options(ics, &options)?)
    }

    fn format(&self, calendar: &Component) -> Result<String> {
        let options = FormatOptions::default().folding(self.config.folding);
        Ok(format(calendar, options)?)
    }
}

fn calendar() -> Component {
    let mut calendar = Component::new(KW_VCALENDAR);
    calendar.push_property(Property::text(KW_VERSION, "2.0"));
    calendar.push_property(Property::text(KW_CALSCALE, KW_CALSCALE_GREGORIAN));
    calendar
}

fn push_event(calendar: &mut Component, event: &CalendarEvent) -> Result<()> {
    calendar.push_child(event.to_component()?);
    for exception in &event.exceptions {
        push_event(calendar, exception)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrphanPolicy;

    const ORPHAN: &str = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:1\r\nSUMMARY:moved\r\n\
        DTSTART:20210316T100000\r\nRECURRENCE-ID:20210316T090000\r\nEND:VEVENT\r\nEND:VCALENDAR";

    #[test]
    fn ignores_other_components() {
        let ics = "BEGIN:VCALENDAR\r\nBEGIN:VTIMEZONE\r\nTZID:Europe/Paris\r\nEND:VTIMEZONE\r\n\
            BEGIN:VTODO\r\nUID:t\r\nEND:VTODO\r\nEND:VCALENDAR";
        let events = Codec::default().parse(ics).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn orphan_policy_comes_from_config() {
        assert!(Codec::default().parse(ORPHAN).unwrap().is_empty());

        let codec = Codec::new(Config {
            orphan_exceptions: OrphanPolicy::Promote,
            ..Config::default()
        });
        let events = codec.parse(ORPHAN).unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].recurrence_id.is_some());

        let codec = Codec::new(Config {
            orphan_exceptions: OrphanPolicy::Error,
            ..Config::default()
        });
        assert!(matches!(
            codec.parse(ORPHAN),
            Err(Error::OrphanException { .. })
        ));
    }

    #[test]
    fn strict_values_from_config() {
        let ics = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:1\r\nDTSTART:20210315T100000\r\n\
            DURATION:soon\r\nEND:VEVENT\r\nEND:VCALENDAR";
        assert!(Codec::default().parse(ics).is_ok());

        let codec = Codec::new(Config {
            strict_values: true,
            ..Config::default()
        });
        assert!(matches!(
            codec.parse(ics),
            Err(Error::InvalidPropertyValue { .. })
        ));
    }

    #[test]
    fn folding_from_config() {
        let event = CalendarEvent::new(
            "1",
            "x".repeat(100),
            jiff::civil::date(2021, 3, 15).at(10, 0, 0, 0),
            jiff::civil::date(2021, 3, 15).at(11, 0, 0, 0),
        );

        let folded = Codec::default().translate(&event).unwrap();
        assert!(folded.split("\r\n").all(|line| line.len() <= 75));

        let codec = Codec::new(Config {
            folding: None,
            ..Config::default()
        });
        let unfolded = codec.translate(&event).unwrap();
        assert!(unfolded.contains(&format!("SUMMARY:{}\r\n", "x".repeat(100))));
    }

    #[test]
    fn no_free_busy_data() {
        let ics = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:1\r\nEND:VEVENT\r\nEND:VCALENDAR";
        assert!(matches!(
            Codec::default().parse_free_busy(ics),
            Err(Error::NoFreeBusyData)
        ));
    }
}
