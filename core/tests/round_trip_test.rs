// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse, translate and parse again.

mod common;

use common::{CUSTOM_PROPS_ICS, RECURRING_ICS, SIMPLE_ICS, test_event};
use davparser::{Attendee, CalendarEvent, parse, translate};

fn round_trip(event: &CalendarEvent) -> CalendarEvent {
    let ics = translate(event).unwrap();
    let mut events = parse(&ics).unwrap();
    assert_eq!(events.len(), 1, "{ics}");
    events.remove(0)
}

fn assert_same_fields(a: &CalendarEvent, b: &CalendarEvent) {
    assert_eq!(a.id, b.id);
    assert_eq!(a.title, b.title);
    assert_eq!(a.start, b.start);
    assert_eq!(a.end, b.end);
    assert_eq!(a.all_day, b.all_day);
    assert_eq!(a.duration, b.duration);
    assert_eq!(a.attendees, b.attendees);
    assert_eq!(a.rrule, b.rrule);
    assert_eq!(a.recurrence_id, b.recurrence_id);
    assert_eq!(a.alarm, b.alarm);
    assert_eq!(a.extended_props, b.extended_props);
    assert_eq!(a.exceptions.len(), b.exceptions.len());
    for (x, y) in a.exceptions.iter().zip(&b.exceptions) {
        assert_same_fields(x, y);
    }
}

#[test]
fn parsed_events_survive_translation() {
    for ics in [SIMPLE_ICS, CUSTOM_PROPS_ICS, RECURRING_ICS] {
        for event in parse(ics).unwrap() {
            assert_same_fields(&round_trip(&event), &event);
        }
    }
}

#[test]
fn attendee_parameters_survive_translation() {
    let mut event = test_event();
    event.attendees.push(Attendee {
        partstat: Some("ACCEPTED".to_string()),
        cn: Some("A B".to_string()),
        ..Attendee::new("mailto:a@b.com")
    });
    let back = round_trip(&event);
    let attendee = &back.attendees[0];
    assert_eq!(attendee.partstat.as_deref(), Some("ACCEPTED"));
    assert_eq!(attendee.cn.as_deref(), Some("A B"));
    assert_eq!(attendee.email, "mailto:a@b.com");
}

#[test]
fn long_lines_unfold_to_the_original() {
    let description = "Line one, with a comma; and a semicolon\nline two \u{1F600} ".repeat(8);
    let mut event = test_event();
    event.description = Some(description.clone());
    let ics = translate(&event).unwrap();
    assert!(ics.split("\r\n").all(|line| line.len() <= 75));

    let back = round_trip(&event);
    assert_eq!(back.description.as_deref(), Some(description.as_str()));
}

#[test]
fn json_form_survives() {
    let events = parse(RECURRING_ICS).unwrap();
    let json = serde_json::to_string(&events).unwrap();
    let back: Vec<CalendarEvent> = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string(&back).unwrap(), json);
    assert_eq!(translate(&back[0]).unwrap(), translate(&events[0]).unwrap());
}

#[test]
fn escaped_parameter_values_survive_translation() {
    let ics = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:1\r\nSUMMARY:escapes\r\n\
        DTSTART:20210315T100000\r\nDTEND:20210315T110000\r\n\
        ATTENDEE;CN=A\\nB;PARTSTAT=ACCEPTED:mailto:x@y.z\r\n\
        ATTENDEE;CN=\"C:\\\\dir\\, here\":mailto:w@y.z\r\n\
        END:VEVENT\r\nEND:VCALENDAR";
    let events = parse(ics).unwrap();
    let attendees = &events[0].attendees;
    assert_eq!(attendees[0].cn.as_deref(), Some("A\nB"));
    assert_eq!(attendees[1].cn.as_deref(), Some("C:\\dir, here"));

    let text = translate(&events[0]).unwrap();
    assert!(text.contains("ATTENDEE;CN=A\\nB;PARTSTAT=ACCEPTED:mailto:x@y.z\r\n"), "{text}");

    let back = round_trip(&events[0]);
    assert_eq!(&back.attendees, attendees);
}
