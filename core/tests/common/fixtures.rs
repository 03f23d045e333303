// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data for integration tests.

use davparser::CalendarEvent;
use jiff::civil::DateTime;

/// Two plain events and a time zone definition.
#[allow(dead_code)]
pub const SIMPLE_ICS: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//Test Corp.//Test Calendar//EN\r
BEGIN:VTIMEZONE\r
TZID:America/New_York\r
BEGIN:STANDARD\r
DTSTART:19701101T020000\r
TZOFFSETFROM:-0400\r
TZOFFSETTO:-0500\r
END:STANDARD\r
END:VTIMEZONE\r
BEGIN:VEVENT\r
UID:3b9a0e2c-1f8e-4b4a-9b57-2f2f8d7e9a01\r
DTSTAMP:20110418T213128Z\r
DTSTART;TZID=America/New_York:20110420T073000\r
DTEND;TZID=America/New_York:20110420T083000\r
SUMMARY:Access-A-Ride Pickup\r
DESCRIPTION:Access-A-Ride to 900 Jay St.\\, Brooklyn\r
LOCATION:1000 Broadway Ave.\\, Brooklyn\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:5d1f3c7a-8b2e-4f61-a0c4-7e3b9d2a6f12\r
DTSTAMP:20110418T213128Z\r
DTSTART;TZID=America/New_York:20110420T200000\r
DTEND;TZID=America/New_York:20110420T210000\r
SUMMARY:Access-A-Ride Pickup\r
DESCRIPTION:Access-A-Ride to 1000 Broadway Ave.\\, Brooklyn\r
LOCATION:900 Jay St.\\, Brooklyn\r
END:VEVENT\r
END:VCALENDAR\r
";

/// An event with an extension property and three folded attendees.
#[allow(dead_code)]
pub const CUSTOM_PROPS_ICS: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//Sabre//Sabre VObject 4.1.3//EN\r
CALSCALE:GREGORIAN\r
BEGIN:VEVENT\r
UID:f1514f44bf39311568d640721cbc555071ca90e08d3349ccae43e1787553988ae047feb2\r
 aab16e43439a608f28671ab7c10e754cec5324c4e4cd93f443dc3934f6c5d2e592a8112c\r
TRANSP:OPAQUE\r
DTSTART;TZID=Europe/Paris:20170601T120000\r
DTEND;TZID=Europe/Paris:20170601T123000\r
CLASS:PUBLIC\r
X-OPENPAAS-VIDEOCONFERENCE:https://jitsi.linagora.com/calendar\r
SUMMARY:Test\r
ORGANIZER;CN=Huy TA QUOC:mailto:htquoc@linagora.com\r
ATTENDEE;PARTSTAT=NEEDS-ACTION;RSVP=TRUE;ROLE=REQ-PARTICIPANT;CUTYPE=INDIVI\r
 DUAL;CN=Huy TA QUOC:mailto:htquoc@linagora.com\r
ATTENDEE;PARTSTAT=ACCEPTED;RSVP=TRUE;ROLE=REQ-PARTICIPANT;CUTYPE=INDIVIDUAL\r
 ;CN=Khaled FERJANI:mailto:kferjani@linagora.com\r
ATTENDEE;PARTSTAT=ACCEPTED;RSVP=FALSE;ROLE=CHAIR;CUTYPE=INDIVIDUAL;CN=Renau\r
 d BOYER:mailto:rboyer@linagora.com\r
DTSTAMP:20170531T102617Z\r
END:VEVENT\r
END:VCALENDAR\r
";

/// A weekday meeting with an email alarm and one moved occurrence.
#[allow(dead_code)]
pub const RECURRING_ICS: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//Sabre//Sabre VObject 4.1.3//EN\r
CALSCALE:GREGORIAN\r
BEGIN:VEVENT\r
UID:4b9d2a26-4d8e-4b3c-9d46-0c8d0c1e7f35\r
TRANSP:OPAQUE\r
DTSTART;TZID=Europe/Paris:20201102T093000\r
DTEND;TZID=Europe/Paris:20201102T094500\r
CLASS:PUBLIC\r
SUMMARY:Daily Meeting\r
RRULE:FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR\r
ORGANIZER;CN=Khaled FERJANI:mailto:kferjani@linagora.com\r
ATTENDEE;PARTSTAT=ACCEPTED;RSVP=FALSE;ROLE=CHAIR;CUTYPE=INDIVIDUAL:mailto:kf\r
 erjani@linagora.com\r
DTSTAMP:20201030T142049Z\r
BEGIN:VALARM\r
TRIGGER:-PT15M\r
ACTION:EMAIL\r
ATTENDEE:mailto:kferjani@linagora.com\r
SUMMARY:Daily Meeting - Team Calendar/Contacts\r
DESCRIPTION:This is an automatic alarm sent by OpenPaas\r
END:VALARM\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:4b9d2a26-4d8e-4b3c-9d46-0c8d0c1e7f35\r
TRANSP:OPAQUE\r
DTSTART;TZID=Europe/Paris:20201106T100000\r
DTEND;TZID=Europe/Paris:20201106T101500\r
CLASS:PUBLIC\r
SUMMARY:Daily Meeting (moved)\r
ORGANIZER;CN=Khaled FERJANI:mailto:kferjani@linagora.com\r
DTSTAMP:20201030T142049Z\r
RECURRENCE-ID:20201106T083000Z\r
END:VEVENT\r
END:VCALENDAR\r
";

/// A free/busy reply for a single attendee.
#[allow(dead_code)]
pub const FREEBUSY_ICS: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//Example Corp.//CalDAV Client//EN\r
BEGIN:VFREEBUSY\r
UID:19970901T115957Z-76A912@example.com\r
DTSTAMP:19970901T120000Z\r
ORGANIZER:mailto:jane_doe@example.com\r
ATTENDEE;CN=Wilfredo Sanchez Vega:mailto:wilfredo@example.com\r
DTSTART:20090613T000000Z\r
DTEND:20090614T000000Z\r
FREEBUSY:20090613T220000Z/20090613T230000Z\r
END:VFREEBUSY\r
END:VCALENDAR\r
";

/// A floating date-time.
#[allow(dead_code)]
#[must_use]
pub fn date_time(s: &str) -> DateTime {
    s.parse().unwrap()
}

/// The base event of the translate tests.
#[allow(dead_code)]
#[must_use]
pub fn test_event() -> CalendarEvent {
    let mut event = CalendarEvent::new(
        "123456",
        "test",
        date_time("2021-03-15T10:00:00"),
        date_time("2021-03-15T11:00:00"),
    );
    event.location = Some("some location".to_string());
    event.description = Some("simple description".to_string());
    event
}
