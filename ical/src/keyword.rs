// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545.
//!
//! Names are stored lowercase, which is the normalized form used by the
//! whole crate. The formatter upper-cases them on output.

#![allow(missing_docs)]

pub const KW_BEGIN: &str = "begin";
pub const KW_END: &str = "end";

// Section 3.6 - Calendar Components
pub const KW_VCALENDAR: &str = "vcalendar";
pub const KW_VEVENT: &str = "vevent";
pub const KW_VTODO: &str = "vtodo";
pub const KW_VJOURNAL: &str = "vjournal";
pub const KW_VFREEBUSY: &str = "vfreebusy";
pub const KW_VTIMEZONE: &str = "vtimezone";
pub const KW_VALARM: &str = "valarm";

// Section 3.2 - Property Parameters
pub const KW_CN: &str = "cn";
pub const KW_CUTYPE: &str = "cutype";
pub const KW_DELEGATED_FROM: &str = "delegated-from";
pub const KW_DELEGATED_TO: &str = "delegated-to";
pub const KW_FBTYPE: &str = "fbtype";
pub const KW_FBTYPE_BUSY: &str = "BUSY";
pub const KW_MEMBER: &str = "member";
pub const KW_PARTSTAT: &str = "partstat";
pub const KW_ROLE: &str = "role";
pub const KW_RSVP: &str = "rsvp";
pub const KW_TZID: &str = "tzid";
pub const KW_VALUE: &str = "value";

// Section 3.7 - Calendar Properties
pub const KW_CALSCALE: &str = "calscale";
pub const KW_CALSCALE_GREGORIAN: &str = "GREGORIAN";
pub const KW_METHOD: &str = "method";
pub const KW_PRODID: &str = "prodid";
pub const KW_VERSION: &str = "version";
pub const KW_VERSION_2_0: &str = "2.0";

// Section 3.8 - Component Properties
pub const KW_ATTACH: &str = "attach";
pub const KW_ATTENDEE: &str = "attendee";
pub const KW_CATEGORIES: &str = "categories";
pub const KW_COMPLETED: &str = "completed";
pub const KW_CREATED: &str = "created";
pub const KW_DESCRIPTION: &str = "description";
pub const KW_DTEND: &str = "dtend";
pub const KW_DTSTAMP: &str = "dtstamp";
pub const KW_DTSTART: &str = "dtstart";
pub const KW_DUE: &str = "due";
pub const KW_DURATION: &str = "duration";
pub const KW_EXDATE: &str = "exdate";
pub const KW_EXRULE: &str = "exrule";
pub const KW_FREEBUSY: &str = "freebusy";
pub const KW_GEO: &str = "geo";
pub const KW_LAST_MODIFIED: &str = "last-modified";
pub const KW_LOCATION: &str = "location";
pub const KW_ORGANIZER: &str = "organizer";
pub const KW_PERCENT_COMPLETE: &str = "percent-complete";
pub const KW_PRIORITY: &str = "priority";
pub const KW_RDATE: &str = "rdate";
pub const KW_RECURRENCE_ID: &str = "recurrence-id";
pub const KW_REPEAT: &str = "repeat";
pub const KW_RESOURCES: &str = "resources";
pub const KW_RRULE: &str = "rrule";
pub const KW_SEQUENCE: &str = "sequence";
pub const KW_SUMMARY: &str = "summary";
pub const KW_TRIGGER: &str = "trigger";
pub const KW_TZOFFSETFROM: &str = "tzoffsetfrom";
pub const KW_TZOFFSETTO: &str = "tzoffsetto";
pub const KW_TZURL: &str = "tzurl";
pub const KW_UID: &str = "uid";
pub const KW_URL: &str = "url";

// Section 3.3.10 - Recurrence Rule parts
pub const KW_RRULE_FREQ: &str = "FREQ";
pub const KW_RRULE_UNTIL: &str = "UNTIL";
pub const KW_RRULE_COUNT: &str = "COUNT";
pub const KW_RRULE_INTERVAL: &str = "INTERVAL";
pub const KW_RRULE_BYSECOND: &str = "BYSECOND";
pub const KW_RRULE_BYMINUTE: &str = "BYMINUTE";
pub const KW_RRULE_BYHOUR: &str = "BYHOUR";
pub const KW_RRULE_BYDAY: &str = "BYDAY";
pub const KW_RRULE_BYMONTHDAY: &str = "BYMONTHDAY";
pub const KW_RRULE_BYYEARDAY: &str = "BYYEARDAY";
pub const KW_RRULE_BYWEEKNO: &str = "BYWEEKNO";
pub const KW_RRULE_BYMONTH: &str = "BYMONTH";
pub const KW_RRULE_BYSETPOS: &str = "BYSETPOS";
pub const KW_RRULE_WKST: &str = "WKST";
