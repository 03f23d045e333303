// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the iCalendar syntax layer
//!
//! These tests validate unfolding, content line scanning and nesting on
//! realistic iCalendar content and edge cases.

use davparser_ical::syntax::{ContentLineError, RawComponent, SyntaxError, syntax_analysis};

fn parse_first_component(src: &str) -> RawComponent {
    let root = syntax_analysis(src).unwrap();
    root.children.into_iter().next().unwrap()
}

#[test]
fn syntax_empty_calendar() {
    let src = "\
BEGIN:VCALENDAR\r
END:VCALENDAR\r
";
    let root = syntax_analysis(src).unwrap();
    assert_eq!(root.name, "vcalendar");
    assert!(root.properties.is_empty());
    assert!(root.children.is_empty());
}

#[test]
fn syntax_lowercases_names() {
    let src = "\
begin:vcalendar\r
Begin:VEvent\r
Summary;Language=EN:Hello\r
end:VEVENT\r
END:vcalendar\r
";
    let event = parse_first_component(src);
    assert_eq!(event.name, "vevent");
    assert_eq!(event.properties[0].name, "summary");
    assert_eq!(event.properties[0].parameters.first("LANGUAGE"), Some("EN"));
    assert_eq!(event.properties[0].value, "Hello");
}

#[test]
fn syntax_unfolds_continuations() {
    let src = "\
BEGIN:VCALENDAR\r
BEGIN:VEVENT\r
DESCRIPTION:This is a lo\r
 ng description\r
\tthat spans lines\r
END:VEVENT\r
END:VCALENDAR\r
";
    let event = parse_first_component(src);
    assert_eq!(
        event.properties[0].value,
        "This is a long descriptionthat spans lines"
    );
}

#[test]
fn syntax_accepts_bare_line_feeds() {
    let src = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nUID:1\nEND:VEVENT\nEND:VCALENDAR";
    let event = parse_first_component(src);
    assert_eq!(event.properties[0].value, "1");
}

#[test]
fn syntax_quoted_parameters() {
    let src = "\
BEGIN:VCALENDAR\r
BEGIN:VEVENT\r
ATTENDEE;CN=\"Doe, John\";DELEGATED-TO=\"mailto:a@b.c\",\"mailto:d@e.f\":mailto:j@d.c\r
END:VEVENT\r
END:VCALENDAR\r
";
    let event = parse_first_component(src);
    let attendee = &event.properties[0];
    assert_eq!(attendee.parameters.first("cn"), Some("Doe, John"));
    let delegated = attendee.parameters.get("delegated-to").unwrap();
    assert_eq!(delegated.values, ["mailto:a@b.c", "mailto:d@e.f"]);
    assert_eq!(attendee.value, "mailto:j@d.c");
}

#[test]
fn syntax_value_keeps_colons() {
    let src = "\
BEGIN:VCALENDAR\r
BEGIN:VEVENT\r
URL:https://example.com:8080/a;b\r
END:VEVENT\r
END:VCALENDAR\r
";
    let event = parse_first_component(src);
    assert_eq!(event.properties[0].value, "https://example.com:8080/a;b");
}

#[test]
fn syntax_missing_calendar() {
    let src = "BEGIN:VEVENT\r\nEND:VEVENT\r\n";
    assert_eq!(syntax_analysis(src).unwrap_err(), SyntaxError::MissingCalendar);
    assert_eq!(syntax_analysis("").unwrap_err(), SyntaxError::MissingCalendar);
}

#[test]
fn syntax_missing_colon() {
    let src = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nSUMMARY\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
    let err = syntax_analysis(src).unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::ContentLine {
            line: 3,
            kind: ContentLineError::MissingColon
        }
    ));
}

#[test]
fn syntax_unterminated_quote() {
    let src = "BEGIN:VCALENDAR\r\nX-A;CN=\"open:value\r\nEND:VCALENDAR\r\n";
    let err = syntax_analysis(src).unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::ContentLine {
            line: 2,
            kind: ContentLineError::UnterminatedQuote
        }
    ));
}

#[test]
fn syntax_mismatched_nesting() {
    let src = "\
BEGIN:VCALENDAR\r
BEGIN:VEVENT\r
END:VTODO\r
END:VCALENDAR\r
";
    let err = syntax_analysis(src).unwrap_err();
    assert_eq!(
        err,
        SyntaxError::MismatchedNesting {
            line: 3,
            expected: "vevent".to_string(),
            found: "VTODO".to_string(),
        }
    );
}

#[test]
fn syntax_unclosed_component() {
    let src = "\
BEGIN:VCALENDAR\r
BEGIN:VEVENT\r
UID:1\r
";
    let err = syntax_analysis(src).unwrap_err();
    assert!(matches!(err, SyntaxError::UnclosedComponent { line: 2, ref name } if name == "vevent"));
}

#[test]
fn syntax_unmatched_end() {
    let src = "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\nEND:VCALENDAR\r\n";
    let err = syntax_analysis(src).unwrap_err();
    assert!(matches!(err, SyntaxError::UnmatchedEnd { line: 3, .. }));
}

#[test]
fn syntax_second_root() {
    let src = "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\nBEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n";
    let err = syntax_analysis(src).unwrap_err();
    assert!(matches!(err, SyntaxError::UnexpectedRoot { line: 3, .. }));
}

#[test]
fn syntax_unterminated_fold() {
    let src = "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n \r\n";
    let err = syntax_analysis(src).unwrap_err();
    assert!(matches!(err, SyntaxError::UnterminatedFold { .. }));
}
