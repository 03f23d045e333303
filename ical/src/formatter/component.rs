// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatting, RFC 5545 Section 3.6.

use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::formatter::property::write_property;
use crate::keyword::{KW_BEGIN, KW_END};
use crate::typed::Component;

/// Format a component: its `BEGIN` line, properties, children and `END` line.
pub fn write_component<W: Write>(f: &mut Formatter<W>, component: &Component) -> io::Result<()> {
    with_block(f, &component.name, |f| {
        for property in &component.properties {
            write_property(f, property)?;
        }
        for child in &component.children {
            write_component(f, child)?;
        }
        Ok(())
    })
}

fn with_block<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    body: impl FnOnce(&mut Formatter<W>) -> io::Result<()>,
) -> io::Result<()> {
    let name = name.to_ascii_uppercase();
    f.begin_line()?;
    write!(f, "{}:{name}", KW_BEGIN.to_ascii_uppercase())?;
    body(f)?;
    f.begin_line()?;
    write!(f, "{}:{name}", KW_END.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use crate::formatter::{FormatOptions, format};
    use crate::typed::{Component, Property};

    #[test]
    fn writes_nested_blocks() {
        let mut alarm = Component::new("valarm");
        alarm.push_property(Property::text("action", "DISPLAY"));
        let mut event = Component::new("vevent");
        event.push_property(Property::text("uid", "1"));
        event.push_child(alarm);
        let mut calendar = Component::new("vcalendar");
        calendar.push_child(event);

        let out = format(&calendar, FormatOptions::default()).unwrap();
        assert_eq!(
            out,
            "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:1\r\nBEGIN:VALARM\r\nACTION:DISPLAY\r\nEND:VALARM\r\nEND:VEVENT\r\nEND:VCALENDAR"
        );
    }
}
