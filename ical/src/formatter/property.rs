// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting, RFC 5545 Section 3.8.

use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::formatter::parameter::write_parameters;
use crate::formatter::value::write_value;
use crate::typed::Property;
use crate::value::Value;

/// Format a property as one content line.
///
/// Several values of a property that is not a list are written as repeated
/// content lines.
pub fn write_property<W: Write>(f: &mut Formatter<W>, property: &Property) -> io::Result<()> {
    match property.separator() {
        None if property.values.len() > 1 => {
            for value in &property.values {
                write_content_line(f, property, std::slice::from_ref(value), None)?;
            }
            Ok(())
        }
        separator => write_content_line(f, property, &property.values, separator),
    }
}

fn write_content_line<W: Write>(
    f: &mut Formatter<W>,
    property: &Property,
    values: &[Value],
    separator: Option<char>,
) -> io::Result<()> {
    f.begin_line()?;
    write!(f, "{}", property.name.to_ascii_uppercase())?;
    write_parameters(f, &property.parameters)?;
    write!(f, ":")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0
            && let Some(separator) = separator
        {
            write!(f, "{separator}")?;
        }
        write_value(f, value, property.value_type)?;
    }
    Ok(())
}
