// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value formatting, RFC 5545 Section 3.3.

use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::value::{Value, ValueType, escape_text};

/// Format one value. Text is escaped only when the property is typed as
/// text, values passed through for other types are written as they are.
pub fn write_value<W: Write>(
    f: &mut Formatter<W>,
    value: &Value,
    property_type: ValueType,
) -> io::Result<()> {
    match value {
        Value::Text(text) if property_type == ValueType::Text => {
            write!(f, "{}", escape_text(text))
        }
        value => write!(f, "{value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::FormatOptions;

    fn value(value: &Value, property_type: ValueType) -> String {
        let mut buffer = Vec::new();
        let mut formatter = Formatter::new(&mut buffer, FormatOptions::default());
        write_value(&mut formatter, value, property_type).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn escapes_text() {
        let text = Value::Text("a,b;c\\d\ne".to_string());
        assert_eq!(value(&text, ValueType::Text), r"a\,b\;c\\d\ne");
    }

    #[test]
    fn keeps_passthrough_raw() {
        let text = Value::Text("next; monday".to_string());
        assert_eq!(value(&text, ValueType::DateTime), "next; monday");
        let address = Value::CalAddress("mailto:a,b@c.d".to_string());
        assert_eq!(value(&address, ValueType::CalAddress), "mailto:a,b@c.d");
    }
}
