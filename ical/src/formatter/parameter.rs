// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parameter formatting, RFC 5545 Section 3.2.

use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::parameter::{Parameter, Parameters};

/// Format all parameters, each prefixed with a semicolon.
pub fn write_parameters<W: Write>(f: &mut Formatter<W>, parameters: &Parameters) -> io::Result<()> {
    for param in parameters {
        write_parameter(f, param)?;
    }
    Ok(())
}

fn write_parameter<W: Write>(f: &mut Formatter<W>, param: &Parameter) -> io::Result<()> {
    write!(f, ";{}=", param.name.to_ascii_uppercase())?;
    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write_param_value(f, value)?;
    }
    Ok(())
}

/// ```txt
/// param-value   = paramtext / quoted-string
/// paramtext     = *SAFE-CHAR
/// quoted-string = DQUOTE *QSAFE-CHAR DQUOTE
/// ```
///
/// DQUOTE cannot appear in a parameter value and is dropped. Backslashes and
/// line breaks are escaped as in TEXT values.
fn write_param_value<W: Write>(f: &mut Formatter<W>, value: &str) -> io::Result<()> {
    let value = escape_param_value(value);
    if needs_quotes(&value) {
        write!(f, "\"{value}\"")
    } else {
        write!(f, "{value}")
    }
}

fn escape_param_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {}
            '\\' => out.push_str(r"\\"),
            '\n' => out.push_str(r"\n"),
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push_str(r"\n");
            }
            c => out.push(c),
        }
    }
    out
}

fn needs_quotes(value: &str) -> bool {
    value.contains([':', ';', ','])
}
