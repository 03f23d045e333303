// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) formatter module.
//!
//! This module provides functionality to format typed components to the
//! RFC 5545 text format, writing to any `std::io::Write` implementer.
//!
//! # Example
//!
//! ```
//! use davparser_ical::{FormatOptions, format, parse};
//!
//! let input = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nuid:1\r\nsummary:Team sync\\, weekly\r\n\
//!     END:VEVENT\r\nEND:VCALENDAR";
//! let calendar = parse(input)?;
//! let ics = format(&calendar, FormatOptions::default())?;
//! assert_eq!(
//!     ics,
//!     "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:1\r\nSUMMARY:Team sync\\, weekly\r\n\
//!      END:VEVENT\r\nEND:VCALENDAR"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod component;
mod parameter;
mod property;
mod value;

use std::io::{self, Write};

use crate::formatter::component::write_component;
use crate::typed::Component;

/// Format a component tree to a `String`.
///
/// Lines are separated by CRLF and the output has no trailing line break.
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails or if the output
/// contains invalid UTF-8 data.
pub fn format(component: &Component, options: FormatOptions) -> io::Result<String> {
    let mut buffer = Vec::new();
    let mut formatter = Formatter::new(&mut buffer, options);
    formatter.write(component)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub const fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }
}

/// iCalendar formatter that writes to any `Write` implementer.
///
/// Bytes written through its `Write` implementation are folded; line breaks
/// between content lines are inserted by [`Formatter::begin_line`].
#[derive(Debug)]
pub struct Formatter<W: Write> {
    writer: W,
    options: FormatOptions,
    /// Current line length in octets
    line_length: usize,
    /// Whether any content line was started
    started: bool,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub const fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_length: 0,
            started: false,
        }
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a component and everything below it.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&mut self, component: &Component) -> io::Result<()> {
        write_component(self, component)
    }

    /// Start a new content line, separating it from the previous one.
    pub(crate) fn begin_line(&mut self) -> io::Result<()> {
        if self.started {
            self.writer.write_all(b"\r\n")?;
        }
        self.started = true;
        self.line_length = 0;
        Ok(())
    }

    /// Insert line folding: CRLF + whitespace.
    ///
    /// The whitespace after CRLF counts as 1 octet of the new line.
    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer
            .write_all(self.options.folding_style.as_bytes())?;
        self.line_length = 1;
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(max_len) = self.options.folding else {
            // Folding disabled, write directly
            return self.writer.write(buf);
        };

        let mut remaining = buf;
        while !remaining.is_empty() {
            if self.line_length >= max_len {
                self.insert_fold()?;
            }

            let available = max_len.saturating_sub(self.line_length);
            let mut len = find_safe_write_length(remaining, available);
            if len == 0 {
                if self.line_length > 1 {
                    // The next character does not fit, move it to a new line
                    self.insert_fold()?;
                    continue;
                }
                // A width smaller than one character, write it anyway
                len = char_len(remaining);
            }

            let (head, tail) = remaining.split_at(len.min(remaining.len()));
            self.writer.write_all(head)?;
            self.line_length += head.len();
            remaining = tail;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Find the maximum number of bytes we can write without breaking a UTF-8 sequence.
///
/// UTF-8 encoding:
/// - 0xxxxxxx: 1 byte (ASCII)
/// - 110xxxxx: 2 bytes (starts with 0b110xxxxx)
/// - 1110xxxx: 3 bytes (starts with 0b1110xxxx)
/// - 11110xxx: 4 bytes (starts with 0b11110xxx)
/// - 10xxxxxx: continuation byte (not a start byte)
fn find_safe_write_length(buf: &[u8], max_bytes: usize) -> usize {
    if max_bytes >= buf.len() {
        return buf.len();
    }

    let mut pos = max_bytes;
    while pos > 0 && buf.get(pos).is_some_and(|b| is_continuation(*b)) {
        pos -= 1;
    }
    pos
}

/// Length of the UTF-8 sequence at the start of `buf`.
fn char_len(buf: &[u8]) -> usize {
    1 + buf
        .iter()
        .skip(1)
        .take_while(|b| is_continuation(**b))
        .count()
}

const fn is_continuation(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}
