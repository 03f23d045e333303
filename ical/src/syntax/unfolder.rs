// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reverse RFC 5545 line folding.
//!
//! A physical line starting with a single space or horizontal tab continues
//! the previous logical line: the whitespace is dropped and the rest is
//! appended with no separator. `CR` is optional on input.

use crate::keyword::{KW_BEGIN, KW_VCALENDAR};
use crate::syntax::SyntaxError;

/// One logical content line after unfolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Unfolded text, without line terminator
    pub text: String,
    /// 1-based physical line where this logical line starts
    pub line: usize,
}

/// Unfold iCalendar source into logical lines, order preserved.
///
/// Blank physical lines are skipped and a leading byte-order mark is ignored.
///
/// ## Errors
///
/// - [`SyntaxError::OrphanContinuation`] if the text starts with a continuation line
/// - [`SyntaxError::UnterminatedFold`] if the text ends with an empty continuation
/// - [`SyntaxError::MissingCalendar`] if there is no `BEGIN:VCALENDAR`
pub fn unfold(src: &str) -> Result<Vec<LogicalLine>, SyntaxError> {
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);

    let mut lines: Vec<LogicalLine> = Vec::new();
    let mut physical = src.split('\n').enumerate();
    while let Some((index, raw)) = physical.next() {
        let line = index + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);

        let mut chars = raw.chars();
        match chars.next() {
            None => {}
            Some(' ' | '\t') => {
                let rest = chars.as_str();
                let only_blank_left = || {
                    physical
                        .clone()
                        .all(|(_, next)| next.strip_suffix('\r').unwrap_or(next).is_empty())
                };
                if rest.is_empty() && only_blank_left() {
                    return Err(SyntaxError::UnterminatedFold { line });
                }

                match lines.last_mut() {
                    Some(last) => last.text.push_str(rest),
                    None => return Err(SyntaxError::OrphanContinuation { line }),
                }
            }
            Some(_) => lines.push(LogicalLine {
                text: raw.to_string(),
                line,
            }),
        }
    }

    if !lines.iter().any(is_calendar_begin) {
        return Err(SyntaxError::MissingCalendar);
    }

    Ok(lines)
}

fn is_calendar_begin(line: &LogicalLine) -> bool {
    line.text
        .split_once(':')
        .is_some_and(|(name, value)| {
            name.eq_ignore_ascii_case(KW_BEGIN) && value.trim().eq_ignore_ascii_case(KW_VCALENDAR)
        })
}
