// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::syntax::{SyntaxError, syntax_analysis};
use crate::typed::{Component, DecodeOptions, ValueError, typed_analysis};

/// Parse an iCalendar document into its root `vcalendar` component
///
/// Undecodable values of non-structural properties are kept as text.
///
/// ## Errors
///
/// If the text is structurally malformed, or a structural property such
/// as DTSTART has an undecodable value.
///
/// ## Examples
///
/// Parsing valid iCalendar source will return the root component
///
/// ```
/// # use davparser_ical::parse;
/// let ical_src = "\
/// BEGIN:VCALENDAR\r\n\
/// BEGIN:VEVENT\r\n\
/// SUMMARY:Test Event\r\n\
/// END:VEVENT\r\n\
/// END:VCALENDAR\r\n\
/// ";
/// let calendar = parse(ical_src).unwrap();
/// assert_eq!(calendar.children.len(), 1);
/// ```
///
/// Parsing invalid iCalendar source will return an error
///
/// ```
/// # use davparser_ical::{ParseError, parse};
/// # use davparser_ical::syntax::SyntaxError;
/// let invalid_ical_src = "\
/// BEGIN:VCALENDAR\r\n\
/// BEGIN:VEVENT\r\n\
/// END:VCALENDAR\r\n\
/// END:VEVENT\r\n\
/// ";
/// let err = parse(invalid_ical_src).unwrap_err();
/// assert!(matches!(err, ParseError::Syntax(SyntaxError::MismatchedNesting { line: 3, .. })));
/// ```
pub fn parse(src: &str) -> Result<Component, ParseError> {
    parse_with_options(src, &DecodeOptions::default())
}

/// Parse an iCalendar document with explicit decode options.
///
/// ## Errors
///
/// See [`parse`]. With `strict` set, any undecodable value is an error.
#[tracing::instrument(skip_all, fields(len = src.len(), strict = options.strict))]
pub fn parse_with_options(src: &str, options: &DecodeOptions) -> Result<Component, ParseError> {
    let raw = syntax_analysis(src)?;
    let calendar = typed_analysis(raw, options)?;
    tracing::debug!(components = calendar.children.len(), "parsed calendar");
    Ok(calendar)
}

/// Errors that can occur while parsing an iCalendar document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Structural error: folding, content line or nesting
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A property value that could not be decoded
    #[error(transparent)]
    Value(#[from] ValueError),
}
