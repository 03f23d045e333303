// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scanner for iCalendar content lines.
//!
//! Per RFC 5545, a content line has the format:
//! ```text
//! contentline = name *(";" param) ":" value CRLF
//! param       = param-name "=" param-value *("," param-value)
//! param-value = paramtext / quoted-string
//! ```

use std::iter::Peekable;

use crate::parameter::Parameters;
use crate::syntax::lexer::{SpannedToken, Token, tokenize};
use crate::syntax::unfolder::LogicalLine;
use crate::syntax::{ContentLineError, SyntaxError};
use crate::value::unescape_text;

/// A scanned iCalendar content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name, lowercase
    pub name: String,
    /// Property parameters, unquoted and unescaped
    pub parameters: Parameters,
    /// Raw property value after the first unquoted colon, escapes intact
    pub value: String,
    /// 1-based physical line number
    pub line: usize,
}

/// Split a logical line into name, parameters and raw value.
///
/// ## Errors
///
/// Returns [`SyntaxError::ContentLine`] if the line is not a well-formed content line,
/// notably when no unquoted `:` separates the value.
pub fn scan_line(line: &LogicalLine) -> Result<ContentLine, SyntaxError> {
    let text = line.text.as_str();
    scan(text, line.line).map_err(|kind| SyntaxError::ContentLine {
        line: line.line,
        kind,
    })
}

fn scan(text: &str, line: usize) -> Result<ContentLine, ContentLineError> {
    let mut tokens = tokenize(text).peekable();

    let name = match tokens.next() {
        Some(SpannedToken(Token::Text(name), _)) => checked_name(name)?,
        _ => return Err(ContentLineError::EmptyName),
    };

    let mut parameters = Parameters::new();
    loop {
        match tokens.next() {
            Some(SpannedToken(Token::Semicolon, _)) => {
                let (param_name, values) = scan_parameter(text, &mut tokens)?;
                parameters.insert(&param_name, values);
            }
            Some(SpannedToken(Token::Colon, span)) => {
                let value = text.get(span.end..).unwrap_or_default().to_string();
                return Ok(ContentLine {
                    name,
                    parameters,
                    value,
                    line,
                });
            }
            Some(SpannedToken(tok, _)) => {
                return Err(match tok {
                    Token::Text(_) | Token::Escape(_) | Token::Error => {
                        ContentLineError::InvalidName(format!("{name}{tok}"))
                    }
                    _ => ContentLineError::MissingColon,
                });
            }
            None => return Err(ContentLineError::MissingColon),
        }
    }
}

fn scan_parameter<'src, I>(
    text: &'src str,
    tokens: &mut Peekable<I>,
) -> Result<(String, Vec<String>), ContentLineError>
where
    I: Iterator<Item = SpannedToken<'src>>,
{
    let name = match tokens.next() {
        Some(SpannedToken(Token::Text(name), _)) => checked_name(name)?,
        Some(SpannedToken(tok, _)) => return Err(ContentLineError::InvalidName(tok.to_string())),
        None => return Err(ContentLineError::MissingColon),
    };

    match tokens.next() {
        Some(SpannedToken(Token::Equal, _)) => {}
        _ => return Err(ContentLineError::MissingEqual(name)),
    }

    let mut values = Vec::new();
    loop {
        values.push(scan_parameter_value(text, &name, tokens)?);
        match tokens.peek() {
            Some(SpannedToken(Token::Comma, _)) => {
                tokens.next();
            }
            _ => return Ok((name, values)),
        }
    }
}

fn scan_parameter_value<'src, I>(
    text: &'src str,
    name: &str,
    tokens: &mut Peekable<I>,
) -> Result<String, ContentLineError>
where
    I: Iterator<Item = SpannedToken<'src>>,
{
    if let Some(SpannedToken(Token::DQuote, open)) = tokens.peek() {
        let start = open.end;
        tokens.next();
        for SpannedToken(tok, span) in tokens.by_ref() {
            if tok == Token::DQuote {
                let raw = text.get(start..span.start).unwrap_or_default();
                return Ok(unescape_text(raw));
            }
        }
        return Err(ContentLineError::UnterminatedQuote);
    }

    let mut range: Option<(usize, usize)> = None;
    while let Some(SpannedToken(tok, span)) = tokens.peek() {
        match tok {
            Token::Text(_) | Token::Escape(_) | Token::Equal => {
                let start = range.map_or(span.start, |(start, _)| start);
                range = Some((start, span.end));
                tokens.next();
            }
            Token::Comma | Token::Semicolon | Token::Colon => break,
            Token::DQuote | Token::Error => {
                return Err(ContentLineError::UnexpectedToken {
                    name: name.to_string(),
                    found: tok.to_string(),
                });
            }
        }
    }

    let raw = range
        .and_then(|(start, end)| text.get(start..end))
        .unwrap_or_default();
    Ok(unescape_text(raw))
}

fn checked_name(name: &str) -> Result<String, ContentLineError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(name.to_ascii_lowercase())
    } else {
        Err(ContentLineError::InvalidName(name.to_string()))
    }
}
