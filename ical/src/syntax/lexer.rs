// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lexer for a single unfolded iCalendar content line.

use std::fmt::{self, Display};
use std::ops::Range;

use logos::Logos;

/// Tokenize one logical line into tokens with their byte ranges.
pub fn tokenize(line: &str) -> impl Iterator<Item = SpannedToken<'_>> {
    Token::lexer(line).spanned().map(|(tok, span)| match tok {
        Ok(tok) => SpannedToken(tok, span),
        Err(()) => SpannedToken(Token::Error, span),
    })
}

/// Token emitted by the content line lexer
#[derive(Debug, PartialEq, Eq, Clone, Copy, Logos)]
pub enum Token<'a> {
    /// Double Quote ("), decimal codepoint 22
    #[token(r#"""#)]
    DQuote,

    /// Comma (,), decimal codepoint 44
    #[token(",")]
    Comma,

    /// Colon (:), decimal codepoint 58
    #[token(":")]
    Colon,

    /// Semicolon (;), decimal codepoint 59
    #[token(";")]
    Semicolon,

    /// Equal sign (=), decimal codepoint 61
    #[token("=")]
    Equal,

    /// Backslash escape, the backslash and the escaped character
    #[regex(r"\\.?")]
    Escape(&'a str),

    /// Any run of other characters
    #[regex(r#"[^",:;=\\]+"#)]
    Text(&'a str),

    /// Error token for lexing errors
    Error,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DQuote => write!(f, "\""),
            Self::Comma => write!(f, ","),
            Self::Colon => write!(f, ":"),
            Self::Semicolon => write!(f, ";"),
            Self::Equal => write!(f, "="),
            Self::Escape(s) | Self::Text(s) => write!(f, "{s}"),
            Self::Error => write!(f, "<error>"),
        }
    }
}

/// A token with its byte range in the line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken<'src>(pub Token<'src>, pub Range<usize>);
