// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared parser building blocks for property values.

use chumsky::prelude::*;

use crate::value::ValueType;

pub(crate) type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Error returned when a raw string is not a valid value of the expected type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {expected} value: {reason}")]
pub struct ValueParseError {
    /// The value type that was expected
    pub expected: ValueType,
    /// Human readable reason
    pub reason: String,
}

/// Run a parser over the whole input.
pub(crate) fn run<'src, T>(
    parser: impl Parser<'src, &'src str, T, Extra<'src>>,
    expected: ValueType,
    src: &'src str,
) -> Result<T, ValueParseError> {
    parser
        .then_ignore(end())
        .parse(src)
        .into_result()
        .map_err(|errs| ValueParseError {
            expected,
            reason: errs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        })
}

/// Exactly `count` ASCII digits as an unsigned number.
pub(crate) fn digits<'src>(count: usize) -> impl Parser<'src, &'src str, u32, Extra<'src>> + Clone {
    select! { c @ '0'..='9' => c }
        .repeated()
        .exactly(count)
        .to_slice()
        .try_map(parse_u32)
}

/// One to ten ASCII digits as an unsigned number.
pub(crate) fn uint<'src>() -> impl Parser<'src, &'src str, u32, Extra<'src>> + Clone {
    select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(10) // u32 max is 10 digits: 4_294_967_295
        .to_slice()
        .try_map(parse_u32)
}

/// Optionally signed integer, `+` or `-`.
pub(crate) fn int<'src>() -> impl Parser<'src, &'src str, i32, Extra<'src>> + Clone {
    select! { c @ ('+' | '-') => c }
        .or_not()
        .then(select! { c @ '0'..='9' => c }.repeated().at_least(1).at_most(10))
        .to_slice()
        .try_map(|s: &str, span| {
            lexical::parse::<i32, _>(s).map_err(|e| Rich::custom(span, format!("{e:?}")))
        })
}

fn parse_u32<'src>(s: &'src str, span: SimpleSpan) -> Result<u32, Rich<'src, char>> {
    lexical::parse::<u32, _>(s).map_err(|e| Rich::custom(span, format!("{e:?}")))
}
