// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Boolean, float and integer values as defined in RFC 5545 Sections 3.3.2, 3.3.7 and 3.3.8.

use chumsky::prelude::*;

use crate::value::miscellaneous::{Extra, int};

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// boolean    = "TRUE" / "FALSE"
/// ```
pub(crate) fn value_boolean<'src>() -> impl Parser<'src, &'src str, bool, Extra<'src>> + Clone {
    any()
        .repeated()
        .at_least(1)
        .to_slice()
        .try_map(|s: &str, span| {
            if s.eq_ignore_ascii_case("TRUE") {
                Ok(true)
            } else if s.eq_ignore_ascii_case("FALSE") {
                Ok(false)
            } else {
                Err(Rich::custom(span, "expected TRUE or FALSE"))
            }
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// float      = (["+"] / "-") 1*DIGIT ["." 1*DIGIT]
/// ```
pub(crate) fn value_float<'src>() -> impl Parser<'src, &'src str, f64, Extra<'src>> + Clone {
    let digits = select! { c @ '0'..='9' => c }.repeated().at_least(1);
    select! { c @ ('+' | '-') => c }
        .or_not()
        .then(digits.clone())
        .then(just('.').then(digits).or_not())
        .to_slice()
        .try_map(|s: &str, span| {
            lexical::parse::<f64, _>(s).map_err(|e| Rich::custom(span, format!("{e:?}")))
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// integer    = (["+"] / "-") 1*DIGIT
/// ```
pub(crate) fn value_integer<'src>() -> impl Parser<'src, &'src str, i32, Extra<'src>> + Clone {
    int()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueType;
    use crate::value::miscellaneous::run;

    #[test]
    fn parses_booleans() {
        assert_eq!(run(value_boolean(), ValueType::Boolean, "TRUE"), Ok(true));
        assert_eq!(run(value_boolean(), ValueType::Boolean, "false"), Ok(false));
        assert!(run(value_boolean(), ValueType::Boolean, "yes").is_err());
    }

    #[test]
    fn parses_floats() {
        assert_eq!(run(value_float(), ValueType::Float, "37.386013"), Ok(37.386_013));
        assert_eq!(run(value_float(), ValueType::Float, "-122"), Ok(-122.0));
        assert!(run(value_float(), ValueType::Float, "1.").is_err());
        assert!(run(value_float(), ValueType::Float, "1e5").is_err());
    }

    #[test]
    fn parses_integers() {
        assert_eq!(run(value_integer(), ValueType::Integer, "-3"), Ok(-3));
        assert!(run(value_integer(), ValueType::Integer, "3.0").is_err());
    }
}
