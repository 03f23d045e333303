// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Period of time value as defined in RFC 5545 Section 3.3.9.

use std::fmt::{self, Display};
use std::str::FromStr;

use chumsky::prelude::*;

use crate::value::ValueType;
use crate::value::datetime::{ValueDateTime, value_date_time};
use crate::value::duration::{ValueDuration, value_duration};
use crate::value::miscellaneous::{Extra, ValueParseError, run};

/// Period of Time Value defined in RFC 5545 Section 3.3.9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValuePeriod {
    /// Start and end date-time
    Explicit {
        /// Start of the period
        start: ValueDateTime,
        /// End of the period
        end: ValueDateTime,
    },

    /// Start date-time and duration
    Duration {
        /// Start of the period
        start: ValueDateTime,
        /// Length of the period
        duration: ValueDuration,
    },
}

impl ValuePeriod {
    /// Start of the period.
    #[must_use]
    pub const fn start(&self) -> ValueDateTime {
        match self {
            Self::Explicit { start, .. } | Self::Duration { start, .. } => *start,
        }
    }

    /// End of the period, computing it for the start plus duration form.
    ///
    /// ## Errors
    /// If the end falls out of jiff's supported range.
    #[cfg(feature = "jiff")]
    pub fn end(&self) -> Result<ValueDateTime, jiff::Error> {
        match self {
            Self::Explicit { end, .. } => Ok(*end),
            Self::Duration { start, duration } => {
                let end = start
                    .civil_date_time()?
                    .checked_add(duration.signed_duration())?;
                Ok(ValueDateTime::from_civil(end, start.is_utc()))
            }
        }
    }
}

impl Display for ValuePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit { start, end } => write!(f, "{start}/{end}"),
            Self::Duration { start, duration } => write!(f, "{start}/{duration}"),
        }
    }
}

impl FromStr for ValuePeriod {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run(value_period(), ValueType::Period, s)
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// period     = period-explicit / period-start
///
/// period-explicit = date-time "/" date-time
/// ; [ISO.8601.2004] complete representation basic format for a
/// ; period of time consisting of a start and end.  The start MUST
/// ; be before the end.
///
/// period-start = date-time "/" dur-value
/// ; [ISO.8601.2004] complete representation basic format for a
/// ; period of time consisting of a start and positive duration
/// ; of time.
/// ```
pub(crate) fn value_period<'src>()
-> impl Parser<'src, &'src str, ValuePeriod, Extra<'src>> + Clone {
    let explicit = value_date_time()
        .then_ignore(just('/'))
        .then(value_date_time())
        .try_map(|(start, end), span| {
            if start.is_utc() == end.is_utc() {
                Ok(ValuePeriod::Explicit { start, end })
            } else {
                Err(Rich::custom(
                    span,
                    "period date-times must have consistent timezone",
                ))
            }
        });

    let with_duration = value_date_time()
        .then_ignore(just('/'))
        .then(value_duration())
        .map(|(start, duration)| ValuePeriod::Duration { start, duration });

    choice((explicit, with_duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_explicit_periods() {
        let period: ValuePeriod = "20090613T220000Z/20090613T230000Z".parse().unwrap();
        assert_eq!(period.start().to_string(), "20090613T220000Z");
        assert!(matches!(period, ValuePeriod::Explicit { end, .. } if end.to_string() == "20090613T230000Z"));
        assert_eq!(period.to_string(), "20090613T220000Z/20090613T230000Z");
    }

    #[test]
    fn parses_duration_periods() {
        let period: ValuePeriod = "19970308T160000Z/PT8H30M".parse().unwrap();
        assert!(matches!(period, ValuePeriod::Duration { duration, .. } if duration.to_string() == "PT8H30M"));
        assert_eq!(period.to_string(), "19970308T160000Z/PT8H30M");
    }

    #[test]
    fn rejects_mixed_timezones() {
        assert!("20090613T220000Z/20090613T230000".parse::<ValuePeriod>().is_err());
        assert!("20090613T220000Z".parse::<ValuePeriod>().is_err());
    }

    #[cfg(feature = "jiff")]
    #[test]
    fn computes_end_of_duration_period() {
        let period: ValuePeriod = "19970308T160000Z/PT8H30M".parse().unwrap();
        assert_eq!(period.end().unwrap().to_string(), "19970309T003000Z");
    }
}
