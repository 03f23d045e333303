// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Duration value type parser as defined in RFC 5545 Section 3.3.6.

use std::fmt::{self, Display};
use std::str::FromStr;

use chumsky::prelude::*;

use crate::value::ValueType;
use crate::value::miscellaneous::{Extra, ValueParseError, run, uint};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Duration Value defined in RFC 5545 Section 3.3.6
///
/// Weeks and days may be combined, which RFC 5545 does not allow but
/// real-world producers emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValueDuration {
    /// Whether the duration is negative
    pub negative: bool,
    /// Weeks
    pub weeks: u32,
    /// Days
    pub days: u32,
    /// Hours
    pub hours: u32,
    /// Minutes
    pub minutes: u32,
    /// Seconds
    pub seconds: u32,
}

impl ValueDuration {
    /// Build a duration from a signed number of seconds.
    ///
    /// A whole number of weeks is expressed in weeks, anything else in days
    /// and a time part.
    #[must_use]
    pub fn from_seconds(total: i64) -> Self {
        let negative = total < 0;
        let magnitude = total.unsigned_abs();
        let part = |value: u64| u32::try_from(value).unwrap_or(u32::MAX);

        let (week, day, hour, minute) = (
            SECONDS_PER_WEEK.unsigned_abs(),
            SECONDS_PER_DAY.unsigned_abs(),
            SECONDS_PER_HOUR.unsigned_abs(),
            SECONDS_PER_MINUTE.unsigned_abs(),
        );

        if magnitude != 0 && magnitude % week == 0 {
            return Self {
                negative,
                weeks: part(magnitude / week),
                ..Self::default()
            };
        }

        Self {
            negative,
            weeks: 0,
            days: part(magnitude / day),
            hours: part(magnitude % day / hour),
            minutes: part(magnitude % hour / minute),
            seconds: part(magnitude % minute),
        }
    }

    /// Total signed length in seconds.
    #[must_use]
    pub fn as_seconds(&self) -> i64 {
        let total = i64::from(self.weeks) * SECONDS_PER_WEEK
            + i64::from(self.days) * SECONDS_PER_DAY
            + i64::from(self.hours) * SECONDS_PER_HOUR
            + i64::from(self.minutes) * SECONDS_PER_MINUTE
            + i64::from(self.seconds);
        if self.negative { -total } else { total }
    }

    /// Whether the duration has no time part, only weeks and days.
    #[must_use]
    pub const fn is_whole_days(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Convert to `jiff::SignedDuration`.
    #[cfg(feature = "jiff")]
    #[must_use]
    pub fn signed_duration(&self) -> jiff::SignedDuration {
        jiff::SignedDuration::from_secs(self.as_seconds())
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::SignedDuration> for ValueDuration {
    fn from(duration: jiff::SignedDuration) -> Self {
        Self::from_seconds(duration.as_secs())
    }
}

impl Display for ValueDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;

        if self.weeks == 0 && self.days == 0 && self.is_whole_days() {
            return write!(f, "T0S");
        }

        if self.weeks > 0 {
            write!(f, "{}W", self.weeks)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if !self.is_whole_days() {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}

impl FromStr for ValueDuration {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run(value_duration(), ValueType::Duration, s)
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// dur-value  = (["+"] / "-") "P" (dur-date / dur-time / dur-week)
///
/// dur-date   = dur-day [dur-time]
/// dur-time   = "T" (dur-hour / dur-minute / dur-second)
/// dur-week   = 1*DIGIT "W"
/// dur-hour   = 1*DIGIT "H" [dur-minute]
/// dur-minute = 1*DIGIT "M" [dur-second]
/// dur-second = 1*DIGIT "S"
/// dur-day    = 1*DIGIT "D"
/// ```
pub(crate) fn value_duration<'src>()
-> impl Parser<'src, &'src str, ValueDuration, Extra<'src>> + Clone {
    // case-sensitive
    let unit = |c: char| uint().then_ignore(just(c)).or_not();

    let time = just('T')
        .ignore_then(unit('H').then(unit('M')).then(unit('S')))
        .try_map(|((hours, minutes), seconds), span| {
            if hours.is_none() && minutes.is_none() && seconds.is_none() {
                Err(Rich::custom(span, "empty time part in duration"))
            } else {
                Ok((hours, minutes, seconds))
            }
        });

    let sign = select! { c @ ('+' | '-') => c }
        .or_not()
        .map(|sign| matches!(sign, Some('-')));

    sign.then_ignore(just('P'))
        .then(unit('W'))
        .then(unit('D'))
        .then(time.or_not())
        .try_map(|(((negative, weeks), days), time), span| {
            if weeks.is_none() && days.is_none() && time.is_none() {
                return Err(Rich::custom(span, "empty duration"));
            }
            let (hours, minutes, seconds) = time.unwrap_or_default();
            Ok(ValueDuration {
                negative,
                weeks: weeks.unwrap_or(0),
                days: days.unwrap_or(0),
                hours: hours.unwrap_or(0),
                minutes: minutes.unwrap_or(0),
                seconds: seconds.unwrap_or(0),
            })
        })
}
