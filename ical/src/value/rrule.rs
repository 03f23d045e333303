// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule value as defined in RFC 5545 Section 3.3.10.
//!
//! Only the rule data is modeled, occurrences are never expanded.

use std::fmt::{self, Display};
use std::ops::RangeInclusive;
use std::str::FromStr;

use chumsky::prelude::*;

use crate::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_BYHOUR, KW_RRULE_BYMINUTE, KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY,
    KW_RRULE_BYSECOND, KW_RRULE_BYSETPOS, KW_RRULE_BYWEEKNO, KW_RRULE_BYYEARDAY, KW_RRULE_COUNT,
    KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_UNTIL, KW_RRULE_WKST,
};
use crate::value::ValueType;
use crate::value::datetime::{DateOrDateTime, value_date_or_date_time};
use crate::value::miscellaneous::{Extra, ValueParseError, int, run, uint};

/// Rule parts in the order they are written when the source order is unknown.
const CANONICAL_ORDER: [&str; 13] = [
    KW_RRULE_UNTIL,
    KW_RRULE_COUNT,
    KW_RRULE_INTERVAL,
    KW_RRULE_BYSECOND,
    KW_RRULE_BYMINUTE,
    KW_RRULE_BYHOUR,
    KW_RRULE_BYDAY,
    KW_RRULE_BYMONTHDAY,
    KW_RRULE_BYYEARDAY,
    KW_RRULE_BYWEEKNO,
    KW_RRULE_BYMONTH,
    KW_RRULE_BYSETPOS,
    KW_RRULE_WKST,
];

/// Recurrence frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum RecurrenceFrequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum WeekDay {
    #[strum(serialize = "SU")]
    Sunday,
    #[strum(serialize = "MO")]
    Monday,
    #[strum(serialize = "TU")]
    Tuesday,
    #[strum(serialize = "WE")]
    Wednesday,
    #[strum(serialize = "TH")]
    Thursday,
    #[strum(serialize = "FR")]
    Friday,
    #[strum(serialize = "SA")]
    Saturday,
}

/// A weekday with an optional signed ordinal, e.g. `-1FR` for the last Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekDayNum {
    /// Ordinal within the month or year, negative counts from the end
    pub occurrence: Option<i8>,
    /// The weekday
    pub day: WeekDay,
}

impl From<WeekDay> for WeekDayNum {
    fn from(day: WeekDay) -> Self {
        Self {
            occurrence: None,
            day,
        }
    }
}

impl Display for WeekDayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(occurrence) = self.occurrence {
            write!(f, "{occurrence}")?;
        }
        write!(f, "{}", self.day)
    }
}

impl FromStr for WeekDayNum {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run(weekday_num(), ValueType::Recur, s)
    }
}

/// Recurrence Rule Value defined in RFC 5545 Section 3.3.10
///
/// The order in which rule parts were parsed is remembered, so that the
/// rule is written back with FREQ first and the other parts in their
/// original order. Equality ignores that order.
#[derive(Debug, Clone)]
pub struct ValueRecurrenceRule {
    /// FREQ, required
    pub freq: RecurrenceFrequency,
    /// UNTIL, a date or date-time
    pub until: Option<DateOrDateTime>,
    /// COUNT
    pub count: Option<u32>,
    /// INTERVAL, at least 1
    pub interval: Option<u32>,
    /// BYSECOND, 0-60
    pub by_second: Vec<u8>,
    /// BYMINUTE, 0-59
    pub by_minute: Vec<u8>,
    /// BYHOUR, 0-23
    pub by_hour: Vec<u8>,
    /// BYDAY
    pub by_day: Vec<WeekDayNum>,
    /// BYMONTHDAY, 1-31 or -31 to -1
    pub by_month_day: Vec<i8>,
    /// BYYEARDAY, 1-366 or -366 to -1
    pub by_year_day: Vec<i16>,
    /// BYWEEKNO, 1-53 or -53 to -1
    pub by_week_no: Vec<i8>,
    /// BYMONTH, 1-12
    pub by_month: Vec<u8>,
    /// BYSETPOS, 1-366 or -366 to -1
    pub by_set_pos: Vec<i16>,
    /// WKST
    pub week_start: Option<WeekDay>,
    /// `X-` rule parts, name upper-cased and raw value
    pub extensions: Vec<(String, String)>,
    order: Vec<String>,
}

impl ValueRecurrenceRule {
    /// Create a rule with only a frequency.
    #[must_use]
    pub const fn new(freq: RecurrenceFrequency) -> Self {
        Self {
            freq,
            until: None,
            count: None,
            interval: None,
            by_second: Vec::new(),
            by_minute: Vec::new(),
            by_hour: Vec::new(),
            by_day: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_month: Vec::new(),
            by_set_pos: Vec::new(),
            week_start: None,
            extensions: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Rule parts as upper-case `(name, value)` pairs in output order,
    /// absent parts omitted and list parts comma-joined.
    #[must_use]
    pub fn parts(&self) -> Vec<(String, String)> {
        let mut keys: Vec<&str> = Vec::new();
        let candidates = self
            .order
            .iter()
            .map(String::as_str)
            .chain(CANONICAL_ORDER)
            .chain(self.extensions.iter().map(|(k, _)| k.as_str()));
        for key in candidates {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        let mut parts = vec![(KW_RRULE_FREQ.to_string(), self.freq.to_string())];
        for key in keys {
            if let Some(value) = self.part_value(key) {
                parts.push((key.to_string(), value));
            }
        }
        parts
    }

    fn part_value(&self, key: &str) -> Option<String> {
        match key {
            KW_RRULE_UNTIL => self.until.map(|v| v.to_string()),
            KW_RRULE_COUNT => self.count.map(|v| v.to_string()),
            KW_RRULE_INTERVAL => self.interval.map(|v| v.to_string()),
            KW_RRULE_BYSECOND => join(&self.by_second),
            KW_RRULE_BYMINUTE => join(&self.by_minute),
            KW_RRULE_BYHOUR => join(&self.by_hour),
            KW_RRULE_BYDAY => join(&self.by_day),
            KW_RRULE_BYMONTHDAY => join(&self.by_month_day),
            KW_RRULE_BYYEARDAY => join(&self.by_year_day),
            KW_RRULE_BYWEEKNO => join(&self.by_week_no),
            KW_RRULE_BYMONTH => join(&self.by_month),
            KW_RRULE_BYSETPOS => join(&self.by_set_pos),
            KW_RRULE_WKST => self.week_start.map(|v| v.to_string()),
            _ => self
                .extensions
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone()),
        }
    }

    fn set_part(&mut self, key: &str, value: &str) -> Result<(), ValueParseError> {
        match key {
            KW_RRULE_FREQ => {
                self.freq = value
                    .parse()
                    .map_err(|_| invalid(format!("unknown frequency {value:?}")))?;
            }
            KW_RRULE_UNTIL => {
                self.until = Some(run(value_date_or_date_time(), ValueType::Recur, value)?);
            }
            KW_RRULE_COUNT => self.count = Some(run(uint(), ValueType::Recur, value)?),
            KW_RRULE_INTERVAL => {
                let interval = run(uint(), ValueType::Recur, value)?;
                if interval == 0 {
                    return Err(invalid("INTERVAL must be positive"));
                }
                self.interval = Some(interval);
            }
            KW_RRULE_BYSECOND => self.by_second = numbers(key, value, 0..=60, false)?,
            KW_RRULE_BYMINUTE => self.by_minute = numbers(key, value, 0..=59, false)?,
            KW_RRULE_BYHOUR => self.by_hour = numbers(key, value, 0..=23, false)?,
            KW_RRULE_BYDAY => {
                let list = weekday_num()
                    .separated_by(just(','))
                    .at_least(1)
                    .collect::<Vec<_>>();
                self.by_day = run(list, ValueType::Recur, value)?;
            }
            KW_RRULE_BYMONTHDAY => self.by_month_day = numbers(key, value, 1..=31, true)?,
            KW_RRULE_BYYEARDAY => self.by_year_day = numbers(key, value, 1..=366, true)?,
            KW_RRULE_BYWEEKNO => self.by_week_no = numbers(key, value, 1..=53, true)?,
            KW_RRULE_BYMONTH => self.by_month = numbers(key, value, 1..=12, false)?,
            KW_RRULE_BYSETPOS => self.by_set_pos = numbers(key, value, 1..=366, true)?,
            KW_RRULE_WKST => self.week_start = Some(run(weekday(), ValueType::Recur, value)?),
            _ if key.starts_with("X-") => {
                self.extensions.push((key.to_string(), value.to_string()));
            }
            _ => return Err(invalid(format!("unknown rule part {key}"))),
        }
        Ok(())
    }
}

impl PartialEq for ValueRecurrenceRule {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq
            && self.until == other.until
            && self.count == other.count
            && self.interval == other.interval
            && self.by_second == other.by_second
            && self.by_minute == other.by_minute
            && self.by_hour == other.by_hour
            && self.by_day == other.by_day
            && self.by_month_day == other.by_month_day
            && self.by_year_day == other.by_year_day
            && self.by_week_no == other.by_week_no
            && self.by_month == other.by_month
            && self.by_set_pos == other.by_set_pos
            && self.week_start == other.week_start
            && self.extensions == other.extensions
    }
}

impl Eq for ValueRecurrenceRule {}

impl Display for ValueRecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.parts().into_iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// recur           = recur-rule-part *( ";" recur-rule-part )
///                 ;
///                 ; The rule parts are not ordered in any
///                 ; particular sequence.
///                 ;
///                 ; The FREQ rule part is REQUIRED,
///                 ; but MUST NOT occur more than once.
///                 ;
///                 ; The UNTIL or COUNT rule parts are OPTIONAL,
///                 ; but they MUST NOT occur in the same 'recur'.
///                 ;
///                 ; The other rule parts are OPTIONAL,
///                 ; but MUST NOT occur more than once.
/// ```
///
/// Rule part names are matched case-insensitively.
impl FromStr for ValueRecurrenceRule {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rule = Self::new(RecurrenceFrequency::Daily);
        let mut has_freq = false;

        for part in s.split(';').filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| invalid(format!("rule part {part:?} has no value")))?;
            let key = key.trim().to_ascii_uppercase();

            let duplicated = if key == KW_RRULE_FREQ {
                has_freq
            } else {
                rule.order.contains(&key)
            };
            if duplicated {
                return Err(invalid(format!("duplicate rule part {key}")));
            }

            rule.set_part(&key, value)?;
            if key == KW_RRULE_FREQ {
                has_freq = true;
            } else {
                rule.order.push(key);
            }
        }

        if !has_freq {
            return Err(invalid("missing FREQ"));
        }
        if rule.count.is_some() && rule.until.is_some() {
            return Err(invalid("COUNT and UNTIL must not occur together"));
        }
        Ok(rule)
    }
}

fn invalid(reason: impl Into<String>) -> ValueParseError {
    ValueParseError {
        expected: ValueType::Recur,
        reason: reason.into(),
    }
}

fn join<T: Display>(values: &[T]) -> Option<String> {
    (!values.is_empty()).then(|| {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    })
}

fn numbers<T: TryFrom<i32>>(
    key: &str,
    value: &str,
    range: RangeInclusive<i64>,
    signed: bool,
) -> Result<Vec<T>, ValueParseError> {
    let list = int().separated_by(just(',')).at_least(1).collect::<Vec<_>>();
    run(list, ValueType::Recur, value)?
        .into_iter()
        .map(|n| {
            let magnitude = if signed { i64::from(n).abs() } else { i64::from(n) };
            if !range.contains(&magnitude) {
                return Err(invalid(format!("{key} value {n} out of range")));
            }
            T::try_from(n).map_err(|_| invalid(format!("{key} value {n} out of range")))
        })
        .collect()
}

/// ```txt
/// weekday     = "SU" / "MO" / "TU" / "WE" / "TH" / "FR" / "SA"
/// ```
fn weekday<'src>() -> impl Parser<'src, &'src str, WeekDay, Extra<'src>> + Clone {
    any()
        .repeated()
        .exactly(2)
        .to_slice()
        .try_map(|s: &str, span| {
            s.parse()
                .map_err(|_| Rich::custom(span, format!("invalid weekday {s:?}")))
        })
}

/// ```txt
/// weekdaynum  = [[plus / minus] ordwk] weekday
/// ordwk       = 1*2DIGIT       ;1 to 53
/// ```
fn weekday_num<'src>() -> impl Parser<'src, &'src str, WeekDayNum, Extra<'src>> + Clone {
    int()
        .or_not()
        .then(weekday())
        .try_map(|(occurrence, day), span| {
            let occurrence = occurrence
                .map(|n| {
                    i8::try_from(n)
                        .ok()
                        .filter(|n| *n != 0 && (-53..=53).contains(n))
                        .ok_or_else(|| Rich::custom(span, "weekday ordinal out of range"))
                })
                .transpose()?;
            Ok(WeekDayNum { occurrence, day })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(s: &str) -> ValueRecurrenceRule {
        s.parse().unwrap()
    }

    #[test]
    fn parses_weekly_rule() {
        let r = rule("FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR");
        assert_eq!(r.freq, RecurrenceFrequency::Weekly);
        let days: Vec<_> = r.by_day.iter().map(ToString::to_string).collect();
        assert_eq!(days, ["MO", "TU", "WE", "TH", "FR"]);
        assert_eq!(r.to_string(), "FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR");
    }

    #[test]
    fn parses_all_parts() {
        let r = rule(
            "FREQ=MONTHLY;UNTIL=20211231T235959Z;INTERVAL=2;BYSECOND=0;BYMINUTE=30;BYHOUR=9;BYDAY=-1FR,2MO;BYMONTHDAY=-1;BYYEARDAY=100;BYWEEKNO=20;BYMONTH=1,6;BYSETPOS=-1;WKST=SU",
        );
        assert_eq!(r.freq, RecurrenceFrequency::Monthly);
        assert!(matches!(r.until, Some(DateOrDateTime::DateTime(dt)) if dt.is_utc()));
        assert_eq!(r.interval, Some(2));
        assert_eq!(r.by_day[0].occurrence, Some(-1));
        assert_eq!(r.by_day[0].day, WeekDay::Friday);
        assert_eq!(r.by_month_day, [-1]);
        assert_eq!(r.by_month, [1, 6]);
        assert_eq!(r.week_start, Some(WeekDay::Sunday));
    }

    #[test]
    fn keeps_source_order_after_freq() {
        let src = "INTERVAL=2;FREQ=DAILY;COUNT=10;BYHOUR=9,17";
        assert_eq!(rule(src).to_string(), "FREQ=DAILY;INTERVAL=2;COUNT=10;BYHOUR=9,17");
    }

    #[test]
    fn writes_new_parts_in_canonical_order() {
        let mut r = ValueRecurrenceRule::new(RecurrenceFrequency::Yearly);
        r.by_month = vec![3];
        r.count = Some(5);
        assert_eq!(r.to_string(), "FREQ=YEARLY;COUNT=5;BYMONTH=3");
    }

    #[test]
    fn accepts_lowercase_and_date_until() {
        let r = rule("freq=daily;until=20211231;byday=mo");
        assert_eq!(r.until, Some(DateOrDateTime::Date("20211231".parse().unwrap())));
        assert_eq!(r.to_string(), "FREQ=DAILY;UNTIL=20211231;BYDAY=MO");
    }

    #[test]
    fn keeps_extension_parts() {
        let r = rule("FREQ=DAILY;X-NAME=value;COUNT=3");
        assert_eq!(r.extensions, [("X-NAME".to_string(), "value".to_string())]);
        assert_eq!(r.to_string(), "FREQ=DAILY;X-NAME=value;COUNT=3");
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(rule("FREQ=DAILY;COUNT=3;INTERVAL=2"), rule("INTERVAL=2;COUNT=3;FREQ=DAILY"));
    }

    #[test]
    fn rejects_invalid_rules() {
        for src in [
            "BYDAY=MO",
            "FREQ=FORTNIGHTLY",
            "FREQ=DAILY;FREQ=WEEKLY",
            "FREQ=DAILY;COUNT=2;COUNT=3",
            "FREQ=DAILY;COUNT=2;UNTIL=20211231",
            "FREQ=DAILY;INTERVAL=0",
            "FREQ=DAILY;BYMONTH=13",
            "FREQ=DAILY;BYMONTHDAY=0",
            "FREQ=DAILY;BYDAY=XX",
            "FREQ=DAILY;BYDAY=54MO",
            "FREQ=DAILY;COUNT",
            "FREQ=DAILY;FOO=1",
        ] {
            assert!(src.parse::<ValueRecurrenceRule>().is_err(), "{src}");
        }
    }
}
