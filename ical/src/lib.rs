// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse, represent and format iCalendar components and properties.
//!
//! The pipeline is unfold, scan, build tree, then decode values into a
//! typed [`Component`] tree. [`formatter::format`] writes such a tree back.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::option_option,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

pub mod formatter;
pub mod keyword;
pub mod parameter;
mod parser;
pub mod property_spec;
pub mod syntax;
pub mod typed;
pub mod value;

pub use crate::formatter::{FoldingStyle, FormatOptions, Formatter, format};
pub use crate::parameter::{Parameter, Parameters};
pub use crate::parser::{ParseError, parse, parse_with_options};
pub use crate::syntax::SyntaxError;
pub use crate::typed::{Component, DecodeOptions, Property, ValueError};
pub use crate::value::{
    DateOrDateTime, RecurrenceFrequency, Value, ValueDate, ValueDateTime, ValueDuration,
    ValueParseError, ValuePeriod, ValueRecurrenceRule, ValueTime, ValueType, ValueUtcOffset,
    WeekDay, WeekDayNum,
};
