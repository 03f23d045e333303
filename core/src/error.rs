// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use davparser_ical::{ParseError, SyntaxError};

/// Errors of the codec operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The text is not structurally valid iCalendar.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] SyntaxError),

    /// A property value could not be decoded as its type.
    #[error("invalid value {raw:?} for property {name}")]
    InvalidPropertyValue {
        /// Lower-case property name
        name: String,
        /// The raw value
        raw: String,
    },

    /// The calendar has no `VFREEBUSY` component.
    #[error("no free/busy data found")]
    NoFreeBusyData,

    /// An event lacks a field required on output.
    #[error("invalid event object: missing {field}")]
    InvalidEventObject {
        /// Name of the missing field
        field: &'static str,
    },

    /// An exception instance whose master event is not in the calendar.
    #[error("exception {recurrence_id} of event {uid} has no master event")]
    OrphanException {
        /// UID shared by the instances
        uid: String,
        /// Recurrence id of the exception
        recurrence_id: String,
    },

    /// Writing the output failed.
    #[error("failed to format calendar: {0}")]
    Format(#[from] io::Error),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Syntax(err) => Error::MalformedInput(err),
            ParseError::Value(err) => Error::InvalidPropertyValue {
                name: err.name,
                raw: err.raw,
            },
        }
    }
}

/// Result of the codec operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_grammar_errors() {
        let err = davparser_ical::parse("BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nEND:VCALENDAR\r\n")
            .unwrap_err();
        assert!(matches!(Error::from(err), Error::MalformedInput(_)));

        let src = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nDTSTART:soon\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
        let err = davparser_ical::parse(src).unwrap_err();
        match Error::from(err) {
            Error::InvalidPropertyValue { name, raw } => {
                assert_eq!(name, "dtstart");
                assert_eq!(raw, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
