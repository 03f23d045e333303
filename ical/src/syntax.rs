// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Untyped iCalendar syntax as defined in RFC 5545 Section 3.1.
//!
//! # Architecture
//!
//! ```text
//! Source Text → Unfolder → Logical Lines → Lexer + Scanner → Content Lines
//!             → Tree Builder → Raw Component Tree
//! ```

pub mod lexer;
pub mod scanner;
pub mod tree_builder;
pub mod unfolder;

pub use crate::syntax::scanner::{ContentLine, scan_line};
pub use crate::syntax::tree_builder::{RawComponent, build_tree};
pub use crate::syntax::unfolder::{LogicalLine, unfold};

/// Run the syntax pipeline over iCalendar source and return the root component.
///
/// ## Errors
///
/// Returns the first structural error found: folding, content line or nesting errors.
pub fn syntax_analysis(src: &str) -> Result<RawComponent, SyntaxError> {
    let lines = unfold(src)?;
    let content_lines = lines
        .iter()
        .map(scan_line)
        .collect::<Result<Vec<_>, _>>()?;
    build_tree(content_lines)
}

/// Structural errors of the iCalendar text format.
///
/// Every variant tied to a position carries the 1-based physical line number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The input does not contain `BEGIN:VCALENDAR`.
    #[error("missing BEGIN:VCALENDAR")]
    MissingCalendar,

    /// A continuation line appears before any content line.
    #[error("line {line}: continuation line without a preceding content line")]
    OrphanContinuation {
        /// Line number
        line: usize,
    },

    /// The input ends with a continuation marker that carries no content.
    #[error("line {line}: input ends inside a folded line")]
    UnterminatedFold {
        /// Line number
        line: usize,
    },

    /// A content line could not be split into name, parameters and value.
    #[error("line {line}: {kind}")]
    ContentLine {
        /// Line number
        line: usize,
        /// What went wrong
        kind: ContentLineError,
    },

    /// `END` without a matching `BEGIN`.
    #[error("line {line}: END:{name} without matching BEGIN")]
    UnmatchedEnd {
        /// Line number
        line: usize,
        /// Component name of the `END` line
        name: String,
    },

    /// `END` closes a different component than the innermost open one.
    #[error("line {line}: expected END:{expected}, found END:{found}")]
    MismatchedNesting {
        /// Line number
        line: usize,
        /// Name of the innermost open component
        expected: String,
        /// Name found on the `END` line
        found: String,
    },

    /// A component is still open at end of input.
    #[error("line {line}: BEGIN:{name} is never closed")]
    UnclosedComponent {
        /// Line of the `BEGIN`
        line: usize,
        /// Component name
        name: String,
    },

    /// A property outside of any component.
    #[error("line {line}: property {name} outside of any component")]
    OrphanProperty {
        /// Line number
        line: usize,
        /// Property name
        name: String,
    },

    /// A second top-level component, or a top-level component other than `VCALENDAR`.
    #[error("line {line}: unexpected top-level component {name}")]
    UnexpectedRoot {
        /// Line of the `BEGIN`
        line: usize,
        /// Component name
        name: String,
    },
}

/// Errors that can occur when scanning a single content line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentLineError {
    /// No property name before the first delimiter.
    #[error("missing property name")]
    EmptyName,

    /// A property or parameter name with characters outside `[A-Za-z0-9-]`.
    #[error("invalid name {0:?}")]
    InvalidName(String),

    /// A parameter without `=`.
    #[error("parameter {0} has no value")]
    MissingEqual(String),

    /// A quoted parameter value without the closing quote.
    #[error("unterminated quoted parameter value")]
    UnterminatedQuote,

    /// Unexpected character where a parameter value was expected.
    #[error("unexpected {found:?} in parameter {name}")]
    UnexpectedToken {
        /// Parameter name
        name: String,
        /// The offending text
        found: String,
    },

    /// No `:` separating the value.
    #[error("missing ':' separator")]
    MissingColon,
}
