// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tree builder for constructing component hierarchy from content lines.
//!
//! # Algorithm
//!
//! The tree builder uses a stack-based algorithm:
//! 1. On BEGIN:X, push a new component onto the stack
//! 2. On property, add to the current component (top of stack)
//! 3. On END:X, pop from stack and add to parent component

use crate::keyword::{KW_BEGIN, KW_END, KW_VCALENDAR};
use crate::syntax::SyntaxError;
use crate::syntax::scanner::ContentLine;

/// A component before value decoding (e.g., VCALENDAR, VEVENT, VALARM)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComponent {
    /// Component name, lowercase
    pub name: String,
    /// Properties in original order
    pub properties: Vec<ContentLine>,
    /// Nested child components
    pub children: Vec<RawComponent>,
    /// Line of the `BEGIN`
    pub line: usize,
}

impl RawComponent {
    fn new(name: &str, line: usize) -> Self {
        Self {
            name: name.trim().to_ascii_lowercase(),
            properties: Vec::new(),
            children: Vec::new(),
            line,
        }
    }
}

/// Build the component tree from scanned content lines.
///
/// ## Errors
///
/// Fails on unmatched or mismatched `END` lines, unclosed components,
/// properties outside of any component, and unless the lines form exactly
/// one top-level `VCALENDAR`.
pub fn build_tree(lines: impl IntoIterator<Item = ContentLine>) -> Result<RawComponent, SyntaxError> {
    let mut stack: Vec<RawComponent> = Vec::new();
    let mut root: Option<RawComponent> = None;

    for line in lines {
        if line.name == KW_BEGIN {
            let component = RawComponent::new(&line.value, line.line);
            if stack.is_empty() && (root.is_some() || component.name != KW_VCALENDAR) {
                return Err(SyntaxError::UnexpectedRoot {
                    line: line.line,
                    name: line.value,
                });
            }
            stack.push(component);
        } else if line.name == KW_END {
            let Some(component) = stack.pop() else {
                return Err(SyntaxError::UnmatchedEnd {
                    line: line.line,
                    name: line.value,
                });
            };

            if !component.name.eq_ignore_ascii_case(line.value.trim()) {
                return Err(SyntaxError::MismatchedNesting {
                    line: line.line,
                    expected: component.name,
                    found: line.value,
                });
            }

            match stack.last_mut() {
                Some(parent) => parent.children.push(component),
                None => root = Some(component),
            }
        } else {
            match stack.last_mut() {
                Some(current) => current.properties.push(line),
                None => {
                    return Err(SyntaxError::OrphanProperty {
                        line: line.line,
                        name: line.name,
                    });
                }
            }
        }
    }

    if let Some(unclosed) = stack.pop() {
        return Err(SyntaxError::UnclosedComponent {
            line: unclosed.line,
            name: unclosed.name,
        });
    }

    root.ok_or(SyntaxError::MissingCalendar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{scan_line, unfold};

    fn tree(src: &str) -> Result<RawComponent, SyntaxError> {
        let lines = unfold(src)?
            .iter()
            .map(scan_line)
            .collect::<Result<Vec<_>, _>>()?;
        build_tree(lines)
    }

    #[test]
    fn builds_nested_components() {
        let src = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:1\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:2\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
        let root = tree(src).unwrap();
        assert_eq!(root.name, "vcalendar");
        assert_eq!(root.properties.len(), 1);
        assert_eq!(root.children.len(), 2);

        let first = &root.children[0];
        assert_eq!(first.name, "vevent");
        assert_eq!(first.properties[0].value, "1");
        assert_eq!(first.children[0].name, "valarm");
        assert_eq!(first.children[0].properties[0].name, "action");
        assert_eq!(root.children[1].properties[0].value, "2");
    }

    #[test]
    fn component_names_are_case_insensitive() {
        let root = tree("BEGIN:VCalendar\r\nBEGIN:vevent\r\nEND:VEVENT\r\nEND:vcalendar").unwrap();
        assert_eq!(root.children[0].name, "vevent");
    }

    #[test]
    fn rejects_mismatched_nesting() {
        let src = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nEND:VCALENDAR\r\nEND:VEVENT";
        assert_eq!(
            tree(src),
            Err(SyntaxError::MismatchedNesting {
                line: 3,
                expected: "vevent".to_string(),
                found: "VCALENDAR".to_string(),
            })
        );
    }

    #[test]
    fn rejects_unclosed_component() {
        let src = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:1\r\n";
        assert_eq!(
            tree(src),
            Err(SyntaxError::UnclosedComponent {
                line: 2,
                name: "vevent".to_string(),
            })
        );
    }

    #[test]
    fn rejects_unmatched_end() {
        let src = "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\nEND:VEVENT";
        assert!(matches!(tree(src), Err(SyntaxError::UnmatchedEnd { line: 3, .. })));
    }

    #[test]
    fn rejects_property_outside_components() {
        let src = "VERSION:2.0\r\nBEGIN:VCALENDAR\r\nEND:VCALENDAR";
        assert!(matches!(tree(src), Err(SyntaxError::OrphanProperty { line: 1, .. })));
    }

    #[test]
    fn requires_a_single_calendar_root() {
        let src = "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\nBEGIN:VCALENDAR\r\nEND:VCALENDAR";
        assert!(matches!(tree(src), Err(SyntaxError::UnexpectedRoot { line: 3, .. })));

        let src = "BEGIN:VEVENT\r\nEND:VEVENT\r\nBEGIN:VCALENDAR\r\nEND:VCALENDAR";
        assert!(matches!(tree(src), Err(SyntaxError::UnexpectedRoot { line: 1, .. })));
    }
}
