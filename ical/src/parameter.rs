// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property parameters as defined in RFC 5545 Section 3.2.

use std::str::FromStr;

use crate::keyword::KW_VALUE;
use crate::value::ValueType;

/// A single parameter, possibly multi-valued (e.g. `DELEGATED-TO="a","b"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name, lowercase
    pub name: String,
    /// Unquoted and unescaped values, in source order
    pub values: Vec<String>,
}

impl Parameter {
    /// Create a single-valued parameter.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            values: vec![value.into()],
        }
    }

    /// The first value of the parameter.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Whether the parameter carries more than one value.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        self.values.len() > 1
    }
}

/// Ordered parameter list of a property.
///
/// Lookups are case-insensitive. Inserting a name that is already present
/// appends to its values, so a repeated key becomes one multi-valued parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(Vec<Parameter>);

impl Parameters {
    /// Create an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add values to a parameter, merging with an existing one of the same name.
    pub fn insert(&mut self, name: &str, values: impl IntoIterator<Item = String>) {
        match self.get_mut(name) {
            Some(param) => param.values.extend(values),
            None => self.0.push(Parameter {
                name: name.to_ascii_lowercase(),
                values: values.into_iter().collect(),
            }),
        }
    }

    /// Add a parameter, replacing the values of an existing one of the same name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        match self.get_mut(name) {
            Some(param) => param.values = vec![value.into()],
            None => self.0.push(Parameter::new(name, value)),
        }
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.0.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.0.iter_mut().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// First value of a parameter.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Parameter::first)
    }

    /// Remove a parameter, returning it.
    pub fn remove(&mut self, name: &str) -> Option<Parameter> {
        let index = self
            .0
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))?;
        Some(self.0.remove(index))
    }

    /// The declared `VALUE=` type, if any and recognized.
    ///
    /// Unknown value types (such as `X-` names) yield `None`.
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        self.first(KW_VALUE)
            .and_then(|v| ValueType::from_str(v).ok())
    }

    /// Iterate parameters in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Parameters {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<T: IntoIterator<Item = Parameter>>(iter: T) -> Self {
        let mut params = Self::new();
        for param in iter {
            params.insert(&param.name, param.values);
        }
        params
    }
}
