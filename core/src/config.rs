// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, de};

/// Default output line width in octets.
pub const DEFAULT_FOLDING: usize = 75;

/// Configuration of the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fail on any undecodable property value instead of keeping it as text.
    ///
    /// DTSTART, DTEND and RECURRENCE-ID must always decode.
    pub strict_values: bool,

    /// What to do with exceptions whose master event is missing.
    pub orphan_exceptions: OrphanPolicy,

    /// Output line width in octets, `None` disables folding.
    ///
    /// In a config file, `false` disables folding and `true` keeps the default width.
    #[serde(deserialize_with = "deserialize_folding")]
    pub folding: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_values: false,
            orphan_exceptions: OrphanPolicy::default(),
            folding: Some(DEFAULT_FOLDING),
        }
    }
}

/// Handling of exception instances without a master event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Drop them with a warning.
    #[default]
    Drop,

    /// Return them as top-level events.
    Promote,

    /// Fail the parse.
    Error,
}

fn deserialize_folding<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: de::Deserializer<'de>,
{
    struct FoldingVisitor;

    impl de::Visitor<'_> for FoldingVisitor {
        type Value = Option<usize>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a line width in octets, or a boolean")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.then_some(DEFAULT_FOLDING))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match usize::try_from(value) {
                Ok(0) => Ok(None),
                Ok(width) => Ok(Some(width)),
                Err(_) => Err(de::Error::custom(format!("line width too large: {value}"))),
            }
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match u64::try_from(value) {
                Ok(value) => self.visit_u64(value),
                Err(_) => Err(de::Error::custom(format!("negative line width: {value}"))),
            }
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(FoldingVisitor)
}
