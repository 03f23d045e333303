// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use davparser::Config as CoreConfig;

pub const CONFIG_ENV: &str = "DAVPARSER_CONFIG";

/// Load the codec configuration from `--config`, then `$DAVPARSER_CONFIG`,
/// falling back to the defaults when neither is given.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        tracing::debug!("no config file given, using defaults");
        return Ok(CoreConfig::default());
    };

    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
