// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};

/// Where a command reads its input from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, also selected by `-`
    Stdin,

    /// A file
    File(PathBuf),
}

impl Input {
    /// The optional `[FILE]` argument.
    pub fn arg() -> Arg {
        arg!([FILE] "Input file, `-` or none for standard input")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<PathBuf>("FILE") {
            Some(path) if path.as_os_str() != "-" => Self::File(path.clone()),
            _ => Self::Stdin,
        }
    }

    pub fn read_to_string(&self) -> Result<String, String> {
        match self {
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| format!("Failed to read standard input: {e}"))?;
                Ok(buf)
            }
            Self::File(path) => fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display())),
        }
    }
}
