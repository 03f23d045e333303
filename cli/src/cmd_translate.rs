// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use davparser::{CalendarEvent, Codec};

use crate::input::Input;

#[derive(Debug, Clone)]
pub struct CmdTranslate {
    pub input: Input,
}

impl CmdTranslate {
    pub const NAME: &str = "translate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert a JSON event object to a calendar")
            .arg(Input::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: Input::from(matches),
        }
    }

    pub fn run(self, codec: &Codec) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "translating event...");
        let json = self.input.read_to_string()?;
        println!("{}", translate(codec, &json)?);
        Ok(())
    }
}

fn translate(codec: &Codec, json: &str) -> Result<String, Box<dyn Error>> {
    let event: CalendarEvent =
        serde_json::from_str(json).map_err(|e| format!("Invalid event object: {e}"))?;
    Ok(codec.translate(&event)?)
}
