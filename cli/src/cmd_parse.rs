// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io::{self, Write},
};

use clap::{ArgMatches, Command, arg};
use davparser::Codec;
use serde::Serialize;

use crate::input::Input;

#[derive(Debug, Clone)]
pub struct CmdParse {
    pub input: Input,
    pub pretty: bool,
}

impl CmdParse {
    pub const NAME: &str = "parse";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert the events of a calendar to a JSON array")
            .arg(Input::arg())
            .arg(pretty_arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: Input::from(matches),
            pretty: matches.get_flag("pretty"),
        }
    }

    pub fn run(self, codec: &Codec) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "parsing events...");
        let ics = self.input.read_to_string()?;
        let events = codec.parse(&ics)?;
        write_json(&mut io::stdout().lock(), &events, self.pretty)
    }
}

#[derive(Debug, Clone)]
pub struct CmdFreeBusy {
    pub input: Input,
    pub pretty: bool,
}

impl CmdFreeBusy {
    pub const NAME: &str = "freebusy";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert the free/busy replies of a calendar to a JSON array")
            .arg(Input::arg())
            .arg(pretty_arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: Input::from(matches),
            pretty: matches.get_flag("pretty"),
        }
    }

    pub fn run(self, codec: &Codec) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "parsing free/busy replies...");
        let ics = self.input.read_to_string()?;
        let replies = codec.parse_free_busy(&ics)?;
        write_json(&mut io::stdout().lock(), &replies, self.pretty)
    }
}

fn pretty_arg() -> clap::Arg {
    arg!(--pretty "Pretty-print the JSON output")
}

fn write_json<T: Serialize>(
    out: &mut impl Write,
    value: &T,
    pretty: bool,
) -> Result<(), Box<dyn Error>> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICS: &str = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:1\r\nSUMMARY:Standup\r\n\
        DTSTART:20210315T100000\r\nDTEND:20210315T101500\r\nEND:VEVENT\r\nEND:VCALENDAR";

    #[test]
    fn test_parse_pretty_flag() {
        let cmd = Command::new("test").subcommand(CmdParse::command());
        let matches = cmd
            .try_get_matches_from(["test", "parse", "--pretty"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("parse").unwrap();
        let parsed = CmdParse::from(sub_matches);
        assert!(parsed.pretty);
        assert_eq!(parsed.input, Input::Stdin);
    }

    #[test]
    fn test_write_events_as_json() {
        let events = Codec::default().parse(ICS).unwrap();

        let mut out = Vec::new();
        write_json(&mut out, &events, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("]\n"));
        assert_eq!(text.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["id"], "1");
        assert_eq!(value[0]["title"], "Standup");
        assert_eq!(value[0]["start"], "2021-03-15T10:00:00");
        assert_eq!(value[0]["duration"], "PT15M");

        let mut out = Vec::new();
        write_json(&mut out, &events, true).unwrap();
        assert!(String::from_utf8(out).unwrap().lines().count() > 1);
    }
}
