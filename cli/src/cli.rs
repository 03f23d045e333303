// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use davparser::Codec;
use tracing_subscriber::EnvFilter;

use crate::cmd_parse::{CmdFreeBusy, CmdParse};
use crate::cmd_translate::CmdTranslate;
use crate::config::{CONFIG_ENV, parse_config};

/// Run the davparser command-line interface.
#[must_use]
pub fn run() -> ExitCode {
    init_tracing();
    let result = Cli::parse().and_then(Cli::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new("davparser")
            .about("Convert iCalendar text to JSON events and back.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(format!(
                        "Path to the configuration file. Defaults to ${CONFIG_ENV} when set, \
                         otherwise the built-in defaults are used."
                    ))
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdParse::command())
            .subcommand(CmdFreeBusy::command())
            .subcommand(CmdTranslate::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Ok(Self::from(&matches))
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Ok(Self::from(&matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Self {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdParse::NAME, matches)) => Parse(CmdParse::from(matches)),
            Some((CmdFreeBusy::NAME, matches)) => FreeBusy(CmdFreeBusy::from(matches)),
            Some((CmdTranslate::NAME, matches)) => Translate(CmdTranslate::from(matches)),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Cli { config, command }
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let config = parse_config(self.config)?;
        tracing::debug!(?config, "loaded configuration");
        self.command.run(&Codec::new(config))
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Convert iCalendar events to JSON
    Parse(CmdParse),

    /// Convert iCalendar free/busy replies to JSON
    FreeBusy(CmdFreeBusy),

    /// Convert a JSON event to iCalendar
    Translate(CmdTranslate),
}

impl Commands {
    /// Run the command with the given codec
    pub fn run(self, codec: &Codec) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Parse(a) => a.run(codec),
            FreeBusy(a) => a.run(codec),
            Translate(a) => a.run(codec),
        }
    }
}
