// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of davparser.

mod cli;
mod cmd_parse;
mod cmd_translate;
mod config;
mod input;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_parse::{CmdFreeBusy, CmdParse};
pub use crate::cmd_translate::CmdTranslate;
pub use crate::config::parse_config;
pub use crate::input::Input;
