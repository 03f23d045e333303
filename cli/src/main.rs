// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! davparser - convert iCalendar text to JSON events and back

use std::process::ExitCode;

fn main() -> ExitCode {
    davparser_cli::run()
}
