// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! Sample calendars and a factory for the base event used by the
//! translate tests.

mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{
    CUSTOM_PROPS_ICS, FREEBUSY_ICS, RECURRING_ICS, SIMPLE_ICS, date_time, test_event,
};
