// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Grouping of recurrence exceptions under their master event.
//!
//! In iCalendar text an exception is a sibling `VEVENT` sharing the UID of
//! the master and carrying a RECURRENCE-ID. The structured form nests it in
//! the master's `exceptions`.

use std::collections::HashMap;

use crate::config::OrphanPolicy;
use crate::error::{Error, Result};
use crate::event::CalendarEvent;

/// Nest exception instances under the first master event with the same id.
///
/// Masters keep their input order, exceptions their input order within a
/// master. A later exception with the same recurrence id replaces an earlier
/// one. Exceptions without a master are handled by `policy`, promoted ones
/// follow the masters.
pub(crate) fn group_exceptions(
    instances: Vec<CalendarEvent>,
    policy: OrphanPolicy,
) -> Result<Vec<CalendarEvent>> {
    let mut events: Vec<CalendarEvent> = Vec::new();
    let mut masters: HashMap<String, usize> = HashMap::new();
    let mut pending = Vec::new();

    for instance in instances {
        if instance.recurrence_id.is_some() {
            pending.push(instance);
        } else {
            masters.entry(instance.id.clone()).or_insert(events.len());
            events.push(instance);
        }
    }

    let mut orphans = Vec::new();
    for exception in pending {
        match masters.get(&exception.id).and_then(|&i| events.get_mut(i)) {
            Some(master) => attach(master, exception),
            None => orphans.push(exception),
        }
    }

    for orphan in orphans {
        let recurrence_id = orphan
            .recurrence_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        match policy {
            OrphanPolicy::Drop => {
                tracing::warn!(uid = %orphan.id, %recurrence_id, "dropping exception without master event");
            }
            OrphanPolicy::Promote => {
                tracing::debug!(uid = %orphan.id, %recurrence_id, "promoting exception without master event");
                events.push(orphan);
            }
            OrphanPolicy::Error => {
                return Err(Error::OrphanException {
                    uid: orphan.id,
                    recurrence_id,
                });
            }
        }
    }

    Ok(events)
}

fn attach(master: &mut CalendarEvent, exception: CalendarEvent) {
    let existing = master
        .exceptions
        .iter_mut()
        .find(|e| e.recurrence_id == exception.recurrence_id);
    match existing {
        Some(existing) => {
            tracing::warn!(
                uid = %exception.id,
                recurrence_id = ?exception.recurrence_id,
                "replacing duplicate exception"
            );
            *existing = exception;
        }
        None => master.exceptions.push(exception),
    }
}
