// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{future::Future, sync::Weak};

use crate::Library;

use super::{EventEmitter, Shelf};

/// Re-issue the query after each modification of the library.
///
/// Stops when either the shelf or the library has been dropped.
pub fn on_library_changed<E>(
    library: &Library,
    shelf: Weak<Shelf<E>>,
) -> impl Future<Output = ()> + Send + 'static
where
    E: EventEmitter + Send + Sync + 'static,
{
    let mut library_sub = library.subscribe_changed();
    async move {
        log::debug!("Starting on_library_changed");
        loop {
            {
                let Some(shelf) = shelf.upgrade() else {
                    // Shelf has been dropped.
                    break;
                };
                let revision = *library_sub.read_ack();
                log::debug!("Refreshing shelf at library revision {revision}");
                shelf.refresh();
            }
            if library_sub.changed().await.is_err() {
                // Publisher has been dropped.
                break;
            }
        }
        log::debug!("Stopping on_library_changed");
    }
}
