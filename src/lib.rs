// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(rustdoc::broken_intra_doc_links)]

pub use readlist_core::*;

#[cfg(feature = "api")]
pub use readlist_core_api as api;

#[cfg(feature = "repo")]
pub use readlist_repo as repo;

#[cfg(feature = "repo-memory")]
pub use readlist_repo_memory as repo_memory;

#[cfg(feature = "desktop-app")]
pub use readlist_desktop_app as desktop_app;
