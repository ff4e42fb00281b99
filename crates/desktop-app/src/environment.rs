// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::{Arc, Mutex};

use discro::{Publisher, Subscriber};
use readlist_repo::{book::Repo, prelude::RepoResult};
use readlist_repo_memory::InMemoryRepo;

use crate::{book, catalog, settings};

/// Monotonically increasing counter of committed modifications.
pub type LibraryRevision = u64;

/// Shared access to a record store.
///
/// Serializes all requests and notifies subscribers after each
/// successful modification.
pub struct Library {
    repo: Mutex<Box<dyn Repo + Send>>,
    revision_pub: Publisher<LibraryRevision>,
}

impl Library {
    #[must_use]
    pub fn new(repo: impl Repo + Send + 'static) -> Self {
        Self {
            repo: Mutex::new(Box::new(repo)),
            revision_pub: Publisher::new(0),
        }
    }

    /// Run a read-only request.
    pub fn read<T>(
        &self,
        request: impl FnOnce(&mut dyn Repo) -> RepoResult<T>,
    ) -> anyhow::Result<T> {
        let mut repo = self
            .repo
            .lock()
            .map_err(|_| anyhow::anyhow!("record store is unavailable"))?;
        request(&mut **repo).map_err(Into::into)
    }

    /// Run a modifying request.
    ///
    /// Subscribers are notified after the lock has been released
    /// and only if the request succeeded.
    pub fn write<T>(
        &self,
        request: impl FnOnce(&mut dyn Repo) -> RepoResult<T>,
    ) -> anyhow::Result<T> {
        let output = self.read(request)?;
        self.revision_pub.modify(|revision| {
            *revision = revision.wrapping_add(1);
            log::debug!("Library modified: revision = {revision}");
            true
        });
        Ok(output)
    }

    #[must_use]
    pub fn revision(&self) -> LibraryRevision {
        *self.revision_pub.read()
    }

    /// Subscribe with the current revision marked as changed.
    #[must_use]
    pub fn subscribe_changed(&self) -> Subscriber<LibraryRevision> {
        self.revision_pub.subscribe_changed()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(InMemoryRepo::new())
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("revision", &self.revision())
            .finish_non_exhaustive()
    }
}

#[allow(missing_debug_implementations)]
pub struct Environment {
    settings: settings::State,
    handle: Handle,
}

impl Environment {
    /// Set up the runtime environment.
    ///
    /// Books from the configured catalog file are imported into
    /// a fresh in-memory library.
    pub fn commission(settings: settings::State) -> anyhow::Result<Self> {
        log::info!("Commissioning runtime environment");
        let library = Library::default();
        if let Some(catalog_file) = &settings.catalog_file {
            let books = catalog::load_books(catalog_file)?;
            let count = book::import_books(&library, books)?;
            log::info!(
                "Imported {count} book(s) from catalog file: {}",
                catalog_file.display()
            );
        }
        let handle = Handle(Arc::new(library));
        Ok(Self { settings, handle })
    }

    /// The settings used for commissioning.
    #[must_use]
    pub fn settings(&self) -> &settings::State {
        &self.settings
    }

    /// Handle for invoking operations.
    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

/// A cheaply `Clone`able and `Send`able handle for invoking operations.
#[derive(Debug, Clone)]
pub struct Handle(Arc<Library>);

impl Handle {
    #[must_use]
    pub fn new(library: Library) -> Self {
        Self(Arc::new(library))
    }

    #[must_use]
    pub fn library(&self) -> &Library {
        &self.0
    }
}
