// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

mod environment;

use discro::{Publisher, Ref, Subscriber};

pub use self::environment::{Environment, Handle, Library, LibraryRevision};

/// Book management
pub mod book;

/// Catalog files for seeding the library
pub mod catalog;

/// Settings management
pub mod settings;

pub type ObservableRef<'a, T> = Ref<'a, T>;

/// Manages the mutable, observable state
#[derive(Debug, Default)]
pub struct Observable<T> {
    publisher: Publisher<T>,
}

impl<T> Observable<T> {
    #[must_use]
    pub fn new(initial_value: T) -> Self {
        let publisher = Publisher::new(initial_value);
        Self { publisher }
    }

    #[must_use]
    pub fn read(&self) -> ObservableRef<'_, T> {
        self.publisher.read()
    }

    /// Subscribe for subsequent changes.
    #[must_use]
    pub fn subscribe(&self) -> Subscriber<T> {
        self.publisher.subscribe()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn modify(&self, modify: impl FnOnce(&mut T) -> bool) -> bool {
        self.publisher.modify(modify)
    }
}
