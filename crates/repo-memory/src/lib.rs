// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Volatile repository that keeps all records in memory.
//!
//! Filters and sort orders are evaluated natively on the stored
//! records instead of being translated into a query language.

use std::collections::{BTreeMap, HashMap};

use readlist_core::{BookEntity, BookUid};
use readlist_repo::{RecordId, book::RecordHeader};

mod book;

#[derive(Debug, Clone)]
struct StoredBook {
    header: RecordHeader,
    entity: BookEntity,
}

/// Books indexed by both record id and entity uid.
#[derive(Debug, Default)]
pub struct InMemoryRepo {
    last_id: RecordId,
    books: BTreeMap<readlist_repo::book::RecordId, StoredBook>,
    book_ids: HashMap<BookUid, readlist_repo::book::RecordId>,
}

impl InMemoryRepo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }
}
