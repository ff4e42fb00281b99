// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Instant;

use jiff::Timestamp;
use readlist_core::{BookEntity, BookUid};
use readlist_core_api::book::search::{Filter, SortOrder};
use readlist_repo::{
    book::{EntityRepo, RecordHeader, RecordId, SearchRepo},
    prelude::*,
};

use crate::{InMemoryRepo, StoredBook};

mod search;
use self::search::{BookSearchComparator as _, BookSearchPredicate as _};

impl InMemoryRepo {
    fn stored_book(&self, id: RecordId) -> RepoResult<&StoredBook> {
        self.books.get(&id).ok_or(RepoError::NotFound)
    }

    fn filtered_books<'a>(
        &'a self,
        filter: Option<&'a Filter>,
    ) -> impl Iterator<Item = &'a StoredBook> + 'a {
        self.books
            .values()
            .filter(move |stored| filter.is_none_or(|filter| filter.matches(&stored.entity)))
    }
}

impl EntityRepo for InMemoryRepo {
    fn resolve_book_id(&mut self, uid: &BookUid) -> RepoResult<RecordId> {
        self.book_ids.get(uid).copied().ok_or(RepoError::NotFound)
    }

    fn load_book_entity(&mut self, id: RecordId) -> RepoResult<(RecordHeader, BookEntity)> {
        let StoredBook { header, entity } = self.stored_book(id)?;
        Ok((header.clone(), entity.clone()))
    }

    fn load_book_entity_by_uid(
        &mut self,
        uid: &BookUid,
    ) -> RepoResult<(RecordHeader, BookEntity)> {
        let id = self.resolve_book_id(uid)?;
        self.load_book_entity(id)
    }

    fn insert_book_entity(
        &mut self,
        created_at: Timestamp,
        created_entity: &BookEntity,
    ) -> RepoResult<RecordId> {
        if self.book_ids.contains_key(&created_entity.hdr.uid) {
            return Err(RepoError::Conflict);
        }
        let id = RecordId::new(self.last_id + 1);
        self.last_id = id.to_inner();
        let header = RecordHeader {
            id,
            created_at,
            updated_at: created_at,
        };
        self.book_ids.insert(created_entity.hdr.uid, id);
        self.books.insert(
            id,
            StoredBook {
                header,
                entity: created_entity.clone(),
            },
        );
        log::debug!(
            "Inserted book {uid} as {id:?}",
            uid = created_entity.hdr.uid
        );
        Ok(id)
    }

    fn update_book_entity(
        &mut self,
        id: RecordId,
        updated_at: Timestamp,
        updated_entity: &BookEntity,
    ) -> RepoResult<()> {
        let stored = self.books.get_mut(&id).ok_or(RepoError::NotFound)?;
        if stored.entity.hdr.uid != updated_entity.hdr.uid {
            return Err(RepoError::Conflict);
        }
        stored.header.updated_at = updated_at;
        stored.entity = updated_entity.clone();
        Ok(())
    }

    fn purge_book_entity(&mut self, id: RecordId) -> RepoResult<()> {
        let StoredBook { entity, .. } = self.books.remove(&id).ok_or(RepoError::NotFound)?;
        let removed_id = self.book_ids.remove(&entity.hdr.uid);
        debug_assert_eq!(Some(id), removed_id);
        log::debug!("Purged book {uid} ({id:?})", uid = entity.hdr.uid);
        Ok(())
    }
}

impl SearchRepo for InMemoryRepo {
    fn search_books(
        &mut self,
        pagination: &Pagination,
        filter: Option<&Filter>,
        ordering: &[SortOrder],
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = BookEntity>,
    ) -> RepoResult<usize> {
        let timed = Instant::now();
        let mut matches = self.filtered_books(filter).collect::<Vec<_>>();
        // Finally order by record id to preserve the relative order
        // of results even if no sorting was requested.
        matches.sort_by(|lhs, rhs| {
            ordering
                .iter()
                .fold(std::cmp::Ordering::Equal, |cmp, sort_order| {
                    cmp.then_with(|| sort_order.compare(lhs, rhs))
                })
                .then_with(|| lhs.header.id.cmp(&rhs.header.id))
        });
        let offset = usize::try_from(pagination.mandatory_offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(pagination.mandatory_limit()).unwrap_or(usize::MAX);
        let page = matches.into_iter().skip(offset).take(limit);
        collector.reserve(page.size_hint().0);
        let mut count = 0;
        for StoredBook { header, entity } in page {
            collector.collect(header.clone(), entity.clone());
            count += 1;
        }
        log::trace!(
            "Found {count} book(s) in {elapsed:?}",
            elapsed = timed.elapsed()
        );
        Ok(count)
    }

    fn count_books(&mut self, filter: Option<&Filter>) -> RepoResult<u64> {
        Ok(self.filtered_books(filter).count() as u64)
    }
}

#[cfg(test)]
mod tests;
