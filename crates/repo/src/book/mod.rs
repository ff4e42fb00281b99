// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::Timestamp;
use readlist_core::{BookEntity, BookUid};
use readlist_core_api::book::search::{Filter, Params, SortOrder};

use crate::prelude::*;

mod section;
pub use self::section::{IndexPath, Section, Sections};

record_id_newtype!(RecordId);

pub type RecordHeader = crate::RecordHeader<RecordId>;

pub trait EntityRepo {
    fn resolve_book_id(&mut self, uid: &BookUid) -> RepoResult<RecordId> {
        self.load_book_entity_by_uid(uid).map(|(hdr, _)| hdr.id)
    }

    fn load_book_entity(&mut self, id: RecordId) -> RepoResult<(RecordHeader, BookEntity)>;

    fn load_book_entity_by_uid(
        &mut self,
        uid: &BookUid,
    ) -> RepoResult<(RecordHeader, BookEntity)>;

    fn insert_book_entity(
        &mut self,
        created_at: Timestamp,
        created_entity: &BookEntity,
    ) -> RepoResult<RecordId>;

    fn update_book_entity(
        &mut self,
        id: RecordId,
        updated_at: Timestamp,
        updated_entity: &BookEntity,
    ) -> RepoResult<()>;

    /// Update an entity with optimistic locking.
    ///
    /// The revision of the updated entity must directly follow the
    /// stored revision. Otherwise [`RepoError::Conflict`] is returned.
    fn update_book_entity_revision(
        &mut self,
        updated_at: Timestamp,
        updated_entity: &BookEntity,
    ) -> RepoResult<()> {
        let (record_header, stored_entity) =
            self.load_book_entity_by_uid(&updated_entity.hdr.uid)?;
        if updated_entity.hdr.rev.prev() != Some(stored_entity.hdr.rev) {
            return Err(RepoError::Conflict);
        }
        self.update_book_entity(record_header.id, updated_at, updated_entity)
    }

    /// Purge the entity
    fn purge_book_entity(&mut self, id: RecordId) -> RepoResult<()>;
}

pub trait SearchRepo {
    /// Collect all books that match the filter in the given order.
    ///
    /// Returns the number of collected records.
    fn search_books(
        &mut self,
        pagination: &Pagination,
        filter: Option<&Filter>,
        ordering: &[SortOrder],
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = BookEntity>,
    ) -> RepoResult<usize>;

    fn count_books(&mut self, filter: Option<&Filter>) -> RepoResult<u64>;
}

/// A repository that supports all book operations.
pub trait Repo: EntityRepo + SearchRepo {}

impl<T> Repo for T where T: EntityRepo + SearchRepo {}

/// Search for books and group the results into sections by read state.
pub fn search_sections<R>(repo: &mut R, params: Params) -> RepoResult<Sections>
where
    R: SearchRepo + ?Sized,
{
    let Params { filter, ordering } = params.with_section_ordering();
    let mut collector = Vec::<(RecordHeader, BookEntity)>::new();
    repo.search_books(
        &Pagination::new(),
        filter.as_ref(),
        &ordering,
        &mut collector,
    )?;
    let entities = collector.into_iter().map(|(_, entity)| entity);
    Ok(Sections::group_by_read_state(entities))
}
