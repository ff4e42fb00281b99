// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::Timestamp;
use readlist_core::{Book, BookEntity, BookHeader, BookUid, ReadState, prelude::*};
use readlist_core_api::book::search::Params;
use readlist_repo::{
    book::{EntityRepo as _, Sections, search_sections},
    prelude::{OptionalRepoResult as _, RepoError},
};

use crate::Library;

pub mod shelf;

/// Search and group the results into sections by read state.
pub fn search(library: &Library, params: Params) -> anyhow::Result<Sections> {
    library.read(|repo| search_sections(repo, params))
}

pub fn load_entity_by_uid(library: &Library, uid: &BookUid) -> anyhow::Result<Option<BookEntity>> {
    library.read(|repo| {
        repo.load_book_entity_by_uid(uid)
            .map(|(_, entity)| entity)
            .optional()
    })
}

/// Validate and store a new book.
pub fn create_entity(library: &Library, book: Book) -> anyhow::Result<BookEntity> {
    if let Err(err) = book.validate() {
        anyhow::bail!("invalid book: {err:?}");
    }
    let entity = BookEntity::new(BookHeader::initial_random(), book);
    library.write(|repo| repo.insert_book_entity(Timestamp::now(), &entity))?;
    log::debug!("Created book {uid}", uid = entity.hdr.uid);
    Ok(entity)
}

/// Move a book into another read state.
///
/// Returns `None` if the book doesn't exist. The stored entity
/// is returned unmodified if the read state didn't change.
pub fn update_read_state(
    library: &Library,
    uid: &BookUid,
    read_state: ReadState,
) -> anyhow::Result<Option<BookEntity>> {
    let Some(entity) = load_entity_by_uid(library, uid)? else {
        return Ok(None);
    };
    if entity.body.read_state == read_state {
        return Ok(Some(entity));
    }
    let Some(hdr) = entity.hdr.next_rev() else {
        anyhow::bail!("no more revisions available for book {uid}");
    };
    let mut body = entity.body;
    body.read_state = read_state;
    let updated = BookEntity::new(hdr, body);
    library.write(|repo| repo.update_book_entity_revision(Timestamp::now(), &updated))?;
    log::debug!(
        "Updated read state of book {uid}: {read_state}",
        uid = updated.hdr.uid
    );
    Ok(Some(updated))
}

/// Delete a book.
///
/// Returns `false` if the book doesn't exist.
pub fn purge_entity(library: &Library, uid: &BookUid) -> anyhow::Result<bool> {
    match library.write(|repo| {
        let id = repo.resolve_book_id(uid)?;
        repo.purge_book_entity(id)
    }) {
        Ok(()) => {
            log::debug!("Purged book {uid}");
            Ok(true)
        }
        Err(err) => match err.downcast_ref::<RepoError>() {
            Some(RepoError::NotFound) => Ok(false),
            _ => Err(err),
        },
    }
}

/// Store multiple new books.
///
/// Invalid books are skipped. Returns the number of stored books.
pub fn import_books(
    library: &Library,
    books: impl IntoIterator<Item = Book>,
) -> anyhow::Result<usize> {
    let mut count = 0;
    for book in books {
        if let Err(err) = book.validate() {
            log::warn!(
                "Skipping invalid book \"{title}\": {err:?}",
                title = book.title
            );
            continue;
        }
        create_entity(library, book)?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests;
