// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use readlist_core::{Author, Segment};

use super::*;

#[test]
fn create_and_load() {
    let library = Library::default();
    let entity = create_entity(
        &library,
        Book::new("Dune", ReadState::Reading).with_author(Author::new("Herbert", None)),
    )
    .unwrap();
    assert!(entity.hdr.rev.is_initial());
    assert_eq!(1, library.revision());
    assert_eq!(
        Some(entity.clone()),
        load_entity_by_uid(&library, &entity.hdr.uid).unwrap()
    );
}

#[test]
fn reject_invalid_book() {
    let library = Library::default();
    assert!(create_entity(&library, Book::new("  ", ReadState::ToRead)).is_err());
    let book = Book::new("Dune", ReadState::ToRead).with_author(Author::new("", None));
    assert!(create_entity(&library, book).is_err());
    assert_eq!(0, library.revision());
}

#[test]
fn load_unknown_book() {
    let library = Library::default();
    assert!(
        load_entity_by_uid(&library, &BookUid::new())
            .unwrap()
            .is_none()
    );
}

#[test]
fn update_read_state_bumps_revision() {
    let library = Library::default();
    let entity = create_entity(&library, Book::new("Dune", ReadState::ToRead)).unwrap();
    let updated = update_read_state(&library, &entity.hdr.uid, ReadState::Finished)
        .unwrap()
        .unwrap();
    assert_eq!(entity.hdr.uid, updated.hdr.uid);
    assert_eq!(entity.hdr.rev.next(), Some(updated.hdr.rev));
    assert_eq!(ReadState::Finished, updated.body.read_state);
    assert_eq!(2, library.revision());

    // Unchanged
    let unchanged = update_read_state(&library, &entity.hdr.uid, ReadState::Finished)
        .unwrap()
        .unwrap();
    assert_eq!(updated, unchanged);
    assert_eq!(2, library.revision());

    assert!(
        update_read_state(&library, &BookUid::new(), ReadState::Reading)
            .unwrap()
            .is_none()
    );
}

#[test]
fn purge() {
    let library = Library::default();
    let entity = create_entity(&library, Book::new("Dune", ReadState::ToRead)).unwrap();
    assert!(purge_entity(&library, &entity.hdr.uid).unwrap());
    assert_eq!(2, library.revision());
    assert!(!purge_entity(&library, &entity.hdr.uid).unwrap());
    assert_eq!(2, library.revision());
    assert!(
        load_entity_by_uid(&library, &entity.hdr.uid)
            .unwrap()
            .is_none()
    );
}

#[test]
fn import_skips_invalid_books() {
    let library = Library::default();
    let count = import_books(
        &library,
        [
            Book::new("Dune", ReadState::Finished),
            Book::new("", ReadState::ToRead),
            Book::new("Emma", ReadState::Reading),
        ],
    )
    .unwrap();
    assert_eq!(2, count);
}

#[test]
fn search_segment_sections() {
    let library = Library::default();
    import_books(
        &library,
        [
            Book::new("Emma", ReadState::ToRead),
            Book::new("Dune", ReadState::Finished),
            Book::new("Anna Karenina", ReadState::Reading),
            Book::new("Beloved", ReadState::ToRead),
        ],
    )
    .unwrap();
    let sections = search(&library, Params::segment(Segment::ToRead, None)).unwrap();
    assert_eq!(2, sections.sections().len());
    assert_eq!(ReadState::Reading, sections.sections()[0].read_state());
    assert_eq!(ReadState::ToRead, sections.sections()[1].read_state());
    let titles = sections
        .iter()
        .map(|entity| entity.body.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(vec!["Anna Karenina", "Beloved", "Emma"], titles);
}
