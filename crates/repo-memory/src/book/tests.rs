// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::Timestamp;
use readlist_core::{Author, Book, BookHeader, ReadState, Segment};
use readlist_core_api::book::search::{Params, SortField, build_filter};
use readlist_repo::book::{IndexPath, search_sections};

use super::*;

fn insert_book(repo: &mut InMemoryRepo, book: Book) -> BookEntity {
    let entity = BookEntity::new(BookHeader::initial_random(), book);
    repo.insert_book_entity(Timestamp::now(), &entity).unwrap();
    entity
}

fn populate(repo: &mut InMemoryRepo) {
    insert_book(repo, Book::new("Dune", ReadState::ToRead));
    insert_book(repo, Book::new("Anathem", ReadState::Reading));
    insert_book(repo, Book::new("Dune Messiah", ReadState::Finished));
    insert_book(repo, Book::new("Solaris", ReadState::Finished));
    insert_book(repo, Book::new("Children of dune", ReadState::Finished));
}

const BY_TITLE: &[SortOrder] = &[SortOrder::ascending(SortField::Title)];

fn search_titles(repo: &mut InMemoryRepo, filter: &Filter, ordering: &[SortOrder]) -> Vec<String> {
    let mut collector = Vec::<(RecordHeader, BookEntity)>::new();
    repo.search_books(&Pagination::new(), Some(filter), ordering, &mut collector)
        .unwrap();
    collector
        .into_iter()
        .map(|(_, entity)| entity.body.title)
        .collect()
}

#[test]
fn insert_load_purge() -> RepoResult<()> {
    let mut repo = InMemoryRepo::new();
    let entity = insert_book(&mut repo, Book::new("Dune", ReadState::ToRead));
    let (header, loaded) = repo.load_book_entity_by_uid(&entity.hdr.uid)?;
    assert_eq!(entity, loaded);
    assert_eq!(header.created_at, header.updated_at);
    assert_eq!(header.id, repo.resolve_book_id(&entity.hdr.uid)?);

    repo.purge_book_entity(header.id)?;
    assert!(repo.is_empty());
    assert!(matches!(
        repo.load_book_entity_by_uid(&entity.hdr.uid),
        Err(RepoError::NotFound)
    ));
    assert!(matches!(repo.purge_book_entity(header.id), Err(RepoError::NotFound)));
    Ok(())
}

#[test]
fn insert_duplicate_uid() {
    let mut repo = InMemoryRepo::new();
    let entity = insert_book(&mut repo, Book::new("Dune", ReadState::ToRead));
    assert!(matches!(
        repo.insert_book_entity(Timestamp::now(), &entity),
        Err(RepoError::Conflict)
    ));
    assert_eq!(1, repo.len());
}

#[test]
fn update_revision_conflict() -> RepoResult<()> {
    let mut repo = InMemoryRepo::new();
    let entity = insert_book(&mut repo, Book::new("Dune", ReadState::ToRead));

    // Same revision
    assert!(matches!(
        repo.update_book_entity_revision(Timestamp::now(), &entity),
        Err(RepoError::Conflict)
    ));

    let mut updated = entity.clone();
    updated.hdr = entity.hdr.next_rev().unwrap();
    updated.body.read_state = ReadState::Reading;
    repo.update_book_entity_revision(Timestamp::now(), &updated)?;
    let (_, loaded) = repo.load_book_entity_by_uid(&entity.hdr.uid)?;
    assert_eq!(updated, loaded);

    // Stale revision
    assert!(matches!(
        repo.update_book_entity_revision(Timestamp::now(), &updated),
        Err(RepoError::Conflict)
    ));
    Ok(())
}

#[test]
fn filter_to_read_segment() {
    let mut repo = InMemoryRepo::new();
    populate(&mut repo);
    let filter = build_filter(Segment::ToRead.read_states(), None);
    assert_eq!(
        vec!["Anathem", "Dune"],
        search_titles(&mut repo, &filter, BY_TITLE)
    );
}

#[test]
fn filter_finished_segment_by_title() {
    let mut repo = InMemoryRepo::new();
    populate(&mut repo);
    let filter = build_filter(Segment::Finished.read_states(), Some("DUNE"));
    assert_eq!(
        vec!["Children of dune", "Dune Messiah"],
        search_titles(&mut repo, &filter, BY_TITLE)
    );
    assert_eq!(Ok(2), repo.count_books(Some(&filter)).map_err(|_| ()));
}

#[test]
fn filter_complement() {
    let mut repo = InMemoryRepo::new();
    populate(&mut repo);
    let filter = Filter::All(vec![
        Filter::segment(Segment::Finished),
        Filter::Not(Box::new(Filter::title_contains("dune"))),
    ]);
    assert_eq!(vec!["Solaris"], search_titles(&mut repo, &filter, &[]));
    let any = Filter::Any(vec![
        Filter::title_contains("solaris"),
        Filter::any_read_state([ReadState::Reading]),
    ]);
    assert_eq!(
        vec!["Anathem", "Solaris"],
        search_titles(&mut repo, &any, BY_TITLE)
    );
}

#[test]
fn order_by_author_descending() {
    let mut repo = InMemoryRepo::new();
    insert_book(
        &mut repo,
        Book::new("Dune", ReadState::ToRead).with_author(Author::new("Herbert", None)),
    );
    insert_book(&mut repo, Book::new("Beowulf", ReadState::ToRead));
    insert_book(
        &mut repo,
        Book::new("Solaris", ReadState::ToRead).with_author(Author::new("Lem", None)),
    );
    let filter = Filter::segment(Segment::ToRead);
    assert_eq!(
        vec!["Solaris", "Dune", "Beowulf"],
        search_titles(
            &mut repo,
            &filter,
            &[SortOrder::descending(SortField::AuthorLastName)],
        )
    );
}

#[test]
fn pagination() {
    let mut repo = InMemoryRepo::new();
    populate(&mut repo);
    let mut collector = Vec::<(RecordHeader, BookEntity)>::new();
    let pagination = Pagination {
        offset: Some(1),
        limit: Some(2),
    };
    let count = repo
        .search_books(&pagination, None, BY_TITLE, &mut collector)
        .unwrap();
    assert_eq!(2, count);
    assert_eq!(
        vec!["Children of dune", "Dune"],
        collector
            .into_iter()
            .map(|(_, entity)| entity.body.title)
            .collect::<Vec<_>>()
    );
}

#[test]
fn sections_of_to_read_segment() -> RepoResult<()> {
    let mut repo = InMemoryRepo::new();
    populate(&mut repo);
    let reading = insert_book(&mut repo, Book::new("Blindsight", ReadState::Reading));
    let sections = search_sections(&mut repo, Params::segment(Segment::ToRead, None))?;
    assert_eq!(2, sections.sections().len());
    assert_eq!(ReadState::Reading, sections.sections()[0].read_state());
    assert_eq!(ReadState::ToRead, sections.sections()[1].read_state());
    assert_eq!(
        Some(IndexPath { section: 0, row: 1 }),
        sections.index_path_of(&reading.hdr.uid)
    );
    Ok(())
}
