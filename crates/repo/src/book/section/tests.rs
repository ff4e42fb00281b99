// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use readlist_core::{Book, BookHeader};

use super::*;

fn new_entity(title: &str, read_state: ReadState) -> BookEntity {
    BookEntity::new(BookHeader::initial_random(), Book::new(title, read_state))
}

#[test]
fn group_empty() {
    let sections = Sections::group_by_read_state(std::iter::empty());
    assert!(sections.is_empty());
    assert_eq!(0, sections.total_count());
    assert_eq!(None, sections.index_path_of(&BookUid::new()));
}

#[test]
fn group_by_read_state() {
    let entities = vec![
        new_entity("Anathem", ReadState::Reading),
        new_entity("Dune", ReadState::ToRead),
        new_entity("Emma", ReadState::ToRead),
        new_entity("Solaris", ReadState::Finished),
    ];
    let emma_uid = entities[2].hdr.uid;
    let sections = Sections::group_by_read_state(entities);
    assert_eq!(
        vec![ReadState::Reading, ReadState::ToRead, ReadState::Finished],
        sections
            .sections()
            .iter()
            .map(Section::read_state)
            .collect::<Vec<_>>()
    );
    assert_eq!(4, sections.total_count());
    let index_path = IndexPath { section: 1, row: 1 };
    assert_eq!(Some(index_path), sections.index_path_of(&emma_uid));
    assert_eq!(
        Some("Emma"),
        sections
            .get(index_path)
            .map(|entity| entity.body.title.as_str())
    );
    assert_eq!(None, sections.get(IndexPath { section: 3, row: 0 }));
    assert_eq!(
        vec!["Anathem", "Dune", "Emma", "Solaris"],
        sections
            .iter()
            .map(|entity| entity.body.title.as_str())
            .collect::<Vec<_>>()
    );
}
