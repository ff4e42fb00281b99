// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use itertools::Itertools as _;
use readlist_core::{BookEntity, BookUid, ReadState};

/// Locates a row within [`Sections`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

/// Consecutive books that share the same read state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    read_state: ReadState,
    entities: Vec<BookEntity>,
}

impl Section {
    #[must_use]
    pub const fn read_state(&self) -> ReadState {
        self.read_state
    }

    #[must_use]
    pub fn entities(&self) -> &[BookEntity] {
        &self.entities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Query results grouped by read state.
///
/// Sections are never empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// Group books into sections.
    ///
    /// The books are expected to be ordered by read state. Otherwise
    /// multiple sections for the same read state would be created.
    #[must_use]
    pub fn group_by_read_state(entities: impl IntoIterator<Item = BookEntity>) -> Self {
        let chunks = entities
            .into_iter()
            .chunk_by(|entity| entity.body.read_state);
        let sections = chunks
            .into_iter()
            .map(|(read_state, entities)| Section {
                read_state,
                entities: entities.collect(),
            })
            .collect::<Vec<_>>();
        debug_assert!(
            sections.iter().map(Section::read_state).all_unique(),
            "unordered read states"
        );
        Self { sections }
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// The total number of books in all sections.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn get(&self, index_path: IndexPath) -> Option<&BookEntity> {
        let IndexPath { section, row } = index_path;
        self.sections.get(section)?.entities.get(row)
    }

    #[must_use]
    pub fn index_path_of(&self, uid: &BookUid) -> Option<IndexPath> {
        self.sections
            .iter()
            .enumerate()
            .find_map(|(section, entries)| {
                entries
                    .entities
                    .iter()
                    .position(|entity| &entity.hdr.uid == uid)
                    .map(|row| IndexPath { section, row })
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookEntity> {
        self.sections
            .iter()
            .flat_map(|section| section.entities.iter())
    }
}

#[cfg(test)]
mod tests;
