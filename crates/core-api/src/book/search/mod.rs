// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use readlist_core::{ReadState, Segment};

use crate::{SortDirection, filtering::*};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortField {
    AuthorLastName,
    CreatedAt,
    ReadState,
    Title,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    #[must_use]
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    #[must_use]
    pub const fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// Books are listed in sections by read state and then by title.
pub const DEFAULT_ORDERING: &[SortOrder] = &[
    SortOrder::ascending(SortField::ReadState),
    SortOrder::ascending(SortField::Title),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Any of the given read states.
    ReadState(Vec<ReadState>),
    Title(StringFilter<'static>),
    All(Vec<Filter>),
    Any(Vec<Filter>),
    Not(Box<Filter>),
}

impl Filter {
    #[must_use]
    pub fn any_read_state(read_states: impl IntoIterator<Item = ReadState>) -> Self {
        Self::ReadState(read_states.into_iter().collect())
    }

    #[must_use]
    pub fn segment(segment: Segment) -> Self {
        Self::any_read_state(segment.read_states().iter().copied())
    }

    /// Case-insensitive substring match on the title.
    #[must_use]
    pub fn title_contains(text: impl Into<String>) -> Self {
        Self::Title(StringFilter {
            modifier: None,
            value: Some(StringPredicate::Contains(text.into().into())),
        })
    }
}

/// Compose the filter for a set of read states and an optional search text.
///
/// An empty search text is treated as if no text was given.
#[must_use]
pub fn build_filter(read_states: &[ReadState], search_text: Option<&str>) -> Filter {
    let read_state_filter = Filter::any_read_state(read_states.iter().copied());
    match search_text.filter(|text| !text.is_empty()) {
        Some(text) => Filter::All(vec![read_state_filter, Filter::title_contains(text)]),
        None => read_state_filter,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pub filter: Option<Filter>,
    pub ordering: Vec<SortOrder>,
}

impl Params {
    /// Query all books of a segment, optionally restricted by a search text.
    #[must_use]
    pub fn segment(segment: Segment, search_text: Option<&str>) -> Self {
        Self {
            filter: Some(build_filter(segment.read_states(), search_text)),
            ordering: DEFAULT_ORDERING.to_vec(),
        }
    }

    /// Ensure that results are ordered by read state first.
    ///
    /// Required for grouping the results into contiguous sections.
    #[must_use]
    pub fn with_section_ordering(mut self) -> Self {
        if self
            .ordering
            .first()
            .is_some_and(|order| order.field == SortField::ReadState)
        {
            return self;
        }
        self.ordering
            .retain(|order| order.field != SortField::ReadState);
        self.ordering
            .insert(0, SortOrder::ascending(SortField::ReadState));
        self
    }
}

#[cfg(test)]
mod tests;
