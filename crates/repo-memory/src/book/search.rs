// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;

use readlist_core::BookEntity;
use readlist_core_api::book::search::{Filter, SortField, SortOrder};

use crate::StoredBook;

pub(super) trait BookSearchPredicate {
    fn matches(&self, entity: &BookEntity) -> bool;
}

impl BookSearchPredicate for Filter {
    fn matches(&self, entity: &BookEntity) -> bool {
        match self {
            Self::ReadState(read_states) => read_states.contains(&entity.body.read_state),
            Self::Title(filter) => filter.matches(Some(entity.body.title.as_str())),
            Self::All(filters) => filters.iter().all(|filter| filter.matches(entity)),
            Self::Any(filters) => filters.iter().any(|filter| filter.matches(entity)),
            Self::Not(filter) => !filter.matches(entity),
        }
    }
}

fn author_last_name_key(stored: &StoredBook) -> Option<String> {
    let author = stored.entity.body.author.as_ref()?;
    Some(author.last_name.to_lowercase())
}

pub(super) trait BookSearchComparator {
    fn compare(&self, lhs: &StoredBook, rhs: &StoredBook) -> Ordering;
}

impl BookSearchComparator for SortOrder {
    fn compare(&self, lhs: &StoredBook, rhs: &StoredBook) -> Ordering {
        let ordering = match self.field {
            SortField::AuthorLastName => {
                // Books without an author are listed first
                author_last_name_key(lhs).cmp(&author_last_name_key(rhs))
            }
            SortField::CreatedAt => lhs.header.created_at.cmp(&rhs.header.created_at),
            SortField::ReadState => lhs.entity.body.read_state.cmp(&rhs.entity.body.read_state),
            SortField::Title => {
                let lhs = &lhs.entity.body.title;
                let rhs = &rhs.entity.body.title;
                lhs.to_lowercase()
                    .cmp(&rhs.to_lowercase())
                    .then_with(|| lhs.cmp(rhs))
            }
            SortField::UpdatedAt => lhs.header.updated_at.cmp(&rhs.header.updated_at),
        };
        self.direction.apply(ordering)
    }
}
