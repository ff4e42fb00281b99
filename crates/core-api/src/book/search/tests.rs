// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn build_filter_without_search_text() {
    let expected = Filter::ReadState(vec![ReadState::ToRead, ReadState::Reading]);
    assert_eq!(expected, build_filter(Segment::ToRead.read_states(), None));
    assert_eq!(
        expected,
        build_filter(Segment::ToRead.read_states(), Some(""))
    );
}

#[test]
fn build_filter_with_search_text() {
    assert_eq!(
        Filter::All(vec![
            Filter::ReadState(vec![ReadState::Finished]),
            Filter::Title(StringFilter {
                modifier: None,
                value: Some(StringPredicate::Contains("Dune".into())),
            }),
        ]),
        build_filter(Segment::Finished.read_states(), Some("Dune"))
    );
}

#[test]
fn segment_params() {
    let params = Params::segment(Segment::Finished, None);
    assert_eq!(Some(Filter::segment(Segment::Finished)), params.filter);
    assert_eq!(DEFAULT_ORDERING, params.ordering.as_slice());
}

#[test]
fn section_ordering_is_prepended() {
    let params = Params {
        filter: None,
        ordering: vec![
            SortOrder::descending(SortField::UpdatedAt),
            SortOrder::descending(SortField::ReadState),
        ],
    }
    .with_section_ordering();
    assert_eq!(
        vec![
            SortOrder::ascending(SortField::ReadState),
            SortOrder::descending(SortField::UpdatedAt),
        ],
        params.ordering
    );
}

#[test]
fn section_ordering_is_preserved() {
    let ordering = vec![
        SortOrder::descending(SortField::ReadState),
        SortOrder::ascending(SortField::Title),
    ];
    let params = Params {
        filter: None,
        ordering: ordering.clone(),
    }
    .with_section_ordering();
    assert_eq!(ordering, params.ordering);
}
