// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use strum::IntoEnumIterator as _;

use super::*;

#[test]
fn every_read_state_belongs_to_its_segment() {
    for read_state in ReadState::iter() {
        let segment = segment_for(read_state);
        assert!(states_for(segment).contains(&read_state));
        assert!(segment.contains(read_state));
    }
}

#[test]
fn every_read_state_belongs_to_exactly_one_segment() {
    for read_state in ReadState::iter() {
        let count = Segment::iter()
            .filter(|segment| segment.read_states().contains(&read_state))
            .count();
        assert_eq!(1, count, "{read_state:?}");
    }
}

#[test]
fn mapping() {
    assert_eq!(Segment::ToRead, segment_for(ReadState::ToRead));
    assert_eq!(Segment::ToRead, segment_for(ReadState::Reading));
    assert_eq!(Segment::Finished, segment_for(ReadState::Finished));
    assert_eq!(
        &[ReadState::ToRead, ReadState::Reading],
        states_for(Segment::ToRead)
    );
    assert_eq!(&[ReadState::Finished], states_for(Segment::Finished));
}

#[test]
fn default_read_state() {
    assert_eq!(ReadState::ToRead, Segment::ToRead.default_read_state());
    assert_eq!(ReadState::Finished, Segment::Finished.default_read_state());
}

#[test]
fn index() {
    assert_eq!(Segment::ToRead, Segment::default());
    for segment in Segment::iter() {
        assert_eq!(Some(segment), Segment::from_index(segment.index()));
    }
    assert_eq!(None, Segment::from_index(2));
    assert_eq!(None, Segment::from_index(256));
}

#[test]
fn section_titles() {
    assert!(Segment::ToRead.has_section_titles());
    assert!(!Segment::Finished.has_section_titles());
}
