// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Classification of books into user-facing segments.
//!
//! Each [`ReadState`] belongs to exactly one [`Segment`]. The mapping
//! in both directions is defined here and nowhere else.

use strum::{EnumIter, FromRepr};

use crate::book::ReadState;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, FromRepr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Segment {
    /// Books that are either waiting to be read or currently being read.
    #[default]
    ToRead = 0,

    Finished = 1,
}

const TO_READ_STATES: &[ReadState] = &[ReadState::ToRead, ReadState::Reading];

const FINISHED_STATES: &[ReadState] = &[ReadState::Finished];

impl Segment {
    #[must_use]
    pub const fn for_read_state(read_state: ReadState) -> Self {
        match read_state {
            ReadState::ToRead | ReadState::Reading => Self::ToRead,
            ReadState::Finished => Self::Finished,
        }
    }

    /// All read states that belong to this segment.
    ///
    /// Never empty. The first element is the preferred read state
    /// for new books.
    #[must_use]
    pub const fn read_states(self) -> &'static [ReadState] {
        match self {
            Self::ToRead => TO_READ_STATES,
            Self::Finished => FINISHED_STATES,
        }
    }

    #[must_use]
    pub fn contains(self, read_state: ReadState) -> bool {
        Self::for_read_state(read_state) == self
    }

    /// The read state for books that are added while this segment is selected.
    #[must_use]
    pub const fn default_read_state(self) -> ReadState {
        self.read_states()[0]
    }

    /// Position in a segment control.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    /// Whether sections within this segment should be titled.
    ///
    /// Segments that cover only a single read state don't need
    /// section headers.
    #[must_use]
    pub const fn has_section_titles(self) -> bool {
        self.read_states().len() > 1
    }
}

#[must_use]
pub const fn segment_for(read_state: ReadState) -> Segment {
    Segment::for_read_state(read_state)
}

#[must_use]
pub const fn states_for(segment: Segment) -> &'static [ReadState] {
    segment.read_states()
}

#[cfg(test)]
mod tests;
