// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use strum::{EnumIter, FromRepr};
use thiserror::Error;

use crate::{
    author::{Author, AuthorInvalidity},
    isbn::Isbn13,
    prelude::*,
};

///////////////////////////////////////////////////////////////////////
// ReadState
///////////////////////////////////////////////////////////////////////

/// Lifecycle state of a book.
///
/// The ordinals are persistent and determine the order of sections.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, FromRepr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ReadState {
    Reading = 1,
    #[default]
    ToRead = 2,
    Finished = 3,
}

pub type ReadStateOrdinal = u8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown read state ordinal {0}")]
pub struct UnknownReadState(pub ReadStateOrdinal);

impl ReadState {
    #[must_use]
    pub const fn ordinal(self) -> ReadStateOrdinal {
        self as ReadStateOrdinal
    }

    /// Human-readable description, e.g. for section headers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Reading => "Reading",
            Self::ToRead => "To Read",
            Self::Finished => "Finished",
        }
    }
}

impl TryFrom<ReadStateOrdinal> for ReadState {
    type Error = UnknownReadState;

    fn try_from(ordinal: ReadStateOrdinal) -> Result<Self, Self::Error> {
        Self::from_repr(ordinal).ok_or(UnknownReadState(ordinal))
    }
}

impl fmt::Display for ReadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

///////////////////////////////////////////////////////////////////////
// Book
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Book {
    pub title: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub read_state: ReadState,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub author: Option<Author>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub isbn13: Option<Isbn13>,
}

impl Book {
    #[must_use]
    pub fn new(title: impl Into<String>, read_state: ReadState) -> Self {
        Self {
            title: title.into(),
            read_state,
            author: None,
            isbn13: None,
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    #[must_use]
    pub fn with_isbn13(mut self, isbn13: Isbn13) -> Self {
        self.isbn13 = Some(isbn13);
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BookInvalidity {
    TitleEmpty,
    Author(AuthorInvalidity),
}

impl Validate for Book {
    type Invalidity = BookInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            title,
            author,
            read_state: _,
            isbn13: _,
        } = self;
        ValidationContext::new()
            .invalidate_if(title.trim().is_empty(), Self::Invalidity::TitleEmpty)
            .validate_with(author, Self::Invalidity::Author)
            .into()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EntityType;

pub type EntityUid = EntityUidTyped<EntityType>;

pub type EntityHeader = EntityHeaderTyped<EntityType>;

pub type Entity = crate::entity::Entity<EntityType, Book>;
