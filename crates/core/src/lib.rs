// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(rustdoc::broken_intra_doc_links)]

mod entity;
pub use self::entity::*;

pub mod author;
pub use self::author::Author;

pub mod book;
pub use self::book::{
    Book, Entity as BookEntity, EntityHeader as BookHeader, EntityUid as BookUid, ReadState,
};

pub mod isbn;
pub use self::isbn::Isbn13;

pub mod segment;
pub use self::segment::Segment;

pub mod prelude {
    pub(crate) use semval::prelude::*;
    // Re-export trait methods from semval
    pub use semval::{IsValid, Validate as _};

    pub(crate) use crate::entity::*;
}
