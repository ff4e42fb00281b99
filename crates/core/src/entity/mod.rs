// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::Deref,
    str::FromStr,
};

use thiserror::Error;
use ulid::Ulid;

use crate::prelude::*;

///////////////////////////////////////////////////////////////////////
// EntityUid
///////////////////////////////////////////////////////////////////////

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityUid(Ulid);

#[derive(Debug, Error)]
#[error("invalid entity UID: {0}")]
pub struct DecodeError(#[from] ulid::DecodeError);

impl EntityUid {
    /// Generate a new, unique identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    #[must_use]
    pub const fn nil() -> Self {
        Self(Ulid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn decode_from(encoded: &str) -> Result<Self, DecodeError> {
        Ulid::from_string(encoded).map(Self).map_err(Into::into)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityUidInvalidity {
    Nil,
}

impl Validate for EntityUid {
    type Invalidity = EntityUidInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(self.is_nil(), Self::Invalidity::Nil)
            .into()
    }
}

impl fmt::Display for EntityUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntityUid {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode_from(s)
    }
}

/// An [`EntityUid`] tagged with the type of entity it refers to.
pub struct EntityUidTyped<T> {
    untyped: EntityUid,
    _phantom: PhantomData<T>,
}

impl<T> EntityUidTyped<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_untyped(EntityUid::new())
    }

    #[must_use]
    pub const fn from_untyped(untyped: EntityUid) -> Self {
        Self {
            untyped,
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub const fn into_untyped(self) -> EntityUid {
        self.untyped
    }

    pub fn decode_from(encoded: &str) -> Result<Self, DecodeError> {
        EntityUid::decode_from(encoded).map(Self::from_untyped)
    }
}

// The following traits are implemented manually to avoid
// bounds on the phantom type parameter.

impl<T> fmt::Debug for EntityUidTyped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityUidTyped")
            .field(&self.untyped)
            .finish()
    }
}

impl<T> Clone for EntityUidTyped<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityUidTyped<T> {}

impl<T> Default for EntityUidTyped<T> {
    fn default() -> Self {
        Self::from_untyped(EntityUid::default())
    }
}

impl<T> PartialEq for EntityUidTyped<T> {
    fn eq(&self, other: &Self) -> bool {
        self.untyped == other.untyped
    }
}

impl<T> Eq for EntityUidTyped<T> {}

impl<T> Hash for EntityUidTyped<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.untyped.hash(state);
    }
}

impl<T> Deref for EntityUidTyped<T> {
    type Target = EntityUid;

    fn deref(&self) -> &Self::Target {
        &self.untyped
    }
}

impl<T> fmt::Display for EntityUidTyped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.untyped.fmt(f)
    }
}

impl<T> FromStr for EntityUidTyped<T> {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode_from(s)
    }
}

impl<T> Validate for EntityUidTyped<T> {
    type Invalidity = EntityUidInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        self.untyped.validate()
    }
}

///////////////////////////////////////////////////////////////////////
// EntityRevision
///////////////////////////////////////////////////////////////////////

// A 1-based, non-negative, monotone increasing number
pub type EntityRevisionNumber = u64;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EntityRevision(EntityRevisionNumber);

impl EntityRevision {
    pub const INITIAL: Self = Self(1);

    #[must_use]
    pub fn is_initial(self) -> bool {
        self == Self::INITIAL
    }

    /// The next revision or `None` on overflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        debug_assert!(self.is_valid());
        let Self(prev) = self;
        prev.checked_add(1).map(Self)
    }

    /// The previous revision or `None` if initial.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        debug_assert!(self.is_valid());
        let Self(next) = self;
        next.checked_sub(1).map(Self).filter(IsValid::is_valid)
    }

    #[must_use]
    pub const fn from_inner(inner: EntityRevisionNumber) -> Self {
        Self(inner)
    }

    #[must_use]
    pub const fn to_inner(self) -> EntityRevisionNumber {
        let Self(inner) = self;
        inner
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EntityRevisionInvalidity {
    OutOfRange,
}

impl Validate for EntityRevision {
    type Invalidity = EntityRevisionInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(*self < Self::INITIAL, Self::Invalidity::OutOfRange)
            .into()
    }
}

impl fmt::Display for EntityRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(number) = self;
        number.fmt(f)
    }
}

///////////////////////////////////////////////////////////////////////
// EntityHeader
///////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct EntityHeaderTyped<T> {
    pub uid: EntityUidTyped<T>,
    pub rev: EntityRevision,
}

impl<T> EntityHeaderTyped<T> {
    #[must_use]
    pub fn initial_random() -> Self {
        Self::initial_with_uid(EntityUidTyped::new())
    }

    #[must_use]
    pub const fn initial_with_uid(uid: EntityUidTyped<T>) -> Self {
        Self {
            uid,
            rev: EntityRevision::INITIAL,
        }
    }

    /// The header of the next revision or `None` on overflow.
    #[must_use]
    pub fn next_rev(self) -> Option<Self> {
        let Self { uid, rev } = self;
        let rev = rev.next()?;
        Some(Self { uid, rev })
    }
}

impl<T> Clone for EntityHeaderTyped<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityHeaderTyped<T> {}

impl<T> PartialEq for EntityHeaderTyped<T> {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid && self.rev == other.rev
    }
}

impl<T> Eq for EntityHeaderTyped<T> {}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EntityHeaderInvalidity {
    Uid(EntityUidInvalidity),
    Revision(EntityRevisionInvalidity),
}

impl<T> Validate for EntityHeaderTyped<T> {
    type Invalidity = EntityHeaderInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(&self.uid, Self::Invalidity::Uid)
            .validate_with(&self.rev, Self::Invalidity::Revision)
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Entity
///////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct Entity<T, B> {
    pub hdr: EntityHeaderTyped<T>,
    pub body: B,
}

impl<T, B> Entity<T, B> {
    pub fn new(hdr: EntityHeaderTyped<T>, body: impl Into<B>) -> Self {
        Self {
            hdr,
            body: body.into(),
        }
    }
}

impl<T, B> Clone for Entity<T, B>
where
    B: Clone,
{
    fn clone(&self) -> Self {
        let Self { hdr, body } = self;
        Self {
            hdr: *hdr,
            body: body.clone(),
        }
    }
}

impl<T, B> PartialEq for Entity<T, B>
where
    B: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.hdr == other.hdr && self.body == other.body
    }
}

impl<T, B> Eq for Entity<T, B> where B: Eq {}

impl<T, B> From<Entity<T, B>> for (EntityHeaderTyped<T>, B) {
    fn from(from: Entity<T, B>) -> Self {
        let Entity { hdr, body } = from;
        (hdr, body)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EntityInvalidity<I: Invalidity> {
    Header(EntityHeaderInvalidity),
    Body(I),
}

impl<T, B> Validate for Entity<T, B>
where
    B: Validate,
{
    type Invalidity = EntityInvalidity<B::Invalidity>;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(&self.hdr, EntityInvalidity::Header)
            .validate_with(&self.body, EntityInvalidity::Body)
            .into()
    }
}
