// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Author {
    pub last_name: String,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub first_names: Option<String>,
}

impl Author {
    #[must_use]
    pub fn new(last_name: impl Into<String>, first_names: Option<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_names,
        }
    }

    /// First names followed by the last name, e.g. "Ursula K. Le Guin".
    #[must_use]
    pub fn display_first_last(&self) -> String {
        match &self.first_names {
            Some(first_names) => format!("{first_names} {}", self.last_name),
            None => self.last_name.clone(),
        }
    }

    /// Last name followed by a comma and the first names, e.g. "Le Guin, Ursula K.".
    ///
    /// Suitable for sorting.
    #[must_use]
    pub fn display_last_comma_first(&self) -> String {
        match &self.first_names {
            Some(first_names) => format!("{}, {first_names}", self.last_name),
            None => self.last_name.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AuthorInvalidity {
    LastNameEmpty,
    FirstNamesEmpty,
}

impl Validate for Author {
    type Invalidity = AuthorInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            last_name,
            first_names,
        } = self;
        ValidationContext::new()
            .invalidate_if(last_name.trim().is_empty(), Self::Invalidity::LastNameEmpty)
            .invalidate_if(
                first_names
                    .as_ref()
                    .is_some_and(|first_names| first_names.trim().is_empty()),
                Self::Invalidity::FirstNamesEmpty,
            )
            .into()
    }
}

#[cfg(test)]
mod tests;
