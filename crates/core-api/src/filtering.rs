// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FilterModifier {
    Complement,
}

/// Predicates for matching strings
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StringPredicate<'s> {
    // Case-insensitive comparison
    StartsWith(Cow<'s, str>),
    StartsNotWith(Cow<'s, str>),
    EndsWith(Cow<'s, str>),
    EndsNotWith(Cow<'s, str>),
    Contains(Cow<'s, str>),
    ContainsNot(Cow<'s, str>),
    Matches(Cow<'s, str>),
    MatchesNot(Cow<'s, str>),
    // Case-sensitive comparison
    Equals(Cow<'s, str>),
    EqualsNot(Cow<'s, str>),
    Prefix(Cow<'s, str>),
}

impl StringPredicate<'_> {
    /// Evaluate the predicate for the given string.
    ///
    /// Case-insensitive comparisons are performed on the lowercase
    /// representations of both strings.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::StartsWith(arg) => lowercase(value).starts_with(&lowercase(arg)),
            Self::StartsNotWith(arg) => !lowercase(value).starts_with(&lowercase(arg)),
            Self::EndsWith(arg) => lowercase(value).ends_with(&lowercase(arg)),
            Self::EndsNotWith(arg) => !lowercase(value).ends_with(&lowercase(arg)),
            Self::Contains(arg) => lowercase(value).contains(&lowercase(arg)),
            Self::ContainsNot(arg) => !lowercase(value).contains(&lowercase(arg)),
            Self::Matches(arg) => lowercase(value) == lowercase(arg),
            Self::MatchesNot(arg) => lowercase(value) != lowercase(arg),
            Self::Equals(arg) => value == &**arg,
            Self::EqualsNot(arg) => value != &**arg,
            Self::Prefix(arg) => value.starts_with(&**arg),
        }
    }
}

fn lowercase(value: &str) -> String {
    value.to_lowercase()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringFilter<'s> {
    pub modifier: Option<FilterModifier>,
    pub value: Option<StringPredicate<'s>>,
}

impl StringFilter<'_> {
    /// Evaluate the filter for an optional string.
    ///
    /// A filter without a predicate matches only missing values.
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        let Self {
            modifier,
            value: predicate,
        } = self;
        let matched = match (predicate, value) {
            (Some(predicate), Some(value)) => predicate.matches(value),
            (Some(_), None) => false,
            (None, value) => value.is_none(),
        };
        match modifier {
            None => matched,
            Some(FilterModifier::Complement) => !matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ignores_case() {
        let predicate = StringPredicate::Contains("dune".into());
        assert!(predicate.matches("Dune Messiah"));
        assert!(predicate.matches("Children of DUNE"));
        assert!(!predicate.matches("Dun"));
        assert!(StringPredicate::Contains("".into()).matches(""));
    }

    #[test]
    fn case_sensitive_predicates() {
        assert!(StringPredicate::Prefix("Du".into()).matches("Dune"));
        assert!(!StringPredicate::Prefix("du".into()).matches("Dune"));
        assert!(StringPredicate::Equals("Dune".into()).matches("Dune"));
        assert!(!StringPredicate::Equals("dune".into()).matches("Dune"));
        assert!(StringPredicate::EqualsNot("dune".into()).matches("Dune"));
    }

    #[test]
    fn case_insensitive_predicates() {
        assert!(StringPredicate::StartsWith("THE".into()).matches("The Hobbit"));
        assert!(StringPredicate::StartsNotWith("a".into()).matches("The Hobbit"));
        assert!(StringPredicate::EndsWith("HOBBIT".into()).matches("The Hobbit"));
        assert!(!StringPredicate::EndsNotWith("bit".into()).matches("The Hobbit"));
        assert!(StringPredicate::Matches("the hobbit".into()).matches("The Hobbit"));
        assert!(!StringPredicate::MatchesNot("the hobbit".into()).matches("The Hobbit"));
        assert!(StringPredicate::ContainsNot("ring".into()).matches("The Hobbit"));
    }

    #[test]
    fn string_filter_modifier() {
        let filter = StringFilter {
            modifier: None,
            value: Some(StringPredicate::Contains("ring".into())),
        };
        assert!(filter.matches(Some("The Lord of the Rings")));
        assert!(!filter.matches(None));
        let complement = StringFilter {
            modifier: Some(FilterModifier::Complement),
            ..filter.clone()
        };
        assert!(!complement.matches(Some("The Lord of the Rings")));
        assert!(complement.matches(None));
    }

    #[test]
    fn string_filter_without_predicate_matches_missing_values() {
        let filter = StringFilter::default();
        assert!(filter.matches(None));
        assert!(!filter.matches(Some("")));
    }
}
