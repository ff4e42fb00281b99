// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn display_names_with_first_names() {
    let author = Author::new("Herbert", Some("Frank".into()));
    assert_eq!("Frank Herbert", author.display_first_last());
    assert_eq!("Herbert, Frank", author.display_last_comma_first());
}

#[test]
fn display_names_without_first_names() {
    let author = Author::new("Homer", None);
    assert_eq!("Homer", author.display_first_last());
    assert_eq!("Homer", author.display_last_comma_first());
}

#[test]
fn validate() {
    assert!(Author::new("Le Guin", Some("Ursula K.".into())).is_valid());
    assert!(Author::new("Le Guin", None).is_valid());
    assert!(!Author::new(" ", None).is_valid());
    assert!(!Author::new("Le Guin", Some(String::new())).is_valid());
}
