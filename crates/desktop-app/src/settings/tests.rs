// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn default_settings_from_empty_struct() {
    assert_eq!(State::default(), State::from_ron_str("()").unwrap());
}

#[test]
fn serialize_deserialize_roundtrip() {
    let settings = State {
        initial_segment: Segment::Finished,
        catalog_file: Some(PathBuf::from("/tmp/books.ron")),
    };
    let text = settings.to_ron_string().unwrap();
    assert!(text.contains("Finished"));
    assert_eq!(settings, State::from_ron_str(&text).unwrap());
}

#[test]
fn omit_missing_catalog_file() {
    let text = State::default().to_ron_string().unwrap();
    assert!(!text.contains("catalog_file"));
}

#[test]
fn reject_unknown_segment() {
    assert!(State::from_ron_str("(initial_segment: Reading)").is_err());
}

#[test]
fn update_initial_segment() {
    let mut settings = State::default();
    assert!(!settings.update_initial_segment(Segment::ToRead));
    assert!(settings.update_initial_segment(Segment::Finished));
    assert_eq!(Segment::Finished, settings.initial_segment);
}

#[test]
fn update_catalog_file() {
    let mut settings = State::default();
    assert!(!settings.update_catalog_file(None));
    assert!(settings.update_catalog_file(Some(Path::new("books.ron"))));
    assert!(!settings.update_catalog_file(Some(Path::new("books.ron"))));
    assert!(settings.update_catalog_file(None));
    assert!(settings.catalog_file.is_none());
}

#[test]
fn settings_file_path() {
    let path = new_settings_file_path(PathBuf::from("/home/user/.config/readlist"));
    assert_eq!(
        Path::new("/home/user/.config/readlist/readlist_settings.ron"),
        path
    );
}
