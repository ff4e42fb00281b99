// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Catalog files contain a RON list of books.

use std::{fs, path::Path};

use anyhow::Context as _;
use readlist_core::Book;

pub fn parse_books(text: &str) -> anyhow::Result<Vec<Book>> {
    ron::from_str(text).map_err(Into::into)
}

pub fn load_books(file_path: &Path) -> anyhow::Result<Vec<Book>> {
    let display_path = file_path.display();
    log::info!("Loading catalog from file: {display_path}");
    let text = fs::read_to_string(file_path)
        .with_context(|| format!("failed to read catalog file {display_path}"))?;
    parse_books(&text).with_context(|| format!("failed to parse catalog file {display_path}"))
}
