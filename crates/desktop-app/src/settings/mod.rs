// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
};

use readlist_core::Segment;
use serde::{Deserialize, Serialize};

pub const FILE_NAME: &str = "readlist_settings";

pub const FILE_SUFFIX: &str = "ron";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// The segment that is shown on startup.
    #[serde(default)]
    pub initial_segment: Segment,

    /// Books are imported from this file on startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,
}

impl State {
    /// Load the saved settings or fall back to the defaults.
    #[must_use]
    pub fn restore_from_parent_dir(parent_dir: &Path) -> Self {
        log::info!("Loading saved settings from: {}", parent_dir.display());
        Self::load(parent_dir)
            .map_err(|err| {
                log::warn!("Failed to load saved settings: {err}");
            })
            .unwrap_or_default()
    }

    pub fn load(parent_dir: &Path) -> anyhow::Result<Self> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Loading settings from file: {}", file_path.display());
        match fs::read_to_string(&file_path) {
            Ok(text) => Self::from_ron_str(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Default::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, parent_dir: &Path) -> anyhow::Result<()> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Saving settings into file: {}", file_path.display());
        let text = self.to_ron_string()?;
        if let Some(parent_path) = file_path.parent() {
            fs::create_dir_all(parent_path)?;
        }
        fs::write(&file_path, text)?;
        Ok(())
    }

    pub async fn save_spawn_blocking(self, parent_dir: PathBuf) -> anyhow::Result<()> {
        match tokio::runtime::Handle::current()
            .spawn_blocking(move || self.save(&parent_dir))
            .await
        {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => {
                anyhow::bail!("failed to save: {err}");
            }
            Err(err) => {
                anyhow::bail!("failed to join blocking task after saving: {err}");
            }
        }
    }

    pub fn from_ron_str(text: &str) -> anyhow::Result<Self> {
        ron::from_str(text).map_err(Into::into)
    }

    pub fn to_ron_string(&self) -> anyhow::Result<String> {
        ron::ser::to_string_pretty(self, Default::default()).map_err(Into::into)
    }

    pub fn update_initial_segment(&mut self, initial_segment: Segment) -> bool {
        if self.initial_segment == initial_segment {
            // No effect
            return false;
        }
        log::info!("Updating initial segment: {initial_segment:?}");
        self.initial_segment = initial_segment;
        true
    }

    pub fn update_catalog_file(&mut self, catalog_file: Option<&Path>) -> bool {
        if self.catalog_file.as_deref() == catalog_file {
            // No effect
            return false;
        }
        if let Some(catalog_file) = catalog_file {
            log::info!("Updating catalog file: {}", catalog_file.display());
        } else {
            log::info!("Resetting catalog file");
        }
        self.catalog_file = catalog_file.map(Path::to_path_buf);
        true
    }
}

#[must_use]
fn new_settings_file_path(parent_dir: PathBuf) -> PathBuf {
    let mut path_buf = parent_dir;
    path_buf.push(FILE_NAME);
    path_buf.set_extension(FILE_SUFFIX);
    path_buf
}

#[cfg(test)]
mod tests;
