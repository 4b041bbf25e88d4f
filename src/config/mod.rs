// Kelpie - GPL-3.0-or-later
// This file is part of Kelpie.
//
// Copyright (C) 2021-2026 Kelpie Team
//
// Kelpie is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Kelpie is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Kelpie.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global user configuration stored in config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GlobalConfig {
    /// Display density override for the About window's logo selection.
    /// `None` means the value reported by the host environment is used.
    #[serde(default)]
    pub scale_override: Option<f32>,

    /// Revision hash of the last build that ran with this config
    #[serde(default)]
    pub last_seen_revision: String,
}

impl GlobalConfig {
    /// Get the path to the global config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            let app_config = config_dir.join("kelpie");
            Some(app_config.join("config.json"))
        } else {
            None
        }
    }

    /// Load global config from disk, returning defaults if not found
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                log::info!("Loading global config from {path:?}");
                if let Some(config) = Self::load_from(&path) {
                    return config;
                }
                log::warn!("Config at {path:?} is unreadable, using defaults");
            } else {
                log::info!("No global config found, using defaults");
            }
        }
        Self::default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save global config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path().context("no config directory on this platform")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {parent:?}"))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents).with_context(|| format!("writing config to {path:?}"))?;
        log::info!("Saved global config to {path:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = GlobalConfig {
            scale_override: Some(2.0),
            last_seen_revision: "abc123".to_string(),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(GlobalConfig::load_from(&path), Some(config));
    }

    #[test]
    fn test_config_missing_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(GlobalConfig::load_from(&path), Some(GlobalConfig::default()));
    }

    #[test]
    fn test_config_garbage_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(GlobalConfig::load_from(&path), None);
    }
}
