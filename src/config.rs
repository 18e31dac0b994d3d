//! Persisted launcher settings.
//!
//! The settings live in a YAML document at a fixed relative path. On first
//! run the file is created with defaults and the program exits so the user
//! can fill it in; afterwards it is loaded once and never mutated. Unknown
//! keys are ignored so newer documents keep working with older binaries.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::msu::MsuType;

/// Fixed relative path of the settings document.
pub const SETTINGS_FILE: &str = "rom-launcher.yml";

/// Launcher configuration. Field names follow the on-disk YAML keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory searched for MSU collections.
    #[serde(rename = "MsuPath")]
    pub msu_path: String,

    /// Directory the staged ROM copies are placed under.
    #[serde(rename = "TargetPath")]
    pub target_path: String,

    /// Application to launch against the staged ROM. When unset the ROM is
    /// opened through the OS file association.
    #[serde(rename = "LaunchApplication")]
    pub launch_application: Option<String>,

    /// Argument template for the launch application. A literal `%rom%`
    /// token is replaced with the staged ROM path.
    #[serde(rename = "LaunchArguments")]
    pub launch_arguments: Option<String>,

    /// Allow-list of acceptable MSU type names. Matched against both the
    /// display name and the internal name; unset means all types pass.
    #[serde(rename = "MsuTypeFilter")]
    pub msu_type_filter: Option<Vec<String>>,
}

impl Settings {
    /// Load the settings document, bootstrapping it on first run.
    ///
    /// Returns `Ok(None)` when the file did not exist yet: a default
    /// document has been written and the run should end so the user can
    /// edit it. Parse failures are fatal.
    pub fn load_or_init(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            let yaml = serde_yaml::to_string(&Settings::default())
                .context("Failed to serialize default settings")?;
            std::fs::write(path, yaml)
                .with_context(|| format!("Failed to create settings file {}", path.display()))?;
            info!("Created settings file at {}", path.display());
            return Ok(None);
        }

        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        info!("Loaded settings file at {}", path.display());

        Ok(Some(settings))
    }

    /// Allow-list predicate for MSU types.
    pub fn msu_type_matches(&self, msu_type: &MsuType) -> bool {
        match &self.msu_type_filter {
            None => true,
            Some(filter) => {
                filter.contains(&msu_type.display_name) || filter.contains(&msu_type.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msu_type(name: &str, display_name: &str) -> MsuType {
        MsuType {
            name: name.to_string(),
            display_name: display_name.to_string(),
        }
    }

    #[test]
    fn test_unset_filter_passes_everything() {
        let settings = Settings::default();

        assert!(settings.msu_type_matches(&msu_type("snes", "Super Nintendo")));
    }

    #[test]
    fn test_filter_matches_display_name() {
        let settings = Settings {
            msu_type_filter: Some(vec!["Super Nintendo".to_string()]),
            ..Settings::default()
        };

        assert!(settings.msu_type_matches(&msu_type("snes", "Super Nintendo")));
    }

    #[test]
    fn test_filter_matches_internal_name() {
        let settings = Settings {
            msu_type_filter: Some(vec!["snes".to_string()]),
            ..Settings::default()
        };

        assert!(settings.msu_type_matches(&msu_type("snes", "Super Nintendo")));
    }

    #[test]
    fn test_filter_rejects_unlisted_type() {
        let settings = Settings {
            msu_type_filter: Some(vec!["snes".to_string()]),
            ..Settings::default()
        };

        assert!(!settings.msu_type_matches(&msu_type("gb", "Game Boy")));
    }
}
