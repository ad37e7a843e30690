//! # Configuration
//!
//! Screen configuration is loaded with [`confique`], layering environment
//! variables over TOML files over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Values are resolved in priority order:
//! 1. **Environment variables**: `READERPREFS_SCREEN`, `READERPREFS_GROUPS`
//!    (comma separated).
//! 2. **Explicit file**: passed with `--config` on the command line.
//! 3. **User file**: `readerprefs.toml` in the OS config directory.
//! 4. **Defaults**: every group, built-in screen.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `groups` | all | Setting groups decorated on the screen, in order |
//! | `screen` | built-in | TOML screen definition to load instead of the default screen |
//!
//! ```toml
//! groups = ["render", "memory"]
//! screen = "/etc/readerprefs/screen.toml"
//! ```

use crate::error::Result;
use crate::keys::SettingsGroup;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "readerprefs.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefsConfig {
    /// Groups to decorate. When absent, all of them.
    #[config(env = "READERPREFS_GROUPS", parse_env = confique::env::parse::list_by_comma)]
    pub groups: Option<Vec<SettingsGroup>>,

    /// Screen definition file. When absent, the built-in screen is used.
    #[config(env = "READERPREFS_SCREEN")]
    pub screen: Option<PathBuf>,
}

impl PrefsConfig {
    /// Load from the environment and the given files, earlier files winning.
    /// Missing files are skipped.
    pub fn load<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        Ok(builder.load()?)
    }

    /// Configured groups, or every group when none are configured.
    pub fn groups(&self) -> Vec<SettingsGroup> {
        match &self.groups {
            Some(groups) if !groups.is_empty() => groups.clone(),
            _ => SettingsGroup::ALL.to_vec(),
        }
    }

    pub fn screen(&self) -> Option<&Path> {
        self.screen.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_groups() {
        let config = PrefsConfig::default();
        assert_eq!(config.groups(), SettingsGroup::ALL.to_vec());
        assert!(config.screen().is_none());
    }

    #[test]
    fn empty_group_list_means_all() {
        let config = PrefsConfig {
            groups: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(config.groups().len(), 7);
    }

    #[test]
    fn configured_groups_keep_order() {
        let config = PrefsConfig {
            groups: Some(vec![SettingsGroup::Ui, SettingsGroup::Book]),
            ..Default::default()
        };
        assert_eq!(config.groups(), vec![SettingsGroup::Ui, SettingsGroup::Book]);
    }

    #[test]
    fn load_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "groups = [\"render\", \"memory\"]\nscreen = \"screen.toml\"\n")
            .unwrap();

        let config = PrefsConfig::load(&[&path]).unwrap();
        assert_eq!(
            config.groups(),
            vec![SettingsGroup::Render, SettingsGroup::Memory]
        );
        assert_eq!(config.screen(), Some(Path::new("screen.toml")));
    }

    #[test]
    fn load_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PrefsConfig::load(&[dir.path().join("absent.toml")]).is_ok());
    }

    #[test]
    fn load_rejects_unknown_group() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "groups = [\"sound\"]\n").unwrap();
        assert!(PrefsConfig::load(&[&path]).is_err());
    }
}
