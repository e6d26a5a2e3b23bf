//! Pack settings persistence.
//!
//! The target game version and modloader are stored in `config.json` at the
//! install root:
//!
//! ```json
//! {
//!     "mcversion": "1.20.1",
//!     "modloader": "forge"
//! }
//! ```
//!
//! The file is created on first run from values supplied by the caller (the CLI
//! prompts for them) and is never repaired automatically: a file that fails to
//! parse is reported as [`Error::ConfigParse`].

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Target game version and modloader for every build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackConfig {
    /// Minecraft version, e.g. `1.20.1`.
    pub mcversion: String,
    /// Modloader name, e.g. `forge`.
    pub modloader: String,
}

impl PackConfig {
    pub fn new(mcversion: impl Into<String>, modloader: impl Into<String>) -> Self {
        Self {
            mcversion: mcversion.into(),
            modloader: modloader.into(),
        }
    }

    /// Reject blank values. Both fields end up as path components.
    pub fn validate(&self) -> Result<()> {
        if self.mcversion.trim().is_empty() {
            return Err(Error::InvalidConfig { field: "mcversion" });
        }
        if self.modloader.trim().is_empty() {
            return Err(Error::InvalidConfig { field: "modloader" });
        }
        Ok(())
    }

    /// Apply the non-blank values of `overrides`, returning whether anything changed.
    pub fn apply(&mut self, overrides: &ConfigOverrides) -> bool {
        let mut changed = false;
        if let Some(mcversion) = non_blank(overrides.mcversion.as_deref()) {
            changed |= self.mcversion != mcversion;
            self.mcversion = mcversion.to_string();
        }
        if let Some(modloader) = non_blank(overrides.modloader.as_deref()) {
            changed |= self.modloader != modloader;
            self.modloader = modloader.to_string();
        }
        changed
    }
}

/// Partial update for [`PackConfig`]. `None` and blank strings keep the current value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub mcversion: Option<String>,
    pub modloader: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Reads and writes [`PackConfig`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: Utf8PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Load the persisted config.
    ///
    /// Returns `Ok(None)` if the file doesn't exist and `Err` if it exists but
    /// cannot be parsed or holds blank values.
    pub fn try_load(&self) -> Result<Option<PackConfig>> {
        if !self.path.as_std_path().exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(self.path.as_std_path())
            .map_err(|e| Error::io(&self.path, e))?;
        let config: PackConfig =
            serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
                path: self.path.clone(),
                source,
            })?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Load the persisted config, creating it from `init` on first run.
    pub fn load_or_init<F>(&self, init: F) -> Result<PackConfig>
    where
        F: FnOnce() -> Result<PackConfig>,
    {
        if let Some(config) = self.try_load()? {
            return Ok(config);
        }

        tracing::info!("No config at {}, initializing", self.path);
        let config = init()?;
        config.validate()?;
        self.save(&config)?;
        Ok(config)
    }

    /// Overwrite the persisted config. Creates parent directories if needed.
    pub fn save(&self, config: &PackConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent.as_std_path()).map_err(|e| Error::io(parent, e))?;
        }

        std::fs::write(self.path.as_std_path(), to_json_pretty(config)?)
            .map_err(|e| Error::io(&self.path, e))?;
        tracing::debug!("Saved config to {}", self.path);
        Ok(())
    }

    /// Merge non-blank `overrides` into `current` and save the result.
    ///
    /// The file is rewritten even if it was deleted since `current` was loaded.
    pub fn update(&self, current: &PackConfig, overrides: &ConfigOverrides) -> Result<PackConfig> {
        let mut config = current.clone();
        if config.apply(overrides) {
            tracing::info!(
                "Config updated: mcversion={} modloader={}",
                config.mcversion,
                config.modloader
            );
        }
        config.validate()?;
        self.save(&config)?;
        Ok(config)
    }
}

/// Serialize with 4-space indentation.
fn to_json_pretty(config: &PackConfig) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        let path = Utf8Path::from_path(dir.path()).unwrap().join("config.json");
        ConfigStore::new(path)
    }

    #[test]
    fn test_load_missing_returns_none() {
        let dir = tempdir().unwrap();
        assert!(store_in(&dir).try_load().unwrap().is_none());
    }

    #[test]
    fn test_load_or_init_persists() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let config = store
            .load_or_init(|| Ok(PackConfig::new("1.20.1", "forge")))
            .unwrap();
        assert_eq!(config, PackConfig::new("1.20.1", "forge"));

        // Second load reads the file instead of calling init
        let again = store
            .load_or_init(|| panic!("init should not run twice"))
            .unwrap();
        assert_eq!(again, config);
    }

    #[test]
    fn test_saved_format() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&PackConfig::new("1.20.1", "forge")).unwrap();

        let contents = std::fs::read_to_string(store.path().as_std_path()).unwrap();
        assert_eq!(
            contents,
            "{\n    \"mcversion\": \"1.20.1\",\n    \"modloader\": \"forge\"\n}"
        );
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path().as_std_path(), "{ invalid json }").unwrap();

        assert!(matches!(store.try_load(), Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_missing_field() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path().as_std_path(), r#"{"mcversion": "1.20.1"}"#).unwrap();

        assert!(matches!(store.try_load(), Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_blank_field() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path().as_std_path(),
            r#"{"mcversion": "1.20.1", "modloader": "  "}"#,
        )
        .unwrap();

        assert!(matches!(
            store.try_load(),
            Err(Error::InvalidConfig { field: "modloader" })
        ));
    }

    #[test]
    fn test_init_rejects_blank() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let result = store.load_or_init(|| Ok(PackConfig::new("", "forge")));
        assert!(matches!(
            result,
            Err(Error::InvalidConfig { field: "mcversion" })
        ));
        assert!(!store.path().as_std_path().exists());
    }

    #[test]
    fn test_update_ignores_blank_overrides() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let current = PackConfig::new("1.20.1", "forge");
        store.save(&current).unwrap();

        let updated = store
            .update(
                &current,
                &ConfigOverrides {
                    mcversion: Some("  ".to_string()),
                    modloader: Some("neoforge".to_string()),
                },
            )
            .unwrap();

        assert_eq!(updated, PackConfig::new("1.20.1", "neoforge"));
        assert_eq!(store.try_load().unwrap(), Some(updated));
    }

    #[test]
    fn test_update_recreates_deleted_file() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let current = PackConfig::new("1.20.1", "forge");
        store.save(&current).unwrap();
        std::fs::remove_file(store.path().as_std_path()).unwrap();

        let updated = store
            .update(
                &current,
                &ConfigOverrides {
                    mcversion: Some("1.21.1".to_string()),
                    modloader: None,
                },
            )
            .unwrap();

        assert_eq!(updated, PackConfig::new("1.21.1", "forge"));
        assert_eq!(store.try_load().unwrap(), Some(updated));
    }

    #[test]
    fn test_apply_reports_change() {
        let mut config = PackConfig::new("1.20.1", "forge");
        assert!(!config.apply(&ConfigOverrides::default()));
        assert!(!config.apply(&ConfigOverrides {
            mcversion: Some("1.20.1".to_string()),
            modloader: None,
        }));
        assert!(config.apply(&ConfigOverrides {
            mcversion: Some(" 1.21.1 ".to_string()),
            modloader: None,
        }));
        assert_eq!(config.mcversion, "1.21.1");
    }
}
