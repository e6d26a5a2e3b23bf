//! Last-used pack version, stored as a single line in `beta/lastVersion.txt`.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Remembers the pack version entered for the previous build.
#[derive(Debug, Clone)]
pub struct VersionSelector {
    path: Utf8PathBuf,
}

impl VersionSelector {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Previously stored version, or an empty string if none can be read.
    pub fn last(&self) -> String {
        match std::fs::read_to_string(self.path.as_std_path()) {
            Ok(contents) => contents.trim().to_string(),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to read {}: {}", self.path, e);
                }
                String::new()
            }
        }
    }

    /// Resolve the version for the next build.
    ///
    /// `prompt` receives the previous version as its default. Blank input keeps
    /// that default. The result is persisted and returned; its format is not checked.
    pub fn select<F>(&self, prompt: F) -> Result<String>
    where
        F: FnOnce(&str) -> Result<String>,
    {
        let last = self.last();
        let input = prompt(&last)?;
        let input = input.trim();
        let version = if input.is_empty() {
            last
        } else {
            input.to_string()
        };

        self.store(&version)?;
        tracing::info!("Selected pack version: {}", version);
        Ok(version)
    }

    /// Persist `version` without a trailing newline. Creates the beta root if needed.
    pub fn store(&self, version: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent.as_std_path()).map_err(|e| Error::io(parent, e))?;
        }
        std::fs::write(self.path.as_std_path(), version).map_err(|e| Error::io(&self.path, e))
    }
}
