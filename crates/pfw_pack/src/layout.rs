//! Directory layout of a PackFrameworker install.
//!
//! Every path the tool reads or writes is derived from a single install root:
//!
//! ```text
//! <root>/
//! ├── config.json
//! ├── beta/
//! │   ├── lastVersion.txt
//! │   └── <modloader>/<mcversion>/<variant>/
//! ├── framework/packwiz/<modloader>/<mcversion>/<variant>/
//! ├── mod/<modloader>/all/{server,nano,giga}/
//! └── release/
//! ```

use crate::config::PackConfig;
use crate::variant::{Tier, Variant};
use camino::{Utf8Path, Utf8PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LAST_VERSION_FILE_NAME: &str = "lastVersion.txt";
pub const REMOVAL_LIST_FILE_NAME: &str = "filesToRemove.txt";

/// Resolves install-relative paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackLayout {
    root: Utf8PathBuf,
}

impl PackLayout {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn config_file(&self) -> Utf8PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub fn beta_root(&self) -> Utf8PathBuf {
        self.root.join("beta")
    }

    /// Marker holding the last pack version entered. Beta-local state.
    pub fn last_version_file(&self) -> Utf8PathBuf {
        self.beta_root().join(LAST_VERSION_FILE_NAME)
    }

    /// Local checkout of the PackFramework repository.
    pub fn framework_root(&self) -> Utf8PathBuf {
        self.root.join("framework")
    }

    pub fn mod_root(&self) -> Utf8PathBuf {
        self.root.join("mod")
    }

    pub fn release_root(&self) -> Utf8PathBuf {
        self.root.join("release")
    }

    /// `beta/<modloader>/<mcversion>/<variant>`
    pub fn output_dir(&self, config: &PackConfig, variant: Variant) -> Utf8PathBuf {
        self.beta_root()
            .join(&config.modloader)
            .join(&config.mcversion)
            .join(variant.as_str())
    }

    /// Source directory of `tier` when building `variant`.
    pub fn tier_source(&self, config: &PackConfig, variant: Variant, tier: Tier) -> Utf8PathBuf {
        match tier {
            Tier::Framework => self
                .framework_root()
                .join("packwiz")
                .join(&config.modloader)
                .join(&config.mcversion)
                .join(variant.as_str()),
            Tier::Server | Tier::Nano | Tier::Giga => self
                .mod_root()
                .join(&config.modloader)
                .join("all")
                .join(tier.as_str()),
        }
    }
}
