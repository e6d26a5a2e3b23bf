//! Install root and settings helpers.

use crate::errors::CliError;
use camino::Utf8PathBuf;
use pfw_pack::{ConfigStore, PackConfig, PackLayout};
use std::env;

/// Returns the directory where the current executable resides.
pub fn install_dir() -> Option<Utf8PathBuf> {
    let exe = env::current_exe().ok()?;
    let parent = exe.parent()?;
    Utf8PathBuf::from_path_buf(parent.to_path_buf()).ok()
}

/// Resolves the install layout from `--root`, falling back to the executable's directory.
pub fn resolve_layout(root: Option<std::path::PathBuf>) -> Result<PackLayout, CliError> {
    let root = match root {
        Some(path) => {
            Utf8PathBuf::from_path_buf(path).map_err(|path| CliError::InstallRootNotUtf8 { path })?
        }
        None => install_dir().ok_or(CliError::InstallRootUnknown)?,
    };
    Ok(PackLayout::new(root))
}

/// Loads `config.json`, asking for the settings on first run.
pub fn load_or_prompt_config(layout: &PackLayout) -> Result<PackConfig, CliError> {
    let store = ConfigStore::new(layout.config_file());
    let mut prompt_error = None;

    let result = store.load_or_init(|| {
        println!("Configuration file not found. Please enter the following settings:");
        crate::commands::settings::prompt_initial_config().map_err(|e| {
            prompt_error = Some(e);
            pfw_pack::Error::Other("settings prompt failed".to_string())
        })
    });

    match (result, prompt_error) {
        (Ok(config), _) => Ok(config),
        (Err(_), Some(prompt_error)) => Err(prompt_error),
        (Err(e), None) => Err(CliError::from_pack(e)),
    }
}
