//! `filesToRemove.txt` processing.
//!
//! Overlay tiers can only add or replace files. To drop something a lower tier
//! contributed, a tier ships a removal list at its root: one path per line,
//! relative to the output tree. The list is consumed during the build and never
//! reaches the final pack.

use crate::error::{Error, Result};
use crate::layout::REMOVAL_LIST_FILE_NAME;
use crate::merge::remove_path;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// What happened to each entry of a removal list.
#[derive(Debug, Default)]
pub struct RemovalReport {
    /// Whether a removal list was present at all.
    pub list_found: bool,
    pub removed: Vec<Utf8PathBuf>,
    /// Entries naming paths that did not exist.
    pub missing: Vec<Utf8PathBuf>,
    /// Entries rejected because they point outside the output tree.
    pub skipped: Vec<String>,
    /// Entries whose removal failed. Later entries are still attempted.
    pub failures: Vec<Error>,
}

impl RemovalReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Apply and delete the removal list at `output_root`, if there is one.
///
/// Only reading the list itself is fatal. Per-entry failures are collected in
/// the report, as is a failure to delete the list afterwards.
pub fn apply_removal_list(output_root: &Utf8Path) -> Result<RemovalReport> {
    apply_removal_list_with(output_root, remove_path)
}

fn apply_removal_list_with<F>(output_root: &Utf8Path, mut remove: F) -> Result<RemovalReport>
where
    F: FnMut(&Utf8Path) -> Result<bool>,
{
    let list_path = output_root.join(REMOVAL_LIST_FILE_NAME);
    let mut report = RemovalReport::default();

    if !list_path.as_std_path().is_file() {
        return Ok(report);
    }
    report.list_found = true;

    tracing::info!("Removing files listed in {}", list_path);
    let contents =
        std::fs::read_to_string(list_path.as_std_path()).map_err(|e| Error::io(&list_path, e))?;

    for line in contents.lines() {
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }

        let Some(relative) = confined_relative_path(entry) else {
            tracing::warn!("Skipping removal entry outside the pack: {}", entry);
            report.skipped.push(entry.to_string());
            continue;
        };

        let target = output_root.join(&relative);
        match remove(&target) {
            Ok(true) => {
                tracing::debug!("Removed {}", target);
                report.removed.push(relative);
            }
            Ok(false) => report.missing.push(relative),
            Err(e) => {
                tracing::warn!("Failed to remove {}: {}", target, e);
                report.failures.push(e);
            }
        }
    }

    if let Err(e) = std::fs::remove_file(list_path.as_std_path()) {
        tracing::warn!("Failed to delete {}: {}", list_path, e);
        report.failures.push(Error::io(&list_path, e));
    }

    Ok(report)
}

/// Normalize a list entry, rejecting absolute paths and `..` components.
fn confined_relative_path(entry: &str) -> Option<Utf8PathBuf> {
    let normalized = entry.replace('\\', "/");
    let mut relative = Utf8PathBuf::new();

    for component in Utf8Path::new(&normalized).components() {
        match component {
            Utf8Component::Normal(part) => relative.push(part),
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir | Utf8Component::RootDir | Utf8Component::Prefix(_) => {
                return None;
            }
        }
    }

    if relative.as_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}
