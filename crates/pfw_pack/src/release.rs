//! Beta to release promotion.

use crate::error::{Error, Result};
use crate::layout::{PackLayout, LAST_VERSION_FILE_NAME};
use crate::merge::{merge_dir, reset_dir, MergeStats};
use camino::Utf8PathBuf;

#[derive(Debug)]
pub struct PromoteReport {
    pub release_root: Utf8PathBuf,
    pub stats: MergeStats,
    /// Whether the last-version marker was copied over and then removed.
    pub marker_stripped: bool,
}

/// Replace the release tree with a copy of the beta tree.
///
/// The release tree is deleted and recreated first, so nothing from a previous
/// promotion survives. The last-version marker is beta-local state and is
/// removed from the copy. A missing beta tree promotes to an empty release.
pub fn promote(layout: &PackLayout) -> Result<PromoteReport> {
    let beta_root = layout.beta_root();
    let release_root = layout.release_root();
    tracing::info!("Promoting {} to {}", beta_root, release_root);

    reset_dir(&release_root)?;
    let stats = merge_dir(&beta_root, &release_root)?;

    let marker = release_root.join(LAST_VERSION_FILE_NAME);
    let marker_stripped = marker.as_std_path().is_file();
    if marker_stripped {
        std::fs::remove_file(marker.as_std_path()).map_err(|e| Error::io(&marker, e))?;
    }

    Ok(PromoteReport {
        release_root,
        stats,
        marker_stripped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::testing::{read, snapshot, write};
    use tempfile::tempdir;

    fn layout(temp: &tempfile::TempDir) -> PackLayout {
        PackLayout::new(Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap())
    }

    #[test]
    fn test_empty_beta_gives_empty_release() {
        let temp = tempdir().unwrap();
        let layout = layout(&temp);
        std::fs::create_dir_all(layout.beta_root().as_std_path()).unwrap();

        let report = promote(&layout).unwrap();

        assert!(layout.release_root().as_std_path().is_dir());
        assert!(snapshot(&layout.release_root()).is_empty());
        assert!(!report.marker_stripped);
    }

    #[test]
    fn test_missing_beta_gives_empty_release() {
        let temp = tempdir().unwrap();
        let layout = layout(&temp);

        promote(&layout).unwrap();

        assert!(snapshot(&layout.release_root()).is_empty());
    }

    #[test]
    fn test_marker_is_stripped() {
        let temp = tempdir().unwrap();
        let layout = layout(&temp);
        let beta = layout.beta_root();
        write(&beta, LAST_VERSION_FILE_NAME, "3.2.0");
        write(&beta, "forge/1.20.1/giga/pack.toml", "version = \"3.2.0\"");

        let report = promote(&layout).unwrap();
        let release = layout.release_root();

        assert!(report.marker_stripped);
        assert!(!release.join(LAST_VERSION_FILE_NAME).as_std_path().exists());
        assert_eq!(
            read(&release, "forge/1.20.1/giga/pack.toml"),
            "version = \"3.2.0\""
        );
        // Beta keeps its marker
        assert_eq!(read(&beta, LAST_VERSION_FILE_NAME), "3.2.0");
    }

    #[test]
    fn test_previous_release_is_replaced() {
        let temp = tempdir().unwrap();
        let layout = layout(&temp);
        write(&layout.release_root(), "forge/1.19.2/old/pack.toml", "old");
        write(&layout.beta_root(), "forge/1.20.1/nano/pack.toml", "new");

        promote(&layout).unwrap();

        let tree = snapshot(&layout.release_root());
        assert!(!tree.contains_key("forge/1.19.2"));
        assert_eq!(
            tree.get("forge/1.20.1/nano/pack.toml"),
            Some(&Some("new".to_string()))
        );
    }
}
