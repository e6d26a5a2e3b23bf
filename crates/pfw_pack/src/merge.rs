//! Directory overlay.
//!
//! [`merge_dir`] copies a source tree onto a destination tree. It is an overlay,
//! not a mirror: entries that exist only in the destination are left alone, and
//! files that exist in both are overwritten with the source copy. Running the
//! same merge twice gives the same tree as running it once.
//!
//! A path that is a file on one side and a directory on the other is rejected
//! with [`Error::MergeConflict`]. Work already copied before the conflict is
//! kept.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Counts reported by [`merge_dir`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    pub files_copied: usize,
    pub dirs_created: usize,
}

impl std::ops::AddAssign for MergeStats {
    fn add_assign(&mut self, rhs: Self) {
        self.files_copied += rhs.files_copied;
        self.dirs_created += rhs.dirs_created;
    }
}

/// Overlay `source` onto `dest`. A missing `source` is a no-op.
pub fn merge_dir(source: &Utf8Path, dest: &Utf8Path) -> Result<MergeStats> {
    let mut stats = MergeStats::default();

    if !source.as_std_path().exists() {
        tracing::debug!("Merge source {} does not exist, skipping", source);
        return Ok(stats);
    }

    ensure_dir(dest, &mut stats)?;

    let mut stack: Vec<(Utf8PathBuf, Utf8PathBuf)> =
        vec![(source.to_path_buf(), dest.to_path_buf())];

    while let Some((src_dir, dest_dir)) = stack.pop() {
        let entries =
            std::fs::read_dir(src_dir.as_std_path()).map_err(|e| Error::io(&src_dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&src_dir, e))?;
            let src_path =
                Utf8PathBuf::from_path_buf(entry.path()).map_err(Error::NonUtf8Path)?;
            let Some(name) = src_path.file_name() else {
                continue;
            };
            let dest_path = dest_dir.join(name);

            if src_path.as_std_path().is_dir() {
                ensure_dir(&dest_path, &mut stats)?;
                stack.push((src_path, dest_path));
                continue;
            }

            if dest_path.as_std_path().is_dir() {
                return Err(Error::MergeConflict { path: dest_path });
            }

            std::fs::copy(src_path.as_std_path(), dest_path.as_std_path())
                .map_err(|e| Error::io(&dest_path, e))?;
            tracing::trace!("Copied {} -> {}", src_path, dest_path);
            stats.files_copied += 1;
        }
    }

    Ok(stats)
}

fn ensure_dir(path: &Utf8Path, stats: &mut MergeStats) -> Result<()> {
    let std_path = path.as_std_path();
    if std_path.is_dir() {
        return Ok(());
    }
    if std_path.exists() {
        return Err(Error::MergeConflict {
            path: path.to_path_buf(),
        });
    }

    std::fs::create_dir_all(std_path).map_err(|e| Error::io(path, e))?;
    stats.dirs_created += 1;
    Ok(())
}

/// Remove a file or a whole directory tree. Returns `false` if nothing was there.
pub fn remove_path(path: &Utf8Path) -> Result<bool> {
    let std_path = path.as_std_path();
    let result = if std_path.is_dir() {
        std::fs::remove_dir_all(std_path)
    } else if std_path.exists() {
        std::fs::remove_file(std_path)
    } else {
        return Ok(false);
    };

    result.map_err(|e| Error::io(path, e))?;
    Ok(true)
}

/// Delete `path` if present and recreate it as an empty directory.
pub fn reset_dir(path: &Utf8Path) -> Result<()> {
    remove_path(path)?;
    std::fs::create_dir_all(path.as_std_path()).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
pub(crate) mod testing {
    use camino::{Utf8Path, Utf8PathBuf};
    use std::collections::BTreeMap;

    pub fn write(root: &Utf8Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap().as_std_path()).unwrap();
        std::fs::write(path.as_std_path(), contents).unwrap();
    }

    pub fn read(root: &Utf8Path, rel: &str) -> String {
        std::fs::read_to_string(root.join(rel).as_std_path()).unwrap()
    }

    /// Snapshot of a tree: relative path -> file contents (`None` for directories).
    pub fn snapshot(root: &Utf8Path) -> BTreeMap<String, Option<String>> {
        let mut out = BTreeMap::new();
        let mut stack: Vec<Utf8PathBuf> = vec![root.to_path_buf()];
        while let Some(dir) = stack.pop() {
            for entry in std::fs::read_dir(dir.as_std_path()).unwrap() {
                let path = Utf8PathBuf::from_path_buf(entry.unwrap().path()).unwrap();
                let rel = path.strip_prefix(root).unwrap().as_str().replace('\\', "/");
                if path.as_std_path().is_dir() {
                    out.insert(rel, None);
                    stack.push(path);
                } else {
                    let contents = std::fs::read_to_string(path.as_std_path()).unwrap();
                    out.insert(rel, Some(contents));
                }
            }
        }
        out
    }
}
