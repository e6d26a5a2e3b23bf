//! Version stamping of packaged text files.

use crate::error::{Error, Result};
use crate::variant::Variant;
use camino::Utf8Path;

/// Marker left in framework and mod files where the pack version belongs.
pub const VERSION_PLACEHOLDER: &str = "noVersion";

/// Files (relative to an output tree) that carry the version placeholder.
pub fn stamp_targets(variant: Variant) -> Vec<&'static str> {
    let mut targets = vec!["pack.toml", "config/bcc-common.toml"];
    if variant.is_client() {
        targets.push("config/fancymenu/custom_locals/mod/en_us.local");
    }
    targets
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampOutcome {
    /// The file does not exist.
    Missing,
    /// The file exists but does not contain the token.
    Unchanged,
    /// The token was replaced this many times.
    Replaced(usize),
}

/// Replace every literal occurrence of `old` with `new` in the file at `path`.
///
/// A missing file is a no-op. The file is only rewritten when something changed.
pub fn replace_in_file(path: &Utf8Path, old: &str, new: &str) -> Result<StampOutcome> {
    if !path.as_std_path().exists() {
        return Ok(StampOutcome::Missing);
    }

    let contents = std::fs::read_to_string(path.as_std_path()).map_err(|e| Error::io(path, e))?;
    let count = if old.is_empty() {
        0
    } else {
        contents.matches(old).count()
    };
    if count == 0 {
        return Ok(StampOutcome::Unchanged);
    }

    std::fs::write(path.as_std_path(), contents.replace(old, new))
        .map_err(|e| Error::io(path, e))?;
    tracing::debug!("Stamped {} ({} occurrence(s))", path, count);
    Ok(StampOutcome::Replaced(count))
}
