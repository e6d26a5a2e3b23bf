//! Error types for pack assembly.
//!
//! All fallible functions in this crate return [`Result<T>`], which uses [`Error`]
//! as the error type. I/O failures go through [`Error::io`] so the offending path
//! is kept; `serde_json::Error` converts via `From`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading settings or assembling a pack.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem I/O failed on a specific path.
    #[error("IO error at '{path}': {source}")]
    IoAt {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The persisted `config.json` exists but could not be parsed.
    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The persisted config parsed but a required value is blank.
    #[error("Invalid config: field '{field}' must not be empty")]
    InvalidConfig { field: &'static str },

    /// A file in the merge source collides with a directory in the destination,
    /// or the other way round.
    #[error("Merge conflict at '{path}': a file and a directory share this path")]
    MergeConflict { path: Utf8PathBuf },

    /// A directory entry is not valid UTF-8.
    #[error("Non-UTF-8 path: {0}")]
    NonUtf8Path(std::path::PathBuf),

    /// Catch-all for errors from prompts and other sources.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::IoAt {
            path: path.into(),
            source,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
