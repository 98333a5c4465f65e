//! Error types for `baldu`.
//!
//! There is exactly one runtime failure kind, [`ReadError`], raised when a
//! directory cannot be opened or listed. It is always recovered where it is
//! raised: the directory keeps its own recorded size and gets no children.
//! [`SelectError`] only covers invalid arguments handed to the library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to open or list a directory's contents.
#[derive(Error, Debug)]
#[error("cannot read directory {}: {source}", path.display())]
pub struct ReadError {
    /// Directory that could not be read
    pub path: PathBuf,
    /// Underlying I/O error (permission denied, removed mid-scan, ...)
    #[source]
    pub source: io::Error,
}

impl ReadError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// Errors returned by [`crate::select::select_largest`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectError {
    /// The node budget must leave room for at least the root.
    #[error("node budget must be at least 1")]
    ZeroBudget,
}
