//! Directory listing backends.
//!
//! The scanner only ever needs one thing from the filesystem: the immediate
//! children of a directory with their own size and a directory flag. That
//! contract is the [`DirReader`] trait.
//!
//! - [`FsReader`] lists real directories through `std::fs`. Entry metadata is
//!   taken without following symlinks, so a link is reported as a small
//!   non-directory entry and link cycles can never be entered.
//! - [`MemoryReader`] serves a tree held in memory and can be told to fail on
//!   chosen directories. It makes selection runs exactly reproducible.

use crate::error::ReadError;
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::warn;

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirChild {
    pub name: OsString,
    /// Size reported by the entry's own metadata (not its contents)
    pub size: u64,
    pub is_dir: bool,
}

impl DirChild {
    pub fn new(name: impl Into<OsString>, size: u64, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            size,
            is_dir,
        }
    }
}

/// Lists the immediate children of a directory.
///
/// Implementations must be `Sync`: subtree sizes are summed in parallel.
pub trait DirReader: Sync {
    fn list_children(&self, path: &Path) -> Result<Vec<DirChild>, ReadError>;
}

/// Reads directories from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

impl DirReader for FsReader {
    fn list_children(&self, path: &Path) -> Result<Vec<DirChild>, ReadError> {
        let entries = fs::read_dir(path).map_err(|e| ReadError::new(path, e))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable entry in {}: {}", path.display(), e);
                    continue;
                }
            };
            // DirEntry::metadata does not traverse symlinks
            match entry.metadata() {
                Ok(meta) => children.push(DirChild {
                    name: entry.file_name(),
                    size: meta.len(),
                    is_dir: meta.is_dir(),
                }),
                Err(e) => {
                    warn!("skipping {}: {}", entry.path().display(), e);
                }
            }
        }
        Ok(children)
    }
}

/// An in-memory directory tree.
///
/// Entries are registered by full path; each one is appended to its parent's
/// listing in registration order, which is the order [`DirReader::list_children`]
/// yields them in.
///
/// ```rust
/// use baldu::reader::{DirReader, MemoryReader};
/// use std::path::Path;
///
/// let reader = MemoryReader::new()
///     .dir("root/docs", 4096)
///     .file("root/docs/a.txt", 10)
///     .file("root/b.bin", 70);
///
/// let children = reader.list_children(Path::new("root")).unwrap();
/// assert_eq!(children.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MemoryReader {
    dirs: HashMap<PathBuf, Vec<DirChild>>,
    failing: HashSet<PathBuf>,
    reads: AtomicUsize,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory entry with the given own size.
    pub fn dir(mut self, path: impl AsRef<Path>, size: u64) -> Self {
        let path = path.as_ref();
        self.attach(path, size, true);
        self.dirs.entry(path.to_path_buf()).or_default();
        self
    }

    /// Adds a regular file.
    pub fn file(mut self, path: impl AsRef<Path>, size: u64) -> Self {
        self.attach(path.as_ref(), size, false);
        self
    }

    /// Makes every listing of `path` fail with a permission error.
    pub fn fail(mut self, path: impl AsRef<Path>) -> Self {
        self.failing.insert(path.as_ref().to_path_buf());
        self
    }

    /// Number of `list_children` calls served so far, failed ones included.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    fn attach(&mut self, path: &Path, size: u64, is_dir: bool) {
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return;
        };
        self.dirs
            .entry(parent.to_path_buf())
            .or_default()
            .push(DirChild::new(name, size, is_dir));
    }
}

impl DirReader for MemoryReader {
    fn list_children(&self, path: &Path) -> Result<Vec<DirChild>, ReadError> {
        self.reads.fetch_add(1, Ordering::Relaxed);

        if self.failing.contains(path) {
            return Err(ReadError::new(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| ReadError::new(path, io::Error::from(io::ErrorKind::NotFound)))
    }
}
