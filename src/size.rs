//! Subtree size aggregation.
//!
//! [`tree_size`] computes the full byte total of an entry and everything
//! below it by listing directories recursively. Sibling subtrees are summed in
//! parallel with `rayon`; the sums are integers, so the result does not depend
//! on the order the work completes in.

use crate::reader::DirReader;
use rayon::prelude::*;
use std::path::Path;
use tracing::warn;

/// Returns the total size of the entry at `path` and, for a directory, of
/// everything below it.
///
/// A file's total is its own size and touches no filesystem. A directory that
/// cannot be listed contributes only its own size; the error is logged and
/// the rest of the scan carries on.
///
/// # Arguments
/// * `reader` - Directory listing backend
/// * `path` - Entry to measure
/// * `size` - The entry's own size, already known from its parent's listing
/// * `is_dir` - Whether the entry is a directory
pub fn tree_size<R: DirReader + ?Sized>(reader: &R, path: &Path, size: u64, is_dir: bool) -> u64 {
    if !is_dir {
        return size;
    }

    let children = match reader.list_children(path) {
        Ok(children) => children,
        Err(e) => {
            warn!("{}", e);
            return size;
        }
    };

    size + children
        .par_iter()
        .map(|c| tree_size(reader, &path.join(&c.name), c.size, c.is_dir))
        .sum::<u64>()
}
