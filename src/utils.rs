//! Utility functions for the `baldu` output path.

use crate::cli::SortKey;
use crate::data::Entry;
use humansize::{DECIMAL, format_size};

/// Sorts entries based on the provided sort key.
///
/// # Behavior
/// * `SortKey::Admission` - Leaves the selection order untouched
/// * `SortKey::Size` - Sorts by size in descending order (largest first)
/// * `SortKey::Name` - Sorts by path name in ascending order
///
/// Sorts are stable, so equal sizes keep their admission order.
pub fn sort_entries(entries: &mut [Entry], sort_key: SortKey) {
    match sort_key {
        SortKey::Admission => {}
        SortKey::Size => entries.sort_by(|a, b| b.size.cmp(&a.size)),
        SortKey::Name => entries.sort_by(|a, b| a.path.cmp(&b.path)),
    }
}

/// Formats a byte count as raw bytes, or with decimal units when `human` is set.
pub fn format_bytes(size: u64, human: bool) -> String {
    if human {
        format_size(size, DECIMAL)
    } else {
        size.to_string()
    }
}
