//! Budgeted best-first selection of the largest entries.
//!
//! [`select_largest`] grows a partial tree from the root, always looking next
//! at the biggest entry it knows about and admitting that entry's children
//! while the node budget allows. Directories are only read as deeply as the
//! budget is likely to need: each one gets an expansion target proportional to
//! its share of the known frontier mass (see [`expansion_target`]).

use crate::data::{Entry, NodeId, Tree};
use crate::error::SelectError;
use crate::expand::expand;
use crate::fringe::Fringe;
use crate::reader::DirReader;
use std::path::PathBuf;
use tracing::debug;

/// Upper bound on directories expanded for one popped entry.
pub const MAX_EXPANSION_PER_STEP: usize = 2;

/// How many directories to expand below an entry of `this_size` bytes when
/// the whole frontier (the entry included) holds `total_size` bytes and
/// `remaining` output slots are left.
///
/// The share `this_size / total_size * remaining` is rounded up and capped at
/// [`MAX_EXPANSION_PER_STEP`]. A share that is zero or undefined (an all-empty
/// frontier divides 0 by 0) gives a target of 0.
pub fn expansion_target(this_size: u64, total_size: u64, remaining: usize) -> usize {
    let p = this_size as f64 / total_size as f64 * remaining as f64;
    if p.is_nan() || p <= 0.0 {
        return 0;
    }
    p.ceil().min(MAX_EXPANSION_PER_STEP as f64) as usize
}

/// Result of a selection run: the explored tree and the admitted node ids.
#[derive(Debug)]
pub struct Selection {
    tree: Tree,
    selected: Vec<NodeId>,
}

impl Selection {
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Selected ids in admission order: root first, then each admitted batch
    /// of children.
    pub fn selected(&self) -> &[NodeId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Output rows for the selected nodes, in admission order.
    pub fn entries(&self) -> Vec<Entry> {
        self.selected.iter().map(|&id| self.tree.entry(id)).collect()
    }
}

/// Finds up to `max_nodes` of the largest entries under `root`.
///
/// The root is expanded up front with a target of `max_nodes` directories.
/// The loop then repeatedly pops the largest known entry; an unexpanded
/// directory is expanded by [`expansion_target`] directories first. The popped
/// entry's children are admitted as one batch, and only if the whole batch
/// fits in the budget; otherwise they are dropped for good.
///
/// Unreadable directories are logged and count with their own size only; they
/// never abort the run.
///
/// # Errors
/// Returns [`SelectError::ZeroBudget`] if `max_nodes` is 0.
///
/// # Examples
/// ```rust
/// use baldu::reader::MemoryReader;
/// use baldu::select::select_largest;
///
/// let reader = MemoryReader::new()
///     .file("root/a", 10)
///     .file("root/b", 20)
///     .file("root/c", 70);
///
/// let selection = select_largest("root", 4, &reader).unwrap();
/// let entries = selection.entries();
/// assert_eq!(entries.len(), 4);
/// assert_eq!(entries[0].size, 100);
/// ```
pub fn select_largest<R: DirReader + ?Sized>(
    root: impl Into<PathBuf>,
    max_nodes: usize,
    reader: &R,
) -> Result<Selection, SelectError> {
    if max_nodes == 0 {
        return Err(SelectError::ZeroBudget);
    }

    let mut tree = Tree::new(root);
    let root = tree.root();
    expand(&mut tree, root, max_nodes, reader);

    let mut selected = vec![root];
    let mut fringe = Fringe::new();
    fringe.push(tree.node(root).tree_size, root);

    while selected.len() < max_nodes {
        let Some((this_size, biggest)) = fringe.pop() else {
            break;
        };
        debug!("next selected: {}", tree.node(biggest).path.display());

        let node = tree.node(biggest);
        if node.is_dir && !node.expanded {
            let total_size = this_size + fringe.total_key();
            let target = expansion_target(this_size, total_size, max_nodes - selected.len());
            expand(&mut tree, biggest, target, reader);
        }

        let children = tree.children(biggest);
        if selected.len() + children.len() <= max_nodes {
            for &child in children {
                selected.push(child);
                fringe.push(tree.node(child).tree_size, child);
            }
        }
    }

    Ok(Selection { tree, selected })
}
