//! Bounded breadth-first expansion of a directory subtree.
//!
//! [`expand`] reads directories level by level starting at a node, creating
//! child nodes as it goes, until it has read the requested number of
//! directories or run out of them. It then refreshes the tree sizes of the
//! node's whole subtree with [`set_tree_sizes`].

use crate::data::{NodeId, Tree};
use crate::reader::DirReader;
use crate::size::tree_size;
use rayon::prelude::*;
use std::collections::VecDeque;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Expands up to `target` directories of the subtree rooted at `id`, in
/// breadth-first order, and returns how many were expanded.
///
/// A directory that cannot be read is still marked expanded; it keeps no
/// children and its total stays its own size. A target of 0, or a node that
/// is already expanded, leaves the tree untouched.
pub fn expand<R: DirReader + ?Sized>(
    tree: &mut Tree,
    id: NodeId,
    target: usize,
    reader: &R,
) -> usize {
    debug!("expanding {}; target: {}", tree.node(id).path.display(), target);

    if tree.node(id).expanded {
        return 0;
    }

    let mut expanded = 0;
    let mut queue = VecDeque::from([id]);
    while expanded < target {
        let Some(current) = queue.pop_front() else {
            break;
        };
        expanded += 1;

        let node = tree.node_mut(current);
        node.expanded = true;
        debug!("expanded {}", node.path.display());

        let children = match reader.list_children(&node.path) {
            Ok(children) => children,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        tree.node_mut(current).children.reserve(children.len());
        for child in children {
            let child_id = tree.add_child(current, &child.name, child.size, child.is_dir);
            if child.is_dir {
                queue.push_back(child_id);
            }
        }
    }

    if expanded > 0 {
        set_tree_sizes(tree, id, reader);
    }
    expanded
}

/// Recomputes `tree_size` for every node in the subtree rooted at `id`.
///
/// Nodes with children get their own size plus their children's totals.
/// Childless nodes are leaves of what has been explored: files keep their own
/// size, expanded directories (empty or unreadable) keep their own size, and
/// unexpanded directories are measured with a full [`tree_size`] scan. Those
/// scans are independent of each other and run in parallel.
pub fn set_tree_sizes<R: DirReader + ?Sized>(tree: &mut Tree, id: NodeId, reader: &R) {
    // Pre-order; reversed it visits every child before its parent
    let mut order = Vec::new();
    let mut stack = vec![id];
    while let Some(current) = stack.pop() {
        order.push(current);
        stack.extend(tree.children(current).iter().rev());
    }

    let unsized_dirs: Vec<(NodeId, PathBuf, u64)> = order
        .iter()
        .filter_map(|&n| {
            let node = tree.node(n);
            (node.is_dir && !node.expanded).then(|| (n, node.path.clone(), node.size))
        })
        .collect();

    let measured: Vec<(NodeId, u64)> = unsized_dirs
        .par_iter()
        .map(|(n, path, size)| (*n, tree_size(reader, path, *size, true)))
        .collect();
    for (n, total) in measured {
        tree.node_mut(n).tree_size = total;
    }

    for &current in order.iter().rev() {
        let node = tree.node(current);
        if node.children.is_empty() {
            if !node.is_dir || node.expanded {
                let size = node.size;
                tree.node_mut(current).tree_size = size;
            }
            continue;
        }
        let total = node.size
            + node
                .children
                .iter()
                .map(|&c| tree.node(c).tree_size)
                .sum::<u64>();
        tree.node_mut(current).tree_size = total;
    }
}
