//! Data structures for the partially explored directory tree.
//!
//! The tree is an arena: every [`Node`] lives in [`Tree`]'s node vector and is
//! addressed by a [`NodeId`]. A directory's `children` list holds the ids of
//! the nodes created from its listing, and no id ever appears in two lists, so
//! the arena is still a plain tree with exclusive ownership.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One filesystem entry.
///
/// # Fields
/// * `path` - Path of the entry (root path joined with child names)
/// * `size` - The entry's own metadata size; for a directory this is the size
///   of the directory entry itself, not of its contents
/// * `tree_size` - Own size plus every descendant's size; 0 until computed
/// * `is_dir` - Whether the entry is a directory
/// * `expanded` - Whether the immediate children have been read
/// * `children` - Child ids in listing order, empty until expanded
#[derive(Debug, Clone)]
pub struct Node {
    pub path: PathBuf,
    pub size: u64,
    pub tree_size: u64,
    pub is_dir: bool,
    pub expanded: bool,
    pub children: Vec<NodeId>,
}

impl Node {
    fn new(path: PathBuf, size: u64, is_dir: bool) -> Self {
        Self {
            path,
            size,
            // A file's total is known the moment it is seen
            tree_size: if is_dir { 0 } else { size },
            is_dir,
            expanded: false,
            children: Vec::new(),
        }
    }

    pub fn entry_type(&self) -> EntryType {
        if self.is_dir {
            EntryType::Dir
        } else {
            EntryType::File
        }
    }
}

/// Arena holding every node discovered so far.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Creates a tree holding only the root directory node.
    ///
    /// The root is always treated as a directory with own size 0, whatever
    /// the path actually is; its total is therefore the sum of its contents.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            nodes: vec![Node::new(root.into(), 0, true)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Number of nodes materialized so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a node named `name` under `parent` and appends it to the
    /// parent's children.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl AsRef<Path>,
        size: u64,
        is_dir: bool,
    ) -> NodeId {
        let path = self.nodes[parent.0].path.join(name);
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(path, size, is_dir));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Builds the output row for a node.
    pub fn entry(&self, id: NodeId) -> Entry {
        let node = self.node(id);
        Entry {
            path: node.path.clone(),
            size: node.tree_size,
            entry_type: node.entry_type(),
        }
    }
}

/// A selected entry, as handed to the output renderers.
///
/// # Fields
/// * `path` - Path of the file or directory
/// * `size` - Aggregate size in bytes (the node's tree size)
/// * `entry_type` - File or directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub path: PathBuf,
    pub size: u64,
    pub entry_type: EntryType,
}

/// Represents the type of file system entry.
///
/// # Variants
/// * `File` - A regular file (or anything that is not a directory)
/// * `Dir` - A directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryType {
    File,
    Dir,
}

impl EntryType {
    /// Returns `"FILE"` or `"DIR"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::File => "FILE",
            EntryType::Dir => "DIR",
        }
    }
}
