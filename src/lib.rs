//! Library crate for baldu
//!
//! `baldu` finds the largest entries in a directory tree while materializing
//! only a bounded number of nodes. It explores best-first: the biggest known
//! entry is looked at next, and directories are read only as deeply as their
//! share of the remaining budget suggests.
//!
//! # Modules
//!
//! - [`reader`]: directory listing backends (`FsReader`, `MemoryReader`)
//! - [`size`]: full subtree size aggregation
//! - [`data`]: the explored tree (`Tree`, `Node`) and output rows (`Entry`)
//! - [`expand`]: bounded breadth-first directory expansion
//! - [`fringe`]: max-priority queue of entries to consider
//! - [`select`]: the budgeted selection loop
//! - [`cli`]: command-line interface definitions
//! - [`output`]: terminal and CSV renderers
//! - [`logging`]: stderr diagnostics setup
//! - [`error`]: error types

pub mod cli;
pub mod data;
pub mod error;
pub mod expand;
pub mod fringe;
pub mod logging;
pub mod output;
pub mod reader;
pub mod select;
pub mod size;
pub mod utils;

pub use cli::Args;
pub use data::{Entry, EntryType, Node, NodeId, Tree};
pub use error::{ReadError, SelectError};
pub use reader::{DirChild, DirReader, FsReader, MemoryReader};
pub use select::{Selection, select_largest};
