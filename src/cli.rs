//! CLI interface definitions for the `baldu` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`SortKey`]: how selected entries are ordered on output
//!
//! # Example
//!
//! ```bash
//! baldu --max 50 --human /var
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use clap::{CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for `baldu`.
///
/// `path` is optional at the parser level so that a missing path can be
/// reported with the plain usage line on stdout, the same way a zero `--max`
/// is.
#[derive(Parser, Debug)]
#[command(
    name = "baldu",
    version,
    about = "Find the largest files and directories without walking the whole tree",
    override_usage = "baldu --max NUM [--verbose] PATH"
)]
pub struct Args {
    /// Path to scan
    pub path: Option<PathBuf>,

    /// Maximum number of entries displayed (must be nonzero)
    #[arg(long, value_name = "NUM", default_value_t = 100)]
    pub max: usize,

    /// Log each selection and expansion step to stderr
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Print human-readable sizes instead of bytes
    #[arg(long, default_value_t = false)]
    pub human: bool,

    /// Output order: admission (discovery order), size or name
    #[arg(long, value_enum, default_value_t = SortKey::Admission)]
    pub sort: SortKey,

    /// Write output to a CSV file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,

    /// Limit the number of threads used to size subtrees (default: use all available)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,
}

impl Args {
    /// The one-line usage message, e.g. `Usage: baldu --max NUM [--verbose] PATH`.
    pub fn usage() -> String {
        Args::command().render_usage().to_string()
    }
}

/// Enum for specifying how selected entries are ordered.
///
/// # Variants
/// * `Admission` - The order entries were selected in (root first)
/// * `Size` - By tree size, largest first
/// * `Name` - Alphabetically by path
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum SortKey {
    Admission,
    Size,
    Name,
}

/// A single record of CSV output.
///
/// # Fields
/// * `entry_type` - "DIR" or "FILE"
/// * `size_bytes` - Tree size in bytes
/// * `size_human` - Human-readable size (e.g., "1.2 MB")
/// * `path` - Full path to the file or directory
#[derive(Debug, serde::Serialize)]
pub struct CsvEntry {
    pub entry_type: String,
    pub size_bytes: u64,
    pub size_human: String,
    pub path: String,
}
