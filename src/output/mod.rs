//! Output formatters for the selected entries.
//!
//! # Available Formatters
//!
//! - **Terminal**: one `size<TAB>path` line per entry on stdout
//! - **CSV**: machine-readable rows written to a file or stdout
//!
//! Both take entries that are already selected and ordered, and only format
//! them.

pub mod csv;
pub mod terminal;

/// CSV output renderer function.
///
/// See [`csv::render`] for full documentation.
pub use csv::render as render_csv;

/// Terminal output renderer function.
///
/// See [`terminal::render`] for full documentation.
pub use terminal::render as render_terminal;
