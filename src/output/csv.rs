//! CSV output formatter.
//!
//! Exports the selected entries for further processing, one row per entry
//! with both raw and human-readable sizes.

use crate::cli::{Args, CsvEntry};
use crate::data::Entry;
use crate::utils::format_bytes;
use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use std::io;

/// Renders entries as CSV to the `--output` file, or to stdout without one.
///
/// # Arguments
/// * `entries` - Already selected and ordered entries
/// * `args` - Command line arguments that control the destination
pub fn render(entries: &[Entry], args: &Args) -> Result<()> {
    let writer: Box<dyn io::Write> = if let Some(output_file) = &args.output {
        Box::new(
            File::create(output_file)
                .with_context(|| format!("Failed to create {}", output_file))?,
        )
    } else {
        Box::new(io::stdout())
    };

    write_rows(writer, entries)?;

    if let Some(output_file) = &args.output {
        eprintln!("CSV output written to: {}", output_file);
    }

    Ok(())
}

/// Serializes entries as CSV rows (with a header) into `writer`.
pub fn write_rows<W: io::Write>(writer: W, entries: &[Entry]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    for entry in entries {
        csv_writer.serialize(CsvEntry {
            entry_type: entry.entry_type.as_str().into(),
            size_bytes: entry.size,
            size_human: format_bytes(entry.size, true),
            path: entry.path.display().to_string(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
