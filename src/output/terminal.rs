//! Terminal output formatter.
//!
//! Each selected entry is printed as its tree size and its path separated by a
//! tab, in the order given.

use crate::cli::Args;
use crate::data::Entry;
use crate::utils::format_bytes;
use anyhow::Result;
use std::io::{self, BufWriter, Write};

/// Renders entries to stdout.
///
/// # Arguments
/// * `entries` - Already selected and ordered entries
/// * `args` - Command line arguments; `--human` switches to decimal units
pub fn render(entries: &[Entry], args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_lines(&mut out, entries, args.human)?;
    out.flush()?;
    Ok(())
}

/// Writes one `size<TAB>path` line per entry to `out`.
pub fn write_lines<W: Write>(out: &mut W, entries: &[Entry], human: bool) -> io::Result<()> {
    for entry in entries {
        writeln!(
            out,
            "{}\t{}",
            format_bytes(entry.size, human),
            entry.path.display()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EntryType;
    use std::path::PathBuf;

    fn entries() -> Vec<Entry> {
        vec![
            Entry {
                path: PathBuf::from("/data"),
                size: 100,
                entry_type: EntryType::Dir,
            },
            Entry {
                path: PathBuf::from("/data/big.bin"),
                size: 70,
                entry_type: EntryType::File,
            },
        ]
    }

    #[test]
    fn test_write_lines_raw_bytes() {
        let mut out = Vec::new();
        write_lines(&mut out, &entries(), false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "100\t/data\n70\t/data/big.bin\n"
        );
    }

    #[test]
    fn test_write_lines_human() {
        let mut out = Vec::new();
        write_lines(&mut out, &entries(), true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().all(|l| l.contains(" B\t")));
    }
}
