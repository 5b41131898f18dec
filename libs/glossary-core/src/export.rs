//! CSV output in the two-field format Anki imports.

use crate::error::Result;
use crate::types::Entry;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write entries as two-field CSV records with no header row.
///
/// Fields containing the delimiter, quotes, or line breaks are quoted per
/// RFC 4180. The writer is flushed before returning.
pub fn write_csv<W: Write>(entries: &[Entry], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for entry in entries {
        wtr.serialize(entry)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write entries to the file at `path`, creating or truncating it.
pub fn write_csv_file(entries: &[Entry], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(entries, file)
}
