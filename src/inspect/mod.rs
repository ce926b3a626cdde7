//! The two CSV inspectors.
//!
//! - [`archive`] walks an archive through the ZIP reader directly.
//! - [`filesystem`] walks any [`FileSystem`](crate::fs::FileSystem),
//!   so the same code serves ZIP archives and plain directories.
//!
//! Both print the same report: the archive path, then for every entry
//! ending in `.csv` its name and the table's description.

pub mod archive;
pub mod filesystem;

use std::io::Write;

use crate::error::Result;
use crate::table::Description;

/// Suffix selecting the entries to inspect; matched case-sensitively.
pub const CSV_SUFFIX: &str = ".csv";

/// Whether an entry name selects a CSV file.
pub fn is_csv(name: &str) -> bool {
    name.ends_with(CSV_SUFFIX)
}

/// The description of one CSV entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryReport {
    pub name: String,
    pub description: Description,
}

fn write_archive_header<W: Write + ?Sized>(out: &mut W, archive: &str) -> Result<()> {
    writeln!(out, "archive: {archive}")?;
    Ok(())
}

fn write_entry<W: Write + ?Sized>(out: &mut W, name: &str, description: &Description) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "entry: {name}")?;
    writeln!(out, "{description}")?;
    Ok(())
}
