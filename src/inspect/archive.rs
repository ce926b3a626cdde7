//! Inspection through the archive API: list the Central Directory,
//! then open each matching entry by name.

use std::io::Write;
use std::path::Path;
use tracing::{info, trace};

use super::{EntryReport, is_csv, write_archive_header, write_entry};
use crate::error::Result;
use crate::table::Table;
use crate::zip::ZipArchive;

/// Print the description of every CSV entry of every archive, in
/// archive order.
///
/// Stops at the first error; later archives are not visited.
pub fn describe_csvs_with_archive<I, P, W>(archives: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    W: Write + ?Sized,
{
    for path in archives {
        let path = path.as_ref();
        write_archive_header(out, &path.display().to_string())?;
        for_each_csv(path, |name, table| write_entry(out, name, &table.describe()))?;
    }
    Ok(())
}

/// The reports [`describe_csvs_with_archive`] would print for one archive.
pub fn archive_reports(path: &Path) -> Result<Vec<EntryReport>> {
    let mut reports = Vec::new();
    for_each_csv(path, |name, table| {
        reports.push(EntryReport {
            name: name.to_string(),
            description: table.describe(),
        });
        Ok(())
    })?;
    Ok(reports)
}

fn for_each_csv<F>(path: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&str, Table) -> Result<()>,
{
    let archive = ZipArchive::open(path)?;
    info!(archive = %path.display(), entries = archive.entries().len(), "inspecting archive");

    for entry in archive.entries() {
        if entry.is_directory || !is_csv(&entry.file_name) {
            trace!(entry = %entry.file_name, "skipping");
            continue;
        }

        let reader = archive.by_name(&entry.file_name)?;
        let table = Table::from_reader(&entry.file_name, reader)?;
        visit(&entry.file_name, table)?;
    }

    Ok(())
}
