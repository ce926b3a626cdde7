//! Inspection through the [`FileSystem`] capability: `find` everything
//! under the root, then `open` each matching path.

use std::io::Write;
use std::path::Path;
use tracing::{info, trace};

use super::{EntryReport, is_csv, write_archive_header, write_entry};
use crate::error::Result;
use crate::fs::{FileSystem, LocalFileSystem, ZipFileSystem};
use crate::table::Table;

/// Print the description of every CSV file of every archive, in
/// listing (sorted) order.
///
/// Directories are inspected as plain filesystems. Stops at the first
/// error; later archives are not visited.
pub fn describe_csvs_with_filesystem<I, P, W>(archives: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    W: Write + ?Sized,
{
    for path in archives {
        let path = path.as_ref();
        write_archive_header(out, &path.display().to_string())?;
        let fs = open_filesystem(path)?;
        info!(archive = %path.display(), "inspecting filesystem");
        for_each_csv(fs.as_ref(), |name, table| {
            write_entry(out, name, &table.describe())
        })?;
    }
    Ok(())
}

/// Mount `path`: a directory as a [`LocalFileSystem`], anything else as
/// a [`ZipFileSystem`].
pub fn open_filesystem(path: &Path) -> Result<Box<dyn FileSystem>> {
    if path.is_dir() {
        Ok(Box::new(LocalFileSystem::new(path)?))
    } else {
        Ok(Box::new(ZipFileSystem::open(path)?))
    }
}

/// The reports [`describe_csvs_with_filesystem`] would print for one
/// filesystem.
pub fn filesystem_reports(fs: &dyn FileSystem) -> Result<Vec<EntryReport>> {
    let mut reports = Vec::new();
    for_each_csv(fs, |name, table| {
        reports.push(EntryReport {
            name: name.to_string(),
            description: table.describe(),
        });
        Ok(())
    })?;
    Ok(reports)
}

fn for_each_csv<F>(fs: &dyn FileSystem, mut visit: F) -> Result<()>
where
    F: FnMut(&str, Table) -> Result<()>,
{
    for path in fs.find("")? {
        if !is_csv(&path) {
            trace!(entry = %path, "skipping");
            continue;
        }

        let table = Table::from_reader(&path, fs.open(&path)?)?;
        visit(&path, table)?;
    }
    Ok(())
}
