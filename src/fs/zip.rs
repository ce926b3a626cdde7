use std::io::Read;
use std::path::Path;

use super::{FileSystem, is_under, normalize_root};
use crate::error::{Error, Result};
use crate::io::{LocalFileReader, ReadAt};
use crate::zip::ZipArchive;

/// A ZIP archive exposed through [`FileSystem`].
pub struct ZipFileSystem<R: ReadAt> {
    archive: ZipArchive<R>,
}

impl ZipFileSystem<LocalFileReader> {
    /// Mount the ZIP file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArchiveOpen`](crate::Error::ArchiveOpen) if the
    /// path is missing or not a ZIP archive.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(ZipArchive::open(path)?))
    }
}

impl<R: ReadAt> ZipFileSystem<R> {
    pub fn new(archive: ZipArchive<R>) -> Self {
        Self { archive }
    }
}

impl<R: ReadAt> FileSystem for ZipFileSystem<R> {
    fn find(&self, root: &str) -> Result<Vec<String>> {
        let root = normalize_root(root);
        let mut files: Vec<String> = self
            .archive
            .entries()
            .iter()
            .filter(|e| !e.is_directory)
            .filter(|e| is_under(e.file_name.trim_start_matches('/'), root))
            .map(|e| e.file_name.clone())
            .collect();
        files.sort();
        Ok(files)
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>> {
        let entry = self
            .archive
            .find(path)
            .filter(|e| !e.is_directory)
            .ok_or_else(|| Error::EntryNotFound(path.to_string()))?;
        Ok(Box::new(self.archive.open_entry(entry)?))
    }
}
