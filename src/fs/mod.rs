//! Storage-agnostic file access.
//!
//! [`FileSystem`] is the small capability set the filesystem inspector
//! is written against: list every file under a root, open one file for
//! reading. Each backend is an adapter implementing it.

mod local;
mod zip;

pub use local::LocalFileSystem;
pub use zip::ZipFileSystem;

use std::io::Read;

use crate::error::Result;

/// Read-only listing and opening of files, independent of the backend.
pub trait FileSystem {
    /// Every file below `root` (`""` for everything), sorted by path.
    ///
    /// Paths use `/` as separator and are returned exactly as `open`
    /// accepts them. Directories are not listed.
    fn find(&self, root: &str) -> Result<Vec<String>>;

    /// Open the file at `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntryNotFound`](crate::Error::EntryNotFound) if
    /// no file exists at `path`.
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>>;
}

/// `root` with surrounding separators removed, or `""` for the whole tree.
fn normalize_root(root: &str) -> &str {
    root.trim_matches('/')
}

/// Whether `path` lies below the normalized `root`.
fn is_under(path: &str, root: &str) -> bool {
    root.is_empty()
        || path
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with('/'))
}
