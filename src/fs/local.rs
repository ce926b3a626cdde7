use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use super::{FileSystem, normalize_root};
use crate::error::{Error, Result};

/// A directory on local storage exposed through [`FileSystem`].
pub struct LocalFileSystem {
    root: PathBuf,
}

impl LocalFileSystem {
    /// Serve the files below `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArchiveOpen`] if `root` is not a directory.
    pub fn new(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::archive_open(
                root.display().to_string(),
                "not a directory",
            ));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Map a `/`-separated relative path onto the directory, refusing
    /// anything that would climb out of it.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
            .then(|| self.root.join(relative))
    }
}

impl FileSystem for LocalFileSystem {
    fn find(&self, root: &str) -> Result<Vec<String>> {
        let root = normalize_root(root);
        let Some(start) = self.resolve(root) else {
            return Ok(Vec::new());
        };
        if !start.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&start) {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(io::Error::other)?;
            let path: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            files.push(path.join("/"));
        }
        files.sort();
        Ok(files)
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>> {
        let full = self
            .resolve(path)
            .ok_or_else(|| Error::EntryNotFound(path.to_string()))?;
        match File::open(&full) {
            Ok(file) if file.metadata()?.is_file() => Ok(Box::new(file)),
            Ok(_) => Err(Error::EntryNotFound(path.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(Error::EntryNotFound(path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
