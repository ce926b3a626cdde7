//! Error types shared by the ZIP reader, the filesystem adapters and the
//! table parser.

use std::io;
use thiserror::Error;

/// Errors raised while inspecting archives.
#[derive(Error, Debug)]
pub enum Error {
    /// The archive path does not exist or is not a readable ZIP file.
    #[error("cannot open archive {path}: {reason}")]
    ArchiveOpen { path: String, reason: String },

    /// A named entry is not present in the archive or filesystem.
    #[error("entry not found: {0}")]
    EntryNotFound(String),

    /// Entry content is not valid comma-separated text.
    #[error("cannot parse {entry}: {reason}")]
    Parse { entry: String, reason: String },

    /// A ZIP structure is malformed or its data failed verification.
    #[error("invalid ZIP archive: {0}")]
    InvalidArchive(String),

    /// The entry uses a compression method other than STORED or DEFLATE.
    #[error("unsupported compression method: {0}")]
    UnsupportedCompression(u16),

    /// The entry is password protected.
    #[error("encrypted entry is not supported: {0}")]
    Encrypted(String),

    #[error("I/O error")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn archive_open(path: impl Into<String>, reason: impl ToString) -> Self {
        Error::ArchiveOpen {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Recover a crate error that travelled through an [`io::Error`].
    pub(crate) fn from_io(err: io::Error) -> Self {
        match err.downcast::<Error>() {
            Ok(inner) => inner,
            Err(err) => err.into(),
        }
    }

    /// The human readable cause, looking through I/O wrappers.
    pub(crate) fn reason(&self) -> String {
        match self {
            Error::Io { source } => source.to_string(),
            other => other.to_string(),
        }
    }

    pub(crate) fn parse(entry: impl Into<String>, reason: impl ToString) -> Self {
        Error::Parse {
            entry: entry.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
