//! # zipdescribe
//!
//! Describe the CSV files stored inside ZIP archives.
//!
//! Two inspectors produce the same report:
//!
//! - [`describe_csvs_with_archive`] lists the archive's Central Directory
//!   with the built-in ZIP reader and opens each CSV entry by name.
//! - [`describe_csvs_with_filesystem`] programs against the small
//!   [`FileSystem`] capability (`find`, `open`), so it works unchanged on
//!   a ZIP archive ([`ZipFileSystem`]) or a directory ([`LocalFileSystem`]).
//!
//! For each entry whose name ends in `.csv` the table is parsed and its
//! summary statistics printed: count/mean/std/min/quartiles/max for
//! numeric columns, count/unique/top/freq for text columns.
//!
//! ## Example
//!
//! ```no_run
//! use zipdescribe::describe_csvs_with_archive;
//!
//! fn main() -> zipdescribe::Result<()> {
//!     let mut stdout = std::io::stdout().lock();
//!     describe_csvs_with_archive(["dummy_copied.zip"], &mut stdout)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod fs;
pub mod inspect;
pub mod io;
pub mod table;
pub mod zip;

pub use cli::{Cli, Method};
pub use error::{Error, Result};
pub use fs::{FileSystem, LocalFileSystem, ZipFileSystem};
pub use inspect::archive::{archive_reports, describe_csvs_with_archive};
pub use inspect::filesystem::{describe_csvs_with_filesystem, filesystem_reports, open_filesystem};
pub use inspect::{EntryReport, is_csv};
pub use io::{LocalFileReader, MemoryReader, ReadAt};
pub use table::{Description, Table};
pub use zip::{ZipArchive, ZipFileEntry};
