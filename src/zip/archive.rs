use flate2::read::DeflateDecoder;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::{LocalFileReader, RangeReader, ReadAt};

use super::parser::ZipParser;
use super::structures::{invalid, CompressionMethod, ZipFileEntry};

/// Read-only view of a ZIP archive.
///
/// The Central Directory is parsed once when the archive is opened;
/// entries are then opened as independent bounded streams.
pub struct ZipArchive<R: ReadAt> {
    parser: ZipParser<R>,
    entries: Vec<ZipFileEntry>,
}

impl ZipArchive<LocalFileReader> {
    /// Open a ZIP file on local storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArchiveOpen`] if the path cannot be opened or
    /// does not hold a valid ZIP archive.
    pub fn open(path: &Path) -> Result<Self> {
        LocalFileReader::open(path)
            .and_then(Self::from_reader)
            .map_err(|e| Error::archive_open(path.display().to_string(), e.reason()))
    }
}

impl<R: ReadAt> ZipArchive<R> {
    /// Parse the Central Directory of an archive held by `reader`.
    pub fn from_reader(reader: R) -> Result<Self> {
        let parser = ZipParser::new(reader);
        let entries = parser.list_files()?;
        debug!(entries = entries.len(), "parsed central directory");
        Ok(Self { parser, entries })
    }

    /// All entries, in Central Directory order
    pub fn entries(&self) -> &[ZipFileEntry] {
        &self.entries
    }

    /// Look up an entry by its exact name
    pub fn find(&self, name: &str) -> Option<&ZipFileEntry> {
        self.entries.iter().find(|e| e.file_name == name)
    }

    /// Open the entry with the given name for reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntryNotFound`] if no entry carries that name.
    pub fn by_name(&self, name: &str) -> Result<EntryReader<'_, R>> {
        let entry = self
            .find(name)
            .ok_or_else(|| Error::EntryNotFound(name.to_string()))?;
        self.open_entry(entry)
    }

    /// Open an entry for reading.
    ///
    /// The returned reader decompresses on the fly and verifies the
    /// entry's size and CRC-32 when it reaches end of stream.
    pub fn open_entry(&self, entry: &ZipFileEntry) -> Result<EntryReader<'_, R>> {
        if entry.is_encrypted() {
            return Err(Error::Encrypted(entry.file_name.clone()));
        }

        let data_offset = self.parser.get_data_offset(entry)?;
        let raw = RangeReader::new(self.parser.reader(), data_offset, entry.compressed_size);

        let data = match entry.compression_method {
            CompressionMethod::Stored => {
                if entry.compressed_size != entry.uncompressed_size {
                    return Err(invalid("stored entry sizes disagree"));
                }
                EntryData::Stored(raw)
            }
            CompressionMethod::Deflate => EntryData::Deflate(DeflateDecoder::new(raw)),
            CompressionMethod::Unknown(method) => {
                return Err(Error::UnsupportedCompression(method));
            }
        };

        debug!(entry = %entry.file_name, size = entry.uncompressed_size, "opened entry");

        Ok(EntryReader {
            data,
            hasher: crc32fast::Hasher::new(),
            expected_crc: entry.crc32,
            expected_size: entry.uncompressed_size,
            read: 0,
        })
    }
}

enum EntryData<'a, R: ReadAt> {
    Stored(RangeReader<'a, R>),
    Deflate(DeflateDecoder<RangeReader<'a, R>>),
}

/// Streaming reader over one entry's uncompressed bytes.
pub struct EntryReader<'a, R: ReadAt> {
    data: EntryData<'a, R>,
    hasher: crc32fast::Hasher,
    expected_crc: u32,
    expected_size: u64,
    read: u64,
}

impl<R: ReadAt> EntryReader<'_, R> {
    fn verify(&self) -> io::Result<()> {
        if self.read != self.expected_size {
            return Err(io::Error::other(invalid("entry size mismatch")));
        }
        if self.hasher.clone().finalize() != self.expected_crc {
            return Err(io::Error::other(invalid("CRC-32 mismatch")));
        }
        Ok(())
    }
}

impl<R: ReadAt> Read for EntryReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        let n = match &mut self.data {
            EntryData::Stored(r) => r.read(buf)?,
            EntryData::Deflate(r) => r.read(buf)?,
        };

        if n == 0 {
            self.verify()?;
            return Ok(0);
        }

        self.hasher.update(&buf[..n]);
        self.read += n as u64;
        if self.read > self.expected_size {
            return Err(io::Error::other(invalid("entry size mismatch")));
        }
        Ok(n)
    }
}
