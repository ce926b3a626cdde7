#![allow(dead_code)]

use flate2::Compression;
use flate2::write::DeflateEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DUMMY1_CSV: &str = "col1,col2\n1,2\n3,4\n5,6\n";
pub const DUMMY2_CSV: &str = "name,address\njohn,manchester\njane,london\njim,leeds\n";

enum Method {
    Stored,
    Deflate,
}

struct Entry {
    name: String,
    data: Vec<u8>,
    method: Method,
    bad_crc: bool,
}

/// Writes small ZIP archives byte by byte for the reader tests.
#[derive(Default)]
pub struct ZipBuilder {
    entries: Vec<Entry>,
    comment: Vec<u8>,
    zip64: bool,
}

impl ZipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(mut self, name: &str, data: &[u8]) -> Self {
        self.push(name, data, Method::Stored, false);
        self
    }

    pub fn deflated(mut self, name: &str, data: &[u8]) -> Self {
        self.push(name, data, Method::Deflate, false);
        self
    }

    pub fn directory(mut self, name: &str) -> Self {
        self.push(name, b"", Method::Stored, false);
        self
    }

    /// A stored entry whose recorded CRC-32 does not match its data.
    pub fn corrupted(mut self, name: &str, data: &[u8]) -> Self {
        self.push(name, data, Method::Stored, true);
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = comment.as_bytes().to_vec();
        self
    }

    /// Write ZIP64 end records and saturate the classic EOCD fields.
    pub fn zip64(mut self) -> Self {
        self.zip64 = true;
        self
    }

    fn push(&mut self, name: &str, data: &[u8], method: Method, bad_crc: bool) {
        self.entries.push(Entry {
            name: name.to_string(),
            data: data.to_vec(),
            method,
            bad_crc,
        });
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut central = Vec::new();

        for entry in &self.entries {
            let (method, payload) = match entry.method {
                Method::Stored => (0u16, entry.data.clone()),
                Method::Deflate => {
                    let mut enc = DeflateEncoder::new(Vec::new(), Compression::default());
                    enc.write_all(&entry.data).unwrap();
                    (8u16, enc.finish().unwrap())
                }
            };
            let mut crc = crc32fast::hash(&entry.data);
            if entry.bad_crc {
                crc ^= 0xDEAD_BEEF;
            }
            let offset = out.len() as u32;
            let name = entry.name.as_bytes();

            // local file header
            out.extend_from_slice(b"PK\x03\x04");
            out.extend_from_slice(&20u16.to_le_bytes());
            out.extend_from_slice(&0u16.to_le_bytes());
            out.extend_from_slice(&method.to_le_bytes());
            out.extend_from_slice(&[0, 0, 0x21, 0]);
            out.extend_from_slice(&crc.to_le_bytes());
            out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            out.extend_from_slice(&(entry.data.len() as u32).to_le_bytes());
            out.extend_from_slice(&(name.len() as u16).to_le_bytes());
            out.extend_from_slice(&0u16.to_le_bytes());
            out.extend_from_slice(name);
            out.extend_from_slice(&payload);

            // central directory file header
            central.extend_from_slice(b"PK\x01\x02");
            central.extend_from_slice(&20u16.to_le_bytes());
            central.extend_from_slice(&20u16.to_le_bytes());
            central.extend_from_slice(&0u16.to_le_bytes());
            central.extend_from_slice(&method.to_le_bytes());
            central.extend_from_slice(&[0, 0, 0x21, 0]);
            central.extend_from_slice(&crc.to_le_bytes());
            central.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            central.extend_from_slice(&(entry.data.len() as u32).to_le_bytes());
            central.extend_from_slice(&(name.len() as u16).to_le_bytes());
            central.extend_from_slice(&0u16.to_le_bytes());
            central.extend_from_slice(&0u16.to_le_bytes());
            central.extend_from_slice(&0u16.to_le_bytes());
            central.extend_from_slice(&0u16.to_le_bytes());
            central.extend_from_slice(&0u32.to_le_bytes());
            central.extend_from_slice(&offset.to_le_bytes());
            central.extend_from_slice(name);
        }

        let cd_offset = out.len() as u64;
        let cd_size = central.len() as u64;
        let total = self.entries.len() as u64;
        out.extend_from_slice(&central);

        if self.zip64 {
            let eocd64_offset = out.len() as u64;
            out.extend_from_slice(b"PK\x06\x06");
            out.extend_from_slice(&44u64.to_le_bytes());
            out.extend_from_slice(&45u16.to_le_bytes());
            out.extend_from_slice(&45u16.to_le_bytes());
            out.extend_from_slice(&0u32.to_le_bytes());
            out.extend_from_slice(&0u32.to_le_bytes());
            out.extend_from_slice(&total.to_le_bytes());
            out.extend_from_slice(&total.to_le_bytes());
            out.extend_from_slice(&cd_size.to_le_bytes());
            out.extend_from_slice(&cd_offset.to_le_bytes());

            out.extend_from_slice(b"PK\x06\x07");
            out.extend_from_slice(&0u32.to_le_bytes());
            out.extend_from_slice(&eocd64_offset.to_le_bytes());
            out.extend_from_slice(&1u32.to_le_bytes());
        }

        let (entries16, size32, offset32) = if self.zip64 {
            (0xFFFFu16, 0xFFFF_FFFFu32, 0xFFFF_FFFFu32)
        } else {
            (total as u16, cd_size as u32, cd_offset as u32)
        };
        out.extend_from_slice(b"PK\x05\x06");
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&entries16.to_le_bytes());
        out.extend_from_slice(&entries16.to_le_bytes());
        out.extend_from_slice(&size32.to_le_bytes());
        out.extend_from_slice(&offset32.to_le_bytes());
        out.extend_from_slice(&(self.comment.len() as u16).to_le_bytes());
        out.extend_from_slice(&self.comment);

        out
    }

    pub fn write_to(self, path: &Path) -> PathBuf {
        fs::write(path, self.build()).expect("Failed to write archive");
        path.to_path_buf()
    }
}

/// The two-entry demo archive, written into `dir`.
pub fn dummy_archive(dir: &Path) -> PathBuf {
    ZipBuilder::new()
        .stored("dummy1.csv", DUMMY1_CSV.as_bytes())
        .deflated("dummy2.csv", DUMMY2_CSV.as_bytes())
        .write_to(&dir.join("dummy_copied.zip"))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Run an inspector into a string.
pub fn capture<F>(run: F) -> (String, zipdescribe::Result<()>)
where
    F: FnOnce(&mut Vec<u8>) -> zipdescribe::Result<()>,
{
    let mut out = Vec::new();
    let result = run(&mut out);
    (String::from_utf8(out).expect("output is UTF-8"), result)
}
