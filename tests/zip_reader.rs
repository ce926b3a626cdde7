mod common;

use std::io::Read;

use common::{ZipBuilder, create_temp_dir};
use zipdescribe::{Error, MemoryReader, ZipArchive};

fn read_all<R: Read>(mut reader: R) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

#[test]
fn lists_entries_in_central_directory_order() {
    let bytes = ZipBuilder::new()
        .stored("z.csv", b"a\n1\n")
        .directory("docs/")
        .deflated("a.txt", b"hello")
        .build();
    let archive = ZipArchive::from_reader(MemoryReader::new(bytes)).unwrap();

    let names: Vec<_> = archive.entries().iter().map(|e| e.file_name.as_str()).collect();
    assert_eq!(names, vec!["z.csv", "docs/", "a.txt"]);
    assert!(archive.entries()[1].is_directory);
}

#[test]
fn stored_and_deflated_entries_read_back() {
    let text = "x,y\n".to_string() + &"1,2\n".repeat(500);
    let bytes = ZipBuilder::new()
        .stored("plain.csv", text.as_bytes())
        .deflated("packed.csv", text.as_bytes())
        .build();
    let archive = ZipArchive::from_reader(MemoryReader::new(bytes)).unwrap();

    let plain = read_all(archive.by_name("plain.csv").unwrap()).unwrap();
    let packed = read_all(archive.by_name("packed.csv").unwrap()).unwrap();
    assert_eq!(plain, text.as_bytes());
    assert_eq!(packed, text.as_bytes());
    assert!(
        archive.find("packed.csv").unwrap().compressed_size
            < archive.find("plain.csv").unwrap().compressed_size
    );
}

#[test]
fn archive_comment_is_skipped_when_locating_the_directory() {
    let bytes = ZipBuilder::new()
        .stored("a.csv", b"a\n1\n")
        .comment("exported by the nightly job")
        .build();
    let archive = ZipArchive::from_reader(MemoryReader::new(bytes)).unwrap();
    assert_eq!(archive.entries().len(), 1);
}

#[test]
fn zip64_end_records_are_followed() {
    let bytes = ZipBuilder::new()
        .stored("a.csv", b"a\n1\n")
        .deflated("b.csv", b"b\n2\n")
        .zip64()
        .build();
    let archive = ZipArchive::from_reader(MemoryReader::new(bytes)).unwrap();
    assert_eq!(archive.entries().len(), 2);
    assert_eq!(read_all(archive.by_name("b.csv").unwrap()).unwrap(), b"b\n2\n");
}

#[test]
fn unknown_entry_name_is_not_found() {
    let bytes = ZipBuilder::new().stored("a.csv", b"a\n").build();
    let archive = ZipArchive::from_reader(MemoryReader::new(bytes)).unwrap();
    assert!(matches!(
        archive.by_name("b.csv"),
        Err(Error::EntryNotFound(name)) if name == "b.csv"
    ));
}

#[test]
fn crc_mismatch_is_detected_at_end_of_stream() {
    let bytes = ZipBuilder::new().corrupted("bad.csv", b"a\n1\n").build();
    let archive = ZipArchive::from_reader(MemoryReader::new(bytes)).unwrap();

    let err = read_all(archive.by_name("bad.csv").unwrap()).unwrap_err();
    let err = err.downcast::<Error>().expect("crate error inside io::Error");
    assert!(matches!(err, Error::InvalidArchive(_)));
}

#[test]
fn non_zip_data_is_rejected() {
    let result = ZipArchive::from_reader(MemoryReader::new(b"col1,col2\n1,2\n".repeat(4)));
    assert!(matches!(result, Err(Error::InvalidArchive(_))));

    let result = ZipArchive::from_reader(MemoryReader::new(Vec::new()));
    assert!(matches!(result, Err(Error::InvalidArchive(_))));
}

#[test]
fn truncated_archive_is_rejected() {
    let mut bytes = ZipBuilder::new().stored("a.csv", b"a\n1\n").build();
    // Drop the local header and data but keep the end records
    bytes.drain(..10);
    assert!(ZipArchive::from_reader(MemoryReader::new(bytes)).is_err());
}

#[test]
fn open_maps_failures_to_archive_open() {
    let dir = create_temp_dir();

    let missing = dir.path().join("missing.zip");
    assert!(matches!(
        ZipArchive::open(&missing),
        Err(Error::ArchiveOpen { path, .. }) if path.ends_with("missing.zip")
    ));

    let not_zip = dir.path().join("plain.zip");
    std::fs::write(&not_zip, "just text, nothing zipped here").unwrap();
    assert!(matches!(
        ZipArchive::open(&not_zip),
        Err(Error::ArchiveOpen { .. })
    ));

    assert!(matches!(
        ZipArchive::open(dir.path()),
        Err(Error::ArchiveOpen { reason, .. }) if reason == "not a regular file"
    ));
}

#[test]
fn open_reads_archives_from_disk() {
    let dir = create_temp_dir();
    let path = ZipBuilder::new()
        .deflated("data.csv", b"v\n1\n2\n")
        .write_to(&dir.path().join("disk.zip"));

    let archive = ZipArchive::open(&path).unwrap();
    assert_eq!(read_all(archive.by_name("data.csv").unwrap()).unwrap(), b"v\n1\n2\n");
}
