use filetime::{FileTime, set_file_mtime};
use plugfs::latest_copy;
use std::fs;
use std::path::Path;

const BASE_SECS: i64 = 1_600_000_000;

fn write_with_mtime(path: &Path, contents: &[u8], secs: i64) {
    fs::write(path, contents).unwrap();
    set_file_mtime(path, FileTime::from_unix_time(secs, 0)).unwrap();
}

#[test]
fn newest_matching_copy_wins() {
    let td = tempfile::tempdir().unwrap();
    let original = td.path().join("state.ttl");
    let copies = td.path().join("copies");
    fs::create_dir(&copies).unwrap();

    write_with_mtime(&original, b"abcd", BASE_SECS);
    write_with_mtime(&copies.join("state.ttl.2"), b"wxyz", BASE_SECS + 10);
    write_with_mtime(&copies.join("state.ttl.3"), b"wxyz", BASE_SECS + 20);
    write_with_mtime(&copies.join("state.ttl.4"), b"wxyz", BASE_SECS + 30);

    assert_eq!(latest_copy(&original, &copies), Some(copies.join("state.ttl.4")));
}

#[test]
fn copies_older_than_original_are_ignored() {
    let td = tempfile::tempdir().unwrap();
    let original = td.path().join("state.ttl");
    write_with_mtime(&original, b"abcd", BASE_SECS + 100);
    write_with_mtime(&td.path().join("state.ttl.2"), b"abcd", BASE_SECS);

    assert_eq!(latest_copy(&original, td.path()), None);
}

#[test]
fn size_mismatch_is_ignored_even_when_newer() {
    let td = tempfile::tempdir().unwrap();
    let original = td.path().join("state.ttl");
    write_with_mtime(&original, b"abcd", BASE_SECS);
    write_with_mtime(&td.path().join("state.ttl.2"), b"abcd", BASE_SECS + 5);
    write_with_mtime(&td.path().join("state.ttl.3"), b"abcdef", BASE_SECS + 50);

    assert_eq!(latest_copy(&original, td.path()), Some(td.path().join("state.ttl.2")));
}

#[test]
fn non_numbered_names_and_directories_are_skipped() {
    let td = tempfile::tempdir().unwrap();
    let original = td.path().join("state.ttl");
    let copies = td.path().join("copies");
    fs::create_dir(&copies).unwrap();
    write_with_mtime(&original, b"abcd", BASE_SECS);

    write_with_mtime(&copies.join("state.ttl"), b"abcd", BASE_SECS + 40);
    write_with_mtime(&copies.join("state.ttl.bak"), b"abcd", BASE_SECS + 40);
    write_with_mtime(&copies.join("other.ttl.9"), b"abcd", BASE_SECS + 40);
    fs::create_dir(copies.join("state.ttl.7")).unwrap();

    assert_eq!(latest_copy(&original, &copies), None);

    write_with_mtime(&copies.join("state.ttl.12"), b"abcd", BASE_SECS + 1);
    assert_eq!(latest_copy(&original, &copies), Some(copies.join("state.ttl.12")));
}

#[test]
fn missing_original_or_directory_yields_none() {
    let td = tempfile::tempdir().unwrap();
    assert_eq!(latest_copy(td.path().join("missing"), td.path()), None);

    let original = td.path().join("state.ttl");
    fs::write(&original, b"abcd").unwrap();
    assert_eq!(latest_copy(&original, td.path().join("no-such-dir")), None);
}
