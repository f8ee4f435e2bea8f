use std::collections::BTreeSet;
use std::fs::{self, File};
use std::path::PathBuf;

use pdf2csv::{find_files_with_extension, ConversionErrorKind};
use tempfile::TempDir;

fn names(files: &[PathBuf], root: &std::path::Path) -> BTreeSet<String> {
    let root = std::path::absolute(root).unwrap();
    files
        .iter()
        .map(|f| f.strip_prefix(&root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_scan_is_recursive_and_filtered() {
    let td = TempDir::new().unwrap();
    fs::create_dir_all(td.path().join("sub")).unwrap();
    for name in ["a.pdf", "b.PDF", "c.txt", "sub/d.pdf"] {
        File::create(td.path().join(name)).unwrap();
    }

    let files = find_files_with_extension(td.path(), "pdf").unwrap();
    let expected: BTreeSet<String> = ["a.pdf", "b.PDF", "sub/d.pdf"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names(&files, td.path()), expected);
}

#[test]
fn test_scan_is_restartable() {
    let td = TempDir::new().unwrap();
    File::create(td.path().join("a.pdf")).unwrap();

    let first = find_files_with_extension(td.path(), "pdf").unwrap();
    File::create(td.path().join("b.pdf")).unwrap();

    // The first result is a snapshot; scanning again sees the new file.
    assert_eq!(first.len(), 1);
    assert_eq!(find_files_with_extension(td.path(), "pdf").unwrap().len(), 2);
}

#[test]
fn test_scan_empty_tree() {
    let td = TempDir::new().unwrap();
    assert!(find_files_with_extension(td.path(), "pdf").unwrap().is_empty());
}

#[test]
fn test_scan_file_root_is_not_a_directory() {
    let td = TempDir::new().unwrap();
    let file = td.path().join("x.pdf");
    File::create(&file).unwrap();
    let err = find_files_with_extension(&file, "pdf").unwrap_err();
    assert!(matches!(err.kind(), Some(ConversionErrorKind::NotADirectory { .. })));
}
