//! Integration tests for the scanner module.
//!
//! Tests cover:
//! - Explicit files and directories
//! - Recursive and flat directory walks
//! - Error handling for non-existent paths

use renamer::core::scanner::collect_files;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_scan_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let result = collect_files(&[temp_dir.path().to_path_buf()], false).unwrap();

    assert!(result.files.is_empty());
}

#[test]
fn test_scan_filters_media_files() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(temp_dir.path().join("show.s01e01.mkv"), "fake").unwrap();
    fs::write(temp_dir.path().join("show.s01e01.srt"), "fake").unwrap();
    fs::write(temp_dir.path().join("show.nfo"), "not media").unwrap();

    let result = collect_files(&[temp_dir.path().to_path_buf()], false).unwrap();

    assert_eq!(result.files.len(), 2);
    assert_eq!(result.total_files_ignored, 1);
}

#[test]
fn test_explicit_file_is_always_taken() {
    let temp_dir = TempDir::new().unwrap();
    let notes = temp_dir.path().join("notes.txt");
    fs::write(&notes, "fake").unwrap();

    let result = collect_files(&[notes.clone()], false).unwrap();
    assert_eq!(result.files, vec![notes]);
}

#[test]
fn test_scan_nested_directories() {
    let temp_dir = TempDir::new().unwrap();

    let nested = temp_dir.path().join("Season 01");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("show.s01e01.mkv"), "fake").unwrap();
    fs::write(temp_dir.path().join("show.s02e01.mkv"), "fake").unwrap();

    let flat = collect_files(&[temp_dir.path().to_path_buf()], false).unwrap();
    assert_eq!(flat.files.len(), 1);

    let recursive = collect_files(&[temp_dir.path().to_path_buf()], true).unwrap();
    assert_eq!(recursive.files.len(), 2);
}

#[test]
fn test_scan_deduplicates_and_sorts() {
    let temp_dir = TempDir::new().unwrap();
    let b = temp_dir.path().join("b.mkv");
    let a = temp_dir.path().join("a.mkv");
    fs::write(&b, "fake").unwrap();
    fs::write(&a, "fake").unwrap();

    let paths: Vec<PathBuf> = vec![b.clone(), temp_dir.path().to_path_buf(), a.clone()];
    let result = collect_files(&paths, false).unwrap();

    assert_eq!(result.files, vec![a, b]);
}

#[test]
fn test_scan_nonexistent_path() {
    let result = collect_files(&[Path::new("/nonexistent/path").to_path_buf()], false);
    assert!(result.is_err());
}
