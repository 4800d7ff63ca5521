//! File discovery.
//!
//! Expands the paths given on the command line into the files to rename.
//! Files named explicitly are always taken; directories contribute their
//! video and subtitle files.

use crate::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions of files picked up from directories.
const MEDIA_EXTENSIONS: &[&str] = &[
    // Video
    "mkv", "mp4", "avi", "mov", "wmv", "m4v", "ts", "m2ts", "flv", "webm", "mpg", "mpeg",
    "ogv", "divx", "rmvb",
    // Subtitles
    "srt", "sub", "ass", "ssa", "vtt", "idx",
];

/// Result of expanding the input paths.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to process, sorted and de-duplicated.
    pub files: Vec<PathBuf>,
    /// Total directories scanned.
    pub total_dirs_scanned: usize,
    /// Files in scanned directories that were not media.
    pub total_files_ignored: usize,
}

/// Check if a path has a media extension.
pub fn is_media_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .map(|ext| MEDIA_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Expand files and directories into the list of files to process.
///
/// Directories are only descended into when `recursive` is set; otherwise
/// just their direct children are considered.
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Result<ScanResult> {
    let mut result = ScanResult::default();
    let mut files = BTreeSet::new();

    for path in paths {
        if !path.exists() {
            return Err(crate::Error::PathNotFound(path.display().to_string()));
        }

        if path.is_file() {
            files.insert(path.clone());
            continue;
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        for entry in WalkDir::new(path)
            .follow_links(false)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_dir() {
                result.total_dirs_scanned += 1;
            } else if entry.file_type().is_file() {
                if is_media_file(entry.path()) {
                    files.insert(entry.path().to_path_buf());
                } else {
                    tracing::debug!("Ignoring {}", entry.path().display());
                    result.total_files_ignored += 1;
                }
            }
        }
    }

    result.files = files.into_iter().collect();

    tracing::debug!(
        "Collected {} files from {} directories ({} ignored)",
        result.files.len(),
        result.total_dirs_scanned,
        result.total_files_ignored
    );

    Ok(result)
}
