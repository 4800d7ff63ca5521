//! Local media files and their renaming.

use crate::core::episode::parse_episode;
use crate::core::movie::parse_movie;
use crate::core::sanitizer::sanitize;
use crate::models::media::{EpisodeRecord, MovieRecord};
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// A file on disk together with the name it should get.
#[derive(Debug, Clone)]
pub struct LocalPath {
    dir_name: PathBuf,
    cur_file_name: String,
    file_name_ext: String,
    new_file_name: Option<String>,
}

/// Extension of a file name including the dot, or empty.
///
/// A dot at the very start of the name (`.hidden`) does not start an extension.
fn split_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if file_name[..idx].chars().any(|c| c != '.') => &file_name[idx..],
        _ => "",
    }
}

impl LocalPath {
    /// Wrap a path, splitting it into directory, file name and extension.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let cur_file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let dir_name = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();

        let file_name_ext = split_extension(&cur_file_name).to_string();

        Self {
            dir_name,
            cur_file_name,
            file_name_ext,
            new_file_name: None,
        }
    }

    pub fn dir_name(&self) -> &Path {
        &self.dir_name
    }

    pub fn cur_file_name(&self) -> &str {
        &self.cur_file_name
    }

    pub fn file_name_ext(&self) -> &str {
        &self.file_name_ext
    }

    pub fn new_file_name(&self) -> Option<&str> {
        self.new_file_name.as_deref()
    }

    /// Current full path.
    pub fn path(&self) -> PathBuf {
        self.dir_name.join(&self.cur_file_name)
    }

    /// Full path after renaming, once a new name is set.
    pub fn new_path(&self) -> Option<PathBuf> {
        self.new_file_name.as_ref().map(|n| self.dir_name.join(n))
    }

    /// Set the new name (without extension). The name is sanitized and the
    /// original extension appended.
    pub fn set_new_name(&mut self, name: &str) {
        self.new_file_name = Some(format!("{}{}", sanitize(name), self.file_name_ext));
    }

    /// Rename the file to its new name, returning the new path.
    ///
    /// Fails with [`Error::SameFile`] when the new path equals the current one,
    /// which includes a new name that was never set, and with
    /// [`Error::TargetExists`] when another file already has the new name.
    pub fn rename(self) -> Result<PathBuf> {
        let cur = self.path();
        let new = self.dir_name.join(self.new_file_name.as_deref().unwrap_or(""));

        if self.new_file_name.is_none() || cur == new {
            return Err(Error::SameFile { from: cur, to: new });
        }

        if new.exists() {
            return Err(Error::TargetExists(new));
        }

        std::fs::rename(&cur, &new)?;
        tracing::info!("Renamed {} -> {}", cur.display(), new.display());
        Ok(new)
    }
}

/// A TV episode file and what its name says about it.
#[derive(Debug, Clone)]
pub struct EpisodeFile {
    pub path: LocalPath,
    pub record: EpisodeRecord,
}

impl EpisodeFile {
    /// Wrap and parse an episode file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = LocalPath::new(path);
        let record = parse_episode(path.cur_file_name())?;
        Ok(Self { path, record })
    }
}

/// A movie file and what its name says about it.
#[derive(Debug, Clone)]
pub struct MovieFile {
    pub path: LocalPath,
    pub record: MovieRecord,
}

impl MovieFile {
    /// Wrap and parse a movie file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = LocalPath::new(path);
        let record = parse_movie(path.cur_file_name())?;
        Ok(Self { path, record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        let lp = LocalPath::new("/media/tv/Show.Name.S01E02.mkv");
        assert_eq!(lp.dir_name(), Path::new("/media/tv"));
        assert_eq!(lp.cur_file_name(), "Show.Name.S01E02.mkv");
        assert_eq!(lp.file_name_ext(), ".mkv");
        assert!(lp.new_file_name().is_none());
    }

    #[test]
    fn test_extension_edge_cases() {
        assert_eq!(split_extension("noext"), "");
        assert_eq!(split_extension(".hidden"), "");
        assert_eq!(split_extension("archive.tar.gz"), ".gz");
        assert_eq!(split_extension("trailing."), ".");
    }

    #[test]
    fn test_set_new_name_sanitizes_and_keeps_extension() {
        let mut lp = LocalPath::new("dir/old.name.mkv");
        lp.set_new_name("Show: Name - S01E02 - Who's There?");
        assert_eq!(
            lp.new_file_name(),
            Some("Show - Name - S01E02 - Whos There.mkv")
        );
    }

    #[test]
    fn test_rename_without_new_name_is_same_file() {
        let lp = LocalPath::new("dir/old.mkv");
        let err = lp.rename().unwrap_err();
        assert!(err.is_same_file());
    }

    #[test]
    fn test_rename_to_same_name_is_same_file() {
        let mut lp = LocalPath::new("dir/Show - S01E02.mkv");
        lp.set_new_name("Show - S01E02");
        assert!(lp.rename().unwrap_err().is_same_file());
    }

    #[test]
    fn test_rename_never_overwrites() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let existing = temp_dir.path().join("Show - S01E02.mkv");
        let source = temp_dir.path().join("show.s01e02.mkv");
        std::fs::write(&existing, "keep").unwrap();
        std::fs::write(&source, "other").unwrap();

        let mut lp = LocalPath::new(&source);
        lp.set_new_name("Show - S01E02");
        assert_eq!(lp.new_path(), Some(existing.clone()));

        let err = lp.rename().unwrap_err();
        assert!(matches!(err, Error::TargetExists(ref p) if *p == existing));
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "keep");
        assert!(source.exists());
    }

    #[test]
    fn test_episode_file_parses_name() {
        let file = EpisodeFile::new("/tv/Show.Name.S01E02.mkv").unwrap();
        assert_eq!(file.record.title(), "Show Name");
        assert_eq!(file.path.file_name_ext(), ".mkv");
    }

    #[test]
    fn test_movie_file_rejects_unknown_pattern() {
        assert!(MovieFile::new("/movies/random_file.txt").is_err());
    }
}
