//! Media-related data models.

use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

/// Media type enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movies,
    Episodes,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movies => write!(f, "movies"),
            MediaType::Episodes => write!(f, "episodes"),
        }
    }
}

/// Title, country and year extracted from a filename fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMediaName {
    /// Title-cased title with separators collapsed.
    pub title: String,
    /// ISO-3166 alpha-2 country code (`UK` is reported as `GB`).
    pub country: Option<String>,
    /// Four-digit year.
    pub year: Option<String>,
}

/// A parsed TV episode filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeRecord {
    #[serde(flatten)]
    pub name: ParsedMediaName,
    /// Season, zero-padded to two digits.
    pub season: String,
    /// Episodes in order of appearance, each zero-padded to two digits.
    pub episodes: Vec<String>,
    #[serde(skip)]
    identifier: OnceCell<String>,
}

impl EpisodeRecord {
    pub fn new(name: ParsedMediaName, season: String, episodes: Vec<String>) -> Self {
        Self {
            name,
            season,
            episodes,
            identifier: OnceCell::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.name.title
    }

    pub fn country(&self) -> Option<&str> {
        self.name.country.as_deref()
    }

    pub fn year(&self) -> Option<&str> {
        self.name.year.as_deref()
    }

    /// Key shared by every file of the same show: the title upper-cased with
    /// all non-word characters removed.
    pub fn identifier(&self) -> &str {
        self.identifier.get_or_init(|| {
            self.name
                .title
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect::<String>()
                .to_uppercase()
        })
    }
}

impl PartialEq for EpisodeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for EpisodeRecord {}

/// A parsed movie filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(flatten)]
    pub name: ParsedMediaName,
}

impl MovieRecord {
    pub fn title(&self) -> &str {
        &self.name.title
    }

    pub fn year(&self) -> Option<&str> {
        self.name.year.as_deref()
    }
}
