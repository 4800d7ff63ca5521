//! Filename generator.
//!
//! Composes the new name (without extension) of a parsed file. The result is
//! not sanitized here; `LocalPath::set_new_name` does that.

use crate::models::media::{EpisodeRecord, MovieRecord};
use std::collections::BTreeMap;

/// `S01E02E03` tag of an episode record.
pub fn episode_tag(record: &EpisodeRecord) -> String {
    let episodes: String = record.episodes.iter().map(|e| format!("E{}", e)).collect();
    format!("S{}{}", record.season, episodes)
}

/// Generate an episode filename.
///
/// Format: `${show} - S${season}E${episode}[E${episode}...] - ${name}[ & ${name}...]`
///
/// `show` overrides the parsed title (the TVmaze name when one was found).
/// In simple mode the show part is left out. Episodes without a known name
/// are skipped in the name part, which is omitted when no name is known.
pub fn generate_episode_filename(
    record: &EpisodeRecord,
    show: Option<&str>,
    episode_names: &BTreeMap<String, String>,
    simple: bool,
) -> String {
    let mut parts = Vec::new();

    if !simple {
        parts.push(show.unwrap_or(record.title()).to_string());
    }

    parts.push(episode_tag(record));

    let names: Vec<&str> = record
        .episodes
        .iter()
        .filter_map(|e| episode_names.get(e).map(String::as_str))
        .filter(|n| !n.trim().is_empty())
        .collect();
    if !names.is_empty() {
        parts.push(names.join(" & "));
    }

    parts.join(" - ")
}

/// Generate a movie filename.
///
/// Format: `${title} (${year})`, or just the title when no year is known.
pub fn generate_movie_filename(record: &MovieRecord) -> String {
    match record.year() {
        Some(year) => format!("{} ({})", record.title(), year),
        None => record.title().to_string(),
    }
}
