//! Movie filename parser.

use crate::core::title::format_name;
use crate::models::media::MovieRecord;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static RE_MOVIE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([a-z0-9.-]+)([12]\d{3})").unwrap());

/// Parse a movie filename such as `Movie.Title.2019.1080p.mkv`.
///
/// The name fragment and the year right after it are handed to the title
/// formatter together, which extracts the year once.
pub fn parse_movie(file_name: &str) -> Result<MovieRecord> {
    let caps = RE_MOVIE
        .captures(file_name)
        .ok_or_else(|| Error::PatternNotFound("movie", file_name.to_string()))?;

    let fragment = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let year = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
    tracing::debug!("Movie fragment '{}' with year {} in '{}'", fragment, year, file_name);

    let name = format_name(&format!("{}{}", fragment, year));
    if name.title.is_empty() {
        return Err(Error::PatternNotFound("movie", file_name.to_string()));
    }

    Ok(MovieRecord { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movie_with_year() {
        let movie = parse_movie("Movie.Title.2019.mkv").unwrap();
        assert_eq!(movie.title(), "Movie Title");
        assert_eq!(movie.year(), Some("2019"));
    }

    #[test]
    fn test_parse_movie_ignores_trailing_tags() {
        let movie = parse_movie("The.Matrix.1999.1080p.BluRay.x264.mkv").unwrap();
        assert_eq!(movie.title(), "The Matrix");
        assert_eq!(movie.year(), Some("1999"));
    }

    #[test]
    fn test_parse_movie_first_year_in_fragment_wins() {
        let movie = parse_movie("Blade.Runner.2049.2017.mkv").unwrap();
        assert_eq!(movie.year(), Some("2049"));
        assert_eq!(movie.title(), "Blade Runner");
    }

    #[test]
    fn test_parse_movie_not_found() {
        let err = parse_movie("random_file.txt").unwrap_err();
        assert!(matches!(err, Error::PatternNotFound("movie", _)));
        assert_eq!(
            err.to_string(),
            "Can't find movie pattern for random_file.txt"
        );
    }

    #[test]
    fn test_parse_movie_year_only_is_rejected() {
        assert!(parse_movie("2001.1968.mkv").is_err());
    }
}
