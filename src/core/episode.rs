//! Episode filename parser.
//!
//! Recognizes three filename conventions, tried in order:
//! - scene rule: `Show.Name.S01E02E03.720p.mkv`
//! - NxEE: `Show Name 01x02-03 Title.mkv`
//! - digit blob: `show.name.2010.102.mkv` (season and episodes packed in one number)
//!
//! The first convention that matches wins; the others are never tried.

use crate::core::title::format_name;
use crate::models::media::EpisodeRecord;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static RE_SCENE_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[ .]S(\d{2})((E\d{2}-?)+)[ .]").unwrap());
static RE_CROSS_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" (\d{2})x((\d{2}-?)+) ").unwrap());
static RE_DIGIT_BLOB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\d{4}.)?(\d{3,})\.").unwrap());
static RE_TWO_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2}").unwrap());

/// Raw pieces split out of a filename by one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeMatch {
    /// Everything before the season/episode token.
    pub show: String,
    pub season: String,
    pub episodes: Vec<String>,
}

type Strategy = fn(&str) -> Option<EpisodeMatch>;

/// Strategies in priority order. New conventions go at the end.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("scene rule", match_scene_rule),
    ("NxEE", match_cross_format),
    ("digit blob", match_digit_blob),
];

fn two_digit_runs(info: &str) -> Vec<String> {
    RE_TWO_DIGITS
        .find_iter(info)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split on a `(show)(season)(episode info)` pattern.
fn split_season_episodes(re: &Regex, file_name: &str) -> Option<EpisodeMatch> {
    let caps = re.captures(file_name)?;
    let whole = caps.get(0)?;

    Some(EpisodeMatch {
        show: file_name[..whole.start()].to_string(),
        season: caps.get(1)?.as_str().to_string(),
        episodes: two_digit_runs(caps.get(2)?.as_str()),
    })
}

fn match_scene_rule(file_name: &str) -> Option<EpisodeMatch> {
    split_season_episodes(&RE_SCENE_RULE, file_name)
}

fn match_cross_format(file_name: &str) -> Option<EpisodeMatch> {
    split_season_episodes(&RE_CROSS_FORMAT, file_name)
}

fn match_digit_blob(file_name: &str) -> Option<EpisodeMatch> {
    let caps = RE_DIGIT_BLOB.captures(file_name)?;
    let whole = caps.get(0)?;

    // Keep the year next to the show so the title formatter still sees it.
    let mut show = file_name[..whole.start()].to_string();
    if let Some(year) = caps.get(1) {
        show.push_str(year.as_str());
    }

    let (season, episodes) = decode_digit_blob(caps.get(2)?.as_str())?;
    Some(EpisodeMatch {
        show,
        season,
        episodes,
    })
}

/// Decode a packed `SSEE[EE...]` number.
///
/// Digits are paired from the right; an odd leading digit gets a `0` in
/// front. The first pair is the season, the rest are episodes in order:
/// `102` is season 01 episode 02, `10203` is season 01 episodes 02 and 03.
pub fn decode_digit_blob(blob: &str) -> Option<(String, Vec<String>)> {
    if blob.len() < 2 || !blob.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let padded = if blob.len() % 2 == 1 {
        format!("0{}", blob)
    } else {
        blob.to_string()
    };

    let mut pairs = padded
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned());

    let season = pairs.next()?;
    Some((season, pairs.collect()))
}

/// Run the strategies in order and return the first match.
pub fn match_episode(file_name: &str) -> Option<EpisodeMatch> {
    STRATEGIES.iter().find_map(|(name, strategy)| {
        let found = strategy(file_name)?;
        tracing::debug!("{} matched '{}'", name, file_name);
        Some(found)
    })
}

/// Parse an episode filename into title, country, year, season and episodes.
pub fn parse_episode(file_name: &str) -> Result<EpisodeRecord> {
    let found = match_episode(file_name)
        .filter(|m| !m.episodes.is_empty())
        .ok_or_else(|| Error::PatternNotFound("show", file_name.to_string()))?;

    let name = format_name(&found.show);
    if name.title.is_empty() {
        return Err(Error::PatternNotFound("show", file_name.to_string()));
    }
    let season = format!("{:0>2}", found.season);

    Ok(EpisodeRecord::new(name, season, found.episodes))
}
