//! TVmaze API client.
//!
//! Finds the show an episode file belongs to and fetches its episode list so
//! episode names can go into the new filename.

use crate::models::config::TvMazeConfig;
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

static RE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Search result entry.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub score: Option<f64>,
    pub show: ShowInfo,
}

/// Show as returned by the search endpoint.
#[derive(Debug, Deserialize)]
pub struct ShowInfo {
    pub id: u64,
    pub name: String,
    pub premiered: Option<String>,
    pub network: Option<Provider>,
    #[serde(rename = "webChannel")]
    pub web_channel: Option<Provider>,
    pub externals: Option<Externals>,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Network or web channel.
#[derive(Debug, Deserialize)]
pub struct Provider {
    pub name: Option<String>,
    pub country: Option<Country>,
}

#[derive(Debug, Deserialize)]
pub struct Country {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct Externals {
    pub thetvdb: Option<u64>,
    pub imdb: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Link,
}

#[derive(Debug, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Episode list entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeInfo {
    pub season: u32,
    /// Missing for specials.
    pub number: Option<u32>,
    pub name: String,
}

/// A show that may be the one a file refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCandidate {
    pub title: String,
    pub country: Option<String>,
    pub premiered: NaiveDate,
    pub thetvdb: Option<u64>,
    /// Episode list endpoint.
    pub link: String,
}

impl ShowCandidate {
    /// Build a candidate from a search result; shows that never premiered are skipped.
    fn from_info(info: ShowInfo) -> Option<Self> {
        let premiered = info
            .premiered
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())?;

        let provider = info.network.or(info.web_channel);
        let country = provider.and_then(|p| p.country).map(|c| c.code);

        Some(Self {
            title: info.name,
            country,
            premiered,
            thetvdb: info.externals.and_then(|e| e.thetvdb),
            link: format!("{}/episodes", info.links.self_link.href),
        })
    }
}

/// Normalize a title for comparison: upper case, word characters only.
fn comparable(title: &str) -> String {
    RE_NON_WORD.replace_all(title, "").to_uppercase()
}

/// Similarity between the searched title and a show name, 0 to 100.
pub fn match_score(query: &str, title: &str) -> u32 {
    let score = strsim::normalized_levenshtein(&comparable(query), &comparable(title));
    (score * 100.0).round() as u32
}

/// Keep only the candidates with the best score against `query`.
pub fn best_matches(query: &str, candidates: Vec<ShowCandidate>) -> Vec<ShowCandidate> {
    let scored: Vec<(u32, ShowCandidate)> = candidates
        .into_iter()
        .map(|c| (match_score(query, &c.title), c))
        .collect();

    let high_score = scored.iter().map(|(s, _)| *s).max().unwrap_or(0);

    scored
        .into_iter()
        .filter(|(s, _)| *s == high_score)
        .map(|(_, c)| c)
        .collect()
}

/// Pick one show using the country and year hints from the filename.
///
/// Candidates are ordered by premiere date, oldest first. With both hints both
/// must match; with one, that one must match; with none, the oldest show
/// known to TheTVDB wins.
pub fn select_show(
    mut candidates: Vec<ShowCandidate>,
    country: Option<&str>,
    year: Option<&str>,
) -> Option<ShowCandidate> {
    candidates.sort_by_key(|c| c.premiered);

    let year: Option<i32> = match year {
        Some(y) => Some(y.parse().ok()?),
        None => None,
    };

    candidates.into_iter().find(|c| {
        let year_ok = year.map_or(true, |y| c.premiered.year() == y);
        let country_ok = country.map_or(true, |code| c.country.as_deref() == Some(code));

        if year.is_none() && country.is_none() {
            c.thetvdb.is_some()
        } else {
            year_ok && country_ok
        }
    })
}

/// A show with its full episode list.
#[derive(Debug, Clone)]
pub struct TvShow {
    pub show: ShowCandidate,
    episodes: Vec<EpisodeInfo>,
}

impl TvShow {
    pub fn new(show: ShowCandidate, episodes: Vec<EpisodeInfo>) -> Self {
        Self { show, episodes }
    }

    pub fn title(&self) -> &str {
        &self.show.title
    }

    pub fn thetvdb(&self) -> Option<u64> {
        self.show.thetvdb
    }

    /// Episode names of one season keyed by zero-padded episode number.
    pub fn season_episodes(&self, season: &str) -> BTreeMap<String, String> {
        self.episodes
            .iter()
            .filter(|e| format!("{:0>2}", e.season) == season)
            .filter_map(|e| Some((format!("{:0>2}", e.number?), e.name.clone())))
            .collect()
    }
}

/// TVmaze API client.
pub struct TvMazeClient {
    config: TvMazeConfig,
    client: reqwest::Client,
}

impl TvMazeClient {
    /// Create a new TVmaze client.
    pub fn new(config: TvMazeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self { config, client })
    }

    /// Search query for a title: words joined by `+`.
    fn search_url(&self, title: &str) -> String {
        let query = RE_NON_WORD
            .split(title)
            .filter(|w| !w.is_empty())
            .map(|w| urlencoding::encode(w).into_owned())
            .collect::<Vec<_>>()
            .join("+");

        format!("{}/search/shows?q={}", self.config.base_url.trim_end_matches('/'), query)
    }

    async fn download(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::DownloadError(e.to_string()))?;

        Ok(resp.text().await?)
    }

    /// Search shows matching a title, keeping only the best-scoring ones.
    pub async fn search_shows(&self, title: &str) -> Result<Vec<ShowCandidate>> {
        let body = self.download(&self.search_url(title)).await?;
        let items: Vec<SearchItem> = serde_json::from_str(&body)?;

        let candidates: Vec<ShowCandidate> = items
            .into_iter()
            .filter_map(|item| ShowCandidate::from_info(item.show))
            .collect();

        if candidates.is_empty() {
            return Err(Error::ShowNotFound(title.to_uppercase()));
        }

        Ok(best_matches(title, candidates))
    }

    /// Fetch all episodes of a show.
    pub async fn episodes(&self, show: &ShowCandidate) -> Result<Vec<EpisodeInfo>> {
        let body = self.download(&show.link).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Find a show and load its episode list.
    pub async fn lookup_show(
        &self,
        title: &str,
        country: Option<&str>,
        year: Option<&str>,
    ) -> Result<TvShow> {
        let candidates = self.search_shows(title).await?;
        let show = select_show(candidates, country, year)
            .ok_or_else(|| Error::ShowNotFound(title.to_uppercase()))?;

        tracing::info!("Found {} (premiered {})", show.title, show.premiered);

        let episodes = self.episodes(&show).await?;
        Ok(TvShow::new(show, episodes))
    }
}
