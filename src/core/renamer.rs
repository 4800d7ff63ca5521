//! Batch renaming.
//!
//! Parses every file, looks each show up once, composes the new names and
//! renames the files. A file that fails never stops the others.

use crate::core::localpath::{EpisodeFile, LocalPath, MovieFile};
use crate::generators::filename::{generate_episode_filename, generate_movie_filename};
use crate::models::config::{RenameConfig, TvMazeConfig};
use crate::models::media::{EpisodeRecord, MediaType};
use crate::services::tvmaze::{TvMazeClient, TvShow};
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Files ready to be renamed plus the ones that could not be handled.
#[derive(Debug)]
pub struct RenamePlan {
    pub media_type: MediaType,
    /// Files with their new name set.
    pub items: Vec<LocalPath>,
    /// Files that could not be parsed or would collide with another one.
    pub failures: Vec<(PathBuf, Error)>,
    /// New paths already claimed by an item.
    targets: HashSet<PathBuf>,
}

impl RenamePlan {
    fn new(media_type: MediaType) -> Self {
        Self {
            media_type,
            items: Vec::new(),
            failures: Vec::new(),
            targets: HashSet::new(),
        }
    }

    /// Add a file with its new name set, unless an earlier item already
    /// claimed that name.
    fn push(&mut self, item: LocalPath) {
        let target = item.new_path().unwrap_or_else(|| item.path());
        if self.targets.insert(target.clone()) {
            self.items.push(item);
        } else {
            let e = Error::TargetExists(target);
            tracing::warn!("{}: {}", item.cur_file_name(), e);
            self.failures.push((item.path(), e));
        }
    }

    fn fail(&mut self, path: &Path, e: Error) {
        tracing::warn!("{}", e);
        self.failures.push((path.to_path_buf(), e));
    }
}

/// Outcome of executing a plan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    /// Files that already had their new name.
    pub skipped: usize,
    pub failed: usize,
}

/// Shows are looked up once per identifier, country and year.
type ShowKey = (String, Option<String>, Option<String>);

fn show_key(record: &EpisodeRecord) -> ShowKey {
    (
        record.identifier().to_string(),
        record.country().map(str::to_string),
        record.year().map(str::to_string),
    )
}

/// Batch renamer.
pub struct Renamer {
    config: RenameConfig,
    client: Option<TvMazeClient>,
}

impl Renamer {
    /// Create a renamer; no TVmaze client is built in offline mode.
    pub fn new(config: RenameConfig, tvmaze: TvMazeConfig) -> Result<Self> {
        let client = if config.offline {
            None
        } else {
            Some(TvMazeClient::new(tvmaze)?)
        };
        Ok(Self { config, client })
    }

    /// Look a show up, falling back to the parsed title when it can't be found.
    async fn lookup(
        &self,
        title: &str,
        country: Option<&str>,
        year: Option<&str>,
    ) -> Option<TvShow> {
        let client = self.client.as_ref()?;

        match client.lookup_show(title, country, year).await {
            Ok(show) => Some(show),
            Err(e) => {
                tracing::warn!("{}: {}; keeping the parsed title", title, e);
                None
            }
        }
    }

    /// Parse episode files and compose their new names.
    pub async fn plan_episodes(&self, files: &[PathBuf]) -> RenamePlan {
        let mut plan = RenamePlan::new(MediaType::Episodes);
        let mut shows: HashMap<ShowKey, Option<TvShow>> = HashMap::new();

        for path in files {
            let mut file = match EpisodeFile::new(path) {
                Ok(file) => file,
                Err(e) => {
                    plan.fail(path, e);
                    continue;
                }
            };

            let key = show_key(&file.record);
            if !shows.contains_key(&key) {
                let title = file.record.title().to_string();
                let show = self
                    .lookup(&title, key.1.as_deref(), key.2.as_deref())
                    .await;
                shows.insert(key.clone(), show);
            }
            let show = shows.get(&key).and_then(|s| s.as_ref());

            let episode_names = show
                .map(|s| s.season_episodes(&file.record.season))
                .unwrap_or_else(BTreeMap::new);

            let new_name = generate_episode_filename(
                &file.record,
                show.map(|s| s.title()),
                &episode_names,
                self.config.simple,
            );
            file.path.set_new_name(&new_name);
            plan.push(file.path);
        }

        plan
    }

    /// Parse movie files and compose their new names.
    pub fn plan_movies(&self, files: &[PathBuf]) -> RenamePlan {
        let mut plan = RenamePlan::new(MediaType::Movies);

        for path in files {
            match MovieFile::new(path) {
                Ok(mut file) => {
                    file.path.set_new_name(&generate_movie_filename(&file.record));
                    plan.push(file.path);
                }
                Err(e) => plan.fail(path, e),
            }
        }

        plan
    }

    /// Print the planned renames.
    pub fn preview(&self, plan: &RenamePlan) {
        for item in &plan.items {
            let new_name = item.new_file_name().unwrap_or_default();
            if new_name == item.cur_file_name() {
                println!("  {} {}", "=".dimmed(), item.cur_file_name().dimmed());
            } else {
                println!("  {}", item.cur_file_name());
                println!("  {} {}", "->".green(), new_name.bold());
            }
        }

        for (path, e) in &plan.failures {
            println!("  {} {} ({})", "!".red(), path.display(), e);
        }
    }

    /// Ask before renaming, unless confirmation is disabled.
    pub fn confirm(&self, plan: &RenamePlan) -> Result<bool> {
        let stdin = std::io::stdin();
        self.confirm_with(plan, &mut stdin.lock())
    }

    /// Ask for confirmation reading the answer from `input`.
    pub fn confirm_with(&self, plan: &RenamePlan, input: &mut impl BufRead) -> Result<bool> {
        if self.config.no_confirm || plan.items.is_empty() {
            return Ok(true);
        }

        print!("Rename {} {}? [y/N] ", plan.items.len(), plan.media_type);
        std::io::stdout().flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    /// Rename every planned file.
    pub fn execute(&self, plan: RenamePlan) -> RenameSummary {
        let mut summary = RenameSummary {
            failed: plan.failures.len(),
            ..Default::default()
        };

        let pb = ProgressBar::new(plan.items.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for item in plan.items {
            pb.set_message(item.cur_file_name().to_string());

            match item.rename() {
                Ok(_) => summary.renamed += 1,
                Err(e) if e.is_same_file() => {
                    tracing::debug!("{}", e);
                    summary.skipped += 1;
                }
                Err(e) => {
                    tracing::warn!("Rename failed: {}", e);
                    summary.failed += 1;
                }
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        summary
    }
}
