//! Rename command implementation.
//!
//! Implements the `episodes` and `movies` subcommands: collects the files,
//! plans the new names, asks for confirmation and renames.

use crate::core::renamer::{RenameSummary, Renamer};
use crate::core::scanner;
use crate::models::config::Config;
use crate::models::media::MediaType;
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the rename command for one media type.
pub async fn rename(
    paths: &[PathBuf],
    media_type: MediaType,
    config: Config,
) -> Result<RenameSummary> {
    let scan = scanner::collect_files(paths, config.rename.recursive)?;
    if scan.files.is_empty() {
        return Err(crate::Error::other("No media files found"));
    }

    println!(
        "{} {} files",
        format!("Renaming {}:", media_type).bold().cyan(),
        scan.files.len()
    );
    println!();

    let renamer = Renamer::new(config.rename, config.tvmaze)?;
    let plan = match media_type {
        MediaType::Episodes => renamer.plan_episodes(&scan.files).await,
        MediaType::Movies => renamer.plan_movies(&scan.files),
    };

    renamer.preview(&plan);
    println!();

    if !renamer.confirm(&plan)? {
        println!("{}", "Aborted, nothing renamed.".yellow());
        return Ok(RenameSummary {
            failed: plan.failures.len(),
            ..Default::default()
        });
    }

    let summary = renamer.execute(plan);

    println!(
        "{} {} renamed, {} unchanged, {} failed",
        "[OK]".bold().green(),
        summary.renamed,
        summary.skipped,
        summary.failed
    );

    Ok(summary)
}
