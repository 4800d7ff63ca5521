//! Integration tests for batch renaming.
//!
//! Tests cover:
//! - Offline episode and movie batches in a temporary directory
//! - Per-file failures not stopping the batch
//! - Files already carrying their new name
//! - Files whose new names collide

use renamer::core::renamer::{RenameSummary, Renamer};
use renamer::models::config::{RenameConfig, TvMazeConfig};
use std::fs;
use tempfile::TempDir;

fn offline_renamer(simple: bool) -> Renamer {
    let config = RenameConfig {
        simple,
        no_confirm: true,
        recursive: false,
        offline: true,
    };
    Renamer::new(config, TvMazeConfig::default()).unwrap()
}

#[tokio::test]
async fn test_episode_batch() {
    let temp_dir = TempDir::new().unwrap();
    let names = [
        "Show.Name.S01E01.720p.mkv",
        "Show.Name.S01E02.720p.mkv",
        "Another Show 03x04 Extra.mp4",
        "random_file.txt",
    ];
    let files: Vec<_> = names
        .iter()
        .map(|n| {
            let p = temp_dir.path().join(n);
            fs::write(&p, "fake").unwrap();
            p
        })
        .collect();

    let renamer = offline_renamer(false);
    let plan = renamer.plan_episodes(&files).await;
    assert_eq!(plan.items.len(), 3);
    assert_eq!(plan.failures.len(), 1);

    let summary = renamer.execute(plan);
    assert_eq!(
        summary,
        RenameSummary {
            renamed: 3,
            skipped: 0,
            failed: 1
        }
    );

    assert!(temp_dir.path().join("Show Name - S01E01.mkv").exists());
    assert!(temp_dir.path().join("Show Name - S01E02.mkv").exists());
    assert!(temp_dir.path().join("Another Show - S03E04.mp4").exists());
    assert!(temp_dir.path().join("random_file.txt").exists());
}

#[tokio::test]
async fn test_already_renamed_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let done = temp_dir.path().join("Show Name - S01E02.mkv");
    let fresh = temp_dir.path().join("show.name.0103.mkv");
    fs::write(&done, "fake").unwrap();
    fs::write(&fresh, "fake").unwrap();

    let renamer = offline_renamer(false);
    let plan = renamer.plan_episodes(&[done.clone(), fresh]).await;
    assert_eq!(plan.items[0].new_file_name(), Some("Show Name - S01E02.mkv"));

    let summary = renamer.execute(plan);
    assert_eq!(summary.renamed, 1);
    assert_eq!(summary.skipped, 1);
    assert!(done.exists());
    assert!(temp_dir.path().join("Show Name - S01E03.mkv").exists());
}

#[test]
fn test_movie_batch() {
    let temp_dir = TempDir::new().unwrap();
    let fresh = temp_dir.path().join("Movie.Title.2019.1080p.mkv");
    let unknown = temp_dir.path().join("Home Video.mkv");
    fs::write(&fresh, "fake").unwrap();
    fs::write(&unknown, "fake").unwrap();

    let renamer = offline_renamer(false);
    let plan = renamer.plan_movies(&[fresh, unknown.clone()]);
    let summary = renamer.execute(plan);

    assert_eq!(summary.renamed, 1);
    assert_eq!(summary.failed, 1);
    assert!(temp_dir.path().join("Movie Title (2019).mkv").exists());
    assert!(unknown.exists());
}

#[tokio::test]
async fn test_colliding_names_keep_both_files() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("Show.Name.S01E02.720p.mkv");
    let second = temp_dir.path().join("Show.Name.S01E02.1080p.mkv");
    fs::write(&first, "720p").unwrap();
    fs::write(&second, "1080p").unwrap();

    let renamer = offline_renamer(false);
    let plan = renamer.plan_episodes(&[first.clone(), second.clone()]).await;
    assert_eq!(plan.items.len(), 1);
    assert_eq!(plan.failures.len(), 1);

    let summary = renamer.execute(plan);
    assert_eq!(
        summary,
        RenameSummary {
            renamed: 1,
            skipped: 0,
            failed: 1
        }
    );

    let renamed = temp_dir.path().join("Show Name - S01E02.mkv");
    assert_eq!(fs::read_to_string(&renamed).unwrap(), "720p");
    assert_eq!(fs::read_to_string(&second).unwrap(), "1080p");
    assert!(!first.exists());
}

#[test]
fn test_existing_target_is_not_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("Movie Title (2019).mkv");
    let fresh = temp_dir.path().join("Movie.Title.2019.1080p.mkv");
    fs::write(&existing, "old").unwrap();
    fs::write(&fresh, "new").unwrap();

    let renamer = offline_renamer(false);
    let summary = renamer.execute(renamer.plan_movies(&[fresh.clone()]));

    assert_eq!(summary.renamed, 0);
    assert_eq!(summary.failed, 1);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "old");
    assert!(fresh.exists());
}
