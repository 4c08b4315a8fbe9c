//! End-to-end tests for the seed flow
//!
//! Each test seeds an isolated temp directory through the library entry
//! point, then inspects the resulting repository with git2.

use chrono::NaiveDate;
use git2::{Repository, Sort};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use gitseed::cli::{self, Cli};

/// A small project tree: four committable files plus junk that must be
/// filtered out.
fn create_project_fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let root = dir.path();

    for (rel, contents) in [
        ("app/page.tsx", "export default function Page() {}"),
        ("components/ui/button.tsx", "export function Button() {}"),
        ("lib/utils.ts", "export const noop = () => {};"),
        ("README.md", "# Fixture"),
    ] {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fs::create_dir_all(root.join("node_modules/react")).unwrap();
    fs::write(root.join("node_modules/react/index.js"), "junk").unwrap();
    fs::write(root.join("debug.log"), "junk").unwrap();

    dir
}

fn run_seed(root: &Path, seed: u64) {
    cli::run(Cli {
        path: root.to_path_buf(),
        seed: Some(seed),
        dry_run: false,
    })
    .expect("seed run failed");
}

/// Commit (message, author timestamp) pairs in history order, oldest first.
fn history(root: &Path) -> Vec<(String, i64)> {
    let repo = Repository::open(root).expect("no repository created");
    let mut revwalk = repo.revwalk().unwrap();
    revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE).unwrap();
    revwalk.push_head().unwrap();

    revwalk
        .map(|oid| {
            let commit = repo.find_commit(oid.unwrap()).unwrap();
            (
                commit.message().unwrap_or("").to_string(),
                commit.time().seconds(),
            )
        })
        .collect()
}

fn default_window() -> (i64, i64) {
    let bound = |d: u32, h: u32| -> i64 {
        NaiveDate::from_ymd_opt(2025, 9, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp()
    };
    (bound(8, 9), bound(15, 18))
}

#[test]
fn seeds_one_commit_per_artifact_inside_the_window() {
    let dir = create_project_fixture();
    run_seed(dir.path(), 42);

    let commits = history(dir.path());
    assert_eq!(commits.len(), 4, "one commit per committable file");

    let (start, end) = default_window();
    let mut previous = start;
    for (message, when) in &commits {
        assert!(!message.is_empty());
        assert!(*when >= start && *when <= end, "commit escaped the window");
        assert!(*when >= previous, "history must be non-decreasing");
        previous = *when;
    }

    assert_eq!(commits[0].1, start, "first commit opens the window");
}

#[test]
fn identical_seeds_reproduce_identical_histories() {
    let a = create_project_fixture();
    let b = create_project_fixture();
    run_seed(a.path(), 7);
    run_seed(b.path(), 7);

    assert_eq!(history(a.path()), history(b.path()));
}

#[test]
fn config_file_overrides_window_and_is_committed_too() {
    let dir = create_project_fixture();
    fs::write(
        dir.path().join("gitseed.toml"),
        r#"
[window]
start = "2024-03-04T09:00:00"
end = "2024-03-08T18:00:00"
"#,
    )
    .unwrap();

    run_seed(dir.path(), 3);

    let commits = history(dir.path());
    assert_eq!(commits.len(), 5, "four fixture files plus gitseed.toml");

    let start = NaiveDate::from_ymd_opt(2024, 3, 4)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp();
    let end = NaiveDate::from_ymd_opt(2024, 3, 8)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp();
    for (_, when) in &commits {
        assert!(*when >= start && *when <= end);
    }
}

#[test]
fn dry_run_touches_nothing() {
    let dir = create_project_fixture();
    cli::run(Cli {
        path: dir.path().to_path_buf(),
        seed: Some(1),
        dry_run: true,
    })
    .expect("dry run failed");

    assert!(!dir.path().join(".git").exists());
}

#[test]
fn empty_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = cli::run(Cli {
        path: dir.path().to_path_buf(),
        seed: Some(1),
        dry_run: false,
    });
    assert!(result.is_err());
}

#[test]
fn missing_path_is_an_error() {
    let result = cli::run(Cli {
        path: PathBuf::from("/definitely/not/a/real/path"),
        seed: None,
        dry_run: false,
    });
    assert!(result.is_err());
}
