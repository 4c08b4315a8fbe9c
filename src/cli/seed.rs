//! Seed command - the full backfill flow
//!
//! Bootstrap the repository, enumerate artifacts, shuffle, schedule the
//! whole batch, then label and commit one artifact at a time. A failed
//! commit is counted and skipped; the batch keeps going.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use tracing::warn;

use crate::config::load_run_config;
use crate::git::CommitWriter;
use crate::label::LabelCatalog;
use crate::models::ChangeEvent;
use crate::{schedule, walk};

/// Run the seed command
pub fn run(path: &Path, seed: Option<u64>, dry_run: bool) -> Result<()> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let config = load_run_config(&root)?;
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    println!(
        "\n{} Seeding commit history in {}\n",
        style("🌱").bold(),
        style(root.display()).cyan()
    );

    let writer = if dry_run {
        None
    } else {
        Some(
            CommitWriter::open_or_init(&root, &config.identity())
                .context("Failed to initialize git repository")?,
        )
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Discovering files...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    let mut files = walk::list_artifacts(&root, &config.ignore)?;
    spinner.finish_with_message(format!(
        "{}Found {} files to commit",
        style("✓ ").green(),
        style(files.len()).cyan()
    ));

    if files.is_empty() {
        anyhow::bail!("No files found to commit in {}", root.display());
    }

    // Shuffle so the history doesn't replay directory order
    files.shuffle(&mut rng);

    let window = config.schedule_window();
    let timestamps = schedule::generate(files.len(), &window, &mut rng);
    let catalog = LabelCatalog::builtin();

    let events: Vec<ChangeEvent> = files
        .into_iter()
        .zip(timestamps)
        .map(|(path, timestamp)| {
            let label = catalog.select(&path.to_string_lossy(), &mut rng);
            ChangeEvent {
                path,
                label,
                timestamp,
            }
        })
        .collect();

    let total = events.len();
    let committed = match writer {
        Some(writer) => record_events(&writer, &events)?,
        None => {
            print_plan(&events);
            total
        }
    };

    println!();
    println!(
        "{} {} {}/{} files between {} and {}",
        style("✓").green().bold(),
        if dry_run { "Planned" } else { "Committed" },
        style(committed).cyan(),
        style(total).cyan(),
        style(window.start.format("%Y-%m-%d")).yellow(),
        style(window.end.format("%Y-%m-%d")).yellow()
    );

    Ok(())
}

/// Record every event in order, counting successes. Per-event failures are
/// logged and skipped; only the count reflects them.
fn record_events(writer: &CommitWriter, events: &[ChangeEvent]) -> Result<usize> {
    let total = events.len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut committed = 0usize;
    for (i, event) in events.iter().enumerate() {
        match writer.record(event) {
            Ok(()) => {
                committed += 1;
                pb.println(format!(
                    "[{:>3}/{}] {} - {}  {}",
                    i + 1,
                    total,
                    event.timestamp.format("%m/%d %H:%M"),
                    event.label,
                    style(event.path.display()).dim()
                ));
            }
            Err(err) => {
                warn!(path = %event.path.display(), error = %err, "commit failed");
                pb.println(format!(
                    "[{:>3}/{}] {} {}  {}",
                    i + 1,
                    total,
                    style("✗ failed").red(),
                    event.label,
                    style(event.path.display()).dim()
                ));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(committed)
}

fn print_plan(events: &[ChangeEvent]) {
    let total = events.len();
    for (i, event) in events.iter().enumerate() {
        println!(
            "[{:>3}/{}] {} - {}  {}",
            i + 1,
            total,
            event.timestamp.format("%m/%d %H:%M"),
            event.label,
            style(event.path.display()).dim()
        );
    }
}
