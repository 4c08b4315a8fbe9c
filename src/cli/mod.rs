//! CLI command definitions and handlers

mod seed;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Gitseed - backfill a plausible commit history
///
/// Commits every file in a directory individually, with realistic
/// timestamps and contextual messages.
#[derive(Parser, Debug)]
#[command(name = "gitseed")]
#[command(
    version,
    about = "Backfill a directory with an organic-looking commit history — one commit per file, human-like timestamps, contextual messages",
    long_about = "Gitseed walks a directory, shuffles its files, and commits each one \
individually with a timestamp drawn from a bounded working-hours schedule and a \
commit message matched to the file's path.\n\n\
Run with no arguments to seed the current directory. A gitseed.toml in the \
target directory overrides the schedule window, author identity, and ignore set.",
    after_help = "\
Examples:
  gitseed                        Seed the current directory
  gitseed /path/to/project       Seed a specific directory
  gitseed . --seed 42            Reproducible run (same seed, same history)
  gitseed . --dry-run            Print the plan without committing anything

Check the result:
  git log --oneline --graph
  git log --pretty=format:'%h %ad %s' --date=short"
)]
pub struct Cli {
    /// Directory to seed (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Seed for the random source; identical seeds over an identical tree
    /// reproduce the exact same history
    #[arg(long)]
    pub seed: Option<u64>,

    /// Plan the schedule and messages without touching git
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    seed::run(&cli.path, cli.seed, cli.dry_run)
}
