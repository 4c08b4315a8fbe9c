//! Gitseed - organic commit history backfill
//!
//! Commits every file in a directory individually, with realistic
//! timestamps and contextual messages.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = gitseed::cli::Cli::parse();
    gitseed::cli::run(cli)
}
