//! Gitseed - organic commit history backfill
//!
//! Takes a directory of files and turns it into a repository whose history
//! reads as incremental development: one commit per file, timestamps drawn
//! from a bounded working-hours schedule, contextual commit messages.

pub mod cli;
pub mod config;
pub mod git;
pub mod label;
pub mod models;
pub mod schedule;
pub mod walk;
