//! Core data models for Gitseed
//!
//! Plain data shared between the scheduling/labeling core and the
//! git-facing glue.

use chrono::NaiveDateTime;
use std::path::PathBuf;

/// One unit of synthesized history: a single artifact committed with a
/// message and a backdated timestamp.
///
/// Built once per artifact after scheduling and labeling, then consumed
/// exactly once by the commit writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Path of the artifact, relative to the repository root
    pub path: PathBuf,
    /// Commit message selected for this artifact
    pub label: String,
    /// Author/committer timestamp for the commit
    pub timestamp: NaiveDateTime,
}
