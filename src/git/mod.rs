//! Git plumbing
//!
//! Repository bootstrap and commit recording via libgit2 (the git2 crate).
//! Everything here is thin glue around the scheduling/labeling core: stage
//! one file, commit it with a backdated signature, report pass/fail.

pub mod writer;

pub use writer::{CommitWriter, Identity};
