//! Commit recording using libgit2
//!
//! Opens or initializes the target repository, makes sure an author identity
//! exists, and records one commit per change-event with the event's
//! timestamp as both author and committer time.

use anyhow::{Context, Result};
use git2::{Commit, ErrorCode, Repository, RepositoryInitOptions, Signature, Time};
use std::path::Path;
use tracing::debug;

use crate::models::ChangeEvent;

/// Author identity used when the effective git config has none.
#[derive(Debug, Clone)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// Records change-events as commits in a single repository.
pub struct CommitWriter {
    repo: Repository,
    name: String,
    email: String,
}

impl CommitWriter {
    /// Open the repository at `root`, initializing one on branch `main` if
    /// none exists. Ensures `user.name`/`user.email` are set, writing
    /// `identity` into the repo-local config only when the effective config
    /// lacks them.
    pub fn open_or_init(root: &Path, identity: &Identity) -> Result<Self> {
        let repo = match Repository::open(root) {
            Ok(repo) => repo,
            Err(_) => {
                debug!(root = %root.display(), "no repository found, initializing");
                let mut opts = RepositoryInitOptions::new();
                opts.initial_head("main");
                Repository::init_opts(root, &opts)
                    .with_context(|| format!("Failed to initialize repository at {}", root.display()))?
            }
        };

        let mut config = repo.config().context("Failed to read repository config")?;
        let effective = config.snapshot()?;
        if effective.get_string("user.name").is_err() {
            config.set_str("user.name", &identity.name)?;
        }
        if effective.get_string("user.email").is_err() {
            config.set_str("user.email", &identity.email)?;
        }

        let effective = repo.config()?.snapshot()?;
        let name = effective
            .get_string("user.name")
            .unwrap_or_else(|_| identity.name.clone());
        let email = effective
            .get_string("user.email")
            .unwrap_or_else(|_| identity.email.clone());

        Ok(Self { repo, name, email })
    }

    /// Stage the event's artifact and commit it with the event's label as
    /// message and its timestamp as author/committer time.
    ///
    /// Handles the unborn-branch case, so the first recorded event creates
    /// the root commit.
    pub fn record(&self, event: &ChangeEvent) -> Result<()> {
        let mut index = self.repo.index()?;
        index
            .add_path(&event.path)
            .with_context(|| format!("Failed to stage {}", event.path.display()))?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let when = Time::new(event.timestamp.and_utc().timestamp(), 0);
        let sig = Signature::new(&self.name, &self.email, &when)?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                None
            }
            Err(e) => return Err(e.into()),
        };
        let parents: Vec<&Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, &event.label, &tree, &parents)
            .with_context(|| format!("Failed to commit {}", event.path.display()))?;

        Ok(())
    }
}
