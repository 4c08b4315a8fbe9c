//! Configuration module for Gitseed
//!
//! This module handles:
//! - Per-run configuration (gitseed.toml in the target directory)
//! - Schedule window and interval bounds
//! - Author identity and extra ignore patterns

mod run_config;

pub use run_config::{
    load_run_config, ConfigError, IdentityConfig, RunConfig, WindowConfig, CONFIG_FILE,
};
